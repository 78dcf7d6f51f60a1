//! The single outbound call: one prompt in, one reply out.

use std::error::Error;
use std::fmt;

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::api::{GenerateContentRequest, GenerateContentResponse};
use crate::core::constants::GENERATION_CONFIG;
use crate::utils::url::construct_api_url;

#[derive(Debug)]
pub enum GatewayError {
    /// The transport failed or the server answered with a non-2xx status.
    /// `status` is `None` when no HTTP response was received at all.
    RequestFailed { status: Option<u16>, detail: String },
    /// The body was not JSON, or lacked `candidates[0].content.parts[0].text`.
    MalformedResponse { detail: String },
}

impl GatewayError {
    fn transport(err: reqwest::Error) -> Self {
        // The request URL carries the key as a query parameter.
        GatewayError::RequestFailed {
            status: err.status().map(|s| s.as_u16()),
            detail: err.without_url().to_string(),
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::RequestFailed {
                status: Some(status),
                detail,
            } => write!(f, "API request failed with status {status}: {detail}"),
            GatewayError::RequestFailed {
                status: None,
                detail,
            } => write!(f, "API request failed: {detail}"),
            GatewayError::MalformedResponse { detail } => {
                write!(f, "Malformed API response: {detail}")
            }
        }
    }
}

impl Error for GatewayError {}

#[async_trait::async_trait]
pub trait ModelGateway: Send + Sync {
    async fn call_model(&self, prompt: &str, api_key: &str) -> Result<String, GatewayError>;
}

#[derive(Clone)]
pub struct GeminiGateway {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiGateway {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// Endpoint URL without the key; the key is appended as a query parameter per request.
    pub fn endpoint(&self) -> String {
        construct_api_url(
            &self.base_url,
            &format!("models/{}:generateContent", self.model),
        )
    }
}

#[async_trait::async_trait]
impl ModelGateway for GeminiGateway {
    async fn call_model(&self, prompt: &str, api_key: &str) -> Result<String, GatewayError> {
        let request = GenerateContentRequest::single_turn(prompt, GENERATION_CONFIG);
        debug!(
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                let err = GatewayError::transport(err);
                warn!(error = %err, "generateContent transport failure");
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            let err = GatewayError::RequestFailed {
                status: Some(status.as_u16()),
                detail: summarize_error_body(&body),
            };
            warn!(error = %err, "generateContent returned an error status");
            return Err(err);
        }

        let body = response.text().await.map_err(GatewayError::transport)?;
        parse_reply(&body).inspect_err(|err| warn!(error = %err, "unusable generateContent body"))
    }
}

/// Extract the first candidate's first text part, verbatim.
pub fn parse_reply(body: &str) -> Result<String, GatewayError> {
    let parsed: GenerateContentResponse =
        serde_json::from_str(body).map_err(|err| GatewayError::MalformedResponse {
            detail: err.to_string(),
        })?;

    parsed
        .first_text()
        .map(str::to_owned)
        .ok_or_else(|| GatewayError::MalformedResponse {
            detail: match parsed.candidates.first() {
                None => "response contained no candidates".to_string(),
                Some(candidate) => match &candidate.finish_reason {
                    Some(reason) => format!("first candidate has no text (finish reason {reason})"),
                    None => "first candidate has no text".to_string(),
                },
            },
        })
}

fn extract_error_summary(value: &serde_json::Value) -> Option<String> {
    let summary = value
        .pointer("/error/message")
        .and_then(|v| v.as_str())
        .map(str::to_owned)
        .or_else(|| match value.get("error") {
            Some(serde_json::Value::String(s)) => Some(s.to_string()),
            _ => None,
        })
        .or_else(|| {
            value
                .get("message")
                .and_then(|v| v.as_str().map(str::to_owned))
        });

    summary.map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// One-line description of an error body for diagnostics.
fn summarize_error_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let Some(summary) = extract_error_summary(&value) {
            if !summary.is_empty() {
                return summary;
            }
        }
    }

    let collapsed = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > 200 {
        let head: String = collapsed.chars().take(200).collect();
        format!("{head}…")
    } else {
        collapsed
    }
}
