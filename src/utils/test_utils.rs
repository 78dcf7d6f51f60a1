use std::collections::VecDeque;
use std::sync::Mutex;

use crate::core::app::{App, AppInitConfig};
use crate::core::gateway::{GatewayError, ModelGateway};
use crate::ui::theme::Theme;
use crate::utils::logging::LoggingState;

pub const TEST_KEY: &str = "test-key";

pub fn create_test_app() -> App {
    build_app(Some(TEST_KEY.to_string()))
}

pub fn create_test_app_without_key() -> App {
    build_app(None)
}

fn build_app(api_key: Option<String>) -> App {
    App::new(AppInitConfig {
        model: "test-model".to_string(),
        api_key,
        logging: LoggingState::new(None).unwrap(),
        theme: Theme::dark_default(),
    })
}

/// Gateway that replays queued outcomes and records every call.
#[derive(Default)]
pub struct ScriptedGateway {
    outcomes: Mutex<VecDeque<Result<String, GatewayError>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedGateway {
    pub fn replying(text: &str) -> Self {
        let gateway = Self::default();
        gateway.push(Ok(text.to_string()));
        gateway
    }

    pub fn failing(error: GatewayError) -> Self {
        let gateway = Self::default();
        gateway.push(Err(error));
        gateway
    }

    pub fn push(&self, outcome: Result<String, GatewayError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    /// `(prompt, api_key)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ModelGateway for ScriptedGateway {
    async fn call_model(&self, prompt: &str, api_key: &str) -> Result<String, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), api_key.to_string()));
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(GatewayError::MalformedResponse {
                    detail: "no scripted outcome left".to_string(),
                })
            })
    }
}
