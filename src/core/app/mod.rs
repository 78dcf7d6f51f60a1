//! Conversation controller.
//!
//! [`App`] owns the conversation, the pending gate, the session key and the
//! key entry form. Every mutation goes through its methods; the terminal view
//! only reads it.
//!
//! A send is split in two so the event loop never holds the app across the
//! network await: [`App::send_message`] validates and records the user turn
//! and hands back a [`PendingRequest`]; [`App::finish_request`] records the
//! reply (or the fallback) and releases the gate. [`App::send_message_with`]
//! runs both around a gateway call for callers that can await in place.

pub mod session;
pub mod ui_state;

#[cfg(test)]
mod tests;

use std::error::Error;
use std::fmt;

use tracing::{debug, info, warn};

use crate::core::constants::{FALLBACK_REPLY, MISSING_KEY_NOTICE};
use crate::core::conversation::Conversation;
use crate::core::gateway::{GatewayError, ModelGateway};
use crate::core::key_entry::{KeyEntry, KeyEntryError};
use crate::core::message::Message;
use crate::ui::theme::Theme;
use crate::utils::logging::LoggingState;

pub use session::SessionContext;
pub use ui_state::UiState;

/// Why a send was dropped. None of these change the conversation or the pending flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejection {
    EmptyInput,
    Pending,
    MissingKey,
}

impl fmt::Display for SendRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendRejection::EmptyInput => f.write_str("message is empty"),
            SendRejection::Pending => f.write_str("a request is already in flight"),
            SendRejection::MissingKey => f.write_str(MISSING_KEY_NOTICE),
        }
    }
}

impl Error for SendRejection {}

/// The one request the caller must now run against the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    /// Only the latest user text; earlier turns are not sent.
    pub prompt: String,
    pub api_key: String,
}

pub struct AppInitConfig {
    pub model: String,
    pub api_key: Option<String>,
    pub logging: LoggingState,
    pub theme: Theme,
}

pub struct App {
    conversation: Conversation,
    pub session: SessionContext,
    pub ui: UiState,
    pub key_entry: KeyEntry,
}

impl App {
    pub fn new(init: AppInitConfig) -> Self {
        let session = SessionContext::new(init.model, init.api_key, init.logging);
        let key_entry = KeyEntry::new(session.has_key());
        Self {
            conversation: Conversation::new(),
            session,
            ui: UiState::new(init.theme),
            key_entry,
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn is_pending(&self) -> bool {
        self.session.is_pending()
    }

    pub fn has_key(&self) -> bool {
        self.session.has_key()
    }

    pub fn notice(&self) -> Option<&str> {
        self.ui.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.ui.notice = None;
    }

    /// Send whatever is in the input box.
    pub fn submit_input(&mut self) -> Result<PendingRequest, SendRejection> {
        let text = self.ui.input_text();
        self.send_message(&text)
    }

    /// Validate and record a user turn.
    ///
    /// Blank text and sends while a request is pending are dropped silently.
    /// A missing key raises the notice and opens the key entry form. On
    /// acceptance the user message is appended, the input box is cleared and
    /// the pending gate is set until [`App::finish_request`] runs.
    pub fn send_message(&mut self, text: &str) -> Result<PendingRequest, SendRejection> {
        if text.trim().is_empty() {
            return Err(SendRejection::EmptyInput);
        }
        if self.session.is_pending {
            debug!("dropping send while a request is pending");
            return Err(SendRejection::Pending);
        }
        let Some(api_key) = self.session.api_key.clone() else {
            self.ui.notice = Some(MISSING_KEY_NOTICE.to_string());
            self.open_key_entry();
            return Err(SendRejection::MissingKey);
        };

        self.append(Message::user(text));
        self.ui.clear_input();
        self.ui.notice = None;
        self.session.is_pending = true;

        Ok(PendingRequest {
            prompt: text.to_string(),
            api_key,
        })
    }

    /// Record the outcome of the pending request and release the gate.
    pub fn finish_request(&mut self, outcome: Result<String, GatewayError>) {
        if !self.session.is_pending {
            warn!("ignoring a gateway outcome with no request pending");
            return;
        }

        let reply = match outcome {
            Ok(text) => Message::assistant(text),
            Err(err) => {
                warn!(error = %err, "gateway call failed");
                Message::assistant_error(FALLBACK_REPLY)
            }
        };
        self.append(reply);
        self.session.is_pending = false;
    }

    /// Full send for callers that can await in place.
    pub async fn send_message_with(
        &mut self,
        text: &str,
        gateway: &dyn ModelGateway,
    ) -> Result<(), SendRejection> {
        let request = self.send_message(text)?;
        let outcome = gateway.call_model(&request.prompt, &request.api_key).await;
        self.finish_request(outcome);
        Ok(())
    }

    pub fn open_key_entry(&mut self) {
        self.key_entry.open(self.session.api_key.as_deref());
    }

    /// Commit the key entry draft as the session key. Returns the committed
    /// key so the caller can persist it.
    pub fn save_key(&mut self) -> Result<String, KeyEntryError> {
        let key = self.key_entry.save()?;
        self.session.api_key = Some(key.clone());
        if self.notice() == Some(MISSING_KEY_NOTICE) {
            self.ui.notice = None;
        }
        info!("API key updated for this session");
        Ok(key)
    }

    pub fn cancel_key_entry(&mut self) {
        self.key_entry.cancel();
    }

    fn append(&mut self, message: Message) {
        if let Err(err) = self.session.logging.log_message(&message) {
            warn!(error = %err, "failed to write transcript log");
        }
        self.conversation.push(message);
        self.ui.scroll_to_bottom();
    }
}
