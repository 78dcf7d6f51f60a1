use crate::utils::logging::LoggingState;

/// Request-facing state: the credential, the model label, and the pending gate.
pub struct SessionContext {
    pub model: String,
    pub api_key: Option<String>,
    pub logging: LoggingState,
    pub(super) is_pending: bool,
}

impl SessionContext {
    pub fn new(model: String, api_key: Option<String>, logging: LoggingState) -> Self {
        Self {
            model,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            logging,
            is_pending: false,
        }
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.is_pending
    }
}
