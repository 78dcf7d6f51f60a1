//! Shared constants used across the application

use crate::api::GenerationConfig;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Sampling parameters sent with every request. Not user-configurable.
pub const GENERATION_CONFIG: GenerationConfig = GenerationConfig {
    temperature: 0.7,
    max_output_tokens: 2048,
    top_k: 40,
    top_p: 0.95,
};

pub const GREETING: &str =
    "Hello I'm your AI assistant powered by Gemini. How can I help you today?";

/// Shown in place of a reply whenever the gateway call fails, whatever the cause.
pub const FALLBACK_REPLY: &str =
    "Sorry, I encountered an error. Please check your API key and try again.";

pub const MISSING_KEY_NOTICE: &str = "Please enter your Gemini API key first";
pub const EMPTY_KEY_MESSAGE: &str = "Please enter a valid API key";
pub const API_KEY_URL: &str = "https://makersuite.google.com/app/apikey";

pub const KEYRING_SERVICE: &str = "gemchat";
pub const KEYRING_USER: &str = "gemini";
