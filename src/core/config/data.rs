use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::constants::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const THEME_NAMES: &[&str] = &["dark", "light"];

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Gemini model id (e.g., "gemini-1.5-flash-latest")
    pub model: Option<String>,
    /// API base URL; `models/<model>:generateContent` is appended to it
    pub base_url: Option<String>,
    /// UI theme name ("dark" or "light")
    pub theme: Option<String>,
    /// Keep the API key in the system keyring between sessions
    pub remember_key: Option<bool>,
}

/// Rejected `set`/`unset` requests from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigKeyError {
    UnknownKey(String),
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
}

impl fmt::Display for ConfigKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigKeyError::UnknownKey(key) => write!(
                f,
                "Unknown config key: {key} (expected one of: model, base-url, theme, remember-key)"
            ),
            ConfigKeyError::InvalidValue {
                key,
                value,
                expected,
            } => write!(f, "Invalid value '{value}' for {key}: expected {expected}"),
        }
    }
}

impl Error for ConfigKeyError {}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

impl Config {
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn remember_key(&self) -> bool {
        self.remember_key.unwrap_or(false)
    }

    /// Apply `gemchat set <key> <value>`. Keys use the dashed CLI spelling.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigKeyError> {
        let value = value.trim();
        let invalid = |expected: &str| ConfigKeyError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        };

        match key {
            "model" => {
                if value.is_empty() || value.contains('/') {
                    return Err(invalid("a model id such as gemini-1.5-flash-latest"));
                }
                self.model = Some(value.to_string());
            }
            "base-url" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(invalid("an http:// or https:// URL"));
                }
                self.base_url = Some(value.to_string());
            }
            "theme" => {
                let normalized = value.to_ascii_lowercase();
                if !THEME_NAMES.contains(&normalized.as_str()) {
                    return Err(invalid(&THEME_NAMES.join(" or ")));
                }
                self.theme = Some(normalized);
            }
            "remember-key" => {
                let enabled = match value.to_ascii_lowercase().as_str() {
                    "on" | "true" | "yes" | "1" => true,
                    "off" | "false" | "no" | "0" => false,
                    _ => return Err(invalid("on or off")),
                };
                self.remember_key = Some(enabled);
            }
            other => return Err(ConfigKeyError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    pub fn unset_value(&mut self, key: &str) -> Result<(), ConfigKeyError> {
        match key {
            "model" => self.model = None,
            "base-url" => self.base_url = None,
            "theme" => self.theme = None,
            "remember-key" => self.remember_key = None,
            other => return Err(ConfigKeyError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}
