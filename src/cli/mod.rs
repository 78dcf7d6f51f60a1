//! Command-line interface parsing and handling
//!
//! This module parses command-line arguments, loads configuration and the
//! stored key, and dispatches to the chat screen or a one-shot command.

pub mod say;


use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::cli::say::run_say;
use crate::core::app::{App, AppInitConfig};
use crate::core::config::data::{path_display, Config};
use crate::core::gateway::GeminiGateway;
use crate::core::keyring::KeyStore;
use crate::ui::chat_loop::run_chat;
use crate::ui::theme::Theme;
use crate::utils::logging::LoggingState;
use crate::utils::trace::{init_tracing, TraceTarget};

#[derive(Parser)]
#[command(name = "gemchat", version)]
#[command(about = "A terminal chat client for Google Gemini")]
#[command(
    long_about = "gemchat is a full-screen terminal chat interface for the Google Gemini \
generateContent API. Each message is sent on its own; replies are shown as plain text.\n\n\
API key:\n\
  Press Ctrl+K in the chat screen to enter your key. Get one at\n\
  https://makersuite.google.com/app/apikey. Run 'gemchat set remember-key on'\n\
  to keep it in the system keyring between sessions.\n\n\
Controls:\n\
  Enter             Send the message\n\
  Shift+Enter       Insert a newline\n\
  Ctrl+K            Enter or change the API key\n\
  Up/Down/PgUp/PgDn Scroll through the conversation\n\
  Ctrl+C            Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Gemini model to use (overrides the configured model)
    #[arg(short = 'm', long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// Append the conversation transcript to the specified file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<String>,

    /// Write diagnostic traces to the specified file
    #[arg(long, global = true, value_name = "FILE")]
    pub trace_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Send one message and print the reply without starting the interface
    Say {
        /// Message text (multiple words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// Set a configuration value, or print the configuration when no value is given
    Set {
        /// Configuration key: model, base-url, theme or remember-key
        key: String,
        /// Value to set for the key (multiple words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Option<Vec<String>>,
    },
    /// Reset a configuration value to its default
    Unset {
        /// Configuration key to unset
        key: String,
    },
    /// Remove the API key stored in the system keyring
    ForgetKey,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            if let Some(path) = args.trace_file.as_deref() {
                init_tracing(TraceTarget::File(path))?;
            }
            start_chat(args.model, args.log).await
        }
        Commands::Say { prompt } => {
            match args.trace_file.as_deref() {
                Some(path) => init_tracing(TraceTarget::File(path))?,
                None => init_tracing(TraceTarget::Stderr)?,
            }
            run_say(prompt, args.model, args.log).await
        }
        Commands::Set { key, value } => {
            let mut config = Config::load()?;
            match value.map(|parts| parts.join(" ")) {
                Some(value) if !value.trim().is_empty() => {
                    config.set_value(&key, &value)?;
                    config.save()?;
                    println!("✅ Set {key} to: {}", value.trim());
                }
                _ => config.print_all(),
            }
            Ok(())
        }
        Commands::Unset { key } => {
            let mut config = Config::load()?;
            config.unset_value(&key)?;
            config.save()?;
            println!("✅ Unset {key}");
            Ok(())
        }
        Commands::ForgetKey => {
            if KeyStore::new(true).clear()? {
                println!("✅ Removed the stored API key");
            } else {
                println!("No stored API key found");
            }
            Ok(())
        }
    }
}

/// Stored key, if any. Keyring problems only cost the convenience of a saved key.
pub(crate) fn load_stored_key(key_store: &KeyStore) -> Option<String> {
    match key_store.load() {
        Ok(key) => key,
        Err(err) if err.is_unavailable() => {
            warn!(
                error = %err,
                "keyring locked or unreachable; unlock it to reuse the saved key"
            );
            None
        }
        Err(err) => {
            warn!(error = %err, "could not read API key from keyring");
            None
        }
    }
}

pub(crate) fn build_gateway(config: &Config, model: &str) -> Result<GeminiGateway, Box<dyn Error>> {
    let client = reqwest::Client::builder().build()?;
    Ok(GeminiGateway::new(client, config.base_url(), model))
}

pub(crate) fn resolve_model(cli_model: Option<String>, config: &Config) -> String {
    cli_model
        .filter(|model| !model.trim().is_empty())
        .unwrap_or_else(|| config.model().to_string())
}

async fn start_chat(model: Option<String>, log: Option<String>) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    if let Ok(path) = Config::get_config_path() {
        info!(path = %path_display(&path), "configuration loaded");
    }

    let key_store = KeyStore::new(config.remember_key());
    let api_key = load_stored_key(&key_store);
    let model = resolve_model(model, &config);
    let gateway = build_gateway(&config, &model)?;
    let theme = config
        .theme
        .as_deref()
        .map(Theme::from_name)
        .unwrap_or_else(Theme::dark_default);

    let app = App::new(AppInitConfig {
        model,
        api_key,
        logging: LoggingState::new(log)?,
        theme,
    });

    run_chat(app, Arc::new(gateway), key_store).await
}
