//! TUI-less "say" command

use std::error::Error;

use crate::cli::{build_gateway, load_stored_key, resolve_model};
use crate::core::app::{App, AppInitConfig, SendRejection};
use crate::core::config::data::Config;
use crate::core::gateway::ModelGateway;
use crate::core::keyring::KeyStore;
use crate::ui::theme::Theme;
use crate::utils::logging::LoggingState;

const MISSING_KEY_HELP: &str = "No stored API key. Run 'gemchat set remember-key on', \
then save a key with Ctrl+K in the chat screen.";

pub async fn run_say(
    prompt: Vec<String>,
    model: Option<String>,
    log: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        return Err("Usage: gemchat say <prompt>".into());
    }

    let config = Config::load()?;
    let api_key = load_stored_key(&KeyStore::new(config.remember_key()));
    let model = resolve_model(model, &config);
    let gateway = build_gateway(&config, &model)?;

    let mut app = App::new(AppInitConfig {
        model,
        api_key,
        logging: LoggingState::new(log)?,
        theme: Theme::dark_default(),
    });

    let reply = say_with(&mut app, &prompt, &gateway).await?;
    println!("{reply}");
    Ok(())
}

/// Send one prompt through the controller and return the reply text.
/// The fallback reply is returned as an error so the process exits non-zero.
pub(crate) async fn say_with(
    app: &mut App,
    prompt: &str,
    gateway: &dyn ModelGateway,
) -> Result<String, Box<dyn Error>> {
    match app.send_message_with(prompt, gateway).await {
        Ok(()) => {}
        Err(SendRejection::MissingKey) => {
            return Err(MISSING_KEY_HELP.into());
        }
        Err(rejection) => return Err(rejection.into()),
    }

    match app.messages().last() {
        Some(message) if message.is_error() => Err(message.content().into()),
        Some(message) => Ok(message.content().to_string()),
        None => Err("no reply was recorded".into()),
    }
}
