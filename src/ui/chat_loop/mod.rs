//! Interactive chat loop.
//!
//! Terminal input is read on a background task and delivered over a channel;
//! gateway calls run on spawned tasks and report back over a second channel.
//! The loop applies both to the [`App`] and redraws, so the screen keeps
//! updating while a request is in flight.

pub mod keybindings;
pub mod lifecycle;

use std::error::Error;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::core::app::{App, PendingRequest};
use crate::core::gateway::{GatewayError, ModelGateway};
use crate::core::keyring::{KeyStore, KeyringAccessError};
use crate::ui::renderer::ui;

pub use keybindings::{handle_key, handle_paste, KeyOutcome};
use lifecycle::{restore_terminal, setup_terminal, ChatTerminal};

type GatewayOutcome = Result<String, GatewayError>;

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<Event>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(50)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => continue,
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

fn spawn_request(
    gateway: Arc<dyn ModelGateway>,
    request: PendingRequest,
    reply_tx: mpsc::UnboundedSender<GatewayOutcome>,
) {
    tokio::spawn(async move {
        let outcome = gateway.call_model(&request.prompt, &request.api_key).await;
        if reply_tx.send(outcome).is_err() {
            debug!("chat loop exited before the reply arrived");
        }
    });
}

fn persist_key(app: &mut App, key_store: &KeyStore, key: &str) {
    if !key_store.is_enabled() {
        return;
    }
    report_key_store(app, key_store.store(key));
}

fn report_key_store(app: &mut App, result: Result<(), KeyringAccessError>) {
    match result {
        Ok(()) => info!("API key saved to the system keyring"),
        Err(err) => {
            warn!(
                error = %err,
                unavailable = err.is_unavailable(),
                "could not save API key"
            );
            app.ui.notice = Some(err.notice());
        }
    }
}

pub async fn run_chat(
    mut app: App,
    gateway: Arc<dyn ModelGateway>,
    key_store: KeyStore,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = setup_terminal()?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
    let event_reader_handle = spawn_event_reader(event_tx);

    let result = drive(&mut terminal, &mut app, gateway, &key_store, &mut event_rx).await;

    event_reader_handle.abort();
    restore_terminal(&mut terminal)?;
    result
}

async fn drive<W: Write>(
    terminal: &mut ChatTerminal<W>,
    app: &mut App,
    gateway: Arc<dyn ModelGateway>,
    key_store: &KeyStore,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
) -> Result<(), Box<dyn Error>> {
    let (reply_tx, mut reply_rx) = mpsc::unbounded_channel::<GatewayOutcome>();

    loop {
        terminal.draw(|f| ui(f, app))?;
        let size = terminal.size()?;

        tokio::select! {
            Some(ev) = event_rx.recv() => match ev {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match handle_key(app, key, size.width, size.height) {
                        KeyOutcome::Quit => return Ok(()),
                        KeyOutcome::Send(request) => {
                            spawn_request(gateway.clone(), request, reply_tx.clone());
                        }
                        KeyOutcome::KeySaved(key) => persist_key(app, key_store, &key),
                        KeyOutcome::Handled => {}
                    }
                }
                Event::Paste(text) => handle_paste(app, &text),
                _ => {}
            },
            Some(outcome) = reply_rx.recv() => app.finish_request(outcome),
            else => return Ok(()),
        }
    }
}
