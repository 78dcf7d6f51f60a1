//! gemchat is a terminal chat client for the Google Gemini `generateContent` API.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the conversation, the pending-request gate, the key entry
//!   form, configuration, key storage and the model gateway.
//! - [`ui`] renders the terminal interface and runs the interactive event loop.
//! - [`api`] defines the request and response payloads of the Gemini API.
//! - [`utils`] holds the transcript log, tracing setup and URL helpers.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which loads configuration and dispatches into
//! [`ui::chat_loop`] for interactive sessions.

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
