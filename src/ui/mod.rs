//! Terminal UI layer for interactive chat sessions.
//!
//! - [`chat_loop`]: terminal setup, the event loop and key dispatch.
//! - [`renderer`] and [`layout`]: frame composition and transcript wrapping.
//! - [`theme`]: color and style policy.
//!
//! This layer presents and captures interaction state; [`crate::core`] owns
//! the conversation rules and the gateway.

pub mod chat_loop;
pub mod layout;
pub mod renderer;
pub mod theme;
