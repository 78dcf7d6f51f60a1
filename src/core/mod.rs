pub mod app;
pub mod config;
pub mod constants;
pub mod conversation;
pub mod gateway;
pub mod key_entry;
pub mod keyring;
pub mod message;
