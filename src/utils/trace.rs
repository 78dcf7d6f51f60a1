//! Diagnostic logging setup.
//!
//! `RUST_LOG` overrides the default directive. The interactive UI owns the
//! terminal, so it only gets diagnostics when a trace file is given.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

pub enum TraceTarget<'a> {
    File(&'a Path),
    Stderr,
}

impl TraceTarget<'_> {
    fn default_directive(&self) -> &'static str {
        match self {
            TraceTarget::File(_) => "gemchat=debug",
            TraceTarget::Stderr => "gemchat=warn",
        }
    }
}

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

pub fn init_tracing(target: TraceTarget<'_>) -> Result<(), Box<dyn Error>> {
    let filter = env_filter(target.default_directive());
    match target {
        TraceTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|err| err as Box<dyn Error>)?;
        }
        TraceTarget::Stderr => {
            fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|err| err as Box<dyn Error>)?;
        }
    }
    Ok(())
}
