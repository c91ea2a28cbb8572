use std::env;
use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Names the file logs go to. Logging stays off without it, since stdout holds the board.
pub const LOG_FILE_VAR: &str = "SNAKE_LOG";

pub fn init_logger() -> Result<()> {
    let path = match env::var_os(LOG_FILE_VAR) {
        Some(path) => path,
        None => return Ok(()),
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {}", e))
}
