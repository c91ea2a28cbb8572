mod config;
mod coords;
mod error;
mod food;
mod game;
mod io;
mod logger;
mod playground;
mod snake;
mod term;

use std::convert::TryFrom;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::GameConfig;
use crate::game::SnakeGame;
use crate::term::{KeyReader, TermManager};

fn main() -> Result<()> {
    logger::init_logger()?;

    let config = GameConfig::default();
    // Leave room for the goodbye line under the bottom wall
    let park_row = u16::try_from(config.playground.height() + 4).unwrap_or(u16::MAX);

    let mut term = TermManager::new();
    term.setup().context("setting up terminal")?;

    let mut game = SnakeGame::new(config, term, KeyReader::new(), rand::thread_rng());
    let result = game.run();

    game.renderer_mut().restore(park_row).context("restoring terminal")?;
    result?;

    info!("Bye");
    Ok(())
}
