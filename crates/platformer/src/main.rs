//! Headless platformer run
//!
//! Usage: `platformer [config.toml|config.ron]`

use std::path::PathBuf;

use frame_engine::config::Config;
use frame_engine::foundation::logging;
use platformer::{Game, GameConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = GameConfig::load_or_default(path.as_deref())?;

    let mut game = Game::new(&config)?;
    log::info!(
        "Running {} frames at {:.4}s per frame",
        config.run.frames,
        config.run.timestep
    );

    let summary = game.run(&config.run)?;

    log::info!(
        "Finished after {} frames ({:.2}s): won = {}, objectives left = {}, resets = {}",
        summary.frames,
        summary.elapsed,
        summary.won,
        summary.objectives_left,
        summary.resets
    );
    log::info!("Player ended at {:?}", summary.final_position);
    Ok(())
}
