//! Console Game of Life.

mod console;
mod game;
mod prompt;
mod telemetry;

use anyhow::Result;
use life_core::GameConfig;
use std::io;
use tracing::info;

fn main() -> Result<()> {
    telemetry::init_telemetry()?;

    // Load configuration
    let config = GameConfig::default();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = game::play(&config, &mut stdin.lock(), &mut stdout.lock())?;

    info!(
        generations = summary.generations_displayed,
        final_population = summary.final_population,
        "Game finished"
    );
    Ok(())
}
