//! One interactive session: banner, prompt, then the requested generations.

use crate::{console, prompt};
use anyhow::{Context, Result};
use life_core::GameConfig;
use life_world::{RunSummary, Simulation};
use std::io::{BufRead, Write};
use tracing::info;

pub fn play<R, W>(config: &GameConfig, input: &mut R, output: &mut W) -> Result<RunSummary>
where
    R: BufRead,
    W: Write,
{
    config.validate().context("invalid game configuration")?;

    console::write_banner(output, &config.world)?;
    let generations = prompt::read_generation_count(input, output)
        .context("no valid number of generations was entered")?;

    info!(generations, pattern = %config.seed.pattern, "Starting game");

    let mut sim = Simulation::from_config(config)?;
    let summary = sim.run(generations, |generation, grid| {
        console::render_generation(output, generation, grid, &config.display)?;
        Ok(())
    })?;

    output.flush()?;
    Ok(summary)
}
