//! Simulation engine: double-buffered generation stepping.

use crate::grid::Grid;
use life_core::{CellState, Error, GameConfig, Pattern, Position, Result, WorldConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Life rule for one cell given its live neighbour count.
///
/// Two neighbours keep the current state, three give a live cell, anything
/// else a dead one.
pub fn next_state(current: CellState, live_neighbors: u8) -> CellState {
    match live_neighbors {
        2 => current,
        3 => CellState::Alive,
        _ => CellState::Dead,
    }
}

pub struct Simulation {
    /// Current generation; displayed and read for neighbour counts
    active: Grid,
    /// Write target for the next generation
    buffer: Grid,
    generation: u64,
}

impl Simulation {
    /// Allocate an all-dead board. Seeding is a separate step.
    pub fn new(config: &WorldConfig) -> Result<Self> {
        if config.rows == 0 || config.cols == 0 {
            return Err(Error::Validation(format!(
                "Board must have at least one row and column, got {}x{}",
                config.rows, config.cols
            )));
        }

        debug!(rows = config.rows, cols = config.cols, "Simulation created");

        Ok(Self::from_grid(Grid::new(config.rows, config.cols)))
    }

    /// Start from an existing board as generation 1
    pub fn from_grid(grid: Grid) -> Self {
        let (rows, cols) = grid.dimensions();
        Self {
            active: grid,
            buffer: Grid::new(rows, cols),
            generation: 1,
        }
    }

    /// Build and seed a simulation from a full game configuration
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;

        let mut sim = Self::new(&config.world)?;
        let pattern = config.seed.resolve_pattern()?;
        sim.seed(&pattern, config.seed.origin())?;

        Ok(sim)
    }

    /// Set every cell of `pattern`, relative to `origin`, alive on the active grid.
    ///
    /// All cells are checked first; on error the board is left untouched.
    pub fn seed(&mut self, pattern: &Pattern, origin: Position) -> Result<()> {
        let (rows, cols) = self.active.dimensions();
        let cells = pattern.placements(origin, rows, cols)?;

        for &pos in &cells {
            self.active.set(pos, CellState::Alive);
        }

        info!(
            pattern = %pattern.name,
            origin = %origin,
            cells = cells.len(),
            "Seeded pattern"
        );
        Ok(())
    }

    /// Compute the next generation into the buffer, then swap roles.
    pub fn advance_generation(&mut self) {
        for (pos, current) in self.active.iter() {
            let neighbors = self.active.count_live_neighbors(pos);
            self.buffer.set(pos, next_state(current, neighbors));
        }

        std::mem::swap(&mut self.active, &mut self.buffer);
        self.generation += 1;
    }

    pub fn active_grid(&self) -> &Grid {
        &self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.active.population()
    }

    /// Show `generations` consecutive generations to `observer`, advancing
    /// between each.
    ///
    /// The observer sees the current generation first; the board is not
    /// advanced after the last one. The first observer error aborts the run.
    #[instrument(skip(self, observer))]
    pub fn run<F>(&mut self, generations: u64, mut observer: F) -> Result<RunSummary>
    where
        F: FnMut(u64, &Grid) -> Result<()>,
    {
        if generations == 0 {
            return Err(Error::Validation(
                "Generation count must be positive".to_string(),
            ));
        }

        let first_generation = self.generation;
        let initial_population = self.population();

        for shown in 1..=generations {
            debug!(
                generation = self.generation,
                population = self.population(),
                "Displaying generation"
            );
            observer(self.generation, &self.active)?;

            if shown < generations {
                self.advance_generation();
            }
        }

        let summary = RunSummary {
            generations_displayed: generations,
            first_generation,
            last_generation: self.generation,
            initial_population,
            final_population: self.population(),
        };

        info!(
            event = "run_summary",
            generations_displayed = summary.generations_displayed,
            last_generation = summary.last_generation,
            initial_population = summary.initial_population,
            final_population = summary.final_population,
            "Run complete"
        );

        Ok(summary)
    }
}

/// Outcome of [`Simulation::run`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub generations_displayed: u64,
    pub first_generation: u64,
    pub last_generation: u64,
    pub initial_population: usize,
    pub final_population: usize,
}
