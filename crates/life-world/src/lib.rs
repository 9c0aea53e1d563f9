//! Game of Life world engine.
//!
//! A fixed-size board with hard edges, stepped one generation at a time
//! through a pair of grids that swap roles after every step.

pub mod grid;
pub mod simulation;

pub use grid::Grid;
pub use simulation::{next_state, RunSummary, Simulation};
