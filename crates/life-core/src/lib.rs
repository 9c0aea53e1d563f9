//! Core types and utilities for the GLife Game of Life simulator.

pub mod types;
pub mod pattern;
pub mod config;
pub mod error;

pub use error::{Error, Result};
pub use types::*;
pub use pattern::Pattern;
pub use config::*;
