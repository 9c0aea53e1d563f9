//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

/// Zero-based (row, column) coordinate on a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by `offset`, returning `None` if the result leaves `[0, rows) x [0, cols)`.
    ///
    /// Grids have hard edges: there is no wrapping.
    pub fn translate(&self, offset: Offset, rows: usize, cols: usize) -> Option<Position> {
        let row = self
            .row
            .checked_add_signed(offset.d_row as isize)
            .filter(|&r| r < rows)?;
        let col = self
            .col
            .checked_add_signed(offset.d_col as isize)
            .filter(|&c| c < cols)?;
        Some(Position::new(row, col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Signed displacement relative to some origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub d_row: i32,
    pub d_col: i32,
}

impl Offset {
    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }
}

impl From<(i32, i32)> for Offset {
    fn from((d_row, d_col): (i32, i32)) -> Self {
        Self::new(d_row, d_col)
    }
}

/// The eight neighbouring directions of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// (Δrow, Δcol) for this direction; rows grow southwards.
    pub fn to_offset(&self) -> Offset {
        match self {
            Direction::North => Offset::new(-1, 0),
            Direction::South => Offset::new(1, 0),
            Direction::East => Offset::new(0, 1),
            Direction::West => Offset::new(0, -1),
            Direction::NorthEast => Offset::new(-1, 1),
            Direction::NorthWest => Offset::new(-1, -1),
            Direction::SouthEast => Offset::new(1, 1),
            Direction::SouthWest => Offset::new(1, -1),
        }
    }

    pub fn all() -> [Direction; 8] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::SouthEast,
            Direction::SouthWest,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_state_default_is_dead() {
        assert_eq!(CellState::default(), CellState::Dead);
        assert!(!CellState::Dead.is_alive());
        assert!(CellState::Alive.is_alive());
        assert_eq!(CellState::from(true), CellState::Alive);
    }

    #[test]
    fn test_translate_inside() {
        let pos = Position::new(5, 5);
        assert_eq!(
            pos.translate(Offset::new(-1, 2), 10, 10),
            Some(Position::new(4, 7))
        );
    }

    #[test]
    fn test_translate_off_edges() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.translate(Offset::new(-1, 0), 10, 10), None);
        assert_eq!(corner.translate(Offset::new(0, -1), 10, 10), None);

        let far = Position::new(9, 9);
        assert_eq!(far.translate(Offset::new(1, 0), 10, 10), None);
        assert_eq!(far.translate(Offset::new(0, 1), 10, 10), None);
        assert_eq!(far.translate(Offset::new(0, 0), 10, 10), Some(far));
    }

    #[test]
    fn test_directions_are_distinct_unit_steps() {
        let offsets: Vec<Offset> = Direction::all().iter().map(|d| d.to_offset()).collect();
        assert_eq!(offsets.len(), 8);
        for (i, a) in offsets.iter().enumerate() {
            assert!(a.d_row.abs() <= 1 && a.d_col.abs() <= 1);
            assert_ne!(*a, Offset::new(0, 0));
            for b in &offsets[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_direction_offset() {
        assert_eq!(Direction::North.to_offset(), Offset::new(-1, 0));
        assert_eq!(Direction::SouthWest.to_offset(), Offset::new(1, -1));
    }
}
