//! Seed patterns: named lists of cell offsets placed relative to an origin.

use crate::error::{Error, Result};
use crate::types::{Offset, Position};
use serde::{Deserialize, Serialize};

/// Names accepted by [`Pattern::by_name`].
pub const PATTERN_NAMES: &[&str] = &["startup", "block", "blinker", "glider", "toad", "beacon"];

/// A named set of live cells, expressed as offsets from an origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub name: String,
    pub cells: Vec<Offset>,
}

impl Pattern {
    pub fn new(name: impl Into<String>, cells: impl IntoIterator<Item = Offset>) -> Self {
        Self {
            name: name.into(),
            cells: cells.into_iter().collect(),
        }
    }

    fn from_pairs(name: &str, pairs: &[(i32, i32)]) -> Self {
        Self::new(name, pairs.iter().copied().map(Offset::from))
    }

    /// Single-row startup pattern: runs of 8, 5, 3, 7 and 5 live cells.
    pub fn startup() -> Self {
        let runs = [1..=8, 10..=14, 18..=20, 27..=33, 35..=39];
        Self::new(
            "startup",
            runs.into_iter().flatten().map(|d_col| Offset::new(0, d_col)),
        )
    }

    /// 2x2 still life.
    pub fn block() -> Self {
        Self::from_pairs("block", &[(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Period-2 oscillator, horizontal phase.
    pub fn blinker() -> Self {
        Self::from_pairs("blinker", &[(0, 0), (0, 1), (0, 2)])
    }

    pub fn glider() -> Self {
        Self::from_pairs("glider", &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)])
    }

    pub fn toad() -> Self {
        Self::from_pairs("toad", &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)])
    }

    pub fn beacon() -> Self {
        Self::from_pairs(
            "beacon",
            &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
        )
    }

    /// Look up a built-in pattern by name (case-insensitive).
    pub fn by_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "startup" => Ok(Self::startup()),
            "block" => Ok(Self::block()),
            "blinker" => Ok(Self::blinker()),
            "glider" => Ok(Self::glider()),
            "toad" => Ok(Self::toad()),
            "beacon" => Ok(Self::beacon()),
            _ => Err(Error::UnknownPattern(name.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding box of the offsets as (min, max), or `None` for an empty pattern.
    pub fn extent(&self) -> Option<(Offset, Offset)> {
        let first = *self.cells.first()?;
        Some(self.cells.iter().fold((first, first), |(lo, hi), c| {
            (
                Offset::new(lo.d_row.min(c.d_row), lo.d_col.min(c.d_col)),
                Offset::new(hi.d_row.max(c.d_row), hi.d_col.max(c.d_col)),
            )
        }))
    }

    /// Resolve every offset against `origin` on a `rows` x `cols` grid.
    ///
    /// Fails on the first cell that would land off the grid; nothing is
    /// returned partially.
    pub fn placements(&self, origin: Position, rows: usize, cols: usize) -> Result<Vec<Position>> {
        self.cells
            .iter()
            .map(|&offset| {
                origin
                    .translate(offset, rows, cols)
                    .ok_or_else(|| Error::PatternOutOfBounds {
                        pattern: self.name.clone(),
                        row: origin.row as i64 + offset.d_row as i64,
                        col: origin.col as i64 + offset.d_col as i64,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_pattern_layout() {
        let pattern = Pattern::startup();
        assert_eq!(pattern.len(), 28);
        assert!(pattern.cells.iter().all(|c| c.d_row == 0));

        let cols: Vec<i32> = pattern.cells.iter().map(|c| c.d_col).collect();
        assert!(!cols.contains(&0));
        assert!(!cols.contains(&9));
        assert!(!cols.contains(&34));
        assert_eq!(cols.last(), Some(&39));
    }

    #[test]
    fn test_by_name() {
        for name in PATTERN_NAMES {
            let pattern = Pattern::by_name(name).unwrap();
            assert_eq!(pattern.name, *name);
            assert!(!pattern.is_empty());
        }
        assert_eq!(Pattern::by_name("Glider").unwrap(), Pattern::glider());
        assert!(matches!(
            Pattern::by_name("gosper"),
            Err(Error::UnknownPattern(_))
        ));
    }

    #[test]
    fn test_extent() {
        let (lo, hi) = Pattern::startup().extent().unwrap();
        assert_eq!(lo, Offset::new(0, 1));
        assert_eq!(hi, Offset::new(0, 39));

        assert_eq!(Pattern::new("empty", Vec::<Offset>::new()).extent(), None);
    }

    #[test]
    fn test_placements_in_bounds() {
        let cells = Pattern::blinker()
            .placements(Position::new(2, 3), 5, 6)
            .unwrap();
        assert_eq!(
            cells,
            vec![Position::new(2, 3), Position::new(2, 4), Position::new(2, 5)]
        );
    }

    #[test]
    fn test_placements_out_of_bounds() {
        let err = Pattern::blinker()
            .placements(Position::new(2, 4), 5, 6)
            .unwrap_err();
        match err {
            Error::PatternOutOfBounds { pattern, row, col } => {
                assert_eq!(pattern, "blinker");
                assert_eq!((row, col), (2, 6));
            }
            other => panic!("unexpected error: {other}"),
        }

        let negative = Pattern::new("left", [Offset::new(0, -1)]);
        assert!(negative.placements(Position::new(0, 0), 5, 5).is_err());
    }
}
