//! Configuration types for the simulation.

use crate::error::{Error, Result};
use crate::pattern::Pattern;
use crate::types::Position;
use serde::{Deserialize, Serialize};

/// World (board) configuration parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Number of rows on the board
    pub rows: usize,
    /// Number of columns on the board
    pub cols: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { rows: 50, cols: 80 }
    }
}

/// Initial pattern and where to place it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Name of a built-in pattern (see `pattern::PATTERN_NAMES`)
    pub pattern: String,
    /// Row the pattern offsets are relative to
    pub origin_row: usize,
    /// Column the pattern offsets are relative to
    pub origin_col: usize,
}

impl SeedConfig {
    pub fn origin(&self) -> Position {
        Position::new(self.origin_row, self.origin_col)
    }

    pub fn resolve_pattern(&self) -> Result<Pattern> {
        Pattern::by_name(&self.pattern)
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            pattern: "startup".to_string(),
            origin_row: 25,
            origin_col: 20,
        }
    }
}

/// Console rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Glyph for a live cell
    pub live_glyph: char,
    /// Glyph for a dead cell
    pub dead_glyph: char,
    /// Printed before every glyph
    pub separator: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            live_glyph: '@',
            dead_glyph: '-',
            separator: ' ',
        }
    }
}

/// Full game configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the board is non-empty and the seed pattern fits on it.
    pub fn validate(&self) -> Result<()> {
        if self.world.rows == 0 || self.world.cols == 0 {
            return Err(Error::Validation(format!(
                "Board must have at least one row and column, got {}x{}",
                self.world.rows, self.world.cols
            )));
        }

        let pattern = self.seed.resolve_pattern()?;
        pattern.placements(self.seed.origin(), self.world.rows, self.world.cols)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let config = GameConfig::default();
        assert_eq!(config.world.rows, 50);
        assert_eq!(config.world.cols, 80);
        assert_eq!(config.seed.origin(), Position::new(25, 20));
        assert_eq!(config.display.live_glyph, '@');
        assert_eq!(config.display.dead_glyph, '-');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_board() {
        let config = GameConfig {
            world: WorldConfig { rows: 0, cols: 80 },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_unknown_pattern() {
        let config = GameConfig {
            seed: SeedConfig {
                pattern: "spaceship".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::UnknownPattern(_))));
    }

    #[test]
    fn test_validate_rejects_pattern_off_board() {
        // startup reaches 39 columns past the origin
        let config = GameConfig {
            seed: SeedConfig {
                origin_col: 41,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::PatternOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_json_partial_override() {
        let config = GameConfig::from_json(
            r#"{ "world": { "rows": 10, "cols": 10 }, "seed": { "pattern": "glider", "origin_row": 1, "origin_col": 1 } }"#,
        )
        .unwrap();
        assert_eq!(config.world.rows, 10);
        assert_eq!(config.seed.pattern, "glider");
        assert_eq!(config.display, DisplayConfig::default());

        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_json_garbage() {
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(Error::Serialization(_))
        ));
    }
}
