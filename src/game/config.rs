use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Playfield the defaults are derived from: a 1000x600 canvas carved
/// into 30-pixel cells.
const DEFAULT_CANVAS_WIDTH: u32 = 1000;
const DEFAULT_CANVAS_HEIGHT: u32 = 600;
const DEFAULT_CELL_SIZE: u32 = 30;

/// Configuration for one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Pixel size of one cell (used when deriving grid dimensions from a
    /// pixel playfield; the simulation itself works in cell units)
    pub cell_size: u32,
    /// Fixed simulation period in milliseconds
    pub tick_interval_ms: u64,
    /// Initial length of the snake
    pub initial_snake_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_canvas(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT, DEFAULT_CELL_SIZE)
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Derive grid dimensions from a pixel playfield and cell size
    pub fn from_canvas(width_px: u32, height_px: u32, cell_size: u32) -> Self {
        Self {
            grid_width: (width_px / cell_size) as usize,
            grid_height: (height_px / cell_size) as usize,
            cell_size,
            tick_interval_ms: 150,
            initial_snake_length: 5,
        }
    }

    /// Small grid for tests
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Reject configurations the simulation cannot run on: the grid needs
    /// at least one cell, the snake at least one segment, and the tick
    /// timer a non-zero period.
    pub fn validate(&self) -> Result<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            bail!(
                "grid must be at least 1x1 cells (got {}x{})",
                self.grid_width,
                self.grid_height
            );
        }
        if self.initial_snake_length == 0 {
            bail!("initial snake length must be at least 1");
        }
        if self.tick_interval_ms == 0 {
            bail!("tick interval must be at least 1ms");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 33);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.cell_size, 30);
        assert_eq!(config.tick_interval_ms, 150);
        assert_eq!(config.initial_snake_length, 5);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.tick_interval_ms, 150);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(GameConfig::default().validate().is_ok());
        assert!(GameConfig::small().validate().is_ok());
        assert!(GameConfig::new(1, 1).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        assert!(GameConfig::new(0, 20).validate().is_err());
        assert!(GameConfig::new(33, 0).validate().is_err());

        let mut config = GameConfig::default();
        config.initial_snake_length = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.tick_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_canvas_truncates() {
        let config = GameConfig::from_canvas(100, 70, 30);
        assert_eq!(config.grid_width, 3);
        assert_eq!(config.grid_height, 2);
    }
}
