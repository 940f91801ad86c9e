use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Shortest step interval the driver accepts
pub const MIN_INTERVAL_MS: u64 = 10;
/// Longest step interval the driver accepts
pub const MAX_INTERVAL_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell size must be positive")]
    ZeroCellSize,

    #[error("viewport {width}x{height} px holds no whole cell of {cell_size} px")]
    EmptyGrid {
        width: u32,
        height: u32,
        cell_size: u32,
    },

    #[error("step interval must be positive")]
    ZeroInterval,
}

/// Viewport, cell size and step interval.
///
/// The board dimensions follow from the viewport: `rows = height / cell_size`,
/// `cols = width / cell_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub width_px: u32,
    pub height_px: u32,
    pub cell_size_px: u32,
    pub interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width_px: 800,
            height_px: 600,
            cell_size_px: 20,
            interval_ms: 100,
        }
    }
}

impl Config {
    /// Defaults overridden by `LIFE_WIDTH`, `LIFE_HEIGHT`, `LIFE_CELL_SIZE`
    /// and `LIFE_INTERVAL_MS` where set
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            width_px: env_or("LIFE_WIDTH", defaults.width_px),
            height_px: env_or("LIFE_HEIGHT", defaults.height_px),
            cell_size_px: env_or("LIFE_CELL_SIZE", defaults.cell_size_px),
            interval_ms: env_or("LIFE_INTERVAL_MS", defaults.interval_ms),
        }
    }

    pub fn rows(&self) -> usize {
        self.height_px.checked_div(self.cell_size_px).unwrap_or(0) as usize
    }

    pub fn cols(&self) -> usize {
        self.width_px.checked_div(self.cell_size_px).unwrap_or(0) as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size_px == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.rows() == 0 || self.cols() == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width_px,
                height: self.height_px,
                cell_size: self.cell_size_px,
            });
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}

fn env_or<T: FromStr + Copy>(key: &str, default: T) -> T {
    parse_or(key, env::var(key).ok().as_deref(), default)
}

fn parse_or<T: FromStr + Copy>(key: &str, raw: Option<&str>, default: T) -> T {
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("ignoring {key}={raw:?}: not a valid number");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_is_40_by_30() {
        let config = Config::default();
        assert_eq!((config.rows(), config.cols()), (30, 40));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_partial_cells_are_dropped() {
        let config = Config { width_px: 95, height_px: 59, cell_size_px: 20, interval_ms: 100 };
        assert_eq!((config.rows(), config.cols()), (2, 4));
    }

    #[test]
    fn test_validate_rejects_degenerate_configs() {
        let base = Config::default();
        assert_eq!(
            Config { cell_size_px: 0, ..base }.validate(),
            Err(ConfigError::ZeroCellSize)
        );
        assert!(matches!(
            Config { height_px: 10, ..base }.validate(),
            Err(ConfigError::EmptyGrid { .. })
        ));
        assert_eq!(
            Config { interval_ms: 0, ..base }.validate(),
            Err(ConfigError::ZeroInterval)
        );
    }

    #[test]
    fn test_parse_or_falls_back() {
        assert_eq!(parse_or("K", None, 7u32), 7);
        assert_eq!(parse_or("K", Some(" 42 "), 7u32), 42);
        assert_eq!(parse_or("K", Some("fast"), 7u32), 7);
    }
}
