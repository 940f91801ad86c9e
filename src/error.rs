use thiserror::Error;

use crate::application::ConfigError;
use crate::domain::BoardError;

/// Top-level error surfaced to the binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
