use thiserror::Error;

/// Failures raised by the board engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board dimensions must be positive (got {rows} rows x {cols} cols)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("cell ({x}, {y}) is outside the {cols}x{rows} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },
}
