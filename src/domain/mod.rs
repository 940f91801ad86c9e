mod cell;
mod board;
mod error;
mod patterns;

pub use cell::Cell;
pub use board::Board;
pub use error::BoardError;
pub use patterns::{Pattern, presets};
