// Domain layer - Board engine and patterns
pub mod domain;

// Application layer - Configuration and timer-driven simulation
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

mod error;

// Re-exports for convenience
pub use domain::{Board, BoardError, Cell, Pattern, presets};
pub use application::{Config, ConfigError, Simulation};
pub use error::Error;
pub use ui::Button;
