mod config;
mod simulation;

pub use config::{Config, ConfigError, MAX_INTERVAL_MS, MIN_INTERVAL_MS};
pub use simulation::Simulation;
