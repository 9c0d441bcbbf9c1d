//! Utility modules for configuration and timekeeping

pub mod clock;
pub mod config;

pub use clock::now_epoch_seconds;
pub use config::{ConfigError, ConfigurationManager, GeoConfig};
