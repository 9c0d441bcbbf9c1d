use crate::api::formatting::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest number of decimals `f64` can meaningfully display
pub const MAX_DECIMALS: u8 = 15;

/// Application configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    /// Distance from the first position fix at which a target is placed (meters)
    pub target_distance_m: f64,
    /// A target closer than this counts as reached (meters)
    pub arrival_threshold_m: f64,
    /// Decimals shown for latitude/longitude
    pub coordinate_decimals: u8,
    /// Decimals shown for distances and angles
    pub distance_decimals: u8,
    /// Default output format for the command line
    pub output_format: OutputFormat,
    /// Enable debug logging
    pub debug_logging: bool,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            target_distance_m: 100.0,
            arrival_threshold_m: 10.0,
            coordinate_decimals: 6,
            distance_decimals: 2,
            output_format: OutputFormat::Text,
            debug_logging: false,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid parameter value
    InvalidParameter { parameter: String, value: String, reason: String },
    /// Configuration file I/O error
    IoError { message: String },
    /// JSON serialization/deserialization error
    SerializationError { message: String },
}

/// Loads, validates and saves [`GeoConfig`] as JSON
#[derive(Debug, Default)]
pub struct ConfigurationManager {
    config: GeoConfig,
    config_file_path: Option<String>,
}

impl ConfigurationManager {
    /// Create a new configuration manager with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration manager and load from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    pub fn config(&self) -> &GeoConfig {
        &self.config
    }

    /// Path of the last file loaded or saved, if any
    pub fn config_file_path(&self) -> Option<&str> {
        self.config_file_path.as_deref()
    }

    /// Replace the configuration after validating it
    pub fn update_config(&mut self, config: GeoConfig) -> Result<(), ConfigError> {
        Self::validate(&config)?;
        self.config = config;
        Ok(())
    }

    /// Load configuration from JSON file
    ///
    /// Missing fields fall back to their defaults. The current configuration
    /// is left untouched if the file fails to parse or validate.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path)
            .map_err(|e| ConfigError::IoError {
                message: format!("Failed to read config file '{}': {}", path_str, e),
            })?;

        let config: GeoConfig = serde_json::from_str(&content)
            .map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;

        Self::validate(&config)?;

        tracing::debug!(path = %path_str, ?config, "loaded configuration");
        self.config = config;
        self.config_file_path = Some(path_str);
        Ok(())
    }

    /// Save configuration to JSON file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = serde_json::to_string_pretty(&self.config)
            .map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to serialize config: {}", e),
            })?;

        fs::write(&path, content)
            .map_err(|e| ConfigError::IoError {
                message: format!("Failed to write config file '{}': {}", path_str, e),
            })?;

        tracing::debug!(path = %path_str, "saved configuration");
        self.config_file_path = Some(path_str);
        Ok(())
    }

    /// Check every parameter, returning the first problem found
    pub fn validate(config: &GeoConfig) -> Result<(), ConfigError> {
        check_distance("target_distance_m", config.target_distance_m)?;
        check_distance("arrival_threshold_m", config.arrival_threshold_m)?;
        check_decimals("coordinate_decimals", config.coordinate_decimals)?;
        check_decimals("distance_decimals", config.distance_decimals)?;
        Ok(())
    }
}

fn check_distance(parameter: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidParameter {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: "Distance must be a finite, non-negative number of meters".to_string(),
        });
    }
    Ok(())
}

fn check_decimals(parameter: &str, value: u8) -> Result<(), ConfigError> {
    if value > MAX_DECIMALS {
        return Err(ConfigError::InvalidParameter {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: format!("At most {} decimals are supported", MAX_DECIMALS),
        });
    }
    Ok(())
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidParameter { parameter, value, reason } => {
                write!(f, "Invalid parameter '{}' = '{}': {}", parameter, value, reason)
            }
            ConfigError::IoError { message } => {
                write!(f, "I/O error: {}", message)
            }
            ConfigError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
