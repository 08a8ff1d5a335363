//! Error types for utopia_core.
//!
//! The tick itself never fails; the only failure mode of the engine is a
//! malformed configuration, reported at construction time.

use thiserror::Error;

/// Configuration rejected before any resource or agent is created.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Initial population must be at least one agent
    #[error("Invalid initial population: {0} (must be > 0)")]
    InvalidPopulation(usize),

    /// Resource spot count must be at least one
    #[error("Invalid resource spot count: {0} (must be > 0)")]
    InvalidSpotCount(usize),

    /// Total resource capacity must be a positive finite number
    #[error("Invalid resource capacity: {0} (must be > 0)")]
    InvalidCapacity(f64),

    /// Time-scale multiplier must be a positive finite number
    #[error("Invalid time scale: {0} (must be > 0)")]
    InvalidTimeScale(f64),

    /// A probability or fraction fell outside `[0, 1]`
    #[error("Invalid {field}: {value} (must be in [0, 1])")]
    InvalidRate { field: &'static str, value: f64 },

    /// A tuning value that must not be negative was negative or not finite
    #[error("Invalid {field}: {value} (must be a non-negative number)")]
    NegativeValue { field: &'static str, value: f64 },

    /// Viewport dimensions must leave room for placement padding
    #[error("Invalid world bounds: {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// File system errors while reading a config file
    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for configuration handling.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Short machine-friendly tag, used as a structured logging field.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::InvalidPopulation(_) => "population",
            Self::InvalidSpotCount(_) => "resource_spots",
            Self::InvalidCapacity(_) => "resource_capacity",
            Self::InvalidTimeScale(_) => "time_scale",
            Self::InvalidRate { .. } => "rate",
            Self::NegativeValue { .. } => "tuning",
            Self::InvalidBounds { .. } => "bounds",
            Self::Parse(_) => "parse",
            Self::Io(_) => "io",
        }
    }
}
