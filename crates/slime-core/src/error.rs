//! Error Types
//!
//! Contract violations reported by the simulation core and its configuration layer.

use thiserror::Error;

/// Errors raised when the simulation is built or advanced with invalid input.
#[derive(Debug, Error)]
pub enum SimError {
    /// Width or height of zero
    #[error("field dimensions must be positive, got {width}x{height}")]
    EmptyField { width: usize, height: usize },
    /// Diffuse rate outside [0, 1] or not finite
    #[error("diffuse rate must lie in [0, 1], got {0}")]
    DiffuseRate(f32),
    /// Fade rate negative or not finite
    #[error("fade rate must be finite and non-negative, got {0}")]
    FadeRate(f32),
    /// Frame delta that is NaN or infinite
    #[error("frame delta must be finite, got {0}")]
    NonFiniteDelta(f32),
    /// Agent speed that is NaN or infinite
    #[error("agent speed must be finite, got {0}")]
    AgentSpeed(f32),
    /// Agent heading that is NaN or infinite
    #[error("agent heading must be finite, got {0}")]
    AgentHeading(f32),
    /// Agent position with a NaN coordinate
    #[error("agent position must not be NaN, got ({x}, {y})")]
    AgentPosition { x: f32, y: f32 },
    /// Agent built for a different field size
    #[error("agent bounds {agent:?} do not match field bounds {field:?}")]
    AgentBounds {
        agent: (usize, usize),
        field: (usize, usize),
    },
    /// Error loading or validating configuration
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing TOML config
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Error writing TOML config
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// A value parsed but is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}
