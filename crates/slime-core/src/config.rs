//! Configuration System
//!
//! Loads simulation parameters from a TOML file so runs can be tuned without recompiling.
//! Every section is optional; missing values fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::components::field::{Bounds, TrailParams};
use crate::error::{ConfigError, SimError};
use crate::presenter::DEFAULT_REPORT_INTERVAL;

/// Default config file path
pub const DEFAULT_CONFIG_PATH: &str = "slime.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SimConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub trail: TrailConfig,
    #[serde(default)]
    pub swarm: SwarmConfig,
}

/// Run length, timing and seeding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the agents' reflection RNG
    pub seed: u64,
    /// Frames to run before the headless presenter quits
    pub frames: u64,
    /// Frame delta in seconds when not running in real time
    pub fixed_dt: f32,
    /// Measure each frame's delta from the wall clock instead of using `fixed_dt`
    pub realtime: bool,
    /// Frames between progress log lines
    pub report_interval: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            frames: 600,
            fixed_dt: 1.0 / 60.0,
            realtime: false,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }
}

/// Simulation resolution. Independent of any display size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 180,
        }
    }
}

impl FieldConfig {
    pub fn bounds(&self) -> Result<Bounds, SimError> {
        Bounds::new(self.width, self.height)
    }
}

/// Trail decay and diffusion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Intensity removed per second
    pub fade_rate: f32,
    /// Blend toward the blurred field each frame, 0.0 to 1.0
    pub diffuse_rate: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            fade_rate: TrailParams::DEFAULT_FADE_RATE,
            diffuse_rate: TrailParams::DEFAULT_DIFFUSE_RATE,
        }
    }
}

impl TrailConfig {
    pub fn params(&self) -> Result<TrailParams, SimError> {
        TrailParams::new(self.fade_rate, self.diffuse_rate)
    }
}

/// Agent population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    pub agent_count: usize,
    /// Pixels per second, shared by every agent
    pub speed: f32,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            agent_count: 360,
            speed: 20.0,
        }
    }
}

impl SimConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Could not load {}: {}. Using defaults.", path.display(), e);
            Self::default()
        })
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every value the simulation would otherwise reject at startup
    pub fn validate(&self) -> Result<(), SimError> {
        self.field.bounds()?;
        self.trail.params()?;
        if !self.swarm.speed.is_finite() {
            return Err(SimError::AgentSpeed(self.swarm.speed));
        }
        let dt = self.simulation.fixed_dt;
        if !dt.is_finite() || dt < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "simulation.fixed_dt must be finite and non-negative, got {dt}"
            ))
            .into());
        }
        if self.simulation.report_interval == 0 {
            return Err(
                ConfigError::Invalid("simulation.report_interval must be at least 1".into()).into(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.field.width, 320);
        assert_eq!(config.field.height, 180);
        assert_eq!(config.swarm.agent_count, 360);
        assert_eq!(config.trail.fade_rate, 30.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = SimConfig::from_str(
            r#"
            [field]
            width = 64

            [trail]
            diffuse_rate = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.field.width, 64);
        assert_eq!(config.field.height, 180);
        assert_eq!(config.trail.diffuse_rate, 0.5);
        assert_eq!(config.trail.fade_rate, 30.0);
        assert_eq!(config.simulation, SimulationConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(SimConfig::from_str("").unwrap(), SimConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = SimConfig::default();
        config.trail.diffuse_rate = 1.5;
        assert!(matches!(config.validate(), Err(SimError::DiffuseRate(_))));

        let mut config = SimConfig::default();
        config.field.height = 0;
        assert!(matches!(config.validate(), Err(SimError::EmptyField { .. })));

        let mut config = SimConfig::default();
        config.swarm.speed = f32::NAN;
        assert!(matches!(config.validate(), Err(SimError::AgentSpeed(_))));

        let mut config = SimConfig::default();
        config.simulation.fixed_dt = -1.0;
        assert!(matches!(
            config.validate(),
            Err(SimError::Config(ConfigError::Invalid(_)))
        ));
    }

    #[test]
    fn test_parse_error() {
        let err = SimConfig::from_str("[field]\nwidth = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = SimConfig::default();
        config.simulation.realtime = true;
        config.swarm.agent_count = 12;

        let text = config.to_toml().unwrap();
        assert!(text.contains("[swarm]"));
        assert_eq!(SimConfig::from_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulation]\nseed = 7\nframes = 3").unwrap();

        let config = SimConfig::load(file.path()).unwrap();
        assert_eq!(config.simulation.seed, 7);
        assert_eq!(config.simulation.frames, 3);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = SimConfig::load_or_default(dir.path().join("missing.toml"));
        assert_eq!(config, SimConfig::default());
    }
}
