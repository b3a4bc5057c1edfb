use crate::widgets::WidgetKind;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

/// The configuration of a single gauge's wave.
///
/// This is immutable for the lifetime of an engine; reconfiguring replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
#[cfg_attr(feature = "json-schema", derive(schemars::JsonSchema))]
pub struct WaveConfig {
    /// The gauge's minimum value.
    pub min_value: f64,

    /// The gauge's maximum value.
    pub max_value: f64,

    /// The wave amplitude as a fraction of the envelope's half height.
    pub wave_height_fraction: f64,

    /// The number of full waves across the envelope's width.
    pub wave_count: u32,

    /// Whether the amplitude peaks at 50% fill and vanishes when empty or full.
    pub wave_height_scaling: bool,

    /// The initial phase offset, in wavelengths.
    pub wave_offset: f64,

    /// Whether the wave rises from empty when the gauge is created.
    pub wave_rise: bool,

    /// How long, in milliseconds, the wave takes to move to a new level.
    pub wave_rise_time_ms: u64,

    /// Whether the wave scrolls horizontally forever.
    pub wave_animate: bool,

    /// How long, in milliseconds, one wavelength of scroll takes.
    pub wave_animate_time_ms: u64,

    /// Whether the displayed value counts up from the minimum while the wave rises.
    pub value_count_up: bool,

    /// The number of decimal places the displayed value is formatted with.
    pub decimal_places: u8,
}

impl WaveConfig {
    /// Check the invariants an engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Written so NaN bounds are rejected as well
        if !(self.min_value < self.max_value) {
            return Err(ConfigError::InvalidBounds { min: self.min_value, max: self.max_value });
        }
        if self.wave_count < 1 {
            return Err(ConfigError::InvalidWaveCount(self.wave_count));
        }
        Ok(())
    }

    /// Clamp a value into `[min_value, max_value]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min_value, self.max_value)
    }

    pub fn rise_duration(&self) -> Duration {
        Duration::from_millis(self.wave_rise_time_ms)
    }

    pub fn animate_duration(&self) -> Duration {
        Duration::from_millis(self.wave_animate_time_ms)
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 100.0,
            wave_height_fraction: 0.05,
            wave_count: 1,
            wave_height_scaling: true,
            wave_offset: 0.0,
            wave_rise: true,
            wave_rise_time_ms: 1000,
            wave_animate: true,
            wave_animate_time_ms: 18000,
            value_count_up: false,
            decimal_places: 2,
        }
    }
}

/// A configuration that can't be used to build a gauge.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("minimum value {min} must be lower than maximum value {max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("wave count must be at least 1, got {0}")]
    InvalidWaveCount(u32),
}

/// A gauge description as written in a YAML file.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[cfg_attr(feature = "json-schema", derive(schemars::JsonSchema))]
pub struct GaugeFile {
    /// The widget to draw.
    #[serde(default)]
    pub kind: Option<WidgetKind>,

    /// The value to display.
    #[serde(default)]
    pub value: Option<f64>,

    /// The wave configuration. The widget's defaults are used when missing.
    #[serde(default)]
    pub wave: Option<WaveConfig>,
}

impl GaugeFile {
    /// Load a gauge description from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a gauge description and validate its wave section, if any.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigLoadError> {
        // An empty file is a valid, empty description
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: Self = serde_yaml::from_str(contents)?;
        if let Some(wave) = &file.wave {
            wave.validate()?;
        }
        Ok(file)
    }
}

/// An error loading a gauge description.
#[derive(thiserror::Error, Debug)]
pub enum ConfigLoadError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid wave configuration: {0}")]
    Invalid(#[from] ConfigError),
}
