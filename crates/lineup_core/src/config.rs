//! # Layout Configuration
//!
//! Pitch space and fallback shape used by the analyzer.
//!
//! ## Usage
//! ```rust
//! use lineup_core::config::LayoutConfig;
//!
//! let config = LayoutConfig::default();
//! assert!(config.validate().is_ok());
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

/// Env var pointing at a JSON layout config file.
pub const LAYOUT_CONFIG_PATH_ENV: &str = "LINEUP_LAYOUT_CONFIG";

/// Virtual pitch width (touchline to touchline)
pub const PITCH_WIDTH: f32 = 100.0;
/// Virtual pitch height (goal line to goal line)
pub const PITCH_HEIGHT: f32 = 140.0;
/// Safety margin kept free on every edge
pub const PITCH_MARGIN: f32 = 4.0;

/// Normalized pitch space shared by the calculator and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchSpace {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for PitchSpace {
    fn default() -> Self {
        Self { width: PITCH_WIDTH, height: PITCH_HEIGHT, margin: PITCH_MARGIN }
    }
}

impl PitchSpace {
    pub fn inner_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub fn inner_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let all_finite =
            self.width.is_finite() && self.height.is_finite() && self.margin.is_finite();
        if !all_finite {
            return Err(ConfigError::Invalid("pitch dimensions must be finite".to_string()));
        }
        if self.margin < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "pitch margin must be >= 0, got {}",
                self.margin
            )));
        }
        if self.inner_width() <= 0.0 || self.inner_height() <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "margin {} leaves no room inside a {}x{} pitch",
                self.margin, self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Analyzer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Coordinate space for every computed point
    #[serde(default)]
    pub pitch: PitchSpace,

    /// Outfield line sizes forced by the fallback layout (defense first)
    #[serde(default = "default_fallback_lines")]
    pub fallback_lines: Vec<u32>,
}

fn default_fallback_lines() -> Vec<u32> {
    vec![4, 4, 2]
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { pitch: PitchSpace::default(), fallback_lines: default_fallback_lines() }
    }
}

impl LayoutConfig {
    /// Standard preview pitch (default)
    pub fn standard() -> Self {
        Self::default()
    }

    /// Narrow-margin pitch for small embeds
    pub fn compact() -> Self {
        let mut cfg = Self::default();
        cfg.pitch.margin = 2.0;
        cfg
    }

    /// Number of outfield players the fallback layout places at most.
    pub fn fallback_capacity(&self) -> usize {
        self.fallback_lines.iter().map(|&size| size as usize).sum()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pitch.validate()?;
        if self.fallback_lines.is_empty() {
            return Err(ConfigError::Invalid("fallback_lines must not be empty".to_string()));
        }
        if self.fallback_lines.contains(&0) {
            return Err(ConfigError::Invalid(format!(
                "fallback_lines must be positive, got {:?}",
                self.fallback_lines
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Loads the file named by [`LAYOUT_CONFIG_PATH_ENV`], or the default
    /// config when the variable is unset or blank.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let Ok(path) = env::var(LAYOUT_CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        tracing::debug!(path, "loading layout config from {LAYOUT_CONFIG_PATH_ENV}");
        Self::from_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_pitch_space() {
        let pitch = PitchSpace::default();
        assert_eq!(pitch.inner_width(), 92.0);
        assert_eq!(pitch.inner_height(), 132.0);
        assert!(pitch.validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(LayoutConfig::standard().validate().is_ok());
        assert!(LayoutConfig::compact().validate().is_ok());
        assert_eq!(LayoutConfig::standard().fallback_capacity(), 10);
    }

    #[test]
    fn test_margin_too_large_is_rejected() {
        let pitch = PitchSpace { width: 100.0, height: 140.0, margin: 50.0 };
        assert!(matches!(pitch.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_fallback_line_is_rejected() {
        let config = LayoutConfig { fallback_lines: vec![4, 0, 2], ..LayoutConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = LayoutConfig::from_json(r#"{"fallback_lines": [4, 3, 2, 1]}"#).unwrap();
        assert_eq!(config.pitch, PitchSpace::default());
        assert_eq!(config.fallback_capacity(), 10);
    }

    #[test]
    fn test_from_json_rejects_invalid_values() {
        let err = LayoutConfig::from_json(r#"{"fallback_lines": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = LayoutConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialization(_)));
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"pitch": {{"width": 100.0, "height": 140.0, "margin": 6.0}}}}"#)
            .unwrap();

        let config = LayoutConfig::from_path(file.path()).unwrap();
        assert_eq!(config.pitch.margin, 6.0);
        assert_eq!(config.fallback_lines, vec![4, 4, 2]);
    }
}
