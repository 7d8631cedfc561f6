//! # Render Configuration
//!
//! Marker sizing bounds and transition timing for the pitch view.
//!
//! ## Usage
//! ```rust
//! use lineup_render::config::RenderConfig;
//!
//! let config = RenderConfig::default();
//! let mobile = RenderConfig::mobile();
//! assert!(config.validate().is_ok() && mobile.validate().is_ok());
//! ```

use crate::error::{RenderError, Result};
use serde::{Deserialize, Serialize};

/// Marker dot and label sizing, proportional to container width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSizeConfig {
    /// Dot diameter as a fraction of container width
    pub dot_ratio: f32,
    pub min_dot_px: f32,
    pub max_dot_px: f32,
    /// Label font size as a fraction of container width
    pub label_ratio: f32,
    pub min_label_px: f32,
    pub max_label_px: f32,
}

impl Default for MarkerSizeConfig {
    fn default() -> Self {
        Self {
            dot_ratio: 0.06,
            min_dot_px: 18.0,
            max_dot_px: 44.0,
            label_ratio: 0.024,
            min_label_px: 9.0,
            max_label_px: 14.0,
        }
    }
}

/// CSS transition applied to markers that move between layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    pub duration_ms: u32,
    pub easing: String,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { duration_ms: 400, easing: "ease-in-out".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub marker: MarkerSizeConfig,
    #[serde(default)]
    pub transition: TransitionConfig,
    /// Show the position tag badge under each marker
    #[serde(default = "default_true")]
    pub show_position_badges: bool,
    /// Width assumed until the first resize event arrives
    #[serde(default = "default_container_width")]
    pub initial_width_px: f32,
}

fn default_true() -> bool {
    true
}

fn default_container_width() -> f32 {
    480.0
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            marker: MarkerSizeConfig::default(),
            transition: TransitionConfig::default(),
            show_position_badges: true,
            initial_width_px: default_container_width(),
        }
    }
}

impl RenderConfig {
    /// Small screens: tighter markers, no badges, snappier transitions
    pub fn mobile() -> Self {
        let mut cfg = Self::default();
        cfg.marker.min_dot_px = 14.0;
        cfg.marker.max_dot_px = 28.0;
        cfg.show_position_badges = false;
        cfg.transition.duration_ms = 250;
        cfg.initial_width_px = 320.0;
        cfg
    }

    /// No animation (tests, reduced-motion users)
    pub fn reduced_motion() -> Self {
        let mut cfg = Self::default();
        cfg.transition.duration_ms = 0;
        cfg
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let m = &self.marker;
        let bounds = [
            ("dot", m.dot_ratio, m.min_dot_px, m.max_dot_px),
            ("label", m.label_ratio, m.min_label_px, m.max_label_px),
        ];
        for (name, ratio, min, max) in bounds {
            if !(ratio.is_finite() && ratio > 0.0) {
                return Err(RenderError::InvalidConfig(format!(
                    "{name}_ratio must be positive, got {ratio}"
                )));
            }
            if !(min.is_finite() && max.is_finite() && 0.0 < min && min <= max) {
                return Err(RenderError::InvalidConfig(format!(
                    "{name} size bounds must satisfy 0 < min <= max, got {min}..{max}"
                )));
            }
        }

        let easing = &self.transition.easing;
        let easing_ok = !easing.is_empty()
            && easing.chars().all(|c| {
                c.is_ascii_alphanumeric() || matches!(c, '-' | '(' | ')' | ',' | '.' | ' ')
            });
        if !easing_ok {
            return Err(RenderError::InvalidConfig(format!(
                "unsupported easing '{}'",
                self.transition.easing
            )));
        }
        Ok(())
    }
}
