//! # lineup_core - Deterministic Formation Layout Engine
//!
//! Turns a roster and a formation descriptor (e.g. `"4-3-3"`) into tactical
//! lines and normalized pitch coordinates for a line-up preview.
//!
//! ## Features
//! - Tolerant formation descriptor parsing
//! - Line distribution with goalkeeper/roster size checks
//! - Stable left-to-right ordering inside every line
//! - Coordinates inside a fixed `100 x 140` pitch space, never clamped
//! - Guaranteed fallback layout: the analyzer never fails
//! - JSON API for easy integration with page assembly code

// Layout helpers take a handful of loosely related scalars
#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod config;
pub mod error;
pub mod formation;
pub mod models;

// Re-export main API functions
pub use api::{analyze_formation_json, AnalyzeRequest, AnalyzeResponse};
pub use config::{LayoutConfig, PitchSpace};
pub use error::{ConfigError, FormationError, Result};

// Re-export layout types
pub use formation::{
    analyze, AnalyzerStage, FallbackReason, FormationAnalyzer, FormationData,
    FormationDescriptor, FormationLabel, Line, PitchPoint, Placement,
};
pub use models::{Player, PositionTag, Roster, UNKNOWN_PLAYER_NAME};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
