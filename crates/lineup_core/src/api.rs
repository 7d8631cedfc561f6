//! JSON API for formation layout
//!
//! String-in/string-out entry point for page assembly code that does not
//! link against the Rust types directly.

use crate::config::LayoutConfig;
use crate::formation::{AnalyzerStage, FormationAnalyzer, FormationData};
use crate::models::Player;
use crate::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod error_codes {
    pub const INVALID_JSON: &str = "E_INVALID_JSON";
    pub const SCHEMA_VERSION: &str = "E_SCHEMA_VERSION";
    pub const INVALID_CONFIG: &str = "E_INVALID_CONFIG";
    pub const SERIALIZATION: &str = "E_SERIALIZATION";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub schema_version: u8,
    pub formation: String,
    pub players: Vec<Player>,
    /// Optional layout override (defaults to [`LayoutConfig::default`])
    #[serde(default)]
    pub config: Option<LayoutConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackInfo {
    pub stage: AnalyzerStage,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementView {
    pub name: String,
    pub position: Option<String>,
    pub line: usize,
    pub slot: usize,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub schema_version: u8,
    pub formation_label: String,
    pub fallback: bool,
    pub fallback_reason: Option<FallbackInfo>,
    pub unplaced: usize,
    /// Display names per line, left to right; goalkeeper line last
    pub lines: Vec<Vec<String>>,
    pub placements: Vec<PlacementView>,
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

impl AnalyzeResponse {
    pub fn from_data(data: &FormationData) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            formation_label: data.formation_label.as_str().to_string(),
            fallback: data.is_fallback(),
            fallback_reason: data.fallback.as_ref().map(|reason| FallbackInfo {
                stage: reason.stage,
                code: reason.error.code().to_string(),
                message: reason.error.to_string(),
            }),
            unplaced: data.unplaced,
            lines: data
                .lines
                .iter()
                .map(|line| line.iter().map(|p| p.display_name().to_string()).collect())
                .collect(),
            placements: data
                .placements
                .iter()
                .map(|placement| PlacementView {
                    name: placement.player.display_name().to_string(),
                    position: placement.player.position.clone(),
                    line: placement.line,
                    slot: placement.slot,
                    x: round2(placement.point.x),
                    y: round2(placement.point.y),
                })
                .collect(),
        }
    }
}

/// Analyzes a roster given as JSON and returns the layout as pretty JSON.
///
/// Layout problems never fail here (they come back as `"fallback": true`);
/// only malformed requests do.
pub fn analyze_formation_json(request_json: &str) -> Result<String, String> {
    let request: AnalyzeRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_JSON, e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(err_code(
            error_codes::SCHEMA_VERSION,
            format!("expected {}, got {}", SCHEMA_VERSION, request.schema_version),
        ));
    }

    let analyzer = FormationAnalyzer::new(request.config.unwrap_or_default())
        .map_err(|e| err_code(error_codes::INVALID_CONFIG, e))?;

    let roster: Vec<Arc<Player>> = request.players.into_iter().map(Arc::new).collect();
    let data = analyzer.analyze(&roster, &request.formation);

    serde_json::to_string_pretty(&AnalyzeResponse::from_data(&data))
        .map_err(|e| err_code(error_codes::SERIALIZATION, e))
}
