use super::analyzer::FallbackReason;
use crate::config::PitchSpace;
use crate::models::Player;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Label shown instead of a descriptor when the fallback layout is used.
/// Contains no digits, so it can never collide with a parsed descriptor.
pub const FALLBACK_LABEL: &str = "unavailable";

/// Point in the normalized pitch space.
/// - x: 0 = left touchline, `width` = right touchline
/// - y: 0 = top goal line, `height` = bottom goal line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchPoint {
    pub x: f32,
    pub y: f32,
}

impl PitchPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Percentage offsets inside `pitch` (`0..=100` on both axes).
    pub fn to_percent(&self, pitch: &PitchSpace) -> (f32, f32) {
        (self.x / pitch.width * 100.0, self.y / pitch.height * 100.0)
    }

    /// Inside the pitch with its safety margin kept free.
    pub fn within_margins(&self, pitch: &PitchSpace) -> bool {
        self.x >= pitch.margin
            && self.x <= pitch.width - pitch.margin
            && self.y >= pitch.margin
            && self.y <= pitch.height - pitch.margin
    }
}

/// One tactical row, ordered left to right once sorted.
#[derive(Debug, Clone, Default)]
pub struct Line {
    pub players: Vec<Arc<Player>>,
}

impl Line {
    pub fn new(players: Vec<Arc<Player>>) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Player>> {
        self.players.iter()
    }
}

/// A player pinned to a point, with its line/slot indices.
#[derive(Debug, Clone)]
pub struct Placement {
    pub player: Arc<Player>,
    pub point: PitchPoint,
    /// Line index (0 = first descriptor line, last = goalkeeper)
    pub line: usize,
    /// Left-to-right index inside the line
    pub slot: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormationLabel {
    /// Canonical descriptor, e.g. `"4-3-3"`
    Descriptor(String),
    /// Fallback layout in use
    Fallback,
}

impl FormationLabel {
    pub fn as_str(&self) -> &str {
        match self {
            FormationLabel::Descriptor(label) => label,
            FormationLabel::Fallback => FALLBACK_LABEL,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FormationLabel::Fallback)
    }
}

impl fmt::Display for FormationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Analyzer output. Never mutated: every roster or formation change
/// produces a fresh value.
#[derive(Debug, Clone)]
pub struct FormationData {
    pub formation_label: FormationLabel,
    /// Space every point was computed in
    pub pitch: PitchSpace,
    pub lines: Vec<Line>,
    /// One entry per placed player, in flatten order (line 0 first,
    /// leftmost player first).
    pub placements: Vec<Placement>,
    /// Why the fallback layout was used, if it was
    pub fallback: Option<FallbackReason>,
    /// Surplus outfield players left off the pitch
    pub unplaced: usize,
}

impl FormationData {
    pub fn is_fallback(&self) -> bool {
        self.formation_label.is_fallback()
    }

    /// Parallel-array view: `positions()[i]` belongs to the i-th player of
    /// the flattened lines.
    pub fn positions(&self) -> Vec<PitchPoint> {
        self.placements.iter().map(|placement| placement.point).collect()
    }

    /// Players of every line, flattened in placement order.
    pub fn flattened_players(&self) -> impl Iterator<Item = &Arc<Player>> {
        self.lines.iter().flat_map(|line| line.iter())
    }

    /// Goalkeeper line member (always the last line).
    pub fn keeper(&self) -> Option<&Arc<Player>> {
        self.lines.last().and_then(|line| line.players.first())
    }

    /// Placement of `player`, matched by identity.
    pub fn placement_of(&self, player: &Arc<Player>) -> Option<&Placement> {
        self.placements.iter().find(|placement| Arc::ptr_eq(&placement.player, player))
    }

    pub fn player_count(&self) -> usize {
        self.placements.len()
    }
}
