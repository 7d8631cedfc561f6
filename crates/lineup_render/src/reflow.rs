//! Reflow: marker sizing for a container width, and the diff between an
//! existing marker set and a new layout.

use crate::config::{MarkerSizeConfig, TransitionConfig};
use crate::marker::{Marker, MarkerId};
use lineup_core::Placement;
use std::sync::Arc;

/// Pixel sizes derived from the container width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerSizing {
    pub dot_px: f32,
    pub label_px: f32,
}

impl MarkerSizing {
    /// `None` for a zero, negative or non-finite width (hidden or detached
    /// container); callers keep their previous sizing.
    pub fn for_width(width_px: f32, config: &MarkerSizeConfig) -> Option<Self> {
        if !width_px.is_finite() || width_px <= 0.0 {
            return None;
        }
        Some(Self {
            dot_px: (width_px * config.dot_ratio).clamp(config.min_dot_px, config.max_dot_px),
            label_px: (width_px * config.label_ratio)
                .clamp(config.min_label_px, config.max_label_px),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerMove {
    pub id: MarkerId,
    pub from: (f32, f32),
    pub to: (f32, f32),
}

/// Outcome of updating the view with a new layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReflowPlan {
    /// Kept markers whose offsets changed; these animate
    pub moved: Vec<MarkerMove>,
    /// Kept markers at the same spot
    pub kept: Vec<MarkerId>,
    /// New players; appear in place without a transition
    pub inserted: Vec<MarkerId>,
    /// Players no longer in the layout
    pub removed: Vec<MarkerId>,
}

impl ReflowPlan {
    pub fn is_noop(&self) -> bool {
        self.moved.is_empty() && self.inserted.is_empty() && self.removed.is_empty()
    }
}

/// For every new placement, the index of the existing marker showing the
/// same player, matched by identity. Each marker is claimed at most once.
pub fn match_markers(existing: &[Marker], placements: &[Placement]) -> Vec<Option<usize>> {
    let mut claimed = vec![false; existing.len()];
    placements
        .iter()
        .map(|placement| {
            let found = existing.iter().enumerate().position(|(idx, marker)| {
                !claimed[idx] && Arc::ptr_eq(&marker.player, &placement.player)
            });
            if let Some(idx) = found {
                claimed[idx] = true;
            }
            found
        })
        .collect()
}

/// CSS transition value for moving markers, `None` when disabled.
pub fn transition_css(config: &TransitionConfig) -> Option<String> {
    if config.duration_ms == 0 {
        return None;
    }
    Some(format!(
        "left {ms}ms {easing}, top {ms}ms {easing}",
        ms = config.duration_ms,
        easing = config.easing
    ))
}
