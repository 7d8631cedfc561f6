//! Line-based coordinate calculation
//!
//! Maps sorted lines onto the normalized pitch space.
//!
//! ## Formulas
//!
//! With `N` lines and `inner = size - 2 * margin` on each axis:
//! - line `i` sits at `y = margin + inner_height * (i + 0.5) / N`
//! - a single player sits at `x = width / 2`
//! - `k > 1` players are spaced by `inner_width / (k + 1)`; player `j` sits at
//!   `x = margin + spacing * (j + 1)`
//!
//! Both formulas keep every point inside the margins by construction, so no
//! clamping happens afterwards.

use super::types::{Line, PitchPoint, Placement};
use crate::config::PitchSpace;
use std::sync::Arc;

/// Vertical center of line `index` out of `line_count`.
pub fn line_y(pitch: &PitchSpace, index: usize, line_count: usize) -> f32 {
    pitch.margin + pitch.inner_height() * (index as f32 + 0.5) / line_count as f32
}

/// Horizontal position of `slot` in a line of `line_len` players.
pub fn slot_x(pitch: &PitchSpace, slot: usize, line_len: usize) -> f32 {
    if line_len <= 1 {
        return pitch.width / 2.0;
    }
    let spacing = pitch.inner_width() / (line_len as f32 + 1.0);
    pitch.margin + spacing * (slot as f32 + 1.0)
}

/// Places every player of `lines`, in flatten order.
pub fn calculate_placements(pitch: &PitchSpace, lines: &[Line]) -> Vec<Placement> {
    let line_count = lines.len();
    let mut placements = Vec::with_capacity(lines.iter().map(Line::len).sum());

    for (line_index, line) in lines.iter().enumerate() {
        let y = line_y(pitch, line_index, line_count);
        for (slot, player) in line.iter().enumerate() {
            placements.push(Placement {
                player: Arc::clone(player),
                point: PitchPoint::new(slot_x(pitch, slot, line.len()), y),
                line: line_index,
                slot,
            });
        }
    }

    placements
}
