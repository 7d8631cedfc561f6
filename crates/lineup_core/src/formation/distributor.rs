//! Roster to tactical line distribution.

use super::parser::FormationDescriptor;
use super::types::Line;
use crate::error::{FormationError, Result};
use crate::models::{Player, Roster};
use std::sync::Arc;

/// Lines produced from a roster; the goalkeeper line is last.
#[derive(Debug, Clone)]
pub struct Distribution {
    pub lines: Vec<Line>,
    /// Outfield players beyond the descriptor total (bench at the tail)
    pub unplaced: usize,
}

/// Splits `roster` into the lines of `descriptor`.
///
/// Outfield players are consumed strictly in roster order; lines are filled
/// front to back. Exactly one goalkeeper is required and it always ends up
/// alone in the final line.
pub fn distribute(roster: &Roster, descriptor: &FormationDescriptor) -> Result<Distribution> {
    let (keepers, outfield): (Vec<&Arc<Player>>, Vec<&Arc<Player>>) =
        roster.iter().partition(|player| player.is_goalkeeper());

    let keeper = match keepers.as_slice() {
        [keeper] => Arc::clone(*keeper),
        _ => return Err(FormationError::GoalkeeperCount { found: keepers.len() }),
    };

    let required = descriptor.outfield_total();
    if outfield.len() < required {
        return Err(FormationError::InsufficientPlayers { required, available: outfield.len() });
    }

    let unplaced = outfield.len() - required;
    if unplaced > 0 {
        tracing::debug!(unplaced, formation = %descriptor, "surplus outfield players not placed");
    }

    let mut remaining = outfield.into_iter();
    let mut lines: Vec<Line> = descriptor
        .line_sizes()
        .iter()
        .map(|&size| Line::new(remaining.by_ref().take(size as usize).map(Arc::clone).collect()))
        .collect();
    lines.push(Line::new(vec![keeper]));

    Ok(Distribution { lines, unplaced })
}
