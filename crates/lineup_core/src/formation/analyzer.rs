//! Formation analyzer façade.
//!
//! Runs parser → distributor → sorter → calculator and owns the fallback
//! policy. This is the boundary where structural errors stop: callers always
//! get a usable [`FormationData`].

use super::coordinates::calculate_placements;
use super::distributor::distribute;
use super::parser::FormationDescriptor;
use super::sorter::sort_lines;
use super::types::{FormationData, FormationLabel, Line};
use crate::config::LayoutConfig;
use crate::error::{ConfigError, FormationError};
use crate::models::Roster;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzerStage {
    Parsing,
    Distributing,
    Sorting,
    Calculating,
    FallbackTriggered,
    Done,
}

impl fmt::Display for AnalyzerStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnalyzerStage::Parsing => "parsing",
            AnalyzerStage::Distributing => "distributing",
            AnalyzerStage::Sorting => "sorting",
            AnalyzerStage::Calculating => "calculating",
            AnalyzerStage::FallbackTriggered => "fallback_triggered",
            AnalyzerStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Structural failure that switched the analyzer to the fallback layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackReason {
    /// Stage that raised the error (parsing or distributing)
    pub stage: AnalyzerStage,
    pub error: FormationError,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.stage, self.error)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormationAnalyzer {
    config: LayoutConfig,
}

impl FormationAnalyzer {
    /// Rejects configs whose pitch or fallback shape cannot produce an
    /// in-bounds layout.
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out `roster` in `formation`. Never fails.
    pub fn analyze(&self, roster: &Roster, formation: &str) -> FormationData {
        match self.try_analyze(roster, formation) {
            Ok(data) => data,
            Err(reason) => {
                tracing::warn!(
                    formation,
                    stage = %reason.stage,
                    error = %reason.error,
                    "formation layout failed, using fallback"
                );
                self.fallback(roster, reason)
            }
        }
    }

    fn try_analyze(
        &self,
        roster: &Roster,
        formation: &str,
    ) -> Result<FormationData, FallbackReason> {
        let mut stage = AnalyzerStage::Parsing;
        let descriptor = FormationDescriptor::parse(formation)
            .map_err(|error| FallbackReason { stage, error })?;

        stage = AnalyzerStage::Distributing;
        tracing::debug!(%stage, formation = %descriptor);
        let distribution =
            distribute(roster, &descriptor).map_err(|error| FallbackReason { stage, error })?;
        let mut lines = distribution.lines;

        stage = AnalyzerStage::Sorting;
        tracing::debug!(%stage, lines = lines.len());
        sort_lines(&mut lines);

        stage = AnalyzerStage::Calculating;
        tracing::debug!(%stage);
        let placements = calculate_placements(&self.config.pitch, &lines);

        tracing::debug!(stage = %AnalyzerStage::Done, players = placements.len());
        Ok(FormationData {
            formation_label: FormationLabel::Descriptor(descriptor.label()),
            pitch: self.config.pitch,
            lines,
            placements,
            fallback: None,
            unplaced: distribution.unplaced,
        })
    }

    /// Best-effort layout used after a structural error.
    ///
    /// Keeper: first goalkeeper-tagged player, else the roster's first player.
    /// Outfield: the next players in roster order, filling `fallback_lines`
    /// front to back; later lines stay short and empty ones are dropped.
    fn fallback(&self, roster: &Roster, reason: FallbackReason) -> FormationData {
        tracing::debug!(stage = %AnalyzerStage::FallbackTriggered, roster = roster.len());
        let keeper_index = roster.iter().position(|player| player.is_goalkeeper()).unwrap_or(0);

        let Some(keeper) = roster.get(keeper_index) else {
            return FormationData {
                formation_label: FormationLabel::Fallback,
                pitch: self.config.pitch,
                lines: Vec::new(),
                placements: Vec::new(),
                fallback: Some(reason),
                unplaced: 0,
            };
        };

        let capacity = self.config.fallback_capacity();
        let outfield_total = roster.len() - 1;
        let mut outfield = roster
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != keeper_index)
            .map(|(_, player)| Arc::clone(player))
            .take(capacity);

        let mut lines: Vec<Line> = self
            .config
            .fallback_lines
            .iter()
            .map(|&size| Line::new(outfield.by_ref().take(size as usize).collect()))
            .filter(|line| !line.is_empty())
            .collect();
        lines.push(Line::new(vec![Arc::clone(keeper)]));

        sort_lines(&mut lines);
        let placements = calculate_placements(&self.config.pitch, &lines);

        FormationData {
            formation_label: FormationLabel::Fallback,
            pitch: self.config.pitch,
            lines,
            placements,
            fallback: Some(reason),
            unplaced: outfield_total.saturating_sub(capacity),
        }
    }
}

/// Runs the analyzer with the default layout config.
pub fn analyze(roster: &Roster, formation: &str) -> FormationData {
    FormationAnalyzer::default().analyze(roster, formation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;

    fn roster(tags: &[&str]) -> Vec<Arc<Player>> {
        tags.iter()
            .enumerate()
            .map(|(i, tag)| Arc::new(Player::new(format!("P{:02}", i), *tag)))
            .collect()
    }

    fn line_sizes(data: &FormationData) -> Vec<usize> {
        data.lines.iter().map(Line::len).collect()
    }

    #[test]
    fn test_clean_formation_is_not_fallback() {
        let roster = roster(&["GK", "LB", "CB", "CB", "RB", "CM", "CM", "CM", "LW", "ST", "RW"]);
        let data = analyze(&roster, "4-3-3");

        assert_eq!(data.formation_label, FormationLabel::Descriptor("4-3-3".to_string()));
        assert!(data.fallback.is_none());
        assert_eq!(line_sizes(&data), vec![4, 3, 3, 1]);
    }

    #[test]
    fn test_label_is_canonical_descriptor() {
        let roster = roster(&["GK", "CB", "CB", "CB", "CB", "CM", "CM", "CM", "ST", "ST", "ST"]);
        let data = analyze(&roster, "4--3-3");
        assert_eq!(data.formation_label.as_str(), "4-3-3");
    }

    #[test]
    fn test_empty_descriptor_falls_back() {
        let roster = roster(&["GK", "CB", "CB", "CM", "ST"]);
        let data = analyze(&roster, "unknown");

        assert!(data.is_fallback());
        let reason = data.fallback.as_ref().unwrap();
        assert_eq!(reason.stage, AnalyzerStage::Parsing);
        assert_eq!(line_sizes(&data), vec![4, 1]);
    }

    #[test]
    fn test_missing_goalkeeper_uses_first_player() {
        let roster = roster(&["CB", "CB", "CM", "ST"]);
        let data = analyze(&roster, "2-1-1");

        assert!(data.is_fallback());
        assert_eq!(data.fallback.as_ref().unwrap().stage, AnalyzerStage::Distributing);
        assert!(Arc::ptr_eq(data.keeper().unwrap(), &roster[0]));
        assert_eq!(line_sizes(&data), vec![3, 1]);
    }

    #[test]
    fn test_fallback_prefers_tagged_goalkeeper() {
        let roster = roster(&["CB", "GK", "CM", "GK"]);
        let data = analyze(&roster, "4-4-2");

        assert!(data.is_fallback());
        assert!(Arc::ptr_eq(data.keeper().unwrap(), &roster[1]));
        assert_eq!(line_sizes(&data), vec![3, 1]);
    }

    #[test]
    fn test_fallback_caps_outfield_players() {
        let mut tags = vec!["ST"; 14];
        tags.push("CB");
        let roster = roster(&tags);
        let data = analyze(&roster, "4-4-2");

        assert!(data.is_fallback());
        assert_eq!(line_sizes(&data), vec![4, 4, 2, 1]);
        assert_eq!(data.unplaced, 4);
    }

    #[test]
    fn test_empty_roster_yields_empty_fallback() {
        let data = analyze(&[], "4-4-2");
        assert!(data.is_fallback());
        assert!(data.lines.is_empty());
        assert!(data.placements.is_empty());
    }

    #[test]
    fn test_custom_fallback_shape() {
        let config = LayoutConfig { fallback_lines: vec![4, 3, 2, 1], ..LayoutConfig::default() };
        let analyzer = FormationAnalyzer::new(config).unwrap();
        let roster = roster(&["CB"; 11]);
        let data = analyzer.analyze(&roster, "4-3-3");

        assert_eq!(line_sizes(&data), vec![4, 3, 2, 1, 1]);
    }

    #[test]
    fn test_oversized_line_falls_back() {
        let roster = roster(&["GK", "LB", "CB", "CB", "RB", "CM", "CM", "CM", "LW", "ST", "RW"]);
        let data = analyze(&roster, "4-99999999999-3");

        assert!(data.is_fallback());
        assert_eq!(data.formation_label.as_str(), "unavailable");
        let reason = data.fallback.as_ref().unwrap();
        assert_eq!(reason.stage, AnalyzerStage::Distributing);
        assert!(matches!(reason.error, FormationError::InsufficientPlayers { available: 10, .. }));
        assert_eq!(line_sizes(&data), vec![4, 4, 2, 1]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = LayoutConfig::default();
        config.pitch.margin = 60.0;
        assert!(matches!(FormationAnalyzer::new(config), Err(ConfigError::Invalid(_))));

        let config = LayoutConfig { fallback_lines: vec![4, 0, 2], ..LayoutConfig::default() };
        assert!(FormationAnalyzer::new(config).is_err());
    }

    #[test]
    fn test_layout_records_its_pitch() {
        let roster = roster(&["GK", "CB", "CB", "ST"]);
        let analyzer = FormationAnalyzer::new(LayoutConfig::compact()).unwrap();

        assert_eq!(analyzer.analyze(&roster, "2-1").pitch, LayoutConfig::compact().pitch);
        assert_eq!(analyzer.analyze(&roster, "9-9").pitch, LayoutConfig::compact().pitch);
    }
}
