// crates/lineup_core/src/formation/mod.rs
// Formation layout pipeline: parser -> distributor -> sorter -> coordinates

pub mod analyzer;
pub mod coordinates;
pub mod distributor;
pub mod parser;
pub mod sorter;
pub mod types;

#[cfg(test)]
mod proptests;

// Re-export main types
pub use analyzer::{analyze, AnalyzerStage, FallbackReason, FormationAnalyzer};
pub use coordinates::{calculate_placements, line_y, slot_x};
pub use distributor::{distribute, Distribution};
pub use parser::{parse_line_sizes, FormationDescriptor};
pub use sorter::{position_priority, sort_line, sort_lines, UNRANKED};
pub use types::{FormationData, FormationLabel, Line, PitchPoint, Placement, FALLBACK_LABEL};
