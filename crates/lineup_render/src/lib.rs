//! # lineup_render - Pitch Renderer
//!
//! Draws a [`lineup_core::FormationData`] as a vector pitch with one
//! interactive marker per player, and reflows it on formation changes and
//! container resizes.
//!
//! ## Features
//! - Static pitch markings in the same `100 x 140` space as the layout
//! - Percentage-offset markers, so resizing never moves a marker
//! - Identity-keyed updates: players keep their marker node across layouts
//! - Team colours and label text injected by the caller
//! - Degraded label when the fallback layout is shown

pub mod config;
pub mod error;
pub mod geometry;
pub mod marker;
pub mod reflow;
pub mod scene;
pub mod theme;
pub mod view;

pub use config::{MarkerSizeConfig, RenderConfig, TransitionConfig};
pub use error::{RenderError, Result};
pub use geometry::PitchGeometry;
pub use marker::{Activation, DisplayNameLabels, Key, Marker, MarkerId, MarkerLabels};
pub use reflow::{MarkerMove, MarkerSizing, ReflowPlan};
pub use scene::Element;
pub use theme::Theme;
pub use view::{PitchView, DEGRADED_LABEL};
