//! # Pitch View
//!
//! Retained view of one formation: static pitch markings, a formation label
//! and one absolutely positioned marker per placed player.
//!
//! - `render` builds a fresh marker set
//! - `update` keeps markers of players still on the pitch (same node id)
//!   and animates their move; new players appear without a transition
//! - `resize` rescales markers and labels only; offsets are percentages
//!   and never need recomputing
//!
//! ## Usage
//! ```rust
//! use lineup_core::{analyze, Player};
//! use lineup_render::{PitchView, RenderConfig, Theme};
//! use std::sync::Arc;
//!
//! let roster: Vec<Arc<Player>> = vec![Arc::new(Player::new("Keeper", "GK"))];
//! let mut view = PitchView::new(RenderConfig::default(), Theme::default(), |_: &Arc<Player>| {})
//!     .expect("default config is valid");
//! view.render(analyze(&roster, "4-4-2"));
//! assert!(view.to_html().contains("Formation unavailable"));
//! ```

use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::geometry::{fmt_num, PitchGeometry};
use crate::marker::{Activation, DisplayNameLabels, Marker, MarkerId, MarkerLabels};
use crate::reflow::{match_markers, transition_css, MarkerMove, MarkerSizing, ReflowPlan};
use crate::scene::Element;
use crate::theme::Theme;
use lineup_core::{FormationData, PitchSpace, Player};
use std::sync::Arc;
use tracing::{debug, trace};

/// Text shown when the fallback layout is on the pitch.
pub const DEGRADED_LABEL: &str = "Formation unavailable";

type ActivateHandler = Box<dyn FnMut(&Arc<Player>)>;

pub struct PitchView {
    config: RenderConfig,
    theme: Theme,
    pitch: PitchSpace,
    geometry: PitchGeometry,
    labels: Box<dyn MarkerLabels>,
    on_activate: ActivateHandler,
    sizing: MarkerSizing,
    formation: Option<FormationData>,
    markers: Vec<Marker>,
    next_marker_id: u64,
}

impl PitchView {
    pub fn new(
        config: RenderConfig,
        theme: Theme,
        on_activate: impl FnMut(&Arc<Player>) + 'static,
    ) -> Result<Self> {
        config.validate()?;
        let pitch = PitchSpace::default();
        let sizing =
            MarkerSizing::for_width(config.initial_width_px, &config.marker).ok_or_else(|| {
                RenderError::InvalidConfig(format!(
                    "initial_width_px must be positive, got {}",
                    config.initial_width_px
                ))
            })?;

        Ok(Self {
            geometry: PitchGeometry::new(&pitch),
            config,
            theme,
            pitch,
            labels: Box::new(DisplayNameLabels),
            on_activate: Box::new(on_activate),
            sizing,
            formation: None,
            markers: Vec::new(),
            next_marker_id: 0,
        })
    }

    /// Replaces the label provider (e.g. localized short names).
    pub fn with_labels(mut self, labels: impl MarkerLabels + 'static) -> Self {
        self.labels = Box::new(labels);
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Team colours apply to every marker on the next serialization.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Space of the layout on screen (the default space before any render).
    pub fn pitch(&self) -> &PitchSpace {
        &self.pitch
    }

    pub fn sizing(&self) -> MarkerSizing {
        self.sizing
    }

    pub fn formation(&self) -> Option<&FormationData> {
        self.formation.as_ref()
    }

    /// Markers in flatten order (line 0 first, leftmost first).
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.id == id)
    }

    /// Draws `data` from scratch: every marker gets a new id, none animate.
    pub fn render(&mut self, data: FormationData) {
        self.adopt_pitch(data.pitch);
        let markers: Vec<Marker> = data
            .placements
            .iter()
            .map(|placement| {
                let id = self.allocate_id();
                Marker::new(
                    id,
                    placement,
                    &self.pitch,
                    self.labels.as_ref(),
                    self.config.show_position_badges,
                )
            })
            .collect();

        debug!(
            formation = %data.formation_label,
            markers = data.player_count(),
            degraded = data.is_fallback(),
            "pitch rendered"
        );
        self.markers = markers;
        self.formation = Some(data);
    }

    /// Moves to a new layout, keeping the nodes of players still on the
    /// pitch. Before the first `render` this behaves like `render`.
    pub fn update(&mut self, data: FormationData) -> ReflowPlan {
        let mut plan = ReflowPlan::default();
        if self.formation.is_none() {
            self.render(data);
            plan.inserted = self.markers.iter().map(|marker| marker.id).collect();
            return plan;
        }

        self.adopt_pitch(data.pitch);
        let matches = match_markers(&self.markers, &data.placements);
        let mut previous: Vec<Option<Marker>> =
            std::mem::take(&mut self.markers).into_iter().map(Some).collect();
        let transition = transition_css(&self.config.transition);
        let show_badge = self.config.show_position_badges;

        let mut markers = Vec::with_capacity(data.placements.len());
        for (placement, matched) in data.placements.iter().zip(matches) {
            match matched.and_then(|idx| previous[idx].take()) {
                Some(mut marker) => {
                    let from = marker.offsets();
                    marker.reposition(placement, &self.pitch, self.labels.as_ref(), show_badge);
                    let to = marker.offsets();
                    if from == to {
                        marker.transition = None;
                        plan.kept.push(marker.id);
                    } else {
                        marker.transition = transition.clone();
                        plan.moved.push(MarkerMove { id: marker.id, from, to });
                    }
                    markers.push(marker);
                }
                None => {
                    let id = self.allocate_id();
                    plan.inserted.push(id);
                    markers.push(Marker::new(
                        id,
                        placement,
                        &self.pitch,
                        self.labels.as_ref(),
                        show_badge,
                    ));
                }
            }
        }
        plan.removed = previous.into_iter().flatten().map(|marker| marker.id).collect();

        debug!(
            formation = %data.formation_label,
            moved = plan.moved.len(),
            kept = plan.kept.len(),
            inserted = plan.inserted.len(),
            removed = plan.removed.len(),
            "pitch updated"
        );
        self.markers = markers;
        self.formation = Some(data);
        plan
    }

    /// Rescales markers for a new container width. Returns `false` (and
    /// keeps the current sizing) for a hidden or detached container.
    pub fn resize(&mut self, width_px: f32) -> bool {
        match MarkerSizing::for_width(width_px, &self.config.marker) {
            Some(sizing) => {
                trace!(width_px, dot_px = sizing.dot_px, "pitch resized");
                self.sizing = sizing;
                true
            }
            None => {
                trace!(width_px, "resize ignored");
                false
            }
        }
    }

    /// Routes a pointer or key event on a marker to the activation handler
    /// with the marker's player. Returns whether the handler ran.
    pub fn activate(&mut self, id: MarkerId, activation: &Activation) -> bool {
        if !activation.triggers() {
            return false;
        }
        let Some(marker) = self.markers.iter().find(|marker| marker.id == id) else {
            return false;
        };
        (self.on_activate)(&marker.player);
        true
    }

    /// Full container subtree: markings, formation label and markers.
    pub fn container(&self) -> Element {
        let mut root = Element::new("div")
            .attr("class", format!("pitch {}", self.theme.class_name))
            .attr(
                "style",
                format!(
                    "position: relative; aspect-ratio: {} / {}",
                    fmt_num(self.pitch.width),
                    fmt_num(self.pitch.height)
                ),
            )
            .child(self.geometry.to_svg());

        if let Some(data) = &self.formation {
            root.set_attr("data-formation", data.formation_label.as_str());
            root.push(self.label_element(data));
        }

        let mut layer = Element::new("div").attr("class", "pitch-markers");
        for marker in &self.markers {
            layer.push(marker.to_element(&self.theme, &self.sizing));
        }
        root.push(layer);
        root
    }

    pub fn to_html(&self) -> String {
        self.container().to_markup()
    }

    /// Appends the container markup to `out`.
    pub fn write_html(&self, out: &mut String) -> Result<()> {
        self.container().write_markup(out)?;
        Ok(())
    }

    fn label_element(&self, data: &FormationData) -> Element {
        match &data.fallback {
            Some(reason) => Element::new("div")
                .attr("class", "formation-label degraded")
                .attr("title", reason.error.to_string())
                .attr("role", "status")
                .text(DEGRADED_LABEL),
            // Fallback without a recorded reason (caller-built data)
            None if data.is_fallback() => Element::new("div")
                .attr("class", "formation-label degraded")
                .attr("role", "status")
                .text(DEGRADED_LABEL),
            None => Element::new("div")
                .attr("class", "formation-label")
                .text(data.formation_label.as_str()),
        }
    }

    /// Markings and offsets always use the space the layout was computed in.
    fn adopt_pitch(&mut self, pitch: PitchSpace) {
        if self.pitch != pitch {
            debug!(?pitch, "pitch space changed");
            self.geometry = PitchGeometry::new(&pitch);
            self.pitch = pitch;
        }
    }

    fn allocate_id(&mut self) -> MarkerId {
        self.next_marker_id += 1;
        MarkerId(self.next_marker_id)
    }
}
