//! Player markers and their activation triggers.

use crate::geometry::fmt_num;
use crate::reflow::MarkerSizing;
use crate::scene::Element;
use crate::theme::Theme;
use lineup_core::{PitchSpace, Placement, Player};
use std::fmt;
use std::sync::Arc;

/// Stable handle of a marker node; survives repositioning on update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

/// Supplies the pre-shortened label shown under each marker.
///
/// Name shortening and localization live with the caller; the renderer only
/// displays what it is given.
pub trait MarkerLabels {
    fn label(&self, player: &Player) -> String;
}

impl<F> MarkerLabels for F
where
    F: Fn(&Player) -> String,
{
    fn label(&self, player: &Player) -> String {
        self(player)
    }
}

/// Default labels: [`Player::display_name`] as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayNameLabels;

impl MarkerLabels for DisplayNameLabels {
    fn label(&self, player: &Player) -> String {
        player.display_name().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Other(String),
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            " " | "Space" | "Spacebar" => Key::Space,
            other => Key::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Pointer,
    Key(Key),
}

impl Activation {
    /// Pointer clicks, `Enter` and `Space` open the player detail.
    pub fn triggers(&self) -> bool {
        matches!(self, Activation::Pointer | Activation::Key(Key::Enter | Key::Space))
    }
}

/// One rendered player marker.
#[derive(Debug, Clone)]
pub struct Marker {
    pub id: MarkerId,
    pub player: Arc<Player>,
    pub line: usize,
    pub slot: usize,
    /// Offset from the container's left edge, in percent
    pub left_pct: f32,
    /// Offset from the container's top edge, in percent
    pub top_pct: f32,
    pub label: String,
    pub badge: Option<String>,
    /// CSS transition value while moving between layouts
    pub transition: Option<String>,
}

impl Marker {
    pub fn new(
        id: MarkerId,
        placement: &Placement,
        pitch: &PitchSpace,
        labels: &dyn MarkerLabels,
        show_badge: bool,
    ) -> Self {
        let (left_pct, top_pct) = placement.point.to_percent(pitch);
        Self {
            id,
            player: Arc::clone(&placement.player),
            line: placement.line,
            slot: placement.slot,
            left_pct,
            top_pct,
            label: labels.label(&placement.player),
            badge: badge_for(&placement.player, show_badge),
            transition: None,
        }
    }

    /// Re-points an existing marker at a new placement, keeping its id.
    pub fn reposition(
        &mut self,
        placement: &Placement,
        pitch: &PitchSpace,
        labels: &dyn MarkerLabels,
        show_badge: bool,
    ) {
        let (left_pct, top_pct) = placement.point.to_percent(pitch);
        self.line = placement.line;
        self.slot = placement.slot;
        self.left_pct = left_pct;
        self.top_pct = top_pct;
        self.label = labels.label(&placement.player);
        self.badge = badge_for(&placement.player, show_badge);
    }

    pub fn offsets(&self) -> (f32, f32) {
        (self.left_pct, self.top_pct)
    }

    fn style(&self) -> String {
        let mut style = format!(
            "left: {}%; top: {}%; transform: translate(-50%, -50%)",
            fmt_num(self.left_pct),
            fmt_num(self.top_pct)
        );
        if let Some(transition) = &self.transition {
            style.push_str("; transition: ");
            style.push_str(transition);
        }
        style
    }

    fn aria_label(&self) -> String {
        match &self.badge {
            Some(badge) => format!("{}, {}", self.label, badge),
            None => self.label.clone(),
        }
    }

    pub fn to_element(&self, theme: &Theme, sizing: &MarkerSizing) -> Element {
        let dot = Element::new("span")
            .attr("class", format!("marker-dot {}", theme.class_name))
            .attr(
                "style",
                format!(
                    "width: {dot}px; height: {dot}px; background: {}; border-color: {}",
                    theme.primary,
                    theme.secondary,
                    dot = fmt_num(sizing.dot_px)
                ),
            );
        let label = Element::new("span")
            .attr("class", "marker-label")
            .attr("style", format!("font-size: {}px", fmt_num(sizing.label_px)))
            .text(self.label.clone());

        let mut marker = Element::new("div")
            .attr("class", "pitch-marker")
            .attr("data-marker-id", self.id.to_string())
            .attr("data-line", self.line.to_string())
            .attr("data-slot", self.slot.to_string())
            .attr("role", "button")
            .attr("tabindex", "0")
            .attr("aria-label", self.aria_label())
            .attr("style", self.style())
            .child(dot)
            .child(label);

        if let Some(badge) = &self.badge {
            marker.push(Element::new("span").attr("class", "marker-badge").text(badge.clone()));
        }
        marker
    }
}

/// Badge text: the resolved short tag, or the raw tag when unrecognized.
fn badge_for(player: &Player, show_badge: bool) -> Option<String> {
    if !show_badge {
        return None;
    }
    match player.position_tag() {
        Some(tag) => Some(tag.short_name().to_string()),
        None => player
            .position
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(str::to_string),
    }
}
