use super::position::PositionTag;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Label used when a player record carries no usable name.
pub const UNKNOWN_PLAYER_NAME: &str = "Unknown";

/// Roster as handed over by the data layer.
///
/// Players are shared behind `Arc` and compared by pointer identity, never
/// by content: two namesakes in one squad are still two players.
pub type Roster = [Arc<Player>];

/// Player record supplied by the data-loading layer.
///
/// # Boundary Contract
/// - Read-only to the layout engine
/// - `position` is kept raw; resolve it with [`Player::position_tag`]
/// - Choosing between `name` and `name_en` for display is the caller's job;
///   the engine only uses [`Player::display_name`] for deterministic ordering
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    /// Local-language display name
    #[serde(default, alias = "name_local")]
    pub name: Option<String>,

    /// International display name
    #[serde(default, alias = "name_international", alias = "international_name")]
    pub name_en: Option<String>,

    /// Raw position tag (e.g. `"GK"`, `"left-back"`)
    #[serde(default)]
    pub position: Option<String>,
}

impl Player {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self { name: Some(name.into()), name_en: None, position: Some(position.into()) }
    }

    pub fn with_international_name(mut self, name_en: impl Into<String>) -> Self {
        self.name_en = Some(name_en.into());
        self
    }

    /// Local name, then international name, then [`UNKNOWN_PLAYER_NAME`].
    pub fn display_name(&self) -> &str {
        [self.name.as_deref(), self.name_en.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_PLAYER_NAME)
    }

    /// Resolved position tag; `None` when absent or outside the vocabulary.
    pub fn position_tag(&self) -> Option<PositionTag> {
        self.position.as_deref().and_then(|raw| raw.parse().ok())
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position_tag().is_some_and(|tag| tag.is_goalkeeper())
    }
}
