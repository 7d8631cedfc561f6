//! Line-up CLI helpers
//!
//! File loading and the two commands behind the `lineup` binary, kept out of
//! `main.rs` so they can be tested without spawning a process.

use anyhow::{Context, Result};
use lineup_core::{AnalyzeResponse, FormationAnalyzer, FormationData, LayoutConfig, Player};
use lineup_render::{PitchView, RenderConfig, Theme};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// Roster files are either a bare player array or `{ "players": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RosterFile {
    Players(Vec<Player>),
    Wrapped { players: Vec<Player> },
}

pub fn load_roster(path: &Path) -> Result<Vec<Arc<Player>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster {}", path.display()))?;
    let file: RosterFile = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse roster {}", path.display()))?;

    let players = match file {
        RosterFile::Players(players) | RosterFile::Wrapped { players } => players,
    };
    tracing::debug!(path = %path.display(), players = players.len(), "roster loaded");
    Ok(players.into_iter().map(Arc::new).collect())
}

/// `--config` wins; otherwise the env override, otherwise defaults.
pub fn load_layout_config(path: Option<&Path>) -> Result<LayoutConfig> {
    match path {
        Some(path) => LayoutConfig::from_path(path)
            .with_context(|| format!("invalid layout config {}", path.display())),
        None => LayoutConfig::load_from_env().context("invalid layout config from environment"),
    }
}

pub fn analyze(
    roster: &[Arc<Player>],
    formation: &str,
    config: LayoutConfig,
) -> Result<FormationData> {
    let analyzer = FormationAnalyzer::new(config).context("invalid layout config")?;
    Ok(analyzer.analyze(roster, formation))
}

pub fn analyze_to_json(
    roster: &[Arc<Player>],
    formation: &str,
    config: LayoutConfig,
) -> Result<String> {
    let data = analyze(roster, formation, config)?;
    let json = serde_json::to_string_pretty(&AnalyzeResponse::from_data(&data))?;
    Ok(json)
}

pub struct RenderOptions {
    pub theme: Theme,
    pub width_px: Option<f32>,
    pub config: RenderConfig,
}

/// Renders the pitch as a standalone HTML fragment.
pub fn render_html(
    roster: &[Arc<Player>],
    formation: &str,
    layout: LayoutConfig,
    options: RenderOptions,
) -> Result<String> {
    let data = analyze(roster, formation, layout)?;
    if let Some(reason) = &data.fallback {
        tracing::info!(%reason, "rendering fallback layout");
    }

    let mut view = PitchView::new(options.config, options.theme, |player: &Arc<Player>| {
        tracing::info!(player = player.display_name(), "marker activated");
    })?;

    if let Some(width) = options.width_px {
        if !view.resize(width) {
            tracing::warn!(width, "ignoring non-positive --width");
        }
    }
    view.render(data);

    let mut html = String::new();
    view.write_html(&mut html)?;
    html.push('\n');
    Ok(html)
}
