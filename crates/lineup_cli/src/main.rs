//! Line-up CLI
//!
//! roster JSON → formation layout JSON
//! roster JSON → HTML/SVG pitch preview

use anyhow::Result;
use clap::{Parser, Subcommand};
use lineup_cli::RenderOptions;
use lineup_render::{RenderConfig, Theme};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "lineup_core=info,lineup_render=info,lineup_cli=info";

#[derive(Parser)]
#[command(name = "lineup")]
#[command(about = "Lay out a starting eleven and render its pitch preview", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the formation layout as JSON
    Analyze {
        /// Roster JSON file (player array or {"players": [...]})
        #[arg(long)]
        roster: PathBuf,

        /// Formation descriptor (e.g., "4-3-3")
        #[arg(long)]
        formation: String,

        /// Layout config JSON (defaults to $LINEUP_LAYOUT_CONFIG, then built-ins)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write the pitch preview as HTML with inline SVG
    Render {
        /// Roster JSON file (player array or {"players": [...]})
        #[arg(long)]
        roster: PathBuf,

        /// Formation descriptor (e.g., "4-3-3")
        #[arg(long)]
        formation: String,

        /// CSS class applied to every marker dot
        #[arg(long, default_value = "team-default")]
        theme_class: String,

        /// Marker fill colour
        #[arg(long, default_value = "#1f2937")]
        primary: String,

        /// Marker border colour
        #[arg(long, default_value = "#ffffff")]
        secondary: String,

        /// Container width in pixels used for marker sizing
        #[arg(long)]
        width: Option<f32>,

        /// Layout config JSON (defaults to $LINEUP_LAYOUT_CONFIG, then built-ins)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Render config JSON (marker sizing, transitions)
        #[arg(long)]
        render_config: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { roster, formation, config } => {
            let layout = lineup_cli::load_layout_config(config.as_deref())?;
            let players = lineup_cli::load_roster(&roster)?;
            let json = lineup_cli::analyze_to_json(&players, &formation, layout)?;
            println!("{json}");
        }

        Commands::Render {
            roster,
            formation,
            theme_class,
            primary,
            secondary,
            width,
            config,
            render_config,
            out,
        } => {
            let layout = lineup_cli::load_layout_config(config.as_deref())?;
            let render_config = match render_config {
                Some(path) => load_render_config(&path)?,
                None => RenderConfig::default(),
            };
            let players = lineup_cli::load_roster(&roster)?;
            let options = RenderOptions {
                theme: Theme::new(theme_class, primary, secondary),
                width_px: width,
                config: render_config,
            };
            let html = lineup_cli::render_html(&players, &formation, layout, options)?;

            match out {
                Some(path) => {
                    std::fs::write(&path, html)?;
                    tracing::info!(path = %path.display(), "pitch preview written");
                }
                None => print!("{html}"),
            }
        }
    }

    Ok(())
}

fn load_render_config(path: &std::path::Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = RenderConfig::from_json(&content)?;
    Ok(config)
}
