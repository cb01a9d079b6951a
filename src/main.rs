//! homedeck - A terminal dashboard for self-hosted services
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use homedeck_app::config::{self, Theme};
use homedeck_core::prelude::*;

/// homedeck - A terminal dashboard for self-hosted services
#[derive(Parser, Debug)]
#[command(name = "homedeck")]
#[command(about = "A terminal dashboard for self-hosted services", long_about = None)]
struct Args {
    /// Catalog source: an http(s) URL or a path to a JSON file.
    /// Overrides the config file.
    #[arg(value_name = "SOURCE")]
    source: Option<String>,

    /// Theme at startup (dark or light). Overrides the config file.
    #[arg(long, value_name = "THEME")]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    homedeck_core::logging::init()?;

    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(source) = args.source {
        settings.catalog.source = source;
    }
    match args.theme.as_deref() {
        Some("light") => settings.ui.theme = Theme::Light,
        Some("dark") => settings.ui.theme = Theme::Dark,
        Some(other) => {
            eprintln!("Unknown theme {other:?}, expected \"dark\" or \"light\"");
            std::process::exit(2);
        }
        None => {}
    }

    info!("Starting with catalog source: {}", settings.catalog.source);
    homedeck_tui::run(settings).await
}
