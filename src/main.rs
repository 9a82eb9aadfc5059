//! streambox - A mock streaming-box TV interface for the terminal
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use streambox_app::{AppState, SettingsStore};

/// A mock streaming-box TV interface for the terminal
#[derive(Parser, Debug)]
#[command(name = "streambox")]
#[command(about = "A mock streaming-box TV interface for the terminal", long_about = None)]
struct Args {
    /// Directory for persisted settings (defaults to the platform data dir)
    #[arg(long, value_name = "DIR")]
    state_dir: Option<PathBuf>,

    /// Discard persisted settings and start from the defaults
    #[arg(long)]
    reset: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    streambox_core::logging::init()?;

    let state_dir = args.state_dir.unwrap_or_else(default_state_dir);
    tracing::info!(state_dir = %state_dir.display(), "using state directory");

    let mut store = SettingsStore::load(&state_dir);
    if args.reset {
        store.reset()?;
        tracing::info!("settings reset to defaults");
    }

    streambox_tui::run(AppState::new(store))?;
    Ok(())
}

fn default_state_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("streambox")
}
