// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main entry point for the egui UI

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use rookery_ui_egui::app::App;
use rookery_ui_egui::ui_config::UiConfig;

#[derive(Parser)]
#[command(name = "rookery")]
#[command(about = "Two-player chess with an egui board")]
struct Args {
    /// Start from this FEN instead of the standard arrangement
    #[arg(long)]
    fen: Option<String>,

    /// Path to a JSON UI configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let config = match &args.config {
        Some(path) => UiConfig::load_from_file(path)
            .with_context(|| format!("loading UI config from {}", path.display()))?,
        None => UiConfig::default(),
    };

    let app = App::new(config.clone(), args.fen).context("setting up the starting position")?;

    let (width, height) = config.window.initial_size;
    let (min_width, min_height) = config.window.min_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::vec2(width, height))
            .with_min_inner_size(egui::vec2(min_width, min_height)),
        centered: true,
        ..Default::default()
    };

    tracing::info!("starting UI");
    eframe::run_native(
        &config.window.title,
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("failed to run eframe: {e}"))
}
