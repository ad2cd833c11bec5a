use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod controller;
mod ui;

use ui::{PortfolioApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(name = "portfolio_gui", about = "Single-page developer portfolio")]
struct Args {
    /// Settings file; falls back to portfolio.toml in the working directory.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the hero shape field. Overrides the configured seed.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let settings =
        section_core::load_settings(args.config.as_deref()).context("loading settings")?;
    let seed = args
        .seed
        .or(settings.hero_seed)
        .unwrap_or_else(rand::random);
    tracing::info!(seed, "portfolio: starting");

    let startup = StartupConfig { settings, seed };
    let app = PortfolioApp::new(startup).context("building page")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Portfolio")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Portfolio",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow::anyhow!("window loop failed: {err}"))
}
