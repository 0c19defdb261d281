use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use eframe::egui;

use penguin_dash::app::PenguinDashApp;
use penguin_dash::config::{Cli, DashboardConfig, Theme};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::from(Cli::parse());
    let dataset = match config.data_source.load() {
        Ok(ds) => Arc::new(ds),
        Err(e) => {
            log::error!("Failed to load dataset: {e}");
            return Err(e).context("loading penguin dataset");
        }
    };
    log::info!(
        "Loaded {} penguins, species {:?}",
        dataset.len(),
        dataset.species()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(match config.theme {
                Theme::Light => egui::Visuals::light(),
                Theme::Dark => egui::Visuals::dark(),
            });
            Ok(Box::new(PenguinDashApp::new(&config, dataset)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard window: {e}"))
}
