mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::TrekDashboardApp;
use eframe::egui;

/// Read from the working directory at startup.
const DATA_FILE: &str = "nepal-trek-data.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // A missing or malformed dataset is fatal: there is nothing to show.
    let dataset = data::loader::load_file(Path::new(DATA_FILE))
        .with_context(|| format!("cannot start without {DATA_FILE}"))?;
    log::info!(
        "Loaded {} treks from {DATA_FILE} (extra columns {:?})",
        dataset.len(),
        dataset.extra_columns
    );
    if dataset.is_empty() {
        log::warn!("{DATA_FILE} has no rows; every chart will be empty");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(ui::dashboard::TITLE)
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        ui::dashboard::TITLE,
        options,
        Box::new(|cc| Ok(Box::new(TrekDashboardApp::new(cc, dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
