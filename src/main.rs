mod app;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::PegeltafelApp;
use eframe::egui;

/// Data file read at startup, relative to the working directory.
const DATA_FILE: &str = "data.json";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Load before opening any window; a bad file aborts the run.
    let dataset = data::loader::load_file(Path::new(DATA_FILE))
        .with_context(|| format!("loading {DATA_FILE}"))?;
    log::info!("Loaded {} records from {DATA_FILE}", dataset.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pegeltafel – Abflussmaxima",
        options,
        Box::new(move |_cc| Ok(Box::new(PegeltafelApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
