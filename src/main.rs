mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::WavescopeApp;
use eframe::egui;
use state::AppState;

/// The reference deployment's table name, used when no path is given.
const DEFAULT_DATA_FILE: &str = "data_all_density.csv";

fn main() -> eframe::Result {
    env_logger::init();

    // The table is a one-shot startup dependency: load it before opening the
    // window and abort if it cannot be read.
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
    let dataset = match data::loader::load_file(Path::new(&path)) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("Failed to load {path}: {e:#}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} measurements from {path} ({} locations)",
        dataset.len(),
        dataset.locations.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Wavescope – Wave Measurement Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(WavescopeApp::new(AppState::new(dataset))))),
    )
}
