use eframe::egui;
use egui_extras::{Size, StripBuilder};

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct WavescopeApp {
    pub state: AppState,
}

impl WavescopeApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for WavescopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Bottom panel: filter controls ----
        egui::TopBottomPanel::bottom("filter_controls").show(ctx, |ui| {
            panels::filter_controls(ui, &mut self.state);
        });

        // ---- Central panel: 2×2 chart grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let charts = &self.state.charts;
            StripBuilder::new(ui)
                .size(Size::relative(0.5))
                .size(Size::relative(0.5))
                .vertical(|mut strip| {
                    for row in 0..2 {
                        strip.strip(|builder| {
                            builder
                                .size(Size::relative(0.5))
                                .size(Size::relative(0.5))
                                .horizontal(|mut strip| {
                                    for col in 0..2 {
                                        strip.cell(|ui| {
                                            plot::chart(ui, &charts[row * 2 + col]);
                                        });
                                    }
                                });
                        });
                    }
                });
        });
    }
}
