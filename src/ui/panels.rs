use eframe::egui::{self, Ui};

use crate::data::filter::{HM0_MAX, HM0_MIN, HM0_STEP};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Wavescope");
        ui.separator();
        ui.label(format!(
            "{} measurements, {} selected, {} locations",
            state.dataset.len(),
            state.selected_count(),
            state.dataset.locations.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Bottom panel – filter controls
// ---------------------------------------------------------------------------

/// Render the wave-height range and location controls. Widget changes feed
/// straight into the state setters, which run the shared recompute.
pub fn filter_controls(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.label("Filter by measured spectral wave height:");

    let (mut low, mut high) = (state.filter.low, state.filter.high);
    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, HM0_MIN..=HM0_MAX)
                .step_by(HM0_STEP)
                .fixed_decimals(1)
                .text("min Hm0 [m]"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, HM0_MIN..=HM0_MAX)
                .step_by(HM0_STEP)
                .fixed_decimals(1)
                .text("max Hm0 [m]"),
        )
        .changed();
    if low_changed || high_changed {
        state.set_height_range(low, high);
    }

    ui.add_space(4.0);

    // Clone so the selection can mutate state inside the combo closure.
    let locations = state.locations.clone();
    let current = state.filter.location.clone();
    egui::ComboBox::from_label("Location")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for location in &locations {
                if ui
                    .selectable_label(current == *location, location)
                    .clicked()
                {
                    state.set_location(location.clone());
                }
            }
        });

    ui.add_space(4.0);
}
