use crate::chart::{build_all, ChartSpec};
use crate::data::filter::{row_mask, FilterState};
use crate::data::model::WaveDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full dashboard state, independent of rendering.
///
/// The dataset is loaded once before the window opens and never changes;
/// everything else is derived from it and the current filter. Either control
/// changing runs one recompute: the mask once, then all four charts from
/// that shared mask, so the four views never disagree about which rows are
/// selected.
pub struct AppState {
    /// The immutable measurement table.
    pub dataset: WaveDataset,

    /// Location selector entries, sentinel first. Computed once.
    pub locations: Vec<String>,

    /// Current wave-height range and location selection.
    pub filter: FilterState,

    /// Row mask for the current filter (cached).
    pub mask: Vec<bool>,

    /// The four chart specs built from the current mask (cached).
    pub charts: Vec<ChartSpec>,
}

impl AppState {
    pub fn new(dataset: WaveDataset) -> Self {
        let locations = dataset.location_catalog();
        let mut state = AppState {
            dataset,
            locations,
            filter: FilterState::default(),
            mask: Vec::new(),
            charts: Vec::new(),
        };
        state.recompute();
        state
    }

    /// Recompute the mask and rebuild all four charts unconditionally.
    fn recompute(&mut self) {
        self.mask = row_mask(&self.dataset, &self.filter);
        self.charts = build_all(&self.dataset, &self.mask);
        log::debug!(
            "filter [{:.1}, {:.1}] at '{}' selects {} of {} measurements",
            self.filter.low,
            self.filter.high,
            self.filter.location,
            self.selected_count(),
            self.dataset.len()
        );
    }

    /// Apply a new wave-height range. A crossed pair is re-ordered so the
    /// filter always sees `low <= high`.
    pub fn set_height_range(&mut self, low: f64, high: f64) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        if (low, high) != (self.filter.low, self.filter.high) {
            self.filter.low = low;
            self.filter.high = high;
            self.recompute();
        }
    }

    /// Apply a new location selection.
    pub fn set_location(&mut self, location: String) {
        if location != self.filter.location {
            self.filter.location = location;
            self.recompute();
        }
    }

    /// Number of rows passing the current filter.
    pub fn selected_count(&self) -> usize {
        self.mask.iter().filter(|&&selected| selected).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{test_measurement, WaveDataset, ALL_LOCATIONS};

    fn state() -> AppState {
        AppState::new(WaveDataset::from_measurements(vec![
            test_measurement(1.0, "A"),
            test_measurement(3.0, "B"),
            test_measurement(5.0, "A"),
        ]))
    }

    #[test]
    fn initial_state_selects_everything_within_the_slider_range() {
        let s = state();
        assert_eq!(s.mask, vec![true, true, true]);
        assert_eq!(s.charts.len(), 4);
        assert_eq!(s.locations[0], ALL_LOCATIONS);
    }

    #[test]
    fn range_change_rebuilds_every_chart_from_the_shared_mask() {
        let mut s = state();
        s.set_height_range(0.5, 4.0);
        assert_eq!(s.mask, vec![true, true, false]);
        for chart in &s.charts {
            assert_eq!(chart.points.len(), s.selected_count());
        }
    }

    #[test]
    fn location_change_rebuilds_every_chart_from_the_shared_mask() {
        let mut s = state();
        s.set_location("A".to_string());
        assert_eq!(s.mask, vec![true, false, true]);
        for chart in &s.charts {
            assert_eq!(chart.points.len(), 2);
        }
    }

    #[test]
    fn crossed_range_is_reordered() {
        let mut s = state();
        s.set_height_range(4.0, 0.5);
        assert_eq!((s.filter.low, s.filter.high), (0.5, 4.0));
        assert_eq!(s.mask, vec![true, true, false]);
    }

    #[test]
    fn unchanged_inputs_leave_the_outputs_identical() {
        let mut s = state();
        s.set_height_range(0.5, 4.0);
        let mask = s.mask.clone();
        let charts = s.charts.clone();
        s.set_height_range(0.5, 4.0);
        s.set_location(ALL_LOCATIONS.to_string());
        assert_eq!(s.mask, mask);
        assert_eq!(s.charts, charts);
    }

    #[test]
    fn axis_bounds_survive_any_filter_change() {
        let mut s = state();
        let bounds: Vec<(f64, f64)> = s.charts.iter().map(|c| (c.x_max, c.y_max)).collect();
        s.set_height_range(2.9, 3.1);
        s.set_location("B".to_string());
        let after: Vec<(f64, f64)> = s.charts.iter().map(|c| (c.x_max, c.y_max)).collect();
        assert_eq!(bounds, after);
    }
}
