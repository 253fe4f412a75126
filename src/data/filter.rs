use super::model::{WaveDataset, ALL_LOCATIONS};

// ---------------------------------------------------------------------------
// Filter state: wave-height range + selected location
// ---------------------------------------------------------------------------

/// Bounds and step of the wave-height range control.
pub const HM0_MIN: f64 = 0.0;
pub const HM0_MAX: f64 = 6.0;
pub const HM0_STEP: f64 = 0.1;

/// The transient filter inputs, owned by the UI layer and re-supplied on
/// every interaction. The range is exclusive on both ends; the UI keeps
/// `low <= high`, the filter itself never enforces it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub low: f64,
    pub high: f64,
    pub location: String,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            low: HM0_MIN,
            high: HM0_MAX,
            location: ALL_LOCATIONS.to_string(),
        }
    }
}

/// Compute the row mask for the current filter.
///
/// A row is selected when `low < Hm0 < high` (both bounds strict, so values
/// exactly on a slider end are excluded) and, unless the sentinel location is
/// selected, its location equals the selected one. The mask always has one
/// entry per row; filtering only selects a subset for display.
pub fn row_mask(dataset: &WaveDataset, filter: &FilterState) -> Vec<bool> {
    let any_location = filter.location == ALL_LOCATIONS;
    dataset
        .measurements
        .iter()
        .map(|m| {
            m.hm0 > filter.low
                && m.hm0 < filter.high
                && (any_location || m.location == filter.location)
        })
        .collect()
}
