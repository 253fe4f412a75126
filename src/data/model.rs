use serde::Deserialize;

/// Synthetic location meaning "no location constraint".
pub const ALL_LOCATIONS: &str = "All locations";

/// Wire column names shared by the CSV, JSON and Parquet encodings.
pub mod columns {
    pub const WIND_SPEED: &str = "Wind speed SWAN";
    pub const WIND_DIR: &str = "Wind direction SWAN";
    pub const HM0: &str = "Hm0 SWAN";
    pub const WAVE_PERIOD: &str = "Tm10 SWAN";
    pub const WAVE_DIR: &str = "Wdir SWAN";
    pub const LOCATION: &str = "location_name";
    pub const DENSITY_WIND_SPEED: &str = "density_Hm0_Uwind";
    pub const DENSITY_WIND_DIR: &str = "density_Hm0_WindDir";
    pub const DENSITY_WAVE_PERIOD: &str = "density_Hm0_Tmm10";
    pub const DENSITY_WAVE_DIR: &str = "density_Hm0_WaveDir";

    /// Every column a loadable table must carry.
    pub const REQUIRED: [&str; 10] = [
        WIND_SPEED,
        WIND_DIR,
        HM0,
        WAVE_PERIOD,
        WAVE_DIR,
        LOCATION,
        DENSITY_WIND_SPEED,
        DENSITY_WIND_DIR,
        DENSITY_WAVE_PERIOD,
        DENSITY_WAVE_DIR,
    ];
}

// ---------------------------------------------------------------------------
// Measurement – one row of the table
// ---------------------------------------------------------------------------

/// A single wave measurement (one row of the source table).
///
/// The serde renames match the wire headers, so the same struct deserializes
/// from both the semicolon-delimited CSV and the JSON records encoding.
/// The four density columns are precomputed point densities used only for
/// colour encoding, never for filtering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Measurement {
    #[serde(rename = "Wind speed SWAN")]
    pub wind_speed: f64,
    #[serde(rename = "Wind direction SWAN")]
    pub wind_dir: f64,
    #[serde(rename = "Hm0 SWAN")]
    pub hm0: f64,
    #[serde(rename = "Tm10 SWAN")]
    pub wave_period: f64,
    #[serde(rename = "Wdir SWAN")]
    pub wave_dir: f64,
    #[serde(rename = "location_name")]
    pub location: String,
    #[serde(rename = "density_Hm0_Uwind")]
    pub density_wind_speed: f64,
    #[serde(rename = "density_Hm0_WindDir")]
    pub density_wind_dir: f64,
    #[serde(rename = "density_Hm0_Tmm10")]
    pub density_wave_period: f64,
    #[serde(rename = "density_Hm0_WaveDir")]
    pub density_wave_dir: f64,
}

// ---------------------------------------------------------------------------
// ColumnMaxima – full-table maxima for the axis-bound columns
// ---------------------------------------------------------------------------

/// Maxima over the whole, unfiltered table. Chart axis bounds derive from
/// these, never from the filtered subset, so the visual scale stays constant
/// while the user filters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnMaxima {
    pub wind_speed: f64,
    pub hm0: f64,
    pub wave_period: f64,
}

impl ColumnMaxima {
    fn of(measurements: &[Measurement]) -> Self {
        let max_by =
            |f: fn(&Measurement) -> f64| measurements.iter().map(f).fold(0.0_f64, f64::max);
        ColumnMaxima {
            wind_speed: max_by(|m| m.wind_speed),
            hm0: max_by(|m| m.hm0),
            wave_period: max_by(|m| m.wave_period),
        }
    }
}

// ---------------------------------------------------------------------------
// WaveDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with indices computed once at construction.
/// Immutable for the life of the process.
#[derive(Debug, Clone)]
pub struct WaveDataset {
    /// All measurements (rows).
    pub measurements: Vec<Measurement>,
    /// Distinct location names in first-encountered order (no sentinel).
    pub locations: Vec<String>,
    /// Per-column maxima over the whole table.
    pub maxima: ColumnMaxima,
}

impl WaveDataset {
    /// Build the derived indices from the loaded rows.
    pub fn from_measurements(measurements: Vec<Measurement>) -> Self {
        let mut locations: Vec<String> = Vec::new();
        for m in &measurements {
            if !locations.iter().any(|l| l == &m.location) {
                locations.push(m.location.clone());
            }
        }
        let maxima = ColumnMaxima::of(&measurements);
        WaveDataset {
            measurements,
            locations,
            maxima,
        }
    }

    /// The selector entries: [`ALL_LOCATIONS`] first, then the distinct
    /// location names in first-encountered order.
    pub fn location_catalog(&self) -> Vec<String> {
        std::iter::once(ALL_LOCATIONS.to_string())
            .chain(self.locations.iter().cloned())
            .collect()
    }

    /// Number of measurements.
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Test fixtures
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) fn test_measurement(hm0: f64, location: &str) -> Measurement {
    Measurement {
        wind_speed: hm0 * 4.0,
        wind_dir: 210.0,
        hm0,
        wave_period: 3.0 + hm0,
        wave_dir: 195.0,
        location: location.to_string(),
        density_wind_speed: 0.1,
        density_wind_dir: 0.2,
        density_wave_period: 0.3,
        density_wave_dir: 0.4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_sentinel_first_and_preserves_first_seen_order() {
        let ds = WaveDataset::from_measurements(vec![
            test_measurement(1.0, "Utsira"),
            test_measurement(2.0, "Ekofisk"),
            test_measurement(3.0, "Utsira"),
            test_measurement(4.0, "Sleipner"),
        ]);
        assert_eq!(
            ds.location_catalog(),
            vec![ALL_LOCATIONS, "Utsira", "Ekofisk", "Sleipner"]
        );
    }

    #[test]
    fn catalog_contains_no_duplicates() {
        let ds = WaveDataset::from_measurements(vec![
            test_measurement(1.0, "A"),
            test_measurement(2.0, "A"),
            test_measurement(3.0, "A"),
        ]);
        assert_eq!(ds.locations, vec!["A"]);
        assert_eq!(ds.location_catalog().len(), 2);
    }

    #[test]
    fn maxima_cover_the_whole_table() {
        let mut rows = vec![
            test_measurement(1.5, "A"),
            test_measurement(4.2, "B"),
            test_measurement(0.8, "A"),
        ];
        rows[1].wind_speed = 18.3;
        rows[2].wave_period = 11.0;
        let ds = WaveDataset::from_measurements(rows);
        assert_eq!(ds.maxima.hm0, 4.2);
        assert_eq!(ds.maxima.wind_speed, 18.3);
        assert_eq!(ds.maxima.wave_period, 11.0);
    }

    #[test]
    fn empty_table_has_zero_maxima_and_bare_catalog() {
        let ds = WaveDataset::from_measurements(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.maxima.hm0, 0.0);
        assert_eq!(ds.location_catalog(), vec![ALL_LOCATIONS]);
    }
}
