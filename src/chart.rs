use crate::data::model::{Measurement, WaveDataset};

// ---------------------------------------------------------------------------
// The four linked charts
// ---------------------------------------------------------------------------

/// The four fixed column-pairs of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Wind speed vs. wave height, coloured by point density.
    WindSpeed,
    /// Wind direction (angle) against wave height (radius).
    WindDirection,
    /// Mean wave period vs. wave height.
    WavePeriod,
    /// Wave direction (angle) against wave height (radius).
    WaveDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Cartesian,
    Polar,
}

impl ChartKind {
    /// Dashboard order: top row scatter/polar for wind, bottom row for waves.
    pub const ALL: [ChartKind; 4] = [
        ChartKind::WindSpeed,
        ChartKind::WindDirection,
        ChartKind::WavePeriod,
        ChartKind::WaveDirection,
    ];

    pub fn geometry(self) -> Geometry {
        match self {
            ChartKind::WindSpeed | ChartKind::WavePeriod => Geometry::Cartesian,
            ChartKind::WindDirection | ChartKind::WaveDirection => Geometry::Polar,
        }
    }

    /// Stable widget id for the plot area.
    pub fn id(self) -> &'static str {
        match self {
            ChartKind::WindSpeed => "wind_speed_scatter",
            ChartKind::WindDirection => "wind_direction_polar",
            ChartKind::WavePeriod => "wave_period_scatter",
            ChartKind::WaveDirection => "wave_direction_polar",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::WindSpeed => "Wave height vs. wind speed",
            ChartKind::WindDirection => "Wave height by wind direction",
            ChartKind::WavePeriod => "Wave height vs. wave period",
            ChartKind::WaveDirection => "Wave height by wave direction",
        }
    }

    pub fn x_label(self) -> &'static str {
        match self {
            ChartKind::WindSpeed => "Wind speed [m/s]",
            ChartKind::WindDirection => "Wind direction [°]",
            ChartKind::WavePeriod => "Mean wave period [s]",
            ChartKind::WaveDirection => "Wave direction [°]",
        }
    }

    pub fn y_label(self) -> &'static str {
        "Hm0 [m]"
    }

    fn x_value(self, m: &Measurement) -> f64 {
        match self {
            ChartKind::WindSpeed => m.wind_speed,
            ChartKind::WindDirection => m.wind_dir,
            ChartKind::WavePeriod => m.wave_period,
            ChartKind::WaveDirection => m.wave_dir,
        }
    }

    fn color_value(self, m: &Measurement) -> f64 {
        match self {
            ChartKind::WindSpeed => m.density_wind_speed,
            ChartKind::WindDirection => m.density_wind_dir,
            ChartKind::WavePeriod => m.density_wave_period,
            ChartKind::WaveDirection => m.density_wave_dir,
        }
    }

    /// Upper x-axis bound, from the full unfiltered table. Direction axes
    /// cover the full circle.
    fn x_axis_max(self, dataset: &WaveDataset) -> f64 {
        match self {
            ChartKind::WindSpeed => dataset.maxima.wind_speed.ceil(),
            ChartKind::WavePeriod => dataset.maxima.wave_period.ceil(),
            ChartKind::WindDirection | ChartKind::WaveDirection => 360.0,
        }
    }
}

// ---------------------------------------------------------------------------
// ChartSpec – render-agnostic chart description
// ---------------------------------------------------------------------------

/// One plotted point: x (or angle in degrees), y (or radius), and the value
/// feeding the colour ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub color_value: f64,
}

/// Everything the renderer needs for one chart.
///
/// Axis bounds come from the full table, so they are invariant under filter
/// changes; the colour domain spans the selected points only, matching how
/// the charts normalised their colour scale in the reference deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub geometry: Geometry,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Points passing the current mask, in table order.
    pub points: Vec<ChartPoint>,
    /// Upper x / angular bound; lower bound is always 0.
    pub x_max: f64,
    /// Upper y / radial bound; lower bound is always 0.
    pub y_max: f64,
    /// (min, max) of the colour values over `points`; `(0, 0)` when empty.
    pub color_domain: (f64, f64),
}

/// Build the spec for one chart from the shared mask. Pure; an all-false
/// mask yields a valid empty spec with the same axis bounds.
pub fn build_chart(dataset: &WaveDataset, mask: &[bool], kind: ChartKind) -> ChartSpec {
    debug_assert_eq!(mask.len(), dataset.len());

    let points: Vec<ChartPoint> = dataset
        .measurements
        .iter()
        .zip(mask)
        .filter(|(_, &selected)| selected)
        .map(|(m, _)| ChartPoint {
            x: kind.x_value(m),
            y: m.hm0,
            color_value: kind.color_value(m),
        })
        .collect();

    let color_domain = points
        .iter()
        .map(|p| p.color_value)
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 0.0));

    ChartSpec {
        kind,
        geometry: kind.geometry(),
        title: kind.title(),
        x_label: kind.x_label(),
        y_label: kind.y_label(),
        points,
        x_max: kind.x_axis_max(dataset),
        y_max: dataset.maxima.hm0.ceil(),
        color_domain,
    }
}

/// Rebuild all four charts from one shared mask, in dashboard order.
pub fn build_all(dataset: &WaveDataset, mask: &[bool]) -> Vec<ChartSpec> {
    ChartKind::ALL
        .iter()
        .map(|&kind| build_chart(dataset, mask, kind))
        .collect()
}
