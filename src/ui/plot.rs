use eframe::egui::{self, Color32, Ui};
use egui_plot::{Line, Plot, PlotBounds, PlotPoint, PlotPoints, Points, Text};

use crate::chart::{ChartPoint, ChartSpec, Geometry};
use crate::color;

// ---------------------------------------------------------------------------
// Chart rendering (one cell of the dashboard grid)
// ---------------------------------------------------------------------------

/// How many ramp buckets the points are grouped into; each bucket renders as
/// one `Points` item instead of one item per point.
const RAMP_BINS: usize = 48;
const RING_SEGMENTS: usize = 128;
const LEGEND_HEIGHT: f32 = 10.0;

/// Render one chart spec plus its colour legend.
pub fn chart(ui: &mut Ui, spec: &ChartSpec) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(egui::RichText::new(spec.title).strong());
        let plot_height = (ui.available_height() - LEGEND_HEIGHT - 24.0).max(60.0);
        match spec.geometry {
            Geometry::Cartesian => cartesian_chart(ui, spec, plot_height),
            Geometry::Polar => polar_chart(ui, spec, plot_height),
        }
        color_legend(ui, spec);
    });
}

// ---------------------------------------------------------------------------
// Cartesian scatter
// ---------------------------------------------------------------------------

fn cartesian_chart(ui: &mut Ui, spec: &ChartSpec, height: f32) {
    let x_max = spec.x_max.max(1.0);
    let y_max = spec.y_max.max(1.0);

    Plot::new(spec.kind.id())
        .height(height)
        .x_axis_label(spec.x_label)
        .y_axis_label(spec.y_label)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            // Bounds pinned every frame so the scale never follows the filter.
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([0.0, 0.0], [x_max, y_max]));
            for (color, pts) in binned_by_color(spec, |p| [p.x, p.y]) {
                plot_ui.points(Points::new(PlotPoints::from(pts)).color(color).radius(2.0));
            }
        });
}

// ---------------------------------------------------------------------------
// Polar scatter
// ---------------------------------------------------------------------------

/// Angle in degrees, measured counterclockwise from the 0° spoke (pointing
/// right); radius is the wave height.
fn polar_to_xy(p: &ChartPoint) -> [f64; 2] {
    let rad = p.x.to_radians();
    [p.y * rad.cos(), p.y * rad.sin()]
}

fn ring(r: f64) -> PlotPoints<'static> {
    let pts: Vec<[f64; 2]> = (0..=RING_SEGMENTS)
        .map(|i| {
            let a = i as f64 / RING_SEGMENTS as f64 * std::f64::consts::TAU;
            [r * a.cos(), r * a.sin()]
        })
        .collect();
    PlotPoints::from(pts)
}

fn polar_chart(ui: &mut Ui, spec: &ChartSpec, height: f32) {
    let r_max = spec.y_max.max(1.0);
    let pad = r_max * 0.15;
    let grid = Color32::from_gray(80);

    Plot::new(spec.kind.id())
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [-(r_max + pad), -(r_max + pad)],
                [r_max + pad, r_max + pad],
            ));

            // Concentric grid rings at quarter fractions of the radius bound.
            for step in 1..=4 {
                let r = r_max * step as f64 / 4.0;
                plot_ui.line(Line::new(ring(r)).color(grid).width(0.5));
            }

            // Spokes every 45°, degree labels on the cardinals.
            for spoke in (0..360).step_by(45) {
                let rad = f64::from(spoke).to_radians();
                let tip = [r_max * rad.cos(), r_max * rad.sin()];
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![[0.0, 0.0], tip]))
                        .color(grid)
                        .width(0.5),
                );
            }
            for deg in [0.0_f64, 90.0, 180.0, 270.0] {
                let rad = deg.to_radians();
                let pos = PlotPoint::new(
                    (r_max + pad * 0.6) * rad.cos(),
                    (r_max + pad * 0.6) * rad.sin(),
                );
                plot_ui.text(Text::new(pos, format!("{deg:.0}°")));
            }

            // Radius tick labels along the 0° spoke.
            for step in 1..=4 {
                let r = r_max * step as f64 / 4.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(r, -r_max * 0.06),
                    format!("{r:.1}"),
                ));
            }

            for (color, pts) in binned_by_color(spec, polar_to_xy) {
                plot_ui.points(Points::new(PlotPoints::from(pts)).color(color).radius(2.0));
            }
        });
}

// ---------------------------------------------------------------------------
// Colour binning and legend
// ---------------------------------------------------------------------------

/// Group the spec's points into ramp buckets, so each bucket becomes a single
/// uniformly coloured `Points` item.
fn binned_by_color(
    spec: &ChartSpec,
    to_xy: impl Fn(&ChartPoint) -> [f64; 2],
) -> Vec<(Color32, Vec<[f64; 2]>)> {
    let (cmin, cmax) = spec.color_domain;
    let mut bins: Vec<Vec<[f64; 2]>> = vec![Vec::new(); RAMP_BINS];

    for p in &spec.points {
        let t = if cmax > cmin {
            (p.color_value - cmin) / (cmax - cmin)
        } else {
            0.0
        };
        let idx = ((t * (RAMP_BINS - 1) as f64).round() as usize).min(RAMP_BINS - 1);
        bins[idx].push(to_xy(p));
    }

    bins.into_iter()
        .enumerate()
        .filter(|(_, pts)| !pts.is_empty())
        .map(|(idx, pts)| {
            let t = idx as f32 / (RAMP_BINS - 1) as f32;
            (color::heat_color(t), pts)
        })
        .collect()
}

/// Gradient strip with the colour-domain endpoints.
fn color_legend(ui: &mut Ui, spec: &ChartSpec) {
    let (cmin, cmax) = spec.color_domain;
    ui.horizontal(|ui: &mut Ui| {
        ui.small(format!("{cmin:.3}"));
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(120.0, LEGEND_HEIGHT), egui::Sense::hover());
        let steps = color::gradient(32);
        let seg_width = rect.width() / steps.len() as f32;
        let painter = ui.painter();
        for (i, c) in steps.iter().enumerate() {
            let left = rect.left() + i as f32 * seg_width;
            let seg = egui::Rect::from_min_max(
                egui::pos2(left, rect.top()),
                egui::pos2(left + seg_width, rect.bottom()),
            );
            painter.rect_filled(seg, egui::CornerRadius::ZERO, *c);
        }
        ui.small(format!("{cmax:.3}"));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{build_chart, ChartKind};
    use crate::data::model::{test_measurement, WaveDataset};

    fn spec() -> ChartSpec {
        let mut rows = vec![
            test_measurement(1.0, "A"),
            test_measurement(2.0, "A"),
            test_measurement(3.0, "A"),
        ];
        rows[0].density_wind_speed = 0.0;
        rows[1].density_wind_speed = 0.5;
        rows[2].density_wind_speed = 1.0;
        let ds = WaveDataset::from_measurements(rows);
        build_chart(&ds, &[true, true, true], ChartKind::WindSpeed)
    }

    #[test]
    fn binning_keeps_every_point() {
        let spec = spec();
        let total: usize = binned_by_color(&spec, |p| [p.x, p.y])
            .iter()
            .map(|(_, pts)| pts.len())
            .sum();
        assert_eq!(total, spec.points.len());
    }

    #[test]
    fn domain_endpoints_land_in_the_outer_bins() {
        let spec = spec();
        let bins = binned_by_color(&spec, |p| [p.x, p.y]);
        assert_eq!(bins.first().unwrap().0, color::heat_color(0.0));
        assert_eq!(bins.last().unwrap().0, color::heat_color(1.0));
    }

    #[test]
    fn degenerate_domain_collapses_into_one_bin() {
        let mut spec = spec();
        spec.color_domain = (0.4, 0.4);
        let bins = binned_by_color(&spec, |p| [p.x, p.y]);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].0, color::heat_color(0.0));
    }

    #[test]
    fn polar_transform_maps_angles_onto_the_circle() {
        let east = ChartPoint {
            x: 0.0,
            y: 2.0,
            color_value: 0.0,
        };
        let north = ChartPoint {
            x: 90.0,
            y: 2.0,
            color_value: 0.0,
        };
        let [x, y] = polar_to_xy(&east);
        assert!((x - 2.0).abs() < 1e-12 && y.abs() < 1e-12);
        let [x, y] = polar_to_xy(&north);
        assert!(x.abs() < 1e-12 && (y - 2.0).abs() < 1e-12);
    }
}
