use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Warm continuous colour ramp (black → red → yellow → white)
// ---------------------------------------------------------------------------

/// Control stops of the fixed "hot" scale used by every chart.
const HEAT_STOPS: [(u8, u8, u8); 4] = [(0, 0, 0), (230, 0, 0), (255, 210, 0), (255, 255, 255)];

fn stop_to_linear((r, g, b): (u8, u8, u8)) -> LinSrgb {
    Srgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    )
    .into_linear()
}

/// Sample the ramp at `t` in [0, 1]; out-of-range values are clamped.
pub fn heat_color(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let segments = (HEAT_STOPS.len() - 1) as f32;
    let x = t * segments;
    let i = (x.floor() as usize).min(HEAT_STOPS.len() - 2);
    let frac = x - i as f32;

    let lo = stop_to_linear(HEAT_STOPS[i]);
    let hi = stop_to_linear(HEAT_STOPS[i + 1]);
    let mixed: Srgb<u8> = Srgb::from_linear(lo.mix(hi, frac));
    Color32::from_rgb(mixed.red, mixed.green, mixed.blue)
}

/// Map `value` onto the ramp over the domain `(min, max)`. A degenerate or
/// empty domain maps everything to the low end.
pub fn heat_for(value: f64, min: f64, max: f64) -> Color32 {
    let t = if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.0
    };
    heat_color(t as f32)
}

/// Evenly spaced ramp samples for the legend strip.
pub fn gradient(steps: usize) -> Vec<Color32> {
    let denom = steps.saturating_sub(1).max(1) as f32;
    (0..steps).map(|i| heat_color(i as f32 / denom)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_endpoints_are_black_and_white() {
        assert_eq!(heat_color(0.0), Color32::from_rgb(0, 0, 0));
        assert_eq!(heat_color(1.0), Color32::from_rgb(255, 255, 255));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(heat_color(-0.5), heat_color(0.0));
        assert_eq!(heat_color(7.0), heat_color(1.0));
    }

    #[test]
    fn midpoints_stay_warm() {
        // Between the red and yellow stops: strong red, no blue.
        let c = heat_color(0.5);
        assert!(c.r() > 200);
        assert!(c.b() < 30);
    }

    #[test]
    fn degenerate_domain_maps_to_the_low_end() {
        assert_eq!(heat_for(0.3, 0.0, 0.0), heat_color(0.0));
        assert_eq!(heat_for(0.3, 5.0, 1.0), heat_color(0.0));
    }

    #[test]
    fn domain_normalisation_hits_both_ends() {
        assert_eq!(heat_for(1.0, 1.0, 3.0), heat_color(0.0));
        assert_eq!(heat_for(3.0, 1.0, 3.0), heat_color(1.0));
    }

    #[test]
    fn gradient_spans_the_ramp() {
        let g = gradient(32);
        assert_eq!(g.len(), 32);
        assert_eq!(g[0], heat_color(0.0));
        assert_eq!(g[31], heat_color(1.0));
    }
}
