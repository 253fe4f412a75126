use std::f64::consts::PI;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

fn wrap_deg(d: f64) -> f64 {
    d.rem_euclid(360.0)
}

/// Per-row 2D Gaussian product-kernel density with Scott's-rule bandwidths.
/// These become the colour columns of the sample table.
fn kde_density(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let bandwidth = |v: &[f64]| -> f64 {
        let mean = v.iter().sum::<f64>() / n as f64;
        let var = v.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        var.sqrt().max(1e-6) * (n as f64).powf(-1.0 / 6.0)
    };
    let bx = bandwidth(xs);
    let by = bandwidth(ys);
    let norm = 1.0 / (2.0 * PI * bx * by * n as f64);

    (0..n)
        .map(|i| {
            let mut acc = 0.0;
            for j in 0..n {
                let dx = (xs[i] - xs[j]) / bx;
                let dy = (ys[i] - ys[j]) / by;
                acc += (-0.5 * (dx * dx + dy * dy)).exp();
            }
            acc * norm
        })
        .collect()
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // North Sea measurement sites: mean wind, wind spread, prevailing wind
    // direction. Sea state follows the local wind with some scatter.
    let sites: [(&str, f64, f64, f64); 4] = [
        ("Utsira", 12.0, 3.5, 250.0),
        ("Ekofisk", 10.5, 3.0, 225.0),
        ("Sleipner", 9.0, 2.8, 200.0),
        ("Heimdal", 11.0, 3.2, 270.0),
    ];
    let samples_per_site = 250;

    let mut wind_speed: Vec<f64> = Vec::new();
    let mut wind_dir: Vec<f64> = Vec::new();
    let mut hm0: Vec<f64> = Vec::new();
    let mut wave_period: Vec<f64> = Vec::new();
    let mut wave_dir: Vec<f64> = Vec::new();
    let mut location: Vec<&str> = Vec::new();

    for &(name, mean_wind, wind_spread, prevailing) in &sites {
        for _ in 0..samples_per_site {
            let u = rng.gauss(mean_wind, wind_spread).clamp(0.5, 26.0);
            let h = (0.016 * u.powi(2) * rng.gauss(1.0, 0.18)).clamp(0.05, 5.95);
            let t = (3.5 * h.sqrt() + rng.gauss(0.0, 0.4)).clamp(1.5, 14.0);
            let wd = wrap_deg(rng.gauss(prevailing, 35.0));

            wind_speed.push(u);
            wind_dir.push(wd);
            hm0.push(h);
            wave_period.push(t);
            wave_dir.push(wrap_deg(rng.gauss(wd, 18.0)));
            location.push(name);
        }
    }

    let density_wind_speed = kde_density(&wind_speed, &hm0);
    let density_wind_dir = kde_density(&wind_dir, &hm0);
    let density_wave_period = kde_density(&wave_period, &hm0);
    let density_wave_dir = kde_density(&wave_dir, &hm0);

    let output_path = "data_all_density.csv";
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(output_path)
        .expect("Failed to create output file");

    writer
        .write_record([
            "Wind speed SWAN",
            "Wind direction SWAN",
            "Hm0 SWAN",
            "Tm10 SWAN",
            "Wdir SWAN",
            "location_name",
            "density_Hm0_Uwind",
            "density_Hm0_WindDir",
            "density_Hm0_Tmm10",
            "density_Hm0_WaveDir",
        ])
        .expect("Failed to write header");

    for i in 0..wind_speed.len() {
        writer
            .write_record([
                format!("{:.2}", wind_speed[i]),
                format!("{:.1}", wind_dir[i]),
                format!("{:.2}", hm0[i]),
                format!("{:.2}", wave_period[i]),
                format!("{:.1}", wave_dir[i]),
                location[i].to_string(),
                format!("{:.6}", density_wind_speed[i]),
                format!("{:.6}", density_wind_dir[i]),
                format!("{:.6}", density_wave_period[i]),
                format!("{:.6}", density_wave_dir[i]),
            ])
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush output file");

    println!(
        "Wrote {} measurements across {} locations to {output_path}",
        wind_speed.len(),
        sites.len()
    );
}
