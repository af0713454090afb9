use std::f64::consts::PI;

/// G * M for the Sun, in AU^3 / yr^2. This is 4 pi^2 to four figures.
pub const SUN_MU: f64 = 39.478;

pub const DEFAULT_TOLERANCE: f64 = 1e-6;
pub const DEFAULT_MAX_ITERATIONS: usize = 50;
pub const DEFAULT_CURVE_STEPS: usize = 500;

pub fn get_mean_motion(a: f64, mu: f64) -> f64 {
    (mu / a.powi(3)).sqrt()
}

pub fn get_period(a: f64, mu: f64) -> f64 {
    2.0 * PI / get_mean_motion(a, mu)
}

/// Kepler's third law, solved for the semi-major axis
pub fn get_semimajor_axis(period: f64, mu: f64) -> f64 {
    let n = 2.0 * PI / period;
    (mu / (n * n)).cbrt()
}
