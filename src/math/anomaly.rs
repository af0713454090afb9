//! Conversions between the anomalies of an elliptic orbit.
//!
//! Everything here is closed-form. Going from the mean anomaly to the
//! eccentric anomaly means solving Kepler's equation, which is the job of
//! [crate::astro::KeplerSolver].

use std::f64::consts::PI;

pub fn eccentric_to_mean(eccentric_anomaly: f64, e: f64) -> f64 {
    eccentric_anomaly - e * eccentric_anomaly.sin()
}

pub fn eccentric_to_true(eccentric_anomaly: f64, e: f64) -> f64 {
    // We have that tan(theta/2) = sqrt((1+e)/(1-e)) * tan(E/2). Using atan2
    // keeps the quadrant right when E/2 crosses pi/2.
    let half = eccentric_anomaly / 2.0;
    2.0 * ((1.0 + e).sqrt() * half.sin()).atan2((1.0 - e).sqrt() * half.cos())
}

pub fn true_to_eccentric(true_anomaly: f64, e: f64) -> f64 {
    let half = true_anomaly / 2.0;
    2.0 * ((1.0 - e).sqrt() * half.sin()).atan2((1.0 + e).sqrt() * half.cos())
}

pub fn true_to_mean(true_anomaly: f64, e: f64) -> f64 {
    eccentric_to_mean(true_to_eccentric(true_anomaly, e), e)
}

/// Splits an angle into a representative in (-pi, pi] and the number of whole
/// turns that were removed, so that `angle = reduced + 2 pi turns`.
pub fn reduce_angle(angle: f64) -> (f64, f64) {
    let turns = ((angle + PI) / (2.0 * PI)).ceil() - 1.0;
    let reduced = angle - 2.0 * PI * turns;
    (reduced, turns)
}
