use std::f64::consts::PI;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use neo_orbits::astro::{
    KeplerSolver, OrbitError, OrbitPropagator, OrbitalElements, PointMass, Position,
};
use neo_orbits::config::EngineConfig;

/// The comet used throughout: a = 4.09 AU, e = 0.848, with its angles given
/// in degrees the way the catalog lists them.
fn comet() -> OrbitalElements {
    OrbitalElements::from_degrees(
        PointMass::sun(),
        4.09,
        0.8482682514,
        11.77999525,
        334.5698056,
        186.5403463,
    )
    .unwrap()
}

#[test]
fn test_comet_scenario() {
    let orbit = comet();
    let propagator = OrbitPropagator::default();

    let start = propagator.position_at(&orbit, 0.0).unwrap();
    assert_relative_eq!(start.norm(), 4.09 * (1.0 - 0.8482682514), max_relative = 1e-12);
    assert_abs_diff_eq!(start.norm(), 0.621, epsilon = 1e-3);

    let solution = KeplerSolver::default()
        .solve_detailed(0.0, 0.8482682514)
        .unwrap();
    assert_eq!(solution.eccentric_anomaly, 0.0);
    assert_eq!(solution.iterations, 1);
}

#[test]
fn test_periapsis_distance_for_many_orbits() {
    let propagator = OrbitPropagator::default();
    for (a, ecc) in [(0.5, 0.0), (1.0, 0.0167), (4.09, 0.8482682514), (30.0, 0.99)] {
        for (incl, lan, argp) in [(0.0, 0.0, 0.0), (0.3, 2.0, 5.0), (3.0, -1.0, 0.5)] {
            let orbit = OrbitalElements::new(PointMass::sun(), a, ecc, incl, lan, argp).unwrap();
            let p = propagator.position_at(&orbit, 0.0).unwrap();
            assert_relative_eq!(p.norm(), a * (1.0 - ecc), max_relative = 1e-12);
        }
    }
}

#[test]
fn test_one_period_later_is_the_same_place() {
    let propagator = OrbitPropagator::default();
    for ecc in [0.0, 0.2, 0.6, 0.8482682514, 0.95] {
        let orbit = OrbitalElements::new(PointMass::sun(), 3.0, ecc, 0.4, 1.1, 2.7).unwrap();
        let period = 2.0 * PI / orbit.mean_motion();

        let start = propagator.position_at(&orbit, 0.0).unwrap();
        let later = propagator.position_at(&orbit, period).unwrap();
        assert_abs_diff_eq!(later, start, epsilon = 1e-8);
    }
}

#[test]
fn test_circular_orbit_radius_is_constant() {
    let propagator = OrbitPropagator::default();
    let orbit = OrbitalElements::new(PointMass::sun(), 1.7, 0.0, 0.9, 0.2, 4.4).unwrap();
    for i in -50..50 {
        let t = i as f64 * 0.0917;
        let p = propagator.position_at(&orbit, t).unwrap();
        assert_relative_eq!(p.norm(), 1.7, max_relative = 1e-12);
    }
}

#[test]
fn test_solver_residual_over_wide_range() {
    let solver = KeplerSolver::default();
    for i in 0..100 {
        let ecc = i as f64 / 100.0;
        for j in -100..=100 {
            let m = j as f64 + 0.123;
            let e_anom = solver.solve(m, ecc).unwrap();
            let residual = e_anom - ecc * e_anom.sin() - m;
            assert!(residual.abs() <= solver.tolerance(), "M = {}, e = {}", m, ecc);
        }
    }
}

#[test]
fn test_solver_near_parabolic() {
    let solver = KeplerSolver::default();
    for k in 3..=15 {
        let ecc = 1.0 - 10f64.powi(-k);
        let tiny = [1e-300, -1e-300, 1e-12];
        let grid = (-100..=100).map(|j| j as f64 * 0.5 + 0.123);
        for m in tiny.into_iter().chain(grid) {
            let e_anom = solver.solve(m, ecc).unwrap();
            let residual = e_anom - ecc * e_anom.sin() - m;
            assert!(residual.abs() <= solver.tolerance(), "M = {}, e = {}", m, ecc);
        }
    }
}

#[test]
fn test_orbit_curve() {
    let orbit = comet();
    let propagator = OrbitPropagator::default();

    for steps in [4, 100, 500] {
        let curve = propagator.orbit_curve(&orbit, steps).unwrap();
        assert_eq!(curve.len(), steps);
    }

    // Radii change smoothly all the way around, including across the seam
    let curve = propagator.default_orbit_curve(&orbit).unwrap();
    assert_eq!(curve.len(), 500);
    let largest_jump = curve
        .segments()
        .map(|(p, q)| (p.norm() - q.norm()).abs())
        .fold(0.0, f64::max);
    assert!(largest_jump < 0.1 * orbit.semimajor_axis(), "jump {}", largest_jump);
}

#[test]
fn test_curve_agrees_with_propagation() {
    // Every position over time lands on the static curve's ellipse
    let orbit = comet();
    let propagator = OrbitPropagator::default();

    for i in 0..20 {
        let t = i as f64 * orbit.period() / 20.0;
        let theta = propagator.true_anomaly_at(&orbit, t).unwrap();
        let p = propagator.position_at(&orbit, t).unwrap();
        assert_relative_eq!(p.norm(), orbit.radius_at_true_anomaly(theta), max_relative = 1e-12);

        let normal = orbit.rotation() * Position::z();
        assert_abs_diff_eq!(p.dot(&normal), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_invalid_elements_are_rejected_up_front() {
    let result = OrbitalElements::from_degrees(PointMass::sun(), 4.09, 1.0, 11.8, 334.6, 186.5);
    assert!(matches!(result, Err(OrbitError::InvalidInput { .. })));

    let result = OrbitalElements::from_degrees(PointMass::sun(), 0.0, 0.5, 11.8, 334.6, 186.5);
    assert!(matches!(result, Err(OrbitError::InvalidInput { .. })));
}

#[test]
fn test_configured_engine() {
    let config = EngineConfig::from_json(r#"{ "mu": 1.0, "tolerance": 1e-12, "curve_steps": 12 }"#)
        .unwrap();
    let propagator = config.propagator().unwrap();

    let orbit = OrbitalElements::new(config.primary(), 1.0, 0.5, 0.0, 0.0, 0.0).unwrap();
    assert_eq!(orbit.mean_motion(), 1.0);
    assert_relative_eq!(orbit.period(), 2.0 * PI);

    assert_eq!(propagator.default_orbit_curve(&orbit).unwrap().len(), 12);

    // Half a period puts us at apoapsis
    let p = propagator.position_at(&orbit, PI).unwrap();
    assert_relative_eq!(p.norm(), 1.5, max_relative = 1e-12);
}
