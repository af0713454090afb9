use std::f64::consts::PI;

use tracing::trace;

use super::error::{check_eccentricity, check_finite, OrbitError, OrbitResult};
use crate::consts::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use crate::math::anomaly::{eccentric_to_true, reduce_angle};
use crate::math::intervals::Interval;
use crate::math::root_finding::{newton_plus_bisection, RootFindingError};

/// Solves Kepler's equation, `E - e sin(E) = M`, for the eccentric anomaly E.
///
/// This is Newton's method starting from `E = M`, with two safety nets:
/// the root always lies within `[M - e, M + e]`, so any step that leaves that
/// bracket is replaced by bisection, and there's a hard cap on iterations.
/// Hitting the cap is an [OrbitError::Convergence].
///
/// The solver holds only its settings, so one instance can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolver {
    tolerance: f64,
    max_iterations: usize,
}

/// An eccentric anomaly, along with how many Newton iterations it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    pub eccentric_anomaly: f64,
    pub iterations: usize,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        KeplerSolver {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl KeplerSolver {
    pub fn new(tolerance: f64, max_iterations: usize) -> OrbitResult<Self> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(OrbitError::invalid(format!(
                "solver tolerance must be positive, got {}",
                tolerance
            )));
        }
        if max_iterations == 0 {
            return Err(OrbitError::invalid("solver needs at least one iteration"));
        }
        Ok(KeplerSolver {
            tolerance,
            max_iterations,
        })
    }

    pub fn with_tolerance(self, tolerance: f64) -> OrbitResult<Self> {
        Self::new(tolerance, self.max_iterations)
    }

    pub fn with_max_iterations(self, max_iterations: usize) -> OrbitResult<Self> {
        Self::new(self.tolerance, max_iterations)
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn solve(&self, mean_anomaly: f64, ecc: f64) -> OrbitResult<f64> {
        self.solve_detailed(mean_anomaly, ecc)
            .map(|solution| solution.eccentric_anomaly)
    }

    pub fn solve_detailed(&self, mean_anomaly: f64, ecc: f64) -> OrbitResult<KeplerSolution> {
        check_eccentricity(ecc)?;
        check_finite("mean anomaly", mean_anomaly)?;

        // Work near zero, and put the whole turns back at the end. The
        // iteration is happier this way when M is large.
        let (reduced, turns) = reduce_angle(mean_anomaly);

        let kepler = |x: f64| (x - ecc * x.sin() - reduced, 1.0 - ecc * x.cos());
        let bracket = Interval::point(reduced).widen(ecc);

        let root = newton_plus_bisection(
            kepler,
            bracket,
            reduced,
            self.tolerance,
            self.max_iterations,
        )
        .map_err(|err| match err {
            RootFindingError::MaxIterations {
                iterations,
                last_step,
                ..
            } => OrbitError::Convergence {
                mean_anomaly,
                eccentricity: ecc,
                iterations,
                last_step,
            },
        })?;

        trace!(
            mean_anomaly,
            ecc,
            iterations = root.iterations,
            "solved Kepler's equation"
        );

        Ok(KeplerSolution {
            eccentric_anomaly: root.value + 2.0 * PI * turns,
            iterations: root.iterations,
        })
    }

    pub fn mean_to_true(&self, mean_anomaly: f64, ecc: f64) -> OrbitResult<f64> {
        let eccentric_anomaly = self.solve(mean_anomaly, ecc)?;
        Ok(eccentric_to_true(eccentric_anomaly, ecc))
    }
}
