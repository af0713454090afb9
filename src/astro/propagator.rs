use std::f64::consts::PI;

use tracing::debug;

use super::error::{check_finite, OrbitError, OrbitResult};
use super::{KeplerSolver, OrbitalElements, Position};
use crate::consts::DEFAULT_CURVE_STEPS;
use crate::math::anomaly::eccentric_to_true;

/// Turns orbital elements into positions.
///
/// Holds no state besides its settings; every call is a pure function of its
/// arguments, so calls for different bodies can run side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPropagator {
    solver: KeplerSolver,
    curve_steps: usize,
}

impl Default for OrbitPropagator {
    fn default() -> Self {
        OrbitPropagator {
            solver: KeplerSolver::default(),
            curve_steps: DEFAULT_CURVE_STEPS,
        }
    }
}

impl OrbitPropagator {
    pub fn new(solver: KeplerSolver, curve_steps: usize) -> OrbitResult<Self> {
        check_curve_steps(curve_steps)?;
        Ok(OrbitPropagator {
            solver,
            curve_steps,
        })
    }

    pub fn solver(&self) -> &KeplerSolver {
        &self.solver
    }

    pub fn curve_steps(&self) -> usize {
        self.curve_steps
    }

    /// True anomaly at `time` since periapsis passage. `time` is in whatever
    /// unit the mean motion uses.
    pub fn true_anomaly_at(&self, elements: &OrbitalElements, time: f64) -> OrbitResult<f64> {
        check_finite("time", time)?;

        let ecc = elements.eccentricity();
        let mean_anomaly = elements.mean_motion() * time;
        let eccentric_anomaly = self.solver.solve(mean_anomaly, ecc)?;
        Ok(eccentric_to_true(eccentric_anomaly, ecc))
    }

    /// Inertial-frame position at `time` since periapsis passage.
    pub fn position_at(&self, elements: &OrbitalElements, time: f64) -> OrbitResult<Position> {
        let theta = self.true_anomaly_at(elements, time)?;
        Ok(elements.position_at_true_anomaly(theta))
    }

    /// Positions for a whole set of bodies at the same instant. A failure for
    /// one body doesn't affect the others.
    pub fn positions_at(
        &self,
        bodies: &[OrbitalElements],
        time: f64,
    ) -> Vec<OrbitResult<Position>> {
        bodies
            .iter()
            .map(|elements| self.position_at(elements, time))
            .collect()
    }

    /// Samples the orbit's shape at `steps` evenly spaced true anomalies,
    /// starting at periapsis. Unlike [Self::position_at], this says nothing
    /// about where the body is at any particular time.
    pub fn orbit_curve(&self, elements: &OrbitalElements, steps: usize) -> OrbitResult<OrbitCurve> {
        check_curve_steps(steps)?;

        let step = 2.0 * PI / steps as f64;
        let points: Vec<Position> = (0..steps)
            .map(|k| elements.position_at_true_anomaly(k as f64 * step))
            .collect();

        debug!(steps, a = elements.semimajor_axis(), "sampled orbit curve");
        Ok(OrbitCurve { points })
    }

    pub fn default_orbit_curve(&self, elements: &OrbitalElements) -> OrbitResult<OrbitCurve> {
        self.orbit_curve(elements, self.curve_steps)
    }
}

fn check_curve_steps(steps: usize) -> OrbitResult<()> {
    if steps == 0 {
        Err(OrbitError::invalid("an orbit curve needs at least one point"))
    } else {
        Ok(())
    }
}

/// A closed loop of points around one full orbit. The last point connects
/// back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCurve {
    points: Vec<Position>,
}

impl OrbitCurve {
    pub fn points(&self) -> &[Position] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Position> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.points.iter()
    }

    /// Every edge of the loop, including the closing one from the last point
    /// back to the first.
    pub fn segments(&self) -> impl Iterator<Item = (&Position, &Position)> {
        self.points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
    }
}

impl<'a> IntoIterator for &'a OrbitCurve {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
