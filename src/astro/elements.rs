use nalgebra::Rotation3;

use super::error::{check_eccentricity, check_finite, OrbitError, OrbitResult};
use super::{HasMass, PointMass, Position};
use crate::consts::{get_mean_motion, get_period};
use crate::math::geometry::{orbit_rotation, plane_to_inertial};

/// The classical elements of a closed orbit around a primary.
///
/// Angles are stored in radians and only in radians; [Self::from_degrees] is
/// the one place degrees get converted. Once built, a set of elements never
/// changes. A different orbit means a different value, so the mean motion
/// always matches the semi-major axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    primary: PointMass,
    semimajor_axis: f64,
    eccentricity: f64,
    inclination: f64,
    long_asc_node: f64,
    arg_periapse: f64,
    /// Radians per unit time, derived from `semimajor_axis` and the primary
    mean_motion: f64,
    /// Moves the xy plane to the orbital plane, and x to point towards
    /// periapsis. Derived from the three angles.
    rotation: Rotation3<f64>,
}

impl OrbitalElements {
    /// Builds elements from angles in radians.
    pub fn new(
        primary: impl HasMass,
        a: f64,
        ecc: f64,
        incl: f64,
        lan: f64,
        argp: f64,
    ) -> OrbitResult<Self> {
        let mu = primary.mu();
        if !(mu.is_finite() && mu > 0.0) {
            return Err(OrbitError::invalid(format!(
                "gravitational parameter must be positive, got {}",
                mu
            )));
        }
        if !(a.is_finite() && a > 0.0) {
            return Err(OrbitError::invalid(format!(
                "semi-major axis must be positive, got {}",
                a
            )));
        }
        check_eccentricity(ecc)?;
        check_finite("inclination", incl)?;
        check_finite("longitude of ascending node", lan)?;
        check_finite("argument of periapsis", argp)?;

        Ok(OrbitalElements {
            primary: primary.to_point_mass(),
            semimajor_axis: a,
            eccentricity: ecc,
            inclination: incl,
            long_asc_node: lan,
            arg_periapse: argp,
            mean_motion: get_mean_motion(a, mu),
            rotation: orbit_rotation(incl, lan, argp),
        })
    }

    /// Builds elements from angles in degrees, the way catalogs list them.
    pub fn from_degrees(
        primary: impl HasMass,
        a: f64,
        ecc: f64,
        incl_deg: f64,
        lan_deg: f64,
        argp_deg: f64,
    ) -> OrbitResult<Self> {
        Self::new(
            primary,
            a,
            ecc,
            incl_deg.to_radians(),
            lan_deg.to_radians(),
            argp_deg.to_radians(),
        )
    }

    /// The same orbit with a different size. Mean motion is recomputed.
    pub fn with_semimajor_axis(&self, a: f64) -> OrbitResult<Self> {
        Self::new(
            self.primary,
            a,
            self.eccentricity,
            self.inclination,
            self.long_asc_node,
            self.arg_periapse,
        )
    }

    /// The same orbit around a different primary. Mean motion is recomputed.
    pub fn with_primary(&self, primary: impl HasMass) -> OrbitResult<Self> {
        Self::new(
            primary,
            self.semimajor_axis,
            self.eccentricity,
            self.inclination,
            self.long_asc_node,
            self.arg_periapse,
        )
    }

    // -- Orbital elements --

    pub fn primary(&self) -> &PointMass {
        &self.primary
    }

    pub fn semimajor_axis(&self) -> f64 {
        self.semimajor_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    pub fn long_asc_node(&self) -> f64 {
        self.long_asc_node
    }

    pub fn arg_periapse(&self) -> f64 {
        self.arg_periapse
    }

    pub fn mean_motion(&self) -> f64 {
        self.mean_motion
    }

    pub fn rotation(&self) -> Rotation3<f64> {
        self.rotation
    }

    // -- Other geometric characteristics --

    pub fn period(&self) -> f64 {
        get_period(self.semimajor_axis, self.primary.mu())
    }

    pub fn semilatus_rectum(&self) -> f64 {
        self.semimajor_axis * (1.0 - self.eccentricity * self.eccentricity)
    }

    pub fn periapsis(&self) -> f64 {
        self.semimajor_axis * (1.0 - self.eccentricity)
    }

    pub fn apoapsis(&self) -> f64 {
        self.semimajor_axis * (1.0 + self.eccentricity)
    }

    /// Distance from the primary at the given true anomaly. Since e < 1, the
    /// denominator stays positive.
    pub fn radius_at_true_anomaly(&self, theta: f64) -> f64 {
        self.semilatus_rectum() / (1.0 + self.eccentricity * theta.cos())
    }

    /// Inertial-frame position at the given true anomaly.
    pub fn position_at_true_anomaly(&self, theta: f64) -> Position {
        plane_to_inertial(&self.rotation, self.radius_at_true_anomaly(theta), theta)
    }
}
