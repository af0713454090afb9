//! A module for computing where bodies on Keplerian orbits are.
//!
//! The important pieces in this module are:
//! - [OrbitalElements], an immutable, validated set of elements for one body
//!   around a primary, along with its mean motion
//! - [KeplerSolver], which turns a mean anomaly into an eccentric anomaly
//! - [OrbitPropagator], which turns (elements, time) into a [Position], and
//!   samples the whole orbit as an [OrbitCurve] for display
//!
//! Units are whatever the primary's `mu` is expressed in. The defaults use
//! AU for distance and years for time, so the Sun has `mu` close to 4 pi^2.
//! All angles are radians.

mod elements;
mod error;
mod kepler;
mod propagator;

use nalgebra::Vector3;

pub use elements::OrbitalElements;
pub(crate) use error::check_eccentricity;
pub use error::{OrbitError, OrbitResult};
pub use kepler::{KeplerSolution, KeplerSolver};
pub use propagator::{OrbitCurve, OrbitPropagator};

use crate::consts::SUN_MU;

/// A position relative to the primary, in the primary-centered inertial frame.
pub type Position = Vector3<f64>;

/// A point mass with no other physical properties.
///
/// Useful for satisfying a [HasMass] trait bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass(f64);

/// A trait indicating this object can be used in physical computations that
/// require a massive body.
pub trait HasMass {
    /// The standard gravitational parameter of this object
    fn mu(&self) -> f64;

    fn to_point_mass(&self) -> PointMass {
        PointMass::with_mu(self.mu())
    }
}

impl PointMass {
    /// Constructs a new mass
    pub fn with_mu(mu: f64) -> Self {
        Self(mu)
    }

    /// The Sun, in AU^3 / yr^2
    pub fn sun() -> Self {
        Self(SUN_MU)
    }
}

impl Default for PointMass {
    fn default() -> Self {
        Self::sun()
    }
}

impl HasMass for PointMass {
    fn mu(&self) -> f64 {
        self.0
    }
}

impl<T> HasMass for &T
where
    T: HasMass,
{
    fn mu(&self) -> f64 {
        (*self).mu()
    }
}
