//! Engine settings: the primary's gravitational parameter, solver tolerance
//! and iteration cap, and how finely to sample orbit curves.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::astro::{KeplerSolver, OrbitError, OrbitPropagator, OrbitResult, PointMass};
use crate::consts::{DEFAULT_CURVE_STEPS, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, SUN_MU};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(#[from] OrbitError),
}

/// Any field left out of a config file takes its default value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// G * M of the primary
    pub mu: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
    pub curve_steps: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            mu: SUN_MU,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            curve_steps: DEFAULT_CURVE_STEPS,
        }
    }
}

impl EngineConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> OrbitResult<()> {
        if !(self.mu.is_finite() && self.mu > 0.0) {
            return Err(OrbitError::invalid(format!(
                "gravitational parameter must be positive, got {}",
                self.mu
            )));
        }
        self.propagator().map(|_| ())
    }

    pub fn primary(&self) -> PointMass {
        PointMass::with_mu(self.mu)
    }

    pub fn solver(&self) -> OrbitResult<KeplerSolver> {
        KeplerSolver::new(self.tolerance, self.max_iterations)
    }

    pub fn propagator(&self) -> OrbitResult<OrbitPropagator> {
        OrbitPropagator::new(self.solver()?, self.curve_steps)
    }
}
