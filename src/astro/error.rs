use thiserror::Error;

pub type OrbitResult<T> = Result<T, OrbitError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrbitError {
    /// The inputs describe something other than a closed elliptic orbit, or
    /// aren't finite numbers.
    #[error("invalid orbital input: {reason}")]
    InvalidInput { reason: String },

    /// Newton's method didn't settle within the iteration cap. We never hand
    /// back an under-converged anomaly.
    #[error(
        "Kepler's equation did not converge for M = {mean_anomaly}, e = {eccentricity} \
         after {iterations} iterations (last step {last_step:e})"
    )]
    Convergence {
        mean_anomaly: f64,
        eccentricity: f64,
        iterations: usize,
        last_step: f64,
    },
}

impl OrbitError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        OrbitError::InvalidInput {
            reason: reason.into(),
        }
    }
}

pub(crate) fn check_eccentricity(ecc: f64) -> OrbitResult<()> {
    if (0.0..1.0).contains(&ecc) {
        Ok(())
    } else {
        Err(OrbitError::invalid(format!(
            "eccentricity must be in [0, 1) for a closed orbit, got {}",
            ecc
        )))
    }
}

pub(crate) fn check_finite(name: &str, value: f64) -> OrbitResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(OrbitError::invalid(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}
