use thiserror::Error;

/// Rejected simulation inputs.
///
/// The integrator itself never fails; these are only produced by the
/// checked entry points (`validate`, `sim::simulate_checked`).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f64),

    #[error("stiffness must be non-negative, got {0}")]
    NegativeStiffness(f64),

    #[error("damping must be non-negative, got {0}")]
    NegativeDamping(f64),

    #[error("time step must be positive, got {0}")]
    NonPositiveStep(f64),

    #[error("duration must be non-negative, got {0}")]
    NegativeDuration(f64),

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("grid of {requested} samples exceeds the limit of {limit}")]
    TooManySamples { requested: u64, limit: usize },
}
