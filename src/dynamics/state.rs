use crate::error::ParamError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Largest grid accepted by the checked entry points.
pub const MAX_SAMPLES: usize = 1_000_000;

// ---------------------------------------------------------------------------
// Oscillator parameters: m x'' + c x' + k x = 0
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorParams {
    pub mass: f64,      // m  (> 0)
    pub stiffness: f64, // k  (>= 0)
    pub damping: f64,   // c  (>= 0)
    pub x0: f64,        // initial position
    pub v0: f64,        // initial velocity
}

impl OscillatorParams {
    pub fn new(mass: f64, stiffness: f64, damping: f64, x0: f64, v0: f64) -> Self {
        Self { mass, stiffness, damping, x0, v0 }
    }

    /// Initial sample at t = 0.
    pub fn initial_state(&self) -> State {
        State { time: 0.0, pos: self.x0, vel: self.v0 }
    }

    /// Check the physical preconditions of the integrator.
    pub fn validate(&self) -> Result<(), ParamError> {
        for (name, value) in [
            ("mass", self.mass),
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("x0", self.x0),
            ("v0", self.v0),
        ] {
            if !value.is_finite() {
                return Err(ParamError::NonFinite { name, value });
            }
        }
        if self.mass <= 0.0 {
            return Err(ParamError::NonPositiveMass(self.mass));
        }
        if self.stiffness < 0.0 {
            return Err(ParamError::NegativeStiffness(self.stiffness));
        }
        if self.damping < 0.0 {
            return Err(ParamError::NegativeDamping(self.damping));
        }
        Ok(())
    }
}

impl Default for OscillatorParams {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 4.0,
            damping: 0.5,
            x0: 1.0,
            v0: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Time grid: n samples spaced dt apart, starting at t = 0
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    pub dt: f64,
    pub steps: usize, // sample count, including t = 0
}

impl TimeGrid {
    pub fn new(dt: f64, steps: usize) -> Self {
        Self { dt, steps }
    }

    /// n = floor(duration / dt) + 1
    pub fn from_duration(duration: f64, dt: f64) -> Self {
        let steps = ((duration / dt).floor() as usize).saturating_add(1);
        Self { dt, steps }
    }

    /// Time of the last sample.
    pub fn end_time(&self) -> f64 {
        self.steps.saturating_sub(1) as f64 * self.dt
    }
}

// ---------------------------------------------------------------------------
// Simulation config (what the front end hands over)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub duration: f64, // s
    pub dt: f64,       // s
}

impl SimConfig {
    pub fn grid(&self) -> TimeGrid {
        TimeGrid::from_duration(self.duration, self.dt)
    }

    pub fn validate(&self) -> Result<(), ParamError> {
        if !self.duration.is_finite() {
            return Err(ParamError::NonFinite { name: "duration", value: self.duration });
        }
        if !self.dt.is_finite() {
            return Err(ParamError::NonFinite { name: "dt", value: self.dt });
        }
        if self.dt <= 0.0 {
            return Err(ParamError::NonPositiveStep(self.dt));
        }
        if self.duration < 0.0 {
            return Err(ParamError::NegativeDuration(self.duration));
        }
        let requested = (self.duration / self.dt).floor() + 1.0;
        if requested > MAX_SAMPLES as f64 {
            return Err(ParamError::TooManySamples {
                requested: requested as u64,
                limit: MAX_SAMPLES,
            });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            duration: 10.0,
            dt: 0.02, // 501 samples
        }
    }
}

// ---------------------------------------------------------------------------
// Single sample and its derivative
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub time: f64,
    pub pos: f64,
    pub vel: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deriv {
    pub dpos: f64, // velocity
    pub dvel: f64, // acceleration
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_from_duration_counts_both_ends() {
        assert_eq!(TimeGrid::from_duration(2.0, 0.01).steps, 201);
        assert_eq!(TimeGrid::from_duration(10.0, 0.02).steps, 501);
        assert_eq!(TimeGrid::from_duration(0.0, 0.1).steps, 1);
    }

    #[test]
    fn zero_step_grid_saturates() {
        assert_eq!(TimeGrid::from_duration(10.0, 0.0).steps, usize::MAX);
    }

    #[test]
    fn default_config_matches_lab_defaults() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.grid().steps, 501);
        assert!((cfg.grid().end_time() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_bad_params() {
        let mut p = OscillatorParams::default();
        assert!(p.validate().is_ok());

        p.mass = 0.0;
        assert_eq!(p.validate(), Err(ParamError::NonPositiveMass(0.0)));

        p = OscillatorParams { damping: -0.1, ..OscillatorParams::default() };
        assert_eq!(p.validate(), Err(ParamError::NegativeDamping(-0.1)));

        p = OscillatorParams { x0: f64::NAN, ..OscillatorParams::default() };
        assert!(matches!(p.validate(), Err(ParamError::NonFinite { name: "x0", .. })));
    }

    #[test]
    fn validate_rejects_oversized_grid() {
        let cfg = SimConfig { duration: 1.0e4, dt: 1.0e-3 };
        assert!(matches!(
            cfg.validate(),
            Err(ParamError::TooManySamples { limit: MAX_SAMPLES, .. })
        ));
        let cfg = SimConfig { duration: 10.0, dt: 0.0 };
        assert_eq!(cfg.validate(), Err(ParamError::NonPositiveStep(0.0)));
    }
}
