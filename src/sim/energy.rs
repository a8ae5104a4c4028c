use crate::dynamics::state::OscillatorParams;
use super::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// Energy trace derived pointwise from a trajectory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct EnergyTrace {
    pub potential: Vec<f64>, // 0.5 k x²
    pub kinetic: Vec<f64>,   // 0.5 m v²
    pub total: Vec<f64>,
}

impl EnergyTrace {
    pub fn len(&self) -> usize {
        self.total.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }

    pub fn head(&self, rows: usize) -> usize {
        rows.min(self.len())
    }
}

#[inline]
pub fn potential_energy(params: &OscillatorParams, pos: f64) -> f64 {
    0.5 * params.stiffness * pos * pos
}

#[inline]
pub fn kinetic_energy(params: &OscillatorParams, vel: f64) -> f64 {
    0.5 * params.mass * vel * vel
}

/// Quadratic invariant of the semi-implicit Euler map on an undamped
/// oscillator: 0.5 m v² + 0.5 k x² - 0.5 k dt x v.
///
/// The physical total energy oscillates around this value with relative
/// amplitude up to ω dt / 2; this quantity itself stays constant to
/// round-off when c = 0.
#[inline]
pub fn modified_energy(params: &OscillatorParams, pos: f64, vel: f64, dt: f64) -> f64 {
    kinetic_energy(params, vel) + potential_energy(params, pos)
        - 0.5 * params.stiffness * dt * pos * vel
}

/// Potential, kinetic and total energy at every sample of `trajectory`.
///
/// Covers the samples where both position and velocity are present.
pub fn derive_energy(params: &OscillatorParams, trajectory: &Trajectory) -> EnergyTrace {
    let n = trajectory.position.len().min(trajectory.velocity.len());
    let mut trace = EnergyTrace {
        potential: vec![0.0; n],
        kinetic: vec![0.0; n],
        total: vec![0.0; n],
    };

    let samples = trajectory.position.iter().zip(&trajectory.velocity);
    for (i, (&pos, &vel)) in samples.enumerate() {
        let ep = potential_energy(params, pos);
        let ek = kinetic_energy(params, vel);
        trace.potential[i] = ep;
        trace.kinetic[i] = ek;
        trace.total[i] = ep + ek;
    }

    trace
}

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySummary {
    pub initial: f64,
    pub final_: f64,
    pub min: f64,
    pub max: f64,
    /// (final - initial) / initial; 0 when the system starts at rest.
    pub relative_drift: f64,
    /// max |total - initial| / initial; 0 when the system starts at rest.
    pub max_relative_deviation: f64,
}

impl EnergySummary {
    /// `None` for an empty trace.
    pub fn from_trace(trace: &EnergyTrace) -> Option<Self> {
        let initial = *trace.total.first()?;
        let final_ = *trace.total.last()?;

        let min = trace.total.iter().copied().fold(f64::INFINITY, f64::min);
        let max = trace.total.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let (relative_drift, max_relative_deviation) = if initial > 0.0 {
            let dev = trace
                .total
                .iter()
                .map(|e| (e - initial).abs())
                .fold(0.0_f64, f64::max);
            ((final_ - initial) / initial, dev / initial)
        } else {
            (0.0, 0.0)
        };

        Some(EnergySummary {
            initial,
            final_,
            min,
            max,
            relative_drift,
            max_relative_deviation,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
