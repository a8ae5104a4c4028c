pub mod state;

use nalgebra::{Matrix2, Vector2};

use self::state::{Deriv, OscillatorParams, State};

/// Tolerance used when classifying critical damping and step stability.
const REGIME_EPS: f64 = 1e-9;
const STABILITY_EPS: f64 = 1e-12;

// ---------------------------------------------------------------------------
// Equations of motion: m x'' + c x' + k x = 0
// ---------------------------------------------------------------------------

/// Instantaneous acceleration a = -(k/m) x - (c/m) v.
#[inline]
pub fn acceleration(params: &OscillatorParams, pos: f64, vel: f64) -> f64 {
    -(params.stiffness / params.mass) * pos - (params.damping / params.mass) * vel
}

/// State derivatives for a given sample.
pub fn derivatives(state: &State, params: &OscillatorParams) -> Deriv {
    Deriv {
        dpos: state.vel,
        dvel: acceleration(params, state.pos, state.vel),
    }
}

// ---------------------------------------------------------------------------
// Regime
// ---------------------------------------------------------------------------

/// Qualitative behaviour of the continuous system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// No restoring force (k = 0).
    Free,
    Undamped,
    Underdamped,
    CriticallyDamped,
    Overdamped,
}

impl Regime {
    pub fn label(&self) -> &'static str {
        match self {
            Regime::Free => "free particle",
            Regime::Undamped => "undamped",
            Regime::Underdamped => "underdamped",
            Regime::CriticallyDamped => "critically damped",
            Regime::Overdamped => "overdamped",
        }
    }
}

/// Natural angular frequency ω = sqrt(k/m), rad/s.
pub fn natural_frequency(params: &OscillatorParams) -> f64 {
    (params.stiffness / params.mass).sqrt()
}

/// Damping ratio ζ = c / (2 sqrt(k m)). Infinite when k = 0 and c > 0.
pub fn damping_ratio(params: &OscillatorParams) -> f64 {
    let critical = 2.0 * (params.stiffness * params.mass).sqrt();
    if critical == 0.0 {
        if params.damping == 0.0 { 0.0 } else { f64::INFINITY }
    } else {
        params.damping / critical
    }
}

/// Undamped period 2π/ω. `None` for a free particle.
pub fn period(params: &OscillatorParams) -> Option<f64> {
    let omega = natural_frequency(params);
    (omega > 0.0).then(|| 2.0 * std::f64::consts::PI / omega)
}

pub fn regime(params: &OscillatorParams) -> Regime {
    if params.stiffness == 0.0 {
        return Regime::Free;
    }
    if params.damping == 0.0 {
        return Regime::Undamped;
    }
    let zeta = damping_ratio(params);
    if (zeta - 1.0).abs() <= REGIME_EPS {
        Regime::CriticallyDamped
    } else if zeta < 1.0 {
        Regime::Underdamped
    } else {
        Regime::Overdamped
    }
}

// ---------------------------------------------------------------------------
// Closed-form solution (reference for accuracy checks)
// ---------------------------------------------------------------------------

/// Exact position x(t) of the continuous system.
pub fn exact_position(params: &OscillatorParams, t: f64) -> f64 {
    let (m, k, c) = (params.mass, params.stiffness, params.damping);
    let (x0, v0) = (params.x0, params.v0);

    match regime(params) {
        Regime::Free => {
            if c == 0.0 {
                x0 + v0 * t
            } else {
                // Velocity decays as v0 e^{-ct/m}
                x0 + (m * v0 / c) * (1.0 - (-c * t / m).exp())
            }
        }
        Regime::Undamped | Regime::Underdamped => {
            let omega = (k / m).sqrt();
            let zeta = damping_ratio(params);
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega * t).exp();
            decay
                * (x0 * (omega_d * t).cos()
                    + (v0 + zeta * omega * x0) / omega_d * (omega_d * t).sin())
        }
        Regime::CriticallyDamped => {
            let omega = (k / m).sqrt();
            (-omega * t).exp() * (x0 + (v0 + omega * x0) * t)
        }
        Regime::Overdamped => {
            let omega = (k / m).sqrt();
            let zeta = damping_ratio(params);
            let root = omega * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * omega + root;
            let r2 = -zeta * omega - root;
            let a = (v0 - r2 * x0) / (r1 - r2);
            let b = x0 - a;
            a * (r1 * t).exp() + b * (r2 * t).exp()
        }
    }
}

// ---------------------------------------------------------------------------
// Step stability of the semi-implicit Euler recurrence
// ---------------------------------------------------------------------------

/// One-step map [x, v]_{i+1} = A [x, v]_i of the semi-implicit Euler scheme.
///
/// v' = v + dt (-(k/m) x - (c/m) v)
/// x' = x + dt v'
pub fn amplification_matrix(params: &OscillatorParams, dt: f64) -> Matrix2<f64> {
    let kk = params.stiffness / params.mass * dt;
    let cc = 1.0 - params.damping / params.mass * dt;
    Matrix2::new(
        1.0 - kk * dt, dt * cc,
        -kk,           cc,
    )
}

/// Spectral radius of the amplification matrix.
///
/// Above 1 the discrete recurrence grows without bound even when the
/// continuous system decays.
pub fn spectral_radius(params: &OscillatorParams, dt: f64) -> f64 {
    let a = amplification_matrix(params, dt);
    let half_trace = 0.5 * a.trace();
    let det = a.determinant();
    let disc = half_trace * half_trace - det;
    if disc < 0.0 {
        // Complex pair, |λ|² = det
        det.sqrt()
    } else {
        let s = disc.sqrt();
        (half_trace + s).abs().max((half_trace - s).abs())
    }
}

pub fn is_step_stable(params: &OscillatorParams, dt: f64) -> bool {
    spectral_radius(params, dt) <= 1.0 + STABILITY_EPS
}

/// Apply the one-step map to a phase-space point.
pub fn advance_phase(params: &OscillatorParams, phase: Vector2<f64>, dt: f64) -> Vector2<f64> {
    amplification_matrix(params, dt) * phase
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
