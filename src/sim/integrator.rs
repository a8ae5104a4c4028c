use crate::dynamics;
use crate::dynamics::state::{OscillatorParams, State};

// ---------------------------------------------------------------------------
// Semi-implicit (symplectic) Euler step
// ---------------------------------------------------------------------------

/// Single semi-implicit Euler step: advance state by dt.
///
/// Velocity is updated first from the current acceleration, then position is
/// updated with the new velocity. Swapping the two updates gives explicit
/// Euler, whose energy grows on an undamped oscillator.
#[inline]
pub fn semi_implicit_euler_step(state: &State, params: &OscillatorParams, dt: f64) -> State {
    let d = dynamics::derivatives(state, params);
    let vel = state.vel + d.dvel * dt;
    let pos = state.pos + vel * dt;

    State {
        time: state.time + dt,
        pos,
        vel,
    }
}
