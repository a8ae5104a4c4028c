use crate::dynamics::state::{OscillatorParams, SimConfig, State, TimeGrid};
use crate::error::ParamError;
use super::energy::{derive_energy, EnergyTrace};
use super::integrator::semi_implicit_euler_step;
use super::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// Fixed-step integration over a time grid
// ---------------------------------------------------------------------------

/// Integrate the oscillator over `grid.steps` samples.
///
/// Callers guarantee `mass > 0` and `dt > 0`. All three sequences are
/// allocated at full length up front and filled index by index. A grid with
/// zero steps yields an empty trajectory.
pub fn integrate(params: &OscillatorParams, grid: &TimeGrid) -> Trajectory {
    let n = grid.steps;
    let mut traj = Trajectory::zeros(n);
    if n == 0 {
        return traj;
    }

    traj.time[0] = 0.0;
    traj.position[0] = params.x0;
    traj.velocity[0] = params.v0;

    for i in 0..n - 1 {
        let current = State {
            time: traj.time[i],
            pos: traj.position[i],
            vel: traj.velocity[i],
        };
        let next = semi_implicit_euler_step(&current, params, grid.dt);
        traj.time[i + 1] = next.time;
        traj.position[i + 1] = next.pos;
        traj.velocity[i + 1] = next.vel;
    }

    traj
}

// ---------------------------------------------------------------------------
// Front-end entry points
// ---------------------------------------------------------------------------

/// Run one simulation request: trajectory plus its energy trace.
pub fn simulate(params: &OscillatorParams, config: &SimConfig) -> (Trajectory, EnergyTrace) {
    let trajectory = integrate(params, &config.grid());
    let energy = derive_energy(params, &trajectory);
    (trajectory, energy)
}

/// Same as [`simulate`], after checking the preconditions.
pub fn simulate_checked(
    params: &OscillatorParams,
    config: &SimConfig,
) -> Result<(Trajectory, EnergyTrace), ParamError> {
    params.validate()?;
    config.validate()?;
    Ok(simulate(params, config))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
