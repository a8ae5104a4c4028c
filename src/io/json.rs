use std::io::{self, Write};

use crate::dynamics::{self, state::{OscillatorParams, SimConfig}};
use crate::sim::{EnergySummary, EnergyTrace, Trajectory};

/// Summary of a single run, computed from its outputs.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub samples: usize,
    pub end_time: f64,
    pub final_position: f64,
    pub final_velocity: f64,
    pub max_abs_position: f64,
    pub max_speed: f64,
    pub energy: EnergySummary,
}

impl RunSummary {
    /// `None` for an empty run.
    pub fn from_run(trajectory: &Trajectory, energy: &EnergyTrace) -> Option<Self> {
        let last = trajectory.last()?;
        let energy = EnergySummary::from_trace(energy)?;

        let max_abs_position = trajectory
            .position
            .iter()
            .map(|x| x.abs())
            .fold(0.0_f64, f64::max);
        let max_speed = trajectory
            .velocity
            .iter()
            .map(|v| v.abs())
            .fold(0.0_f64, f64::max);

        Some(RunSummary {
            samples: trajectory.len(),
            end_time: last.time,
            final_position: last.pos,
            final_velocity: last.vel,
            max_abs_position,
            max_speed,
            energy,
        })
    }
}

/// JSON has no NaN or infinity; a diverged run reports those as null.
fn num(x: f64) -> String {
    if x.is_finite() { x.to_string() } else { "null".into() }
}

fn fixed(x: f64, decimals: usize) -> String {
    if x.is_finite() { format!("{:.*}", decimals, x) } else { "null".into() }
}

/// Write run summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    params: &OscillatorParams,
    config: &SimConfig,
    summary: &RunSummary,
) -> io::Result<()> {
    let regime = dynamics::regime(params);
    let stable = dynamics::is_step_stable(params, config.dt);

    writeln!(writer, "{{")?;
    writeln!(writer, "  \"params\": {{")?;
    writeln!(writer, "    \"mass\": {},", num(params.mass))?;
    writeln!(writer, "    \"stiffness\": {},", num(params.stiffness))?;
    writeln!(writer, "    \"damping\": {},", num(params.damping))?;
    writeln!(writer, "    \"x0\": {},", num(params.x0))?;
    writeln!(writer, "    \"v0\": {},", num(params.v0))?;
    writeln!(writer, "    \"duration_s\": {},", num(config.duration))?;
    writeln!(writer, "    \"dt_s\": {}", num(config.dt))?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"analysis\": {{")?;
    writeln!(writer, "    \"regime\": \"{}\",", regime.label())?;
    writeln!(writer, "    \"step_stable\": {},", stable)?;
    writeln!(
        writer,
        "    \"spectral_radius\": {}",
        fixed(dynamics::spectral_radius(params, config.dt), 9)
    )?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"results\": {{")?;
    writeln!(writer, "    \"samples\": {},", summary.samples)?;
    writeln!(writer, "    \"end_time_s\": {},", fixed(summary.end_time, 6))?;
    writeln!(writer, "    \"final_position\": {},", fixed(summary.final_position, 6))?;
    writeln!(writer, "    \"final_velocity\": {},", fixed(summary.final_velocity, 6))?;
    writeln!(writer, "    \"max_abs_position\": {},", fixed(summary.max_abs_position, 6))?;
    writeln!(writer, "    \"max_speed\": {},", fixed(summary.max_speed, 6))?;
    writeln!(writer, "    \"energy_initial\": {},", fixed(summary.energy.initial, 6))?;
    writeln!(writer, "    \"energy_final\": {},", fixed(summary.energy.final_, 6))?;
    writeln!(writer, "    \"energy_relative_drift\": {}", fixed(summary.energy.relative_drift, 6))?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}
