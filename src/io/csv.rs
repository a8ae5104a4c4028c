use std::io::{self, Write};

use crate::sim::{EnergyTrace, Trajectory};

/// Write trajectory and energy data to CSV format.
///
/// Columns: time, position, velocity, potential, kinetic, total
pub fn write_trajectory<W: Write>(
    writer: &mut W,
    trajectory: &Trajectory,
    energy: &EnergyTrace,
) -> io::Result<()> {
    writeln!(writer, "time,position,velocity,potential,kinetic,total")?;

    let rows = trajectory.len().min(energy.len());
    for i in 0..rows {
        writeln!(
            writer,
            "{:.6},{:.9},{:.9},{:.9},{:.9},{:.9}",
            trajectory.time[i],
            trajectory.position[i],
            trajectory.velocity[i],
            energy.potential[i],
            energy.kinetic[i],
            energy.total[i],
        )?;
    }

    Ok(())
}
