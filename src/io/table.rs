use std::io::{self, Write};

use crate::sim::{EnergyTrace, Trajectory};

/// Rows shown in the sample table.
pub const TABLE_ROWS: usize = 15;

const HEADERS: [&str; 6] = ["t (s)", "x(t)", "v(t)", "E_p", "E_k", "E_total"];

/// Write the first `min(rows, n)` samples as a fixed-width table, three
/// decimals per cell.
pub fn write_table<W: Write>(
    writer: &mut W,
    trajectory: &Trajectory,
    energy: &EnergyTrace,
    rows: usize,
) -> io::Result<()> {
    for h in HEADERS {
        write!(writer, "{:>10}", h)?;
    }
    writeln!(writer)?;
    writeln!(writer, "{}", "─".repeat(10 * HEADERS.len()))?;

    let rows = trajectory.head(rows).min(energy.head(rows));
    for i in 0..rows {
        writeln!(
            writer,
            "{:>10.3}{:>10.3}{:>10.3}{:>10.3}{:>10.3}{:>10.3}",
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
