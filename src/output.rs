//! Result export (CSV, JSON).
//!
//! Writers take any [`Write`] sink; opening files is left to the caller.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::solver::SimulationResult;

/// Write a simulation result as CSV, one row per sample.
///
/// Format (RC step sweep):
/// ```csv
/// time,V(R=1000),V(R=4700)
/// 0,0,0
/// 0.01180904522613065,0.5567,0.1233
/// ```
///
/// The astable edge list is written as `time,voltage` pairs in edge order.
pub fn write_result_csv<W: Write>(result: &SimulationResult, writer: &mut W) -> Result<()> {
    let columns = result.columns();

    let header: Vec<&str> = columns.iter().map(|(name, _)| name.as_str()).collect();
    writeln!(writer, "{}", header.join(","))?;

    let rows = columns.iter().map(|(_, values)| values.len()).min().unwrap_or(0);
    for i in 0..rows {
        for (c, (_, values)) in columns.iter().enumerate() {
            if c > 0 {
                write!(writer, ",")?;
            }
            write!(writer, "{}", values[i])?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write any serializable value (result, summary) as pretty JSON.
pub fn write_json<W: Write, T: Serialize + ?Sized>(value: &T, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}
