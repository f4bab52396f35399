//! Persisting the timing measurement.

use std::path::Path;

use anyhow::{Context, Error};

/// Write the wall-clock time of the run to the timing file.
///
/// The file contains exactly one line: the time in seconds as a fixed-point
/// decimal with 10 fractional digits, e.g. `0.1234560000`. Any previous
/// content is overwritten; the file is created if absent.
pub fn write_wall_time(path: &Path, wall_time: f64) -> Result<(), Error> {
    let line = format!("{:.10}\n", wall_time);
    std::fs::write(path, &line)
        .with_context(|| format!("Failed to write the timing file {}", path.display()))?;
    debug!("Wall time {}s written to {}", wall_time, path.display());
    Ok(())
}
