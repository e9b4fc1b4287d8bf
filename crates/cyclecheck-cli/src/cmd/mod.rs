/// Command module for the `cyclecheck` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the parsed arguments and returns `Ok(())` on success or
/// a [`crate::error::CliError`] on failure.
pub mod check;
pub mod eval;
pub mod showcase;

use std::time::Instant;

use cyclecheck_core::EdgeList;

use crate::error::CliError;
use crate::format::{FormatterConfig, write_timing, write_verdict};

/// Validates `edges`, writes the verdict to stdout and timing to stderr.
///
/// Returns [`CliError::NotACycle`] when the verdict is `false` so the process
/// exits with status 1.
pub(crate) fn report_verdict(edges: &EdgeList, config: &FormatterConfig) -> Result<(), CliError> {
    let started = Instant::now();
    let is_cycle = edges.is_single_cycle();
    let elapsed = started.elapsed();

    tracing::debug!(edges = edges.len(), is_cycle, "validated edge list");

    let stdout = std::io::stdout();
    write_verdict(&mut stdout.lock(), is_cycle, edges.len(), config).map_err(|e| {
        CliError::IoError {
            source: "stdout".to_owned(),
            detail: e.to_string(),
        }
    })?;

    let stderr = std::io::stderr();
    write_timing(&mut stderr.lock(), edges.len(), elapsed, config).map_err(|e| {
        CliError::IoError {
            source: "stderr".to_owned(),
            detail: e.to_string(),
        }
    })?;

    if is_cycle {
        Ok(())
    } else {
        Err(CliError::NotACycle)
    }
}
