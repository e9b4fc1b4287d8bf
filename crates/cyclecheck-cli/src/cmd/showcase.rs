//! Implementation of `cyclecheck showcase`.
//!
//! Evaluates every built-in worked example and prints one row per case with
//! the expected and actual answers. Exits 1 if any case disagrees.
use cyclecheck_core::showcase;

use crate::error::CliError;
use crate::format::{FormatterConfig, write_showcase_row};

/// Runs the `showcase` command.
///
/// # Errors
///
/// - [`CliError::ShowcaseMismatch`] — at least one case disagreed.
/// - [`CliError::IoError`] — stdout could not be written.
pub fn run(config: &FormatterConfig) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut failed = 0usize;
    for case in showcase() {
        let actual = case.evaluate();
        if actual != case.expected {
            failed += 1;
            tracing::warn!(
                case = case.description,
                expected = case.expected,
                actual,
                "showcase mismatch"
            );
        }
        write_showcase_row(&mut out, case, actual, config).map_err(|e| CliError::IoError {
            source: "stdout".to_owned(),
            detail: e.to_string(),
        })?;
    }

    if failed == 0 {
        Ok(())
    } else {
        Err(CliError::ShowcaseMismatch { failed })
    }
}
