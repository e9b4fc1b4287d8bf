//! Implementation of `cyclecheck check <file>`.
//!
//! Parses a JSON edge document and prints whether its edges form a single
//! cycle.
//!
//! Exit codes:
//! - 0 = single cycle
//! - 1 = not a single cycle
//! - 2 = the document could not be parsed
use cyclecheck_core::parse_edge_list;

use crate::cmd::report_verdict;
use crate::error::CliError;
use crate::format::FormatterConfig;

/// Runs the `check` command on already-read document `content`.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] — `content` is not a valid edge document.
/// - [`CliError::NotACycle`] — the edges do not form a single cycle.
pub fn run(content: &str, config: &FormatterConfig) -> Result<(), CliError> {
    let edges = parse_edge_list(content).map_err(|e| CliError::ParseFailed {
        detail: e.to_string(),
    })?;
    report_verdict(&edges, config)
}
