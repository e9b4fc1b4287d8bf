//! Implementation of `cyclecheck eval --from <LIST> --to <LIST>`.
//!
//! Labels are comma-separated integers; whitespace around each label is
//! ignored and an empty list is allowed (it is never a cycle).
use cyclecheck_core::{EdgeList, Vertex};

use crate::cmd::report_verdict;
use crate::error::CliError;
use crate::format::FormatterConfig;

/// Runs the `eval` command.
///
/// # Errors
///
/// - [`CliError::InvalidArgument`] — a label is not an integer, or the lists
///   differ in length.
/// - [`CliError::NotACycle`] — the edges do not form a single cycle.
pub fn run(from: &str, to: &str, config: &FormatterConfig) -> Result<(), CliError> {
    let from = parse_labels(from, "--from")?;
    let to = parse_labels(to, "--to")?;
    let edges = EdgeList::new(from, to).map_err(|e| CliError::InvalidArgument {
        flag: "--from/--to",
        detail: e.to_string(),
    })?;
    report_verdict(&edges, config)
}

/// Parses `"3, 1,2"` into `[3, 1, 2]`.
fn parse_labels(list: &str, flag: &'static str) -> Result<Vec<Vertex>, CliError> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }
    list.split(',')
        .map(|raw| {
            let label = raw.trim();
            label
                .parse::<Vertex>()
                .map_err(|e| CliError::InvalidArgument {
                    flag,
                    detail: format!("`{label}` is not an integer label: {e}"),
                })
        })
        .collect()
}
