/// Verdict formatting: human-readable and JSON (NDJSON) modes.
///
/// - **Human mode** (default): a bare `true`/`false` per verdict; showcase
///   rows are tagged `[PASS]`/`[FAIL]`, colored when enabled.
/// - **JSON mode**: each verdict or showcase row is one single-line JSON
///   object.
///
/// Verdicts go to stdout. Timing (verbose mode) goes to stderr.
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use cyclecheck_core::{ShowcaseCase, Vertex};
use serde::Serialize;

use crate::OutputFormat;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be written to stdout.
///
/// Off when `no_color_flag` is set, when `NO_COLOR` is present in the
/// environment, or when stdout is not a TTY.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Resolved output settings shared by all commands.
#[derive(Debug, Clone, Copy)]
pub struct FormatterConfig {
    /// Output mode.
    pub format: OutputFormat,
    /// Emit ANSI color codes in human mode.
    pub colors: bool,
    /// Write nothing to stdout.
    pub quiet: bool,
    /// Write timing to stderr.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Builds a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(format: OutputFormat, no_color: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            colors: colors_enabled(no_color),
            quiet,
            verbose,
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// JSON form of a single verdict.
#[derive(Debug, Serialize)]
struct VerdictRecord {
    is_cycle: bool,
    edges: usize,
}

/// JSON form of one showcase row.
#[derive(Debug, Serialize)]
struct ShowcaseRecord<'a> {
    description: &'a str,
    from: &'a [Vertex],
    to: &'a [Vertex],
    expected: bool,
    actual: bool,
    pass: bool,
}

fn json_line<W: Write, T: Serialize>(writer: &mut W, record: &T) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, record).map_err(std::io::Error::other)?;
    writeln!(writer)
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

/// Writes the verdict for an edge list of `edge_count` edges.
///
/// Human: `true` or `false`. JSON: `{"is_cycle":true,"edges":3}`.
/// Nothing is written in quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_verdict<W: Write>(
    writer: &mut W,
    is_cycle: bool,
    edge_count: usize,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    match config.format {
        OutputFormat::Human => writeln!(writer, "{is_cycle}"),
        OutputFormat::Json => json_line(
            writer,
            &VerdictRecord {
                is_cycle,
                edges: edge_count,
            },
        ),
    }
}

/// Writes one showcase row.
///
/// Human: `[PASS] cycle of length 3 (from=[3, 1, 2] to=[2, 3, 1]): expected true, got true`.
/// Nothing is written in quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_showcase_row<W: Write>(
    writer: &mut W,
    case: &ShowcaseCase,
    actual: bool,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    let pass = actual == case.expected;
    match config.format {
        OutputFormat::Human => {
            let (tag, color) = if pass {
                ("[PASS]", ANSI_GREEN)
            } else {
                ("[FAIL]", ANSI_RED)
            };
            if config.colors {
                write!(writer, "{color}{tag}{ANSI_RESET}")?;
            } else {
                write!(writer, "{tag}")?;
            }
            writeln!(
                writer,
                " {} (from={:?} to={:?}): expected {}, got {actual}",
                case.description, case.from, case.to, case.expected
            )
        }
        OutputFormat::Json => json_line(
            writer,
            &ShowcaseRecord {
                description: case.description,
                from: case.from,
                to: case.to,
                expected: case.expected,
                actual,
                pass,
            },
        ),
    }
}

/// Writes `checked N edges in Xms` in verbose mode; a no-op otherwise.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing<W: Write>(
    writer: &mut W,
    edge_count: usize,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(
        writer,
        "checked {edge_count} {} in {}ms",
        if edge_count == 1 { "edge" } else { "edges" },
        duration.as_millis()
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
