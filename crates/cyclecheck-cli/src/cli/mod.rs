//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Default `--max-file-size`: 64 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` prints bare `true`/`false` verdicts to stdout. `Json` prints one
/// JSON object per verdict.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Plain text (default).
    Human,
    /// One JSON object per line.
    Json,
}

/// All top-level subcommands exposed by the `cyclecheck` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Check a JSON edge document ({"from":[..],"to":[..]} or {"edges":[[u,v],..]}).
    Check {
        /// Path to a JSON edge document, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Check an edge list given inline as comma-separated labels.
    Eval {
        /// Source labels, e.g. `3,1,2`.
        #[arg(long, value_name = "LIST", allow_hyphen_values = true)]
        from: String,
        /// Target labels, e.g. `2,3,1`.
        #[arg(long, value_name = "LIST", allow_hyphen_values = true)]
        to: String,
    },

    /// Evaluate the built-in worked examples and compare with their expected answers.
    Showcase,
}

/// Root CLI struct for the `cyclecheck` binary.
///
/// Global flags are marked `global = true` so clap propagates them to every
/// subcommand.
#[derive(Parser)]
#[command(
    name = "cyclecheck",
    version,
    about = "Single-cycle checker for directed edge lists",
    long_about = "Decides whether a directed graph given as N edges from[k] -> to[k]\n\
                  is exactly one cycle through every vertex it touches.\n\
                  Exit status: 0 = single cycle, 1 = not a single cycle, 2 = input error."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Print nothing to stdout; rely on the exit status (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report edge counts and timing on stderr and enable debug logging
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input size in bytes.
    ///
    /// Can also be set via the `CYCLECHECK_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 67108864 (64 MiB).
    #[arg(
        long,
        global = true,
        env = "CYCLECHECK_MAX_FILE_SIZE",
        default_value_t = DEFAULT_MAX_FILE_SIZE
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Color is also off when the `NO_COLOR` environment variable is set
    /// (<https://no-color.org>) or stdout is not a terminal.
    #[arg(long, global = true)]
    pub no_color: bool,
}
