/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `cyclecheck` binary.
/// Every variant maps to a stable exit code via [`CliError::exit_code`]:
///
/// - Exit code **2** — input failure: the input could not be read or parsed.
///   The validator never runs.
/// - Exit code **1** — logical failure: the validator ran and the answer is
///   "not a single cycle" (or a showcase case disagreed with its expectation).
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `cyclecheck` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// Any other I/O error, including failures writing the result.
    IoError {
        /// The file or stream involved.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a well-formed edge document.
    ParseFailed {
        /// Parser message, including line and column where available.
        detail: String,
    },

    /// An inline argument could not be interpreted.
    InvalidArgument {
        /// The offending flag, e.g. `--from`.
        flag: &'static str,
        /// What was wrong with it.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// The edges do not form a single cycle.
    ///
    /// The verdict has already been printed; this variant exists so `main`
    /// can exit with status 1.
    NotACycle,

    /// One or more showcase cases disagreed with their expected answer.
    ShowcaseMismatch {
        /// Number of disagreeing cases.
        failed: usize,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2` — input failure.
    /// - `1` — logical failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. }
            | Self::InvalidArgument { .. } => 2,

            Self::NotACycle | Self::ShowcaseMismatch { .. } => 1,
        }
    }

    /// Returns a human-readable message for stderr, or `None` when the
    /// outcome has already been reported on stdout.
    pub fn message(&self) -> Option<String> {
        let msg = match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::ParseFailed { detail } => {
                format!("error: invalid edge document: {detail}")
            }
            Self::InvalidArgument { flag, detail } => {
                format!("error: invalid value for {flag}: {detail}")
            }
            Self::NotACycle => return None,
            Self::ShowcaseMismatch { failed } => {
                format!("error: {failed} showcase case(s) disagreed with the expected answer")
            }
        };
        Some(msg)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => f.write_str(&msg),
            None => f.write_str("not a single cycle"),
        }
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
