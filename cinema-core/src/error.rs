// ============================================================================
// cinema-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for probing and rendering
//
// Every variant carries the text of the underlying failure (process status,
// stderr, spawn error or parse error) so that a single log line is enough to
// diagnose what went wrong.

use std::process::ExitStatus;
use thiserror::Error;

/// Errors raised by `cinema-core`.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{0} was not found in your PATH, make sure ffmpeg (https://ffmpeg.org/) is installed and ffmpeg and ffprobe are on your PATH")]
    ToolNotFound(String),

    #[error("Unable to load file {path}: {reason}")]
    FileNotFound { path: String, reason: String },

    #[error("ffprobe failed: {0}")]
    ProbeFailed(String),

    #[error("Unable to parse JSON output from ffprobe: {0}")]
    MalformedMetadata(String),

    #[error("ffprobe does not contain stream data, make sure the file {0} contains a valid video")]
    NoStreams(String),

    #[error("ffprobe returned invalid duration: {0}")]
    InvalidDuration(String),

    #[error("ffprobe returned invalid rotation: {0}")]
    InvalidRotation(String),

    #[error("ffmpeg failed: {0}")]
    RenderFailed(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for cinema-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds the error for a subprocess that could not be started.
pub(crate) fn command_start_error(
    tool: impl Into<String>,
    err: std::io::Error,
) -> String {
    format!("failed to start {}: {}", tool.into(), err)
}

/// Builds the error text for a subprocess that exited unsuccessfully.
pub(crate) fn command_failed_error(
    tool: impl Into<String>,
    status: ExitStatus,
    stderr: impl AsRef<str>,
) -> String {
    let stderr = stderr.as_ref().trim();
    if stderr.is_empty() {
        format!("{} exited with {}", tool.into(), status)
    } else {
        format!("{} exited with {}: {}", tool.into(), status, stderr)
    }
}
