// ============================================================================
// cinema-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types for the CLI
//
// Wraps the core library's errors together with the few failures that only
// the command-line front end can produce.

use cinema_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for CLI results.
pub type CliResult<T> = Result<T, CliError>;
