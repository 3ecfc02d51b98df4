// cinema-cli/src/lib.rs
//
// Library portion of the Cinema CLI application.
// Contains argument definitions, edit parsing and command logic.

pub mod cli;
pub mod commands;
pub mod edits;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, InfoArgs, RenderArgs};
pub use commands::{run_info, run_render};
pub use edits::Edit;
pub use error::{CliError, CliResult};
