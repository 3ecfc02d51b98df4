//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `info` command.
pub mod info;

/// Module containing the implementation of the `render` command.
pub mod render;

pub use info::run_info;
pub use render::run_render;
