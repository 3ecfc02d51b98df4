// ============================================================================
// cinema-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the ffprobe and ffmpeg binaries
//
// This module encapsulates every subprocess the crate starts. Probing and
// rendering go through the `FfprobeExecutor` and `FfmpegSpawner` traits so
// that callers (and tests) can substitute their own implementations; the
// default implementations run the real programs with std::process::Command.
//
// KEY COMPONENTS:
// - FfprobeExecutor / CommandFfprobeExecutor: availability check + JSON probe
// - FfmpegSpawner / CommandFfmpegSpawner: run an ffmpeg command line
// - ffmpeg: render parameters and argument construction
// - ffmpeg_builder: filter chain construction
// - check_dependency: PATH lookup for a required program

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Render parameters and ffmpeg argument construction
pub mod ffmpeg;

/// Filter expressions and the video filter chain builder
pub mod ffmpeg_builder;

/// Traits and implementations for running ffmpeg
pub mod ffmpeg_executor;

/// Traits and implementations for running ffprobe
pub mod ffprobe_executor;

/// Test doubles for the executor traits
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg::{RenderParams, build_render_args};
pub use ffmpeg_builder::{VideoFilterChain, crop_filter, scale_filter};
pub use ffmpeg_executor::{CommandFfmpegSpawner, FfmpegSpawner};
pub use ffprobe_executor::{CommandFfprobeExecutor, FfprobeExecutor, ffprobe_args};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that a required external program can be located.
///
/// A bare name is searched for on PATH; a path is checked directly. Nothing is
/// executed.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The resolved location of the program
/// * `Err(CoreError::ToolNotFound)` - If the program cannot be found
pub fn check_dependency(program: &Path) -> CoreResult<PathBuf> {
    match which::which(program) {
        Ok(resolved) => {
            log::debug!(
                "Found dependency {} at {}",
                program.display(),
                resolved.display()
            );
            Ok(resolved)
        }
        Err(e) => {
            log::warn!("Dependency '{}' not found: {}", program.display(), e);
            Err(CoreError::ToolNotFound(program.display().to_string()))
        }
    }
}
