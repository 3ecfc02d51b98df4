//! Configuration for locating the external tools.
//!
//! Cinema reads no configuration files. The only settings are the programs
//! used for probing and rendering, which default to `ffprobe` and `ffmpeg`
//! resolved through `PATH`.

mod builder;

use crate::error::{CoreError, CoreResult};
use std::path::PathBuf;

pub use builder::CoreConfigBuilder;

/// Default program used to inspect input files.
pub const DEFAULT_FFPROBE_PROGRAM: &str = "ffprobe";

/// Default program used to render the output file.
pub const DEFAULT_FFMPEG_PROGRAM: &str = "ffmpeg";

/// Frame rate given to every freshly loaded video.
pub const DEFAULT_FPS: i32 = 30;

/// Main configuration structure for the cinema-core library.
///
/// # Examples
///
/// ```rust
/// use cinema_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .ffprobe_path("/opt/ffmpeg/bin/ffprobe")
///     .build();
/// assert_eq!(config.ffmpeg_path.to_str(), Some("ffmpeg"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Program (name looked up on PATH, or a path) used for probing
    pub ffprobe_path: PathBuf,

    /// Program (name looked up on PATH, or a path) used for rendering
    pub ffmpeg_path: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        CoreConfigBuilder::new().build()
    }
}

impl CoreConfig {
    /// Rejects empty program paths.
    pub fn validate(&self) -> CoreResult<()> {
        if self.ffprobe_path.as_os_str().is_empty() {
            return Err(CoreError::Config("ffprobe path must not be empty".to_string()));
        }
        if self.ffmpeg_path.as_os_str().is_empty() {
            return Err(CoreError::Config("ffmpeg path must not be empty".to_string()));
        }
        Ok(())
    }
}
