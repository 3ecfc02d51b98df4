// ============================================================================
// cinema-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Provides a fluent API for creating CoreConfig instances with the default
// program names filled in.

use std::path::PathBuf;

use super::CoreConfig;

/// Builder for creating CoreConfig instances.
#[derive(Debug, Clone)]
pub struct CoreConfigBuilder {
    ffprobe_path: PathBuf,
    ffmpeg_path: PathBuf,
}

impl Default for CoreConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self {
            ffprobe_path: PathBuf::from(super::DEFAULT_FFPROBE_PROGRAM),
            ffmpeg_path: PathBuf::from(super::DEFAULT_FFMPEG_PROGRAM),
        }
    }

    /// Sets the program used for probing.
    ///
    /// # Arguments
    ///
    /// * `path` - A bare program name (resolved through PATH) or a path
    ///
    /// # Returns
    ///
    /// * Self for method chaining
    pub fn ffprobe_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ffprobe_path = path.into();
        self
    }

    /// Sets the program used for rendering.
    pub fn ffmpeg_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ffmpeg_path = path.into();
        self
    }

    /// Builds the CoreConfig.
    pub fn build(self) -> CoreConfig {
        CoreConfig {
            ffprobe_path: self.ffprobe_path,
            ffmpeg_path: self.ffmpeg_path,
        }
    }
}
