//! Minimal video editing through the ffmpeg and ffprobe command-line tools.
//!
//! [`Video::load`] reads the dimensions, duration and rotation of a file with
//! ffprobe. Trim, resize, crop and frame-rate edits are then accumulated on the
//! [`Video`] and rendered as a single ffmpeg invocation.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use cinema_core::Video;
//! use std::time::Duration;
//!
//! let mut video = Video::load("holiday.mov").unwrap();
//! video.trim(Duration::from_secs(10), Duration::from_secs(20));
//! video.crop(0, 0, 720, 720);
//! video.set_size(480, 480);
//! video.set_fps(24);
//!
//! println!("{}", video.command_line("clip.mp4").join(" "));
//! video.render("clip.mp4").unwrap();
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod probe;
pub mod utils;
pub mod video;

// Re-exports for public API
pub use config::{CoreConfig, CoreConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use external::{FfmpegSpawner, FfprobeExecutor};
pub use probe::{ProbedMetadata, probe_metadata};
pub use utils::{format_duration, format_seconds, parse_time_offset};
pub use video::Video;
