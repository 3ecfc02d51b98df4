//! FFmpeg command building and execution for rendering an edited video
//!
//! The render command seeks to the trim start and encodes the trimmed length
//! (`-ss` + `-t`) rather than passing two absolute endpoints, then applies the
//! accumulated filter chain.

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::external::ffmpeg_builder::VideoFilterChain;
use crate::external::ffmpeg_executor::FfmpegSpawner;
use crate::utils::format_seconds;

use std::path::Path;
use std::time::Duration;

/// Parameters required for composing an ffmpeg render command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderParams<'a> {
    /// ffmpeg program placed in argv[0]
    pub program: &'a Path,
    pub input_path: &'a Path,
    /// Seek offset into the input
    pub start: Duration,
    /// Length of output to encode, starting at `start`
    pub length: Duration,
    /// User filters in application order
    pub filters: &'a [String],
    pub fps: i32,
}

/// Builds the full argv (program name first) for rendering to `output_path`.
pub fn build_render_args(params: &RenderParams<'_>, output_path: &Path) -> Vec<String> {
    let filters = VideoFilterChain::new()
        .add_filters(params.filters.iter().cloned())
        .build_with_output_stages(params.fps);

    vec![
        params.program.to_string_lossy().into_owned(),
        "-y".to_string(),
        "-i".to_string(),
        params.input_path.to_string_lossy().into_owned(),
        "-ss".to_string(),
        format_seconds(params.start),
        "-t".to_string(),
        format_seconds(params.length),
        "-vf".to_string(),
        filters,
        "-strict".to_string(),
        "-2".to_string(),
        output_path.to_string_lossy().into_owned(),
    ]
}

/// Runs a composed render command and maps every failure to
/// `CoreError::RenderFailed`.
pub fn run_render<S: FfmpegSpawner>(spawner: &S, command_line: &[String]) -> CoreResult<()> {
    log::debug!("Running render command: {:?}", command_line);

    let status = spawner.run(command_line).map_err(|e| {
        log::error!("Failed to start ffmpeg: {}", e);
        CoreError::RenderFailed(command_start_error("ffmpeg", e))
    })?;

    if !status.success() {
        log::error!("Render failed: {}", status);
        return Err(CoreError::RenderFailed(command_failed_error(
            "ffmpeg", status, "",
        )));
    }

    log::debug!("Render finished successfully");
    Ok(())
}
