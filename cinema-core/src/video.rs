// ============================================================================
// cinema-core/src/video.rs
// ============================================================================
//
// VIDEO: Source metadata plus the pending edit plan
//
// A Video is created by probing a file, mutated in place by its owner through
// the edit operations, and rendered into a single ffmpeg invocation. Rendering
// never consumes or changes the edit state, so the same Video can produce its
// command line any number of times.
//
// INVARIANT:
// 0 <= start <= end <= duration holds after every operation.

use crate::config::{CoreConfig, DEFAULT_FFMPEG_PROGRAM, DEFAULT_FPS};
use crate::error::CoreResult;
use crate::external::ffmpeg::{RenderParams, build_render_args, run_render};
use crate::external::{
    CommandFfmpegSpawner, CommandFfprobeExecutor, FfmpegSpawner, FfprobeExecutor, crop_filter,
    scale_filter,
};
use crate::probe::probe_metadata;

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Information about a video file and all the operations that need to be
/// applied to it.
///
/// # Examples
///
/// ```rust,no_run
/// use cinema_core::Video;
/// use std::time::Duration;
///
/// let mut video = Video::load("input.mp4").unwrap();
/// video.trim(Duration::from_secs(10), Duration::from_secs(20));
/// video.crop(0, 0, 200, 200);
/// video.set_size(400, 400);
/// video.render("output.mp4").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    filepath: PathBuf,
    width: i64,
    height: i64,
    fps: i32,
    start: Duration,
    end: Duration,
    duration: Duration,
    filters: Vec<String>,
}

impl Video {
    /// Probes `path` with the `ffprobe` found on PATH.
    ///
    /// This does not open the file or load it into memory; only its metadata
    /// is read.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        Self::load_with(&CommandFfprobeExecutor::default(), path)
    }

    /// Probes `path` with the ffprobe program named in `config`.
    pub fn load_with_config(config: &CoreConfig, path: impl AsRef<Path>) -> CoreResult<Self> {
        config.validate()?;
        Self::load_with(&CommandFfprobeExecutor::from_config(config), path)
    }

    /// Probes `path` with the given executor.
    pub fn load_with<E: FfprobeExecutor>(executor: &E, path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let metadata = probe_metadata(executor, path)?;

        Ok(Self {
            filepath: path.to_path_buf(),
            width: metadata.width,
            height: metadata.height,
            fps: DEFAULT_FPS,
            start: Duration::ZERO,
            end: metadata.duration,
            duration: metadata.duration,
            filters: Vec::new(),
        })
    }

    /// Renders with the `ffmpeg` found on PATH, writing to `output`.
    pub fn render(&self, output: impl AsRef<Path>) -> CoreResult<()> {
        self.render_with(&CommandFfmpegSpawner::default(), output)
    }

    /// Renders with the ffmpeg program named in `config`.
    pub fn render_with_config(
        &self,
        config: &CoreConfig,
        output: impl AsRef<Path>,
    ) -> CoreResult<()> {
        config.validate()?;
        let command_line = self.command_line_with_config(config, output);
        run_render(&CommandFfmpegSpawner::from_config(config), &command_line)
    }

    /// Renders through the given spawner. Fails with `RenderFailed` if ffmpeg
    /// cannot be started or exits unsuccessfully; a partially written output
    /// file is left as is.
    pub fn render_with<S: FfmpegSpawner>(
        &self,
        spawner: &S,
        output: impl AsRef<Path>,
    ) -> CoreResult<()> {
        let command_line = self.command_line(output);
        run_render(spawner, &command_line)
    }

    /// Returns the command line that `render` would run, program name first.
    pub fn command_line(&self, output: impl AsRef<Path>) -> Vec<String> {
        self.command_line_for(Path::new(DEFAULT_FFMPEG_PROGRAM), output.as_ref())
    }

    /// Returns the command line that `render_with_config` would run, starting
    /// with the configured ffmpeg program.
    pub fn command_line_with_config(
        &self,
        config: &CoreConfig,
        output: impl AsRef<Path>,
    ) -> Vec<String> {
        self.command_line_for(&config.ffmpeg_path, output.as_ref())
    }

    fn command_line_for(&self, program: &Path, output: &Path) -> Vec<String> {
        let params = RenderParams {
            program,
            input_path: &self.filepath,
            start: self.start,
            length: self.end - self.start,
            filters: &self.filters,
            fps: self.fps,
        };
        build_render_args(&params, output)
    }

    /// Sets the start and end of the output, relative to the input. Nothing
    /// changes unless `start <= end`; returns whether the window was applied.
    pub fn trim(&mut self, start: Duration, end: Duration) -> bool {
        if start > end {
            log::debug!("Ignoring inverted trim {:?}..{:?}", start, end);
            return false;
        }
        self.set_start(start);
        self.set_end(end);
        true
    }

    /// Sets the start of the output, relative to the input. Pulls `end` up
    /// if needed.
    pub fn set_start(&mut self, start: Duration) {
        self.start = self.clamp_to_duration(start);
        if self.start > self.end {
            self.end = self.start;
        }
    }

    /// Sets the end of the output, relative to the input. Pulls `start` down
    /// if needed.
    pub fn set_end(&mut self, end: Duration) {
        self.end = self.clamp_to_duration(end);
        if self.end < self.start {
            self.start = self.end;
        }
    }

    fn clamp_to_duration(&self, t: Duration) -> Duration {
        t.min(self.duration)
    }

    /// Sets the frame rate of the output. Not validated; ffmpeg decides.
    pub fn set_fps(&mut self, fps: i32) {
        self.fps = fps;
    }

    /// Scales the output to `width`x`height`.
    pub fn set_size(&mut self, width: i64, height: i64) {
        self.width = width;
        self.height = height;
        self.filters.push(scale_filter(width, height));
    }

    /// Makes the output a sub-rectangle of the current picture. (0,0) is the
    /// top-left corner, x grows right and y grows down. Bounds are not checked.
    pub fn crop(&mut self, x: i64, y: i64, width: i64, height: i64) {
        self.width = width;
        self.height = height;
        self.filters.push(crop_filter(x, y, width, height));
    }

    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    /// Width of the output in pixels.
    pub fn width(&self) -> i64 {
        self.width
    }

    /// Height of the output in pixels.
    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn fps(&self) -> i32 {
        self.fps
    }

    /// Duration of the input. Trimming does not affect it; see
    /// [`Video::trimmed_duration`].
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn start(&self) -> Duration {
        self.start
    }

    pub fn end(&self) -> Duration {
        self.end
    }

    /// Length of the output, `end - start`.
    pub fn trimmed_duration(&self) -> Duration {
        self.end - self.start
    }

    /// Accumulated filter expressions in application order.
    pub fn filters(&self) -> &[String] {
        &self.filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::external::mocks::{MockFfmpegSpawner, MockFfprobeExecutor};
    use tempfile::NamedTempFile;

    const TWENTY_SECONDS: &str = r#"{
        "streams": [ { "index": 0, "codec_type": "video", "width": 1920, "height": 1080 } ],
        "format": { "filename": "input.mp4", "duration": "20.000000" }
    }"#;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    fn load_fixture(json: &str) -> (NamedTempFile, Video) {
        let file = NamedTempFile::new().unwrap();
        let executor = MockFfprobeExecutor::new();
        executor.expect_output(file.path(), json);
        let video = Video::load_with(&executor, file.path()).unwrap();
        (file, video)
    }

    fn assert_window_invariant(video: &Video) {
        assert!(video.start() <= video.end(), "{:?} > {:?}", video.start(), video.end());
        assert!(video.end() <= video.duration());
    }

    #[test]
    fn test_load_initial_state() {
        let (file, video) = load_fixture(TWENTY_SECONDS);
        assert_eq!(video.filepath(), file.path());
        assert_eq!((video.width(), video.height()), (1920, 1080));
        assert_eq!(video.fps(), 30);
        assert_eq!(video.duration(), secs(20));
        assert_eq!(video.start(), Duration::ZERO);
        assert_eq!(video.end(), secs(20));
        assert!(video.filters().is_empty());
    }

    #[test]
    fn test_load_rotated_stream_swaps_dimensions() {
        let json = r#"{ "streams": [ { "width": 1920, "height": 1080, "tags": { "rotate": "90" } } ],
                        "format": { "duration": "5" } }"#;
        let (_file, video) = load_fixture(json);
        assert_eq!((video.width(), video.height()), (1080, 1920));
    }

    #[test]
    fn test_load_tool_not_found_before_file_access() {
        let executor = MockFfprobeExecutor::new();
        executor.set_available(false);

        let result = Video::load_with(&executor, "/definitely/not/here.mp4");
        assert!(matches!(result, Err(CoreError::ToolNotFound(_))));
        assert!(executor.get_probed_paths().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let executor = MockFfprobeExecutor::new();
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.mp4");

        match Video::load_with(&executor, &missing) {
            Err(CoreError::FileNotFound { path, .. }) => {
                assert_eq!(path, missing.display().to_string())
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
        assert!(executor.get_probed_paths().is_empty());
    }

    #[test]
    fn test_load_probe_failure() {
        let file = NamedTempFile::new().unwrap();
        let executor = MockFfprobeExecutor::new();
        executor.expect_failure(file.path(), "ffprobe exited with exit status: 1");

        match Video::load_with(&executor, file.path()) {
            Err(CoreError::ProbeFailed(msg)) => assert!(msg.contains("exit status: 1")),
            other => panic!("expected ProbeFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_trim_then_set_start_then_set_end() {
        let (_file, mut video) = load_fixture(TWENTY_SECONDS);

        assert!(video.trim(secs(10), secs(20)));
        assert_eq!((video.start(), video.end()), (secs(10), secs(20)));

        video.set_start(secs(1));
        assert_eq!((video.start(), video.end()), (secs(1), secs(20)));

        video.set_end(secs(9));
        assert_eq!((video.start(), video.end()), (secs(1), secs(9)));
    }

    #[test]
    fn test_inverted_trim_is_ignored() {
        let (_file, mut video) = load_fixture(TWENTY_SECONDS);
        video.trim(secs(2), secs(8));

        assert!(!video.trim(secs(15), secs(5)));
        assert_eq!((video.start(), video.end()), (secs(2), secs(8)));
    }

    #[test]
    fn test_trim_clamps_to_duration() {
        let (_file, mut video) = load_fixture(TWENTY_SECONDS);
        assert!(video.trim(secs(25), secs(30)));
        assert_eq!((video.start(), video.end()), (secs(20), secs(20)));
    }

    #[test]
    fn test_set_start_pulls_end_up() {
        let (_file, mut video) = load_fixture(TWENTY_SECONDS);
        video.set_end(secs(5));
        video.set_start(secs(12));
        assert_eq!((video.start(), video.end()), (secs(12), secs(12)));
    }

    #[test]
    fn test_set_end_pulls_start_down() {
        let (_file, mut video) = load_fixture(TWENTY_SECONDS);
        video.set_start(secs(12));
        video.set_end(secs(3));
        assert_eq!((video.start(), video.end()), (secs(3), secs(3)));
    }

    #[test]
    fn test_window_invariant_over_mixed_sequence() {
        let (_file, mut video) = load_fixture(TWENTY_SECONDS);
        let offsets = [0u64, 3, 40, 7, 19, 20, 1, 100, 0, 11, 11, 6];

        for (i, &offset) in offsets.iter().enumerate() {
            let t = Duration::from_millis(offset * 1000 + 250);
            if i % 2 == 0 {
                video.set_start(t);
            } else {
                video.set_end(t);
            }
            assert_window_invariant(&video);
        }
    }

    #[test]
    fn test_size_and_crop_accumulate_filters() {
        let (_file, mut video) = load_fixture(TWENTY_SECONDS);

        video.set_size(400, 300);
        video.crop(0, 0, 200, 200);
        video.set_size(400, 400);

        assert_eq!(
            video.filters(),
            ["scale=400:300", "crop=200:200:0:0", "scale=400:400"]
        );
        assert_eq!((video.width(), video.height()), (400, 400));
    }

    #[test]
    fn test_crop_is_not_bounds_checked() {
        let (_file, mut video) = load_fixture(TWENTY_SECONDS);
        video.crop(5000, -10, 8000, 8000);
        assert_eq!(video.filters(), ["crop=8000:8000:5000:-10"]);
        assert_eq!((video.width(), video.height()), (8000, 8000));
    }

    #[test]
    fn test_command_line() {
        let (file, mut video) = load_fixture(TWENTY_SECONDS);
        video.trim(Duration::from_millis(1500), secs(9));
        video.set_size(400, 300);
        video.crop(10, 20, 200, 200);
        video.set_fps(25);

        let input = file.path().to_string_lossy().into_owned();
        assert_eq!(
            video.command_line("out.mp4"),
            vec![
                "ffmpeg",
                "-y",
                "-i",
                input.as_str(),
                "-ss",
                "1.5",
                "-t",
                "7.5",
                "-vf",
                "scale=400:300,crop=200:200:10:20,setsar=1,fps=fps=25",
                "-strict",
                "-2",
                "out.mp4",
            ]
        );
    }

    #[test]
    fn test_command_line_with_config_names_configured_ffmpeg() {
        let (_file, mut video) = load_fixture(TWENTY_SECONDS);
        video.set_size(640, 360);
        let config = CoreConfig {
            ffmpeg_path: PathBuf::from("/opt/ff/bin/ffmpeg"),
            ..CoreConfig::default()
        };

        let configured = video.command_line_with_config(&config, "out.mp4");
        let default = video.command_line("out.mp4");
        assert_eq!(configured[0], "/opt/ff/bin/ffmpeg");
        assert_eq!(default[0], "ffmpeg");
        assert_eq!(configured[1..], default[1..]);
    }

    #[test]
    fn test_command_line_without_edits() {
        let (_file, video) = load_fixture(TWENTY_SECONDS);
        let args = video.command_line("out.mp4");
        let vf = args.iter().position(|a| a == "-vf").unwrap();
        assert_eq!(args[vf + 1], "setsar=1,fps=fps=30");
        assert_eq!(args[args.iter().position(|a| a == "-ss").unwrap() + 1], "0");
        assert_eq!(args[args.iter().position(|a| a == "-t").unwrap() + 1], "20");
    }

    #[test]
    fn test_command_line_is_repeatable() {
        let (_file, mut video) = load_fixture(TWENTY_SECONDS);
        video.set_size(640, 360);
        let before = video.clone();

        assert_eq!(video.command_line("a.mp4"), video.command_line("a.mp4"));
        assert_eq!(video, before);
    }

    #[test]
    fn test_output_stages_appear_once_and_last() {
        let (_file, mut video) = load_fixture(TWENTY_SECONDS);
        for i in 1..=4 {
            video.set_size(100 * i, 100 * i);
            video.set_fps(i as i32);
        }

        let args = video.command_line("out.mp4");
        let vf = &args[args.iter().position(|a| a == "-vf").unwrap() + 1];
        let stages: Vec<&str> = vf.split(',').collect();

        assert_eq!(stages.iter().filter(|s| **s == "setsar=1").count(), 1);
        assert_eq!(stages.iter().filter(|s| s.starts_with("fps=fps=")).count(), 1);
        assert_eq!(&stages[stages.len() - 2..], ["setsar=1", "fps=fps=4"]);
    }

    #[test]
    fn test_render_with_spawner() {
        let (_file, mut video) = load_fixture(TWENTY_SECONDS);
        video.set_fps(24);
        let spawner = MockFfmpegSpawner::new();
        spawner.add_exit_code(0);

        video.render_with(&spawner, "out.mp4").unwrap();

        let calls = spawner.get_received_calls();
        assert_eq!(calls, vec![video.command_line("out.mp4")]);
    }

    #[test]
    fn test_render_failure() {
        let (_file, video) = load_fixture(TWENTY_SECONDS);
        let spawner = MockFfmpegSpawner::new();
        spawner.add_exit_code(1);

        assert!(matches!(
            video.render_with(&spawner, "out.mp4"),
            Err(CoreError::RenderFailed(_))
        ));
    }
}
