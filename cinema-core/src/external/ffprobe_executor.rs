//! FFprobe integration for reading media metadata.
//!
//! The executor only runs the program and hands back its raw JSON output;
//! interpreting that output is the job of [`crate::probe`].

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Trait for anything that can inspect a media file the way ffprobe does.
pub trait FfprobeExecutor {
    /// Fails with `CoreError::ToolNotFound` if the probe tool cannot be located.
    fn ensure_available(&self) -> CoreResult<()>;

    /// Returns the raw JSON document describing `input_path`.
    fn probe(&self, input_path: &Path) -> CoreResult<Vec<u8>>;
}

/// Arguments requesting quiet JSON output with format and stream sections.
pub fn ffprobe_args(input_path: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "-v",
        "quiet",
        "-print_format",
        "json",
        "-show_format",
        "-show_streams",
    ]
    .iter()
    .map(OsString::from)
    .collect();
    args.push(input_path.as_os_str().to_os_string());
    args
}

/// Runs the ffprobe binary as a child process.
#[derive(Debug, Clone)]
pub struct CommandFfprobeExecutor {
    program: PathBuf,
}

impl Default for CommandFfprobeExecutor {
    fn default() -> Self {
        Self::from_config(&CoreConfig::default())
    }
}

impl CommandFfprobeExecutor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(config.ffprobe_path.clone())
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl FfprobeExecutor for CommandFfprobeExecutor {
    fn ensure_available(&self) -> CoreResult<()> {
        super::check_dependency(&self.program).map(|_| ())
    }

    fn probe(&self, input_path: &Path) -> CoreResult<Vec<u8>> {
        log::debug!(
            "Running {} for metadata on: {}",
            self.program.display(),
            input_path.display()
        );

        let output = Command::new(&self.program)
            .args(ffprobe_args(input_path))
            .output()
            .map_err(|e| CoreError::ProbeFailed(command_start_error("ffprobe", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::error!(
                "ffprobe failed for {}: {}",
                input_path.display(),
                output.status
            );
            return Err(CoreError::ProbeFailed(command_failed_error(
                "ffprobe",
                output.status,
                stderr,
            )));
        }

        Ok(output.stdout)
    }
}
