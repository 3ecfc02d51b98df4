// ============================================================================
// cinema-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: Running an ffmpeg command line
//
// The FfmpegSpawner trait runs a fully composed command line and reports the
// exit status. CommandFfmpegSpawner binds the child's stdin, stdout and
// stderr to the caller's own, so ffmpeg's progress and error output is
// visible to whoever invoked the render.

use crate::config::CoreConfig;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Trait representing something that can run an ffmpeg command line.
pub trait FfmpegSpawner {
    /// Runs `command_line` to completion. `command_line[0]` names the tool;
    /// the remaining entries are its arguments.
    fn run(&self, command_line: &[String]) -> io::Result<ExitStatus>;
}

/// Runs the configured ffmpeg program as a blocking child process.
#[derive(Debug, Clone)]
pub struct CommandFfmpegSpawner {
    program: PathBuf,
}

impl Default for CommandFfmpegSpawner {
    fn default() -> Self {
        Self::from_config(&CoreConfig::default())
    }
}

impl CommandFfmpegSpawner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(config.ffmpeg_path.clone())
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl FfmpegSpawner for CommandFfmpegSpawner {
    fn run(&self, command_line: &[String]) -> io::Result<ExitStatus> {
        // The configured program replaces the display name in argv[0].
        let args = command_line.get(1..).unwrap_or_default();

        log::debug!(
            "Executing command: {} {}",
            self.program.display(),
            args.join(" ")
        );

        Command::new(&self.program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
    }
}
