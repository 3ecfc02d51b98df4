// cinema-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use crate::edits::Edit;
use cinema_core::{CoreConfig, CoreConfigBuilder};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Cinema: trim, crop, resize and retime videos with ffmpeg",
    long_about = "Probes a video with ffprobe and composes a single ffmpeg command from an ordered list of edits."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// ffprobe program to use (name on PATH or path)
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "CINEMA_FFPROBE",
        default_value = "ffprobe"
    )]
    pub ffprobe: PathBuf,

    /// ffmpeg program to use (name on PATH or path)
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "CINEMA_FFMPEG",
        default_value = "ffmpeg"
    )]
    pub ffmpeg: PathBuf,
}

impl Cli {
    /// Builds the core configuration from the global flags.
    pub fn core_config(&self) -> CoreConfig {
        CoreConfigBuilder::new()
            .ffprobe_path(self.ffprobe.clone())
            .ffmpeg_path(self.ffmpeg.clone())
            .build()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the probed dimensions, duration and rotation of a video
    Info(InfoArgs),

    /// Apply edits to a video and render it with ffmpeg
    Render(RenderArgs),
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Video file to inspect
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Print the metadata as a JSON object
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Video file to edit
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// File to write
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Edit to apply, in order: trim=START..END, start=T, end=T, size=WxH,
    /// crop=X,Y,W,H (or WxH+X+Y), fps=N. Times are seconds or HH:MM:SS.ms
    #[arg(short = 'e', long = "edit", value_name = "EDIT")]
    pub edits: Vec<Edit>,

    /// Print the ffmpeg command line instead of running it
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_args_keep_edit_order() {
        let cli = Cli::try_parse_from([
            "cinema",
            "render",
            "in.mp4",
            "out.mp4",
            "-e",
            "size=400x300",
            "--edit",
            "crop=0,0,200,200",
            "-e",
            "size=400x400",
        ])
        .unwrap();

        match cli.command {
            Commands::Render(args) => assert_eq!(
                args.edits,
                vec![
                    Edit::Size {
                        width: 400,
                        height: 300,
                    },
                    Edit::Crop {
                        x: 0,
                        y: 0,
                        width: 200,
                        height: 200,
                    },
                    Edit::Size {
                        width: 400,
                        height: 400,
                    },
                ]
            ),
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_edit_is_rejected() {
        let result =
            Cli::try_parse_from(["cinema", "render", "in.mp4", "out.mp4", "-e", "size=big"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_tool_flags_feed_core_config() {
        let cli = Cli::try_parse_from([
            "cinema",
            "--ffprobe",
            "/opt/ff/ffprobe",
            "info",
            "in.mp4",
            "--ffmpeg",
            "/opt/ff/ffmpeg",
        ])
        .unwrap();
        let config = cli.core_config();
        assert_eq!(config.ffprobe_path, PathBuf::from("/opt/ff/ffprobe"));
        assert_eq!(config.ffmpeg_path, PathBuf::from("/opt/ff/ffmpeg"));
    }
}
