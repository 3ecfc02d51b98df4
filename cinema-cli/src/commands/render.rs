//! Implementation of the 'render' subcommand.
//!
//! Loads the input, applies the edits in command-line order and either prints
//! the resulting ffmpeg command line or runs it.

use crate::cli::RenderArgs;
use crate::error::CliResult;
use crate::output::format_command_line;

use cinema_core::{CoreConfig, Video, format_seconds};
use log::info;

/// Loads `args.input`, applies `args.edits` and renders (or prints) the result.
pub fn run_render(config: &CoreConfig, args: &RenderArgs) -> CliResult<()> {
    let mut video = Video::load_with_config(config, &args.input)?;
    for edit in &args.edits {
        edit.apply(&mut video);
    }

    if args.dry_run {
        let command_line = video.command_line_with_config(config, &args.output);
        println!("{}", format_command_line(&command_line));
        return Ok(());
    }

    info!(
        "Rendering {} -> {} ({}s from {}s, {}x{} @ {} fps)",
        args.input.display(),
        args.output.display(),
        format_seconds(video.trimmed_duration()),
        format_seconds(video.start()),
        video.width(),
        video.height(),
        video.fps()
    );
    video.render_with_config(config, &args.output)?;
    info!("Wrote {}", args.output.display());
    Ok(())
}
