//! Implementation of the 'info' subcommand.
//!
//! Probes a single file and prints what cinema-core read from it.

use crate::cli::InfoArgs;
use crate::error::CliResult;
use crate::output::{print_heading, print_info};

use cinema_core::external::CommandFfprobeExecutor;
use cinema_core::{CoreConfig, ProbedMetadata, format_duration, format_seconds, probe_metadata};
use serde_json::{Value, json};
use std::path::Path;

/// Probes `args.input` and prints its metadata.
pub fn run_info(config: &CoreConfig, args: &InfoArgs) -> CliResult<()> {
    config.validate()?;
    let executor = CommandFfprobeExecutor::from_config(config);
    let metadata = probe_metadata(&executor, &args.input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info_json(&args.input, &metadata))?);
        return Ok(());
    }

    print_heading(&args.input.display().to_string());
    print_info("Width", metadata.width);
    print_info("Height", metadata.height);
    print_info(
        "Duration",
        format!(
            "{}s ({})",
            format_seconds(metadata.duration),
            format_duration(metadata.duration)
        ),
    );
    match metadata.rotation {
        Some(degrees) => print_info("Rotation", format!("{degrees}°")),
        None => print_info("Rotation", "none"),
    }
    Ok(())
}

/// JSON representation printed by `info --json`.
pub fn info_json(input: &Path, metadata: &ProbedMetadata) -> Value {
    json!({
        "path": input.display().to_string(),
        "width": metadata.width,
        "height": metadata.height,
        "duration": metadata.duration.as_secs_f64(),
        "rotation": metadata.rotation,
    })
}
