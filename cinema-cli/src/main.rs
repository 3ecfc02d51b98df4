// cinema-cli/src/main.rs
//
// Entry point for the `cinema` binary.
//
// Responsibilities include:
// - Parsing command-line arguments (`Cli`).
// - Setting up logging.
// - Building the cinema-core configuration from flags and environment.
// - Dispatching to the `info` and `render` commands.
// - Mapping failures to a non-zero exit code.

use cinema_cli::{Cli, Commands, logging, run_info, run_render};
use clap::Parser;
use std::process;

fn main() {
    // Usage errors, malformed edits included, exit with clap's code 2.
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.core_config();
    let result = match &cli.command {
        Commands::Info(args) => run_info(&config, args),
        Commands::Render(args) => run_render(&config, args),
    };

    if let Err(e) = result {
        log::debug!("Command failed: {:?}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
