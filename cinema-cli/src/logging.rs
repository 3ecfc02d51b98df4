// ============================================================================
// cinema-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the CLI
//
// The core library logs through the `log` facade. The CLI installs
// env_logger with `info` as the default level (`debug` with --verbose);
// RUST_LOG, when set, takes precedence.

use log::LevelFilter;
use std::io::Write;

/// Returns the default level for the given verbosity flag.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the global logger. Safe to call once per process.
pub fn init(verbose: bool) {
    let level = level_for(verbose);

    env_logger::Builder::new()
        .format(|buf, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };
            writeln!(buf, "{} {}", level_str, record.args())
        })
        .filter_level(level)
        .parse_default_env()
        .init();

    log::debug!("Logger initialized with level: {}", level);
}
