use anyhow::{Result, anyhow};
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log level for a given number of `-v` flags. Quiet by default so stdout
/// stays clean for shell capture and stderr only shows problems.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber. Logs never go to stdout.
pub fn init(verbose: u8) -> Result<()> {
    let filter = EnvFilter::new(level_for_verbosity(verbose));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
