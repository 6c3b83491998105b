//! Tracing subscriber setup.

use std::io;

use tracing_subscriber::EnvFilter;

/// Picks the log filter: `-v` raises the configured level to debug, `-vv` to trace.
pub fn default_directive(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Installs a stderr fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise the filter comes from
/// [`default_directive`]. An invalid configured directive falls back to `warn`.
pub fn init(verbose: u8, configured: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(default_directive(verbose, configured))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("warning: logging disabled: {e}");
    }
}
