//! Setup and initialization functions for the CLI
//!
//! Logging, terminal colors and the global thread pool are configured once,
//! before any command runs.

use tracing_subscriber::EnvFilter;

/// Configure rayon global thread pool once at startup
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();

    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }

    if let Err(e) = builder.build_global() {
        // Already configured
        log::debug!("Thread pool already configured: {}", e);
    }
}

/// Default filter directive for a `-v` count
pub fn log_level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the fmt subscriber on stderr. `RUST_LOG` wins over `-v`.
///
/// `log` records from the library are forwarded through the subscriber's
/// log bridge.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level_for(verbosity)));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("Note: logging already initialized: {}", e);
    }
}

/// Force colors on or off; `None` keeps colored's TTY detection.
pub fn apply_color_preference(use_color: Option<bool>) {
    if let Some(enabled) = use_color {
        colored::control::set_override(enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(log_level_for(0), "warn");
        assert_eq!(log_level_for(1), "info");
        assert_eq!(log_level_for(2), "debug");
        assert_eq!(log_level_for(3), "trace");
        assert_eq!(log_level_for(9), "trace");
    }
}
