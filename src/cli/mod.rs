//! Command-line interface for roimap
//!
//! - Argument parsing (`args`)
//! - Runtime setup: logging, colors and the rayon pool (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, Commands};
pub use setup::{apply_color_preference, configure_thread_pool, init_logging, log_level_for};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
