//! `.roimap.toml` configuration.

mod core;
mod loader;

pub use core::{OutputConfig, ParallelConfig, RoimapConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path, parse_config,
    user_config_path, CONFIG_FILE_NAME,
};
