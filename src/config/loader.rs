use std::fs;
use std::path::{Path, PathBuf};

use super::core::RoimapConfig;

/// Project-level configuration file name
pub const CONFIG_FILE_NAME: &str = ".roimap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse config from TOML string
pub fn parse_config(contents: &str) -> Result<RoimapConfig, String> {
    toml::from_str::<RoimapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Try loading config from a specific path; `None` when absent or invalid
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RoimapConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Per-user configuration file, e.g. `~/.config/roimap/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("roimap").join("config.toml"))
}

/// Search `start` and its ancestors for `.roimap.toml`, then the user config.
pub fn load_config_from(start: PathBuf) -> RoimapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .or_else(|| user_config_path().and_then(|path| try_load_config_from_path(&path)))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RoimapConfig::default()
        })
}

pub fn load_config() -> RoimapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            RoimapConfig::default()
        }
    }
}

/// Load an explicitly named config file; errors are reported, not swallowed.
pub fn load_config_from_path(path: &Path) -> crate::core::Result<RoimapConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| crate::core::Error::file_system("Cannot read config file", path, e))?;
    parse_config(&contents).map_err(crate::core::Error::Configuration)
}
