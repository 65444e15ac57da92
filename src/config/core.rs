use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};

/// Root configuration structure for roimap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RoimapConfig {
    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Parallel aggregation configuration
    #[serde(default)]
    pub parallel: Option<ParallelConfig>,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_show_details() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub default_format: Option<OutputFormat>,

    /// Currency symbol prefixed to monetary values in reports
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Include the per-indicator breakdown in project reports
    #[serde(default = "default_show_details")]
    pub show_details: bool,

    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: None,
            currency: default_currency(),
            show_details: default_show_details(),
            use_color: None,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_min_indicators() -> usize {
    64
}

/// Controls when project aggregation runs on rayon's thread pool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParallelConfig {
    /// Enable parallel aggregation (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Worker threads; 0 uses every available core
    #[serde(default)]
    pub jobs: usize,

    /// Projects with fewer indicators are aggregated sequentially (default: 64)
    #[serde(default = "default_min_indicators")]
    pub min_indicators: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            jobs: 0,
            min_indicators: default_min_indicators(),
        }
    }
}

impl RoimapConfig {
    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }

    pub fn parallel(&self) -> ParallelConfig {
        self.parallel.clone().unwrap_or_default()
    }

    pub fn default_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.default_format)
            .unwrap_or_default()
    }

    /// Whether a project of `indicator_count` indicators should be aggregated in parallel.
    pub fn use_parallel(&self, indicator_count: usize) -> bool {
        let parallel = self.parallel();
        parallel.enabled && indicator_count >= parallel.min_indicators
    }
}
