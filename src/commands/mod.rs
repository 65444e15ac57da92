//! CLI command implementations for roimap.
//!
//! Available commands:
//! - **project**: Aggregate ROI per project of a portfolio
//! - **indicator**: Break down the ROI of a single indicator
//! - **types**: Print the indicator type, period and cost category catalog
//! - **init**: Initialize a new roimap configuration file

pub mod destination;
pub mod indicator;
pub mod init;
pub mod project;
pub mod types;

pub use indicator::{build_indicator_report, handle_indicator, IndicatorConfig};
pub use init::{init_config, init_config_in};
pub use project::{build_project_reports, handle_project, ProjectConfig, UNASSIGNED_PROJECT};
pub use types::print_catalog;
