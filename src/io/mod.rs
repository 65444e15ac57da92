pub mod output;
pub mod portfolio;

pub use output::{
    create_writer, IndicatorReport, OutputFormat, OutputWriter, ProjectReport, ReportOptions,
};
pub use portfolio::{load_portfolio, parse_portfolio, PortfolioFormat};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
