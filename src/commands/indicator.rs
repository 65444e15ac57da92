use super::destination::{open_destination, report_options};
use crate::config::RoimapConfig;
use crate::core::{Error, Portfolio};
use crate::io::output::{create_writer, IndicatorReport, OutputFormat};
use crate::io::portfolio::load_portfolio;
use crate::roi::compute_indicator_roi;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

pub struct IndicatorConfig {
    pub portfolio: PathBuf,
    pub id: String,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn build_indicator_report(
    portfolio: &Portfolio,
    id: &str,
) -> crate::core::Result<IndicatorReport> {
    let indicator = portfolio
        .indicator(id)
        .ok_or_else(|| Error::IndicatorNotFound(id.to_string()))?;
    Ok(IndicatorReport::new(indicator, compute_indicator_roi(indicator)))
}

pub fn handle_indicator(config: IndicatorConfig, app_config: &RoimapConfig) -> Result<()> {
    let portfolio = load_portfolio(&config.portfolio)
        .with_context(|| format!("Failed to load {}", config.portfolio.display()))?;
    let report = build_indicator_report(&portfolio, &config.id)?;

    let format = config.format.unwrap_or_else(|| app_config.default_format());
    let mut destination = open_destination(config.output.as_deref())?;
    {
        let mut writer = create_writer(
            format,
            Box::new(&mut destination),
            report_options(app_config),
        );
        writer.write_indicator(&report)?;
    }
    destination.flush()?;
    Ok(())
}
