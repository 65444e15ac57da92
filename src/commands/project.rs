use super::destination::{open_destination, report_options};
use crate::config::RoimapConfig;
use crate::core::{Error, Indicator, Portfolio, Project};
use crate::io::output::{create_writer, OutputFormat, ProjectReport};
use crate::io::portfolio::load_portfolio;
use crate::roi::{compute_project_roi, compute_project_roi_parallel};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

/// Name of the synthetic group holding indicators without a known project.
pub const UNASSIGNED_PROJECT: &str = "Unassigned";

pub struct ProjectConfig {
    pub portfolio: PathBuf,
    pub project: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub no_parallel: bool,
}

/// Project reports for `portfolio`, in stored project order.
///
/// With `project_id` only that project is reported. Without it, indicators
/// pointing at no known project are appended as an [`UNASSIGNED_PROJECT`]
/// group when there are any.
pub fn build_project_reports(
    portfolio: &Portfolio,
    project_id: Option<&str>,
    config: &RoimapConfig,
    no_parallel: bool,
) -> crate::core::Result<Vec<ProjectReport>> {
    let aggregate = |project: &Project, indicators: Vec<Indicator>| {
        let parallel = !no_parallel && config.use_parallel(indicators.len());
        let roi = if parallel {
            compute_project_roi_parallel(&indicators)
        } else {
            compute_project_roi(&indicators)
        };
        ProjectReport {
            project: project.clone(),
            roi,
        }
    };

    if let Some(id) = project_id {
        let project = portfolio
            .project(id)
            .ok_or_else(|| Error::ProjectNotFound(id.to_string()))?;
        return Ok(vec![aggregate(project, portfolio.indicators_for(id))]);
    }

    let mut reports: Vec<ProjectReport> = portfolio
        .projects
        .iter()
        .map(|project| aggregate(project, portfolio.indicators_for(&project.id)))
        .collect();

    let unassigned = portfolio.unassigned_indicators();
    if !unassigned.is_empty() {
        log::info!("{} indicators reference no known project", unassigned.len());
        let group = Project {
            name: UNASSIGNED_PROJECT.to_string(),
            ..Project::default()
        };
        reports.push(aggregate(&group, unassigned));
    }

    Ok(reports)
}

pub fn handle_project(config: ProjectConfig, app_config: &RoimapConfig) -> Result<()> {
    let portfolio = load_portfolio(&config.portfolio)
        .with_context(|| format!("Failed to load {}", config.portfolio.display()))?;
    let reports = build_project_reports(
        &portfolio,
        config.project.as_deref(),
        app_config,
        config.no_parallel,
    )?;

    let format = config.format.unwrap_or_else(|| app_config.default_format());
    let mut destination = open_destination(config.output.as_deref())?;
    {
        let mut writer = create_writer(
            format,
            Box::new(&mut destination),
            report_options(app_config),
        );
        writer.write_projects(&reports)?;
    }
    destination.flush()?;

    if let Some(path) = &config.output {
        log::info!("Report written to {}", path.display());
    }
    Ok(())
}
