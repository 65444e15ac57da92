//! roimap: return-on-investment metrics for AI initiatives.
//!
//! Indicators record a business metric before and after AI adoption plus the
//! costs of that adoption. The [`roi`] engine turns them into monthly and
//! annual economy, ROI percentage and payback, per indicator and per project.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod roi;

// Re-export commonly used types
pub use crate::core::{
    AdditionalCost, Baseline, BillingPeriod, CostCategory, CostKind, Frequency, Indicator,
    IndicatorType, Period, Portfolio, Project, StaffCost, WithAi,
};

pub use crate::roi::{
    compute_indicator_roi, compute_project_roi, compute_project_roi_parallel, monthly_multiplier,
    monthly_staff_cost, split_additional_costs, valuate, IndicatorRoi, ProjectRoi, TypeEconomy,
    Valuation,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::io::portfolio::{load_portfolio, parse_portfolio};
