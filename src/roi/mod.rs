//! ROI calculation engine.
//!
//! Pure functions from indicator records to derived financial metrics:
//!
//! - [`frequency`]: recurrence → monthly multiplier
//! - [`valuation`]: one monthly valuation formula per indicator type
//! - [`costs`]: one-time vs recurring additional costs, staff labor cost
//! - [`indicator`]: per-indicator economy, cost, ROI% and payback
//! - [`project`]: aggregation over a project's indicators, economy by type
//!   and the first-year cumulative projection
//!
//! Nothing here fails or keeps state; results are recomputed from the
//! current records on every call.

pub mod costs;
pub mod frequency;
pub mod indicator;
pub mod models;
pub mod project;
pub mod valuation;

#[cfg(test)]
mod tests;

pub use costs::{monthly_staff_cost, split_additional_costs, staff_entry_monthly_cost};
pub use frequency::{monthly_multiplier, period_multiplier};
pub use indicator::{compute_indicator_roi, payback_months, roi_percentage, round_half_up};
pub use models::{
    AdditionalCostSplit, IndicatorBreakdown, IndicatorRoi, MetricUnit, ProjectRoi, StaffSummary,
    TypeEconomy, Valuation, PROJECTION_MONTHS, UNBOUNDED_PAYBACK_MONTHS,
};
pub use project::{
    compute_project_roi, compute_project_roi_parallel, cumulative_net_projection, economy_by_type,
    order_independent_sum,
};
pub use valuation::valuate;
