use crate::core::IndicatorType;
use serde::Serialize;
use std::fmt;

/// Payback placeholder meaning "never reached under the current monthly flow".
pub const UNBOUNDED_PAYBACK_MONTHS: f64 = 999.0;

/// Unit of a valuation's principal metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum MetricUnit {
    #[serde(rename = "min")]
    Minutes,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "pp")]
    PercentagePoints,
    #[serde(rename = "pts")]
    Points,
    #[serde(rename = "")]
    None,
}

impl MetricUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            MetricUnit::Minutes => "min",
            MetricUnit::Percent => "%",
            MetricUnit::PercentagePoints => "pp",
            MetricUnit::Points => "pts",
            MetricUnit::None => "",
        }
    }
}

impl fmt::Display for MetricUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Monthly monetary value of an indicator plus its headline metric.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    pub monthly_value: f64,
    pub principal_metric: f64,
    pub unit: MetricUnit,
    pub description: String,
}

impl Valuation {
    pub fn zero() -> Self {
        Self {
            monthly_value: 0.0,
            principal_metric: 0.0,
            unit: MetricUnit::None,
            description: String::new(),
        }
    }
}

/// Additional costs split into one-time and monthly recurring totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalCostSplit {
    pub one_time: f64,
    pub monthly_recurring: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffSummary {
    /// Number of staff entries recorded, whether or not staff cost is enabled.
    pub count: usize,
    pub monthly_cost: f64,
}

/// Derived financial metrics of one indicator.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorRoi {
    pub indicator_type: IndicatorType,
    pub valuation: Valuation,
    pub monthly_multiplier: f64,
    pub monthly_economy: f64,
    pub annual_economy: f64,
    pub net_annual_economy: f64,
    pub implementation_cost: f64,
    pub monthly_cost: f64,
    pub annual_recurring_cost: f64,
    pub total_investment: f64,
    pub additional_costs: AdditionalCostSplit,
    pub staff: StaffSummary,
    /// Rounded to 2 decimal places.
    pub roi_pct: f64,
    /// Rounded to 1 decimal place; [`UNBOUNDED_PAYBACK_MONTHS`] when never reached.
    pub payback_months: f64,
}

impl IndicatorRoi {
    /// Whether the investment is recovered at all under the current flow.
    pub fn pays_back(&self) -> bool {
        self.payback_months < UNBOUNDED_PAYBACK_MONTHS
    }
}

/// An indicator's metrics tagged with its identity, as listed in a project result.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorBreakdown {
    pub indicator_id: String,
    pub name: String,
    pub metrics: IndicatorRoi,
}

/// Months covered by [`ProjectRoi::cumulative_net_projection`].
pub const PROJECTION_MONTHS: usize = 12;

/// Annual economy of the indicators of one type within a project.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeEconomy {
    pub indicator_type: IndicatorType,
    pub count: usize,
    pub annual_economy: f64,
}

/// Aggregated metrics of a set of indicators.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRoi {
    pub total_indicators: usize,
    pub annual_economy_total: f64,
    pub implementation_cost_total: f64,
    pub annual_recurring_cost_total: f64,
    /// Computed on the summed totals, rounded to 2 decimal places.
    pub overall_roi_pct: f64,
    /// Mean over indicators that pay back, rounded to 1 decimal place.
    pub average_payback_months: f64,
    /// Types with a positive annual economy, in catalog order.
    pub economy_by_type: Vec<TypeEconomy>,
    /// Net economy (annual economy less recurring cost) accumulated month by
    /// month over the first year.
    pub cumulative_net_projection: Vec<f64>,
    /// Per-indicator metrics in input order.
    pub indicators: Vec<IndicatorBreakdown>,
}

impl ProjectRoi {
    pub fn empty() -> Self {
        Self {
            total_indicators: 0,
            annual_economy_total: 0.0,
            implementation_cost_total: 0.0,
            annual_recurring_cost_total: 0.0,
            overall_roi_pct: 0.0,
            average_payback_months: 0.0,
            economy_by_type: Vec::new(),
            cumulative_net_projection: vec![0.0; PROJECTION_MONTHS],
            indicators: Vec::new(),
        }
    }

    pub fn total_investment(&self) -> f64 {
        self.implementation_cost_total + self.annual_recurring_cost_total
    }

    /// Indicators excluded from the payback average.
    pub fn non_paying_indicators(&self) -> impl Iterator<Item = &IndicatorBreakdown> {
        self.indicators.iter().filter(|b| !b.metrics.pays_back())
    }
}
