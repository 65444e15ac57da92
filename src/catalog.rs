//! Reference data shown next to indicator inputs: labels, formula text and units.

use crate::core::{CostCategory, IndicatorType, Period};
use crate::roi::{period_multiplier, MetricUnit};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorTypeInfo {
    pub indicator_type: IndicatorType,
    pub label: &'static str,
    pub formula: &'static str,
    pub unit: MetricUnit,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodInfo {
    pub period: Period,
    pub label: &'static str,
    pub monthly_multiplier: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCategoryInfo {
    pub category: CostCategory,
    pub label: &'static str,
}

pub fn indicator_type_info(indicator_type: IndicatorType) -> IndicatorTypeInfo {
    let (label, formula, unit) = match indicator_type {
        IndicatorType::Productivity => (
            "Productivity",
            "(Time Before - Time After) x Frequency x Hourly Rate",
            MetricUnit::Minutes,
        ),
        IndicatorType::AnalyticCapability => (
            "Analytic Capability",
            "Decision Value x Frequency x Hit Rate Gain",
            MetricUnit::Percent,
        ),
        IndicatorType::RevenueIncrement => (
            "Revenue Increment",
            "New Revenue - Base Revenue",
            MetricUnit::Percent,
        ),
        IndicatorType::MarginImprovement => (
            "Margin Improvement",
            "(New Margin - Old Margin) x Volume",
            MetricUnit::PercentagePoints,
        ),
        IndicatorType::RiskReduction => (
            "Risk Reduction",
            "(Probability Before - Probability After) x Impact x Frequency",
            MetricUnit::PercentagePoints,
        ),
        IndicatorType::DecisionQuality => (
            "Decision Quality",
            "Score Delta x 100 x Frequency",
            MetricUnit::Points,
        ),
        IndicatorType::Velocity => (
            "Velocity",
            "Days Saved per Delivery x 500 x Frequency",
            MetricUnit::Percent,
        ),
        IndicatorType::Satisfaction => (
            "Satisfaction",
            "NPS/CSAT Delta x 200 x Frequency",
            MetricUnit::Points,
        ),
        IndicatorType::Unknown => ("Unknown", "No formula (valued at zero)", MetricUnit::None),
    };
    IndicatorTypeInfo {
        indicator_type,
        label,
        formula,
        unit,
    }
}

pub fn indicator_types() -> Vec<IndicatorTypeInfo> {
    IndicatorType::ALL.into_iter().map(indicator_type_info).collect()
}

pub fn periods() -> Vec<PeriodInfo> {
    Period::ALL
        .into_iter()
        .map(|period| PeriodInfo {
            period,
            label: match period {
                Period::Day => "Per day",
                Period::Week => "Per week",
                Period::Month => "Per month",
                Period::Year => "Per year",
                Period::Unknown => "Unknown",
            },
            monthly_multiplier: period_multiplier(period),
        })
        .collect()
}

pub fn cost_categories() -> Vec<CostCategoryInfo> {
    CostCategory::ALL
        .into_iter()
        .map(|category| CostCategoryInfo {
            category,
            label: match category {
                CostCategory::Implementation => "Implementation",
                CostCategory::License => "Software Licenses",
                CostCategory::Api => "APIs and Tokens",
                CostCategory::Infrastructure => "Infrastructure",
                CostCategory::Training => "Training",
                CostCategory::Consulting => "Consulting",
                CostCategory::Maintenance => "Maintenance",
                CostCategory::Support => "Support",
                CostCategory::Other => "Other",
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_type() {
        let types = indicator_types();
        assert_eq!(types.len(), 8);
        assert!(types.iter().all(|t| t.indicator_type != IndicatorType::Unknown));
        assert_eq!(types[0].label, "Productivity");
    }

    #[test]
    fn test_periods_carry_multipliers() {
        let periods = periods();
        assert_eq!(periods.len(), 4);
        assert_eq!(periods[0].monthly_multiplier, 21.0);
        assert_eq!(periods[3].monthly_multiplier, 1.0 / 12.0);
    }

    #[test]
    fn test_cost_categories() {
        let categories = cost_categories();
        assert_eq!(categories.len(), 9);
        assert_eq!(categories.last().map(|c| c.category), Some(CostCategory::Other));
    }
}
