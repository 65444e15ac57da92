use super::indicator::{compute_indicator_roi, roi_percentage, round_half_up};
use super::models::{
    IndicatorBreakdown, IndicatorRoi, ProjectRoi, TypeEconomy, PROJECTION_MONTHS,
};
use crate::core::{Indicator, IndicatorType};
use rayon::prelude::*;
use tracing::debug_span;

/// Sum that does not depend on the order of its inputs.
///
/// Floating point addition is not associative, so values are put in total
/// order before being added.
pub fn order_independent_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut values: Vec<f64> = values.into_iter().collect();
    values.sort_by(f64::total_cmp);
    values.into_iter().fold(0.0, |acc, value| acc + value)
}

/// Aggregate a project's indicators.
pub fn compute_project_roi(indicators: &[Indicator]) -> ProjectRoi {
    let _span = debug_span!("compute_project_roi", indicators = indicators.len()).entered();
    let metrics: Vec<IndicatorRoi> = indicators.iter().map(compute_indicator_roi).collect();
    aggregate(indicators, metrics)
}

/// Same result as [`compute_project_roi`], with per-indicator work spread over
/// rayon's thread pool.
pub fn compute_project_roi_parallel(indicators: &[Indicator]) -> ProjectRoi {
    let _span =
        debug_span!("compute_project_roi_parallel", indicators = indicators.len()).entered();
    let metrics: Vec<IndicatorRoi> = indicators.par_iter().map(compute_indicator_roi).collect();
    aggregate(indicators, metrics)
}

/// Annual economy per indicator type. Types without a positive economy are left out.
pub fn economy_by_type(metrics: &[IndicatorRoi]) -> Vec<TypeEconomy> {
    IndicatorType::ALL
        .iter()
        .map(|&indicator_type| {
            let of_type: Vec<f64> = metrics
                .iter()
                .filter(|m| m.indicator_type == indicator_type)
                .map(|m| m.annual_economy)
                .collect();
            TypeEconomy {
                indicator_type,
                count: of_type.len(),
                annual_economy: order_independent_sum(of_type),
            }
        })
        .filter(|entry| entry.annual_economy > 0.0)
        .collect()
}

/// Running net economy for each month of the first year.
pub fn cumulative_net_projection(annual_economy: f64, annual_recurring_cost: f64) -> Vec<f64> {
    let monthly_net = (annual_economy - annual_recurring_cost) / PROJECTION_MONTHS as f64;
    (1..=PROJECTION_MONTHS)
        .map(|month| monthly_net * month as f64)
        .collect()
}

fn aggregate(indicators: &[Indicator], metrics: Vec<IndicatorRoi>) -> ProjectRoi {
    if metrics.is_empty() {
        return ProjectRoi::empty();
    }

    let annual_economy_total = order_independent_sum(metrics.iter().map(|m| m.annual_economy));
    let implementation_cost_total =
        order_independent_sum(metrics.iter().map(|m| m.implementation_cost));
    let annual_recurring_cost_total =
        order_independent_sum(metrics.iter().map(|m| m.annual_recurring_cost));

    let total_investment = implementation_cost_total + annual_recurring_cost_total;
    let overall_roi_pct = roi_percentage(annual_economy_total, total_investment);

    let paying: Vec<f64> = metrics
        .iter()
        .filter(|m| m.pays_back())
        .map(|m| m.payback_months)
        .collect();
    let average_payback_months = if paying.is_empty() {
        0.0
    } else {
        let count = paying.len() as f64;
        order_independent_sum(paying) / count
    };

    log::debug!(
        "Aggregated {} indicators ({} excluded from payback average)",
        metrics.len(),
        metrics.iter().filter(|m| !m.pays_back()).count()
    );

    let economy_by_type = economy_by_type(&metrics);
    let cumulative_net_projection =
        cumulative_net_projection(annual_economy_total, annual_recurring_cost_total);

    let breakdown = indicators
        .iter()
        .zip(metrics)
        .map(|(indicator, metrics)| IndicatorBreakdown {
            indicator_id: indicator.id.clone(),
            name: indicator.name.clone(),
            metrics,
        })
        .collect::<Vec<_>>();

    ProjectRoi {
        total_indicators: breakdown.len(),
        annual_economy_total,
        implementation_cost_total,
        annual_recurring_cost_total,
        overall_roi_pct: round_half_up(overall_roi_pct, 2),
        average_payback_months: round_half_up(average_payback_months, 1),
        economy_by_type,
        cumulative_net_projection,
        indicators: breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_independent_sum_is_permutation_invariant() {
        let forward = order_independent_sum([0.1, 0.2, 0.3, 1e16, -1e16]);
        let backward = order_independent_sum([-1e16, 1e16, 0.3, 0.2, 0.1]);
        assert_eq!(forward.to_bits(), backward.to_bits());
    }

    #[test]
    fn test_projection_accumulates_net_monthly_economy() {
        let projection = cumulative_net_projection(3000.0, 600.0);
        assert_eq!(projection.len(), PROJECTION_MONTHS);
        assert_eq!(projection[0], 200.0);
        assert_eq!(projection[5], 1200.0);
        assert_eq!(projection[11], 2400.0);
    }

    #[test]
    fn test_projection_goes_negative_when_costs_dominate() {
        let projection = cumulative_net_projection(0.0, 1200.0);
        assert_eq!(projection[0], -100.0);
        assert_eq!(projection[11], -1200.0);
    }

    #[test]
    fn test_order_independent_sum_empty_is_positive_zero() {
        let sum = order_independent_sum(std::iter::empty());
        assert_eq!(sum.to_bits(), 0.0f64.to_bits());
    }
}
