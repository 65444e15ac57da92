use super::costs::{monthly_staff_cost, split_additional_costs};
use super::frequency::monthly_multiplier;
use super::models::{IndicatorRoi, StaffSummary, UNBOUNDED_PAYBACK_MONTHS};
use super::valuation::valuate;
use crate::core::Indicator;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Round half up toward positive infinity to `decimals` places.
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

/// First-year ROI percentage. Zero investment with positive economy reports 100%.
pub fn roi_percentage(annual_economy: f64, total_investment: f64) -> f64 {
    if total_investment > 0.0 {
        (annual_economy - total_investment) / total_investment * 100.0
    } else if annual_economy > 0.0 {
        100.0
    } else {
        0.0
    }
}

/// Months until the net monthly flow recovers the implementation cost.
///
/// Returns [`UNBOUNDED_PAYBACK_MONTHS`] when there is something to recover
/// but the flow never does, and `0.0` when nothing was invested.
pub fn payback_months(implementation_cost: f64, net_monthly_flow: f64) -> f64 {
    if implementation_cost > 0.0 && net_monthly_flow > 0.0 {
        implementation_cost / net_monthly_flow
    } else if implementation_cost > 0.0 {
        UNBOUNDED_PAYBACK_MONTHS
    } else {
        0.0
    }
}

/// Compute the full metrics record of one indicator. Never fails.
pub fn compute_indicator_roi(indicator: &Indicator) -> IndicatorRoi {
    let with_ai = &indicator.with_ai;
    let multiplier = monthly_multiplier(indicator.frequency.as_ref());
    let valuation = valuate(
        indicator.indicator_type,
        &indicator.baseline,
        with_ai,
        multiplier,
    );

    let additional_costs = split_additional_costs(&with_ai.additional_costs);
    let staff = StaffSummary {
        count: with_ai.staff.len(),
        monthly_cost: monthly_staff_cost(&with_ai.staff, with_ai.has_staff_involved),
    };

    let implementation_cost = with_ai.implementation_cost + additional_costs.one_time;
    let monthly_cost = with_ai.monthly_tooling_cost
        + with_ai.monthly_maintenance_cost
        + additional_costs.monthly_recurring
        + staff.monthly_cost;
    let annual_recurring_cost = monthly_cost * MONTHS_PER_YEAR;

    let monthly_economy = valuation.monthly_value;
    let annual_economy = monthly_economy * MONTHS_PER_YEAR;
    let net_annual_economy = annual_economy - annual_recurring_cost;
    let total_investment = implementation_cost + annual_recurring_cost;

    let roi_pct = roi_percentage(annual_economy, total_investment);
    let payback = payback_months(implementation_cost, monthly_economy - monthly_cost);

    IndicatorRoi {
        indicator_type: indicator.indicator_type,
        valuation,
        monthly_multiplier: multiplier,
        monthly_economy,
        annual_economy,
        net_annual_economy,
        implementation_cost,
        monthly_cost,
        annual_recurring_cost,
        total_investment,
        additional_costs,
        staff,
        roi_pct: round_half_up(roi_pct, 2),
        payback_months: round_half_up(payback, 1),
    }
}
