//! Monthly valuation formulas, one per indicator type.
//!
//! Each formula reads only the baseline/with-AI fields relevant to its type
//! and returns the monetary value of one month of operation. Callers
//! annualize.

use super::models::{MetricUnit, Valuation};
use crate::core::{Baseline, IndicatorType, WithAi};

/// Currency value of one day shaved off a delivery.
pub const VELOCITY_VALUE_PER_DAY: f64 = 500.0;
/// Currency value of one point of decision-quality score.
pub const DECISION_QUALITY_VALUE_PER_POINT: f64 = 100.0;
/// Currency value of one point of NPS/CSAT.
pub const SATISFACTION_VALUE_PER_POINT: f64 = 200.0;

/// Value an indicator of the given type for one month.
pub fn valuate(
    indicator_type: IndicatorType,
    baseline: &Baseline,
    with_ai: &WithAi,
    monthly_multiplier: f64,
) -> Valuation {
    match indicator_type {
        IndicatorType::Productivity => productivity(baseline, with_ai, monthly_multiplier),
        IndicatorType::AnalyticCapability => {
            analytic_capability(baseline, with_ai, monthly_multiplier)
        }
        IndicatorType::RevenueIncrement => revenue_increment(baseline, with_ai),
        IndicatorType::MarginImprovement => margin_improvement(baseline, with_ai),
        IndicatorType::RiskReduction => risk_reduction(baseline, with_ai, monthly_multiplier),
        IndicatorType::DecisionQuality => decision_quality(baseline, with_ai, monthly_multiplier),
        IndicatorType::Velocity => velocity(baseline, with_ai, monthly_multiplier),
        IndicatorType::Satisfaction => satisfaction(baseline, with_ai, monthly_multiplier),
        IndicatorType::Unknown => Valuation::zero(),
    }
}

/// Time saved per execution times the labor rate.
fn productivity(baseline: &Baseline, with_ai: &WithAi, monthly_multiplier: f64) -> Valuation {
    let minutes_saved = baseline.time_before_minutes - with_ai.time_after_minutes;
    let hours_saved = minutes_saved / 60.0;
    Valuation {
        monthly_value: hours_saved * monthly_multiplier * baseline.hourly_rate,
        principal_metric: minutes_saved,
        unit: MetricUnit::Minutes,
        description: format!("{} min saved per execution", plain(minutes_saved)),
    }
}

/// Value of a decision weighted by the gain in hit rate.
fn analytic_capability(baseline: &Baseline, with_ai: &WithAi, monthly_multiplier: f64) -> Valuation {
    let gain = with_ai.hit_rate_after / 100.0 - baseline.hit_rate_before / 100.0;
    Valuation {
        monthly_value: baseline.decision_value * monthly_multiplier * gain,
        principal_metric: gain * 100.0,
        unit: MetricUnit::Percent,
        description: format!("{}% accuracy", signed_fixed(gain * 100.0)),
    }
}

/// Direct revenue delta; the frequency does not apply.
fn revenue_increment(baseline: &Baseline, with_ai: &WithAi) -> Valuation {
    let increment = with_ai.new_revenue - baseline.base_revenue;
    // The percentage needs a positive base; the economy does not.
    let change_pct = if baseline.base_revenue > 0.0 {
        increment / baseline.base_revenue * 100.0
    } else {
        0.0
    };
    Valuation {
        monthly_value: increment,
        principal_metric: change_pct,
        unit: MetricUnit::Percent,
        description: format!("{} revenue", signed(increment)),
    }
}

/// Margin gain applied to the monthly volume.
fn margin_improvement(baseline: &Baseline, with_ai: &WithAi) -> Valuation {
    let gain = with_ai.new_margin_pct / 100.0 - baseline.old_margin_pct / 100.0;
    Valuation {
        monthly_value: gain * baseline.volume,
        principal_metric: gain * 100.0,
        unit: MetricUnit::PercentagePoints,
        description: format!("{}pp margin", signed_fixed(gain * 100.0)),
    }
}

/// Expected avoided impact.
fn risk_reduction(baseline: &Baseline, with_ai: &WithAi, monthly_multiplier: f64) -> Valuation {
    let reduction = baseline.risk_probability_before / 100.0 - with_ai.risk_probability_after / 100.0;
    Valuation {
        monthly_value: reduction * baseline.impact_if_occurred * monthly_multiplier,
        principal_metric: reduction * 100.0,
        unit: MetricUnit::PercentagePoints,
        description: format!("{}pp risk", signed_fixed(0.0 - reduction * 100.0)),
    }
}

fn decision_quality(baseline: &Baseline, with_ai: &WithAi, monthly_multiplier: f64) -> Valuation {
    let delta = with_ai.score_after - baseline.score_before;
    Valuation {
        monthly_value: delta * DECISION_QUALITY_VALUE_PER_POINT * monthly_multiplier,
        principal_metric: delta,
        unit: MetricUnit::Points,
        description: format!("{} quality points", signed(delta)),
    }
}

fn velocity(baseline: &Baseline, with_ai: &WithAi, monthly_multiplier: f64) -> Valuation {
    let before = baseline.delivery_time_before_days;
    let days_saved = before - with_ai.delivery_time_after_days;
    let reduction_pct = if before > 0.0 {
        days_saved / before * 100.0
    } else {
        0.0
    };
    Valuation {
        monthly_value: days_saved * VELOCITY_VALUE_PER_DAY * monthly_multiplier,
        principal_metric: reduction_pct,
        unit: MetricUnit::Percent,
        description: format!("{}% delivery time", signed_fixed(0.0 - reduction_pct)),
    }
}

fn satisfaction(baseline: &Baseline, with_ai: &WithAi, monthly_multiplier: f64) -> Valuation {
    let delta = with_ai.score_after - baseline.score_before;
    Valuation {
        monthly_value: delta * SATISFACTION_VALUE_PER_POINT * monthly_multiplier,
        principal_metric: delta,
        unit: MetricUnit::Points,
        description: format!("{} NPS/CSAT points", signed(delta)),
    }
}

// -0.0 renders as "-0" otherwise
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

fn plain(value: f64) -> String {
    format!("{}", normalize_zero(value))
}

fn signed(value: f64) -> String {
    format!("{:+}", normalize_zero(value))
}

fn signed_fixed(value: f64) -> String {
    format!("{:+.1}", normalize_zero(value))
}
