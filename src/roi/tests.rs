use super::*;
use crate::core::{
    AdditionalCost, Baseline, BillingPeriod, Frequency, Indicator, IndicatorType, Period,
    StaffCost, WithAi,
};
use pretty_assertions::assert_eq;

fn create_productivity_indicator(id: &str, implementation_cost: f64, tooling: f64) -> Indicator {
    Indicator {
        id: id.to_string(),
        project_id: "p1".to_string(),
        name: format!("Indicator {id}"),
        indicator_type: IndicatorType::Productivity,
        frequency: Some(Frequency::new(1, Period::Month)),
        baseline: Baseline {
            time_before_minutes: 60.0,
            hourly_rate: 50.0,
            ..Baseline::default()
        },
        with_ai: WithAi {
            time_after_minutes: 15.0,
            implementation_cost,
            monthly_tooling_cost: tooling,
            ..WithAi::default()
        },
        ..Indicator::default()
    }
}

fn create_revenue_indicator(id: &str, monthly_increment: f64, implementation_cost: f64) -> Indicator {
    Indicator {
        id: id.to_string(),
        project_id: "p1".to_string(),
        name: format!("Indicator {id}"),
        indicator_type: IndicatorType::RevenueIncrement,
        baseline: Baseline {
            base_revenue: 10_000.0,
            ..Baseline::default()
        },
        with_ai: WithAi {
            new_revenue: 10_000.0 + monthly_increment,
            implementation_cost,
            ..WithAi::default()
        },
        ..Indicator::default()
    }
}

#[test]
fn test_productivity_without_costs() {
    let roi = compute_indicator_roi(&create_productivity_indicator("a", 0.0, 0.0));

    assert_eq!(roi.monthly_economy, 37.5);
    assert_eq!(roi.annual_economy, 450.0);
    assert_eq!(roi.total_investment, 0.0);
    assert_eq!(roi.roi_pct, 100.0);
    assert_eq!(roi.payback_months, 0.0);
    assert!(roi.pays_back());
}

#[test]
fn test_productivity_with_implementation_cost() {
    let roi = compute_indicator_roi(&create_productivity_indicator("a", 1000.0, 0.0));

    assert_eq!(roi.implementation_cost, 1000.0);
    assert_eq!(roi.total_investment, 1000.0);
    assert_eq!(roi.roi_pct, -55.0);
    assert_eq!(roi.payback_months, 26.7);
}

#[test]
fn test_negative_flow_never_pays_back() {
    let roi = compute_indicator_roi(&create_productivity_indicator("a", 1000.0, 50.0));

    assert_eq!(roi.monthly_cost, 50.0);
    assert_eq!(roi.annual_recurring_cost, 600.0);
    assert_eq!(roi.net_annual_economy, -150.0);
    assert_eq!(roi.total_investment, 1600.0);
    assert_eq!(roi.roi_pct, -71.87);
    assert_eq!(roi.payback_months, UNBOUNDED_PAYBACK_MONTHS);
    assert!(!roi.pays_back());
}

#[test]
fn test_full_cost_structure() {
    let indicator = Indicator {
        id: "full".to_string(),
        indicator_type: IndicatorType::Productivity,
        frequency: Some(Frequency::new(2, Period::Day)),
        baseline: Baseline {
            time_before_minutes: 60.0,
            hourly_rate: 60.0,
            ..Baseline::default()
        },
        with_ai: WithAi {
            time_after_minutes: 15.0,
            implementation_cost: 2000.0,
            monthly_tooling_cost: 100.0,
            monthly_maintenance_cost: 50.0,
            additional_costs: vec![
                AdditionalCost::one_time("Onboarding", 500.0),
                AdditionalCost::recurring("Support", 1200.0, BillingPeriod::Year),
            ],
            has_staff_involved: true,
            staff: vec![StaffCost {
                execution_time_minutes: 30.0,
                hourly_rate: 40.0,
                frequency: Some(Frequency::new(1, Period::Day)),
            }],
            ..WithAi::default()
        },
        ..Indicator::default()
    };

    let roi = compute_indicator_roi(&indicator);

    assert_eq!(roi.monthly_multiplier, 42.0);
    assert_eq!(roi.monthly_economy, 1890.0);
    assert_eq!(
        roi.additional_costs,
        AdditionalCostSplit {
            one_time: 500.0,
            monthly_recurring: 100.0,
        }
    );
    assert_eq!(
        roi.staff,
        StaffSummary {
            count: 1,
            monthly_cost: 420.0,
        }
    );
    assert_eq!(roi.implementation_cost, 2500.0);
    assert_eq!(roi.monthly_cost, 670.0);
    assert_eq!(roi.annual_recurring_cost, 8040.0);
    assert_eq!(roi.annual_economy, 22680.0);
    assert_eq!(roi.net_annual_economy, 14640.0);
    assert_eq!(roi.total_investment, 10540.0);
    assert_eq!(roi.roi_pct, 115.18);
    assert_eq!(roi.payback_months, 2.0);
}

#[test]
fn test_staff_listed_but_not_involved() {
    let mut indicator = create_productivity_indicator("a", 0.0, 0.0);
    indicator.with_ai.staff = vec![StaffCost {
        execution_time_minutes: 60.0,
        hourly_rate: 100.0,
        frequency: None,
    }];

    let roi = compute_indicator_roi(&indicator);
    assert_eq!(roi.staff.count, 1);
    assert_eq!(roi.staff.monthly_cost, 0.0);
    assert_eq!(roi.monthly_cost, 0.0);
}

#[test]
fn test_unknown_type_values_to_zero() {
    let mut indicator = create_productivity_indicator("a", 100.0, 0.0);
    indicator.indicator_type = IndicatorType::Unknown;

    let roi = compute_indicator_roi(&indicator);
    assert_eq!(roi.valuation, Valuation::zero());
    assert_eq!(roi.annual_economy, 0.0);
    assert_eq!(roi.roi_pct, -100.0);
    assert_eq!(roi.payback_months, UNBOUNDED_PAYBACK_MONTHS);
}

#[test]
fn test_empty_indicator_is_all_zero() {
    let roi = compute_indicator_roi(&Indicator::default());
    assert_eq!(roi.monthly_multiplier, 1.0);
    assert_eq!(roi.annual_economy, 0.0);
    assert_eq!(roi.roi_pct, 0.0);
    assert_eq!(roi.payback_months, 0.0);
}

#[test]
fn test_indicator_roi_is_idempotent() {
    let indicator = create_productivity_indicator("a", 1234.56, 7.89);
    let first = compute_indicator_roi(&indicator);
    let second = compute_indicator_roi(&indicator);

    assert_eq!(first, second);
    assert_eq!(first.roi_pct.to_bits(), second.roi_pct.to_bits());
    assert_eq!(first.payback_months.to_bits(), second.payback_months.to_bits());
}

#[test]
fn test_empty_project() {
    assert_eq!(compute_project_roi(&[]), ProjectRoi::empty());
    assert_eq!(compute_project_roi_parallel(&[]), ProjectRoi::empty());
}

fn create_mixed_project() -> Vec<Indicator> {
    vec![
        // pays back in exactly 20 months
        create_productivity_indicator("a", 750.0, 0.0),
        // never pays back
        create_productivity_indicator("b", 1000.0, 50.0),
        // pays back in exactly 3 months
        create_revenue_indicator("c", 300.0, 900.0),
    ]
}

#[test]
fn test_project_totals() {
    let project = compute_project_roi(&create_mixed_project());

    assert_eq!(project.total_indicators, 3);
    assert_eq!(project.annual_economy_total, 4500.0);
    assert_eq!(project.implementation_cost_total, 2650.0);
    assert_eq!(project.annual_recurring_cost_total, 600.0);
    assert_eq!(project.total_investment(), 3250.0);
    assert_eq!(project.overall_roi_pct, 38.46);
}

#[test]
fn test_project_payback_average_excludes_unbounded() {
    let project = compute_project_roi(&create_mixed_project());

    assert_eq!(project.average_payback_months, 11.5);
    let excluded: Vec<&str> = project
        .non_paying_indicators()
        .map(|b| b.indicator_id.as_str())
        .collect();
    assert_eq!(excluded, vec!["b"]);
}

#[test]
fn test_project_breakdown_keeps_input_order() {
    let project = compute_project_roi(&create_mixed_project());
    let ids: Vec<&str> = project
        .indicators
        .iter()
        .map(|b| b.indicator_id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(project.indicators[0].name, "Indicator a");
}

#[test]
fn test_project_economy_by_type() {
    let project = compute_project_roi(&create_mixed_project());

    assert_eq!(
        project.economy_by_type,
        vec![
            TypeEconomy {
                indicator_type: IndicatorType::Productivity,
                count: 2,
                annual_economy: 900.0,
            },
            TypeEconomy {
                indicator_type: IndicatorType::RevenueIncrement,
                count: 1,
                annual_economy: 3600.0,
            },
        ]
    );
}

#[test]
fn test_types_without_economy_are_not_listed() {
    let mut unknown = create_productivity_indicator("u", 0.0, 0.0);
    unknown.indicator_type = IndicatorType::Unknown;
    let project = compute_project_roi(&[unknown, create_revenue_indicator("c", -50.0, 0.0)]);
    assert!(project.economy_by_type.is_empty());
}

#[test]
fn test_project_cumulative_projection() {
    let project = compute_project_roi(&create_mixed_project());

    assert_eq!(project.cumulative_net_projection.len(), PROJECTION_MONTHS);
    assert_eq!(project.cumulative_net_projection[0], 325.0);
    assert_eq!(project.cumulative_net_projection[11], 3900.0);
}

#[test]
fn test_project_with_no_investment_reports_full_roi() {
    let project = compute_project_roi(&[create_revenue_indicator("c", 300.0, 0.0)]);
    assert_eq!(project.overall_roi_pct, 100.0);
    assert_eq!(project.average_payback_months, 0.0);
}

#[test]
fn test_project_where_nothing_pays_back() {
    let project = compute_project_roi(&[create_productivity_indicator("b", 1000.0, 50.0)]);
    assert_eq!(project.average_payback_months, 0.0);
}

#[test]
fn test_project_aggregation_is_order_independent() {
    let mut indicators = create_mixed_project();
    let forward = compute_project_roi(&indicators);
    indicators.rotate_left(1);
    let rotated = compute_project_roi(&indicators);

    assert_eq!(forward.total_indicators, rotated.total_indicators);
    assert_eq!(
        forward.annual_economy_total.to_bits(),
        rotated.annual_economy_total.to_bits()
    );
    assert_eq!(
        forward.implementation_cost_total.to_bits(),
        rotated.implementation_cost_total.to_bits()
    );
    assert_eq!(
        forward.annual_recurring_cost_total.to_bits(),
        rotated.annual_recurring_cost_total.to_bits()
    );
    assert_eq!(forward.overall_roi_pct, rotated.overall_roi_pct);
    assert_eq!(forward.average_payback_months, rotated.average_payback_months);
    assert_eq!(forward.economy_by_type, rotated.economy_by_type);
    assert_eq!(forward.cumulative_net_projection, rotated.cumulative_net_projection);
}

#[test]
fn test_parallel_matches_sequential() {
    let indicators: Vec<Indicator> = (0..200)
        .map(|i| create_productivity_indicator(&format!("i{i}"), f64::from(i) * 13.7, f64::from(i % 7)))
        .collect();

    assert_eq!(
        compute_project_roi(&indicators),
        compute_project_roi_parallel(&indicators)
    );
}
