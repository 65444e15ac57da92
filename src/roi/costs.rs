use super::frequency::monthly_multiplier;
use super::models::AdditionalCostSplit;
use crate::core::{AdditionalCost, BillingPeriod, CostKind, StaffCost};

/// Split additional costs into a one-time total and a monthly recurring total.
/// Yearly recurring costs are spread over twelve months.
pub fn split_additional_costs(costs: &[AdditionalCost]) -> AdditionalCostSplit {
    costs
        .iter()
        .fold(AdditionalCostSplit::default(), |acc, cost| match cost.kind {
            CostKind::OneTime => AdditionalCostSplit {
                one_time: acc.one_time + cost.amount,
                ..acc
            },
            CostKind::Recurring => AdditionalCostSplit {
                monthly_recurring: acc.monthly_recurring + monthly_amount(cost),
                ..acc
            },
            CostKind::Unknown => acc,
        })
}

fn monthly_amount(cost: &AdditionalCost) -> f64 {
    match cost.recurring_period {
        BillingPeriod::Year => cost.amount / 12.0,
        BillingPeriod::Month => cost.amount,
    }
}

/// Monthly labor cost of one person still involved in the process.
pub fn staff_entry_monthly_cost(entry: &StaffCost) -> f64 {
    let hours = entry.execution_time_minutes / 60.0;
    hours * entry.hourly_rate * monthly_multiplier(entry.frequency.as_ref())
}

/// Monthly labor cost of all staff entries; zero unless `involved` is set.
pub fn monthly_staff_cost(staff: &[StaffCost], involved: bool) -> f64 {
    if !involved {
        return 0.0;
    }
    staff.iter().map(staff_entry_monthly_cost).fold(0.0, |acc, cost| acc + cost)
}
