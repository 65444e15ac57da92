use crate::core::{Frequency, Period};

/// Working days in a month.
const DAY_MULTIPLIER: f64 = 21.0;
/// Average weeks in a month.
const WEEK_MULTIPLIER: f64 = 4.33;

/// Monthly occurrences of a single event per `period`. Unknown periods count as monthly.
pub fn period_multiplier(period: Period) -> f64 {
    match period {
        Period::Day => DAY_MULTIPLIER,
        Period::Week => WEEK_MULTIPLIER,
        Period::Month => 1.0,
        Period::Year => 1.0 / 12.0,
        Period::Unknown => 1.0,
    }
}

/// Convert a recurrence into monthly occurrences. An absent frequency means
/// once a month; a zero count means a single occurrence.
pub fn monthly_multiplier(frequency: Option<&Frequency>) -> f64 {
    let frequency = frequency.copied().unwrap_or_default();
    f64::from(frequency.count.max(1)) * period_multiplier(frequency.period)
}
