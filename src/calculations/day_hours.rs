use crate::config::{DayMap, DayStatus, PlanningMode};
use crate::holidays::HolidayTable;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// Hours attributed to a plain working day.
pub const BASE_DAY_HOURS: u32 = 8;

/// Resolve the hours attributable to a single calendar day. Total over its
/// domain: every input combination yields a defined result, no errors.
///
/// Resolution order, first match wins:
/// 1. a manual adjustment for the date (off = 0, work = base + overtime);
/// 2. the holiday table, when holiday exclusion is on;
/// 3. in automatic mode, the weekly pattern (excluded weekdays and
///    weekends yield 0, remaining weekdays yield the base);
/// 4. in manual mode, days without an adjustment yield 0.
pub fn day_hours(
    date: NaiveDate,
    adjustments: &DayMap,
    mode: PlanningMode,
    excluded_weekdays: &HashSet<Weekday>,
    exclude_holidays: bool,
    holidays: &HolidayTable,
) -> u32 {
    if let Some(adjustment) = adjustments.get(&date) {
        return match adjustment.status {
            DayStatus::Off => 0,
            // The backup contract places no upper bound on overtime, so the
            // sum saturates instead of wrapping.
            DayStatus::Work => BASE_DAY_HOURS.saturating_add(adjustment.overtime),
        };
    }

    if exclude_holidays && holidays.is_holiday(date) {
        return 0;
    }

    match mode {
        PlanningMode::Automatic => {
            if excluded_weekdays.contains(&date.weekday()) || is_weekend(date) {
                0
            } else {
                BASE_DAY_HOURS
            }
        }
        PlanningMode::Manual => 0,
    }
}

/// Saturdays and Sundays are a floor exclusion in automatic mode, on top of
/// whatever the excluded-weekday set says.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
