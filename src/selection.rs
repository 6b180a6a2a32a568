//! Range-selection helper for callers that paint a span of days at once
//! (e.g. a drag interaction). Presentation-side glue: it only produces and
//! applies date keys, the accrual core never sees it.

use crate::config::{DayAdjustment, DayMap, DayStatus};
use chrono::{Duration, NaiveDate};

/// Inclusive span between two dates, normalized so the order of the anchor
/// and cursor does not matter.
pub fn selected_range(anchor: NaiveDate, cursor: NaiveDate) -> Vec<NaiveDate> {
    let (from, to) = if anchor <= cursor {
        (anchor, cursor)
    } else {
        (cursor, anchor)
    };

    let mut days = Vec::new();
    let mut current = from;
    while current <= to {
        days.push(current);
        current += Duration::days(1);
    }
    days
}

/// Upsert an adjustment for every day in the span. Repainting an existing
/// day keeps its overtime and log and only flips the status.
pub fn paint_range(adjustments: &mut DayMap, anchor: NaiveDate, cursor: NaiveDate, status: DayStatus) {
    for date in selected_range(anchor, cursor) {
        adjustments
            .entry(date)
            .and_modify(|adjustment| adjustment.status = status)
            .or_insert(DayAdjustment {
                status,
                overtime: 0,
                log: None,
            });
    }
}
