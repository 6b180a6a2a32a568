use chrono::NaiveDate;
use worklog_tool::{DayAdjustment, DayMap, DayStatus, selection};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn range_is_inclusive_and_ordered() {
    let days = selection::selected_range(date(2026, 4, 6), date(2026, 4, 9));
    assert_eq!(
        days,
        vec![
            date(2026, 4, 6),
            date(2026, 4, 7),
            date(2026, 4, 8),
            date(2026, 4, 9),
        ]
    );
}

#[test]
fn range_normalizes_a_backwards_drag() {
    let forward = selection::selected_range(date(2026, 4, 6), date(2026, 4, 9));
    let backward = selection::selected_range(date(2026, 4, 9), date(2026, 4, 6));
    assert_eq!(forward, backward);
}

#[test]
fn single_day_range() {
    let days = selection::selected_range(date(2026, 4, 6), date(2026, 4, 6));
    assert_eq!(days, vec![date(2026, 4, 6)]);
}

#[test]
fn paint_range_inserts_adjustments_for_the_span() {
    let mut adjustments = DayMap::new();
    selection::paint_range(
        &mut adjustments,
        date(2026, 4, 6),
        date(2026, 4, 8),
        DayStatus::Off,
    );

    assert_eq!(adjustments.len(), 3);
    for day in selection::selected_range(date(2026, 4, 6), date(2026, 4, 8)) {
        assert_eq!(adjustments.get(&day).unwrap().status, DayStatus::Off);
    }
}

#[test]
fn repainting_keeps_overtime_and_log() {
    let mut adjustments = DayMap::new();
    adjustments.insert(
        date(2026, 4, 7),
        DayAdjustment::worked(3).with_log("standby shift"),
    );

    selection::paint_range(
        &mut adjustments,
        date(2026, 4, 6),
        date(2026, 4, 8),
        DayStatus::Off,
    );
    let repainted = adjustments.get(&date(2026, 4, 7)).unwrap();
    assert_eq!(repainted.status, DayStatus::Off);
    assert_eq!(repainted.overtime, 3);
    assert_eq!(repainted.log.as_deref(), Some("standby shift"));
}
