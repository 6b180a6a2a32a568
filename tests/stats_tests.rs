use chrono::{NaiveDate, Weekday};
use std::collections::HashSet;
use worklog_tool::{AccrualPass, AccrualStats, HolidayTable, PlanConfig, PlanningMode, format_long_date};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn long_date_format_uses_english_ordinals() {
    let cases = [
        (date(2026, 1, 9), "January 9th, 2026"),
        (date(2026, 3, 1), "March 1st, 2026"),
        (date(2026, 3, 2), "March 2nd, 2026"),
        (date(2026, 3, 3), "March 3rd, 2026"),
        (date(2026, 3, 11), "March 11th, 2026"),
        (date(2026, 3, 12), "March 12th, 2026"),
        (date(2026, 3, 13), "March 13th, 2026"),
        (date(2026, 3, 21), "March 21st, 2026"),
        (date(2026, 12, 22), "December 22nd, 2026"),
        (date(2026, 10, 31), "October 31st, 2026"),
    ];
    for (input, expected) in cases {
        assert_eq!(format_long_date(input), expected);
    }
}

#[test]
fn empty_stats_are_all_zero() {
    let stats = AccrualStats::empty();
    assert_eq!(stats.accumulated_hours, 0);
    assert_eq!(stats.remaining_hours, 0);
    assert_eq!(stats.excess_hours, 0);
    assert!(!stats.exceeded);
    assert_eq!(stats.progress_percent, 0.0);
    assert_eq!(stats.estimated_end_date, None);
    assert_eq!(stats.estimated_end_date_str(), None);
    assert_eq!(stats.work_days_count, 0);
    assert_eq!(stats.total_calendar_days, 0);
    assert!(stats.work_days.is_empty());
}

#[test]
fn progress_is_capped_and_partial_progress_is_proportional() {
    let weekend: HashSet<Weekday> = [Weekday::Sun, Weekday::Sat].into_iter().collect();
    let holidays = HolidayTable::default();

    // Five manual 8h days against an 80h goal: halfway, no end date.
    let mut config = PlanConfig {
        goal: 80,
        start_date: Some(date(2026, 1, 5)),
        mode: PlanningMode::Manual,
        excluded_weekdays: weekend,
        ..PlanConfig::default()
    };
    for day in 5..10 {
        config
            .adjustments
            .insert(date(2026, 1, day), worklog_tool::DayAdjustment::worked(0));
    }
    let stats = AccrualPass::new(&config, &holidays).execute();

    assert_eq!(stats.accumulated_hours, 40);
    assert_eq!(stats.progress_percent, 50.0);
    assert_eq!(stats.remaining_hours, 40);
    assert!(!stats.exceeded);
    assert_eq!(stats.estimated_end_date, None);
}

#[test]
fn cli_summary_mentions_the_key_figures() {
    let weekend: HashSet<Weekday> = [Weekday::Sun, Weekday::Sat].into_iter().collect();
    let config = PlanConfig {
        goal: 40,
        start_date: Some(date(2026, 1, 5)),
        mode: PlanningMode::Automatic,
        excluded_weekdays: weekend,
        ..PlanConfig::default()
    };
    let holidays = HolidayTable::default();
    let summary = AccrualPass::new(&config, &holidays).execute().to_cli_summary();

    assert!(summary.contains("accumulated=40h"));
    assert!(summary.contains("goal=40h"));
    assert!(summary.contains("progress=100.0%"));
    assert!(summary.contains("end=2026-01-09"));
    assert!(summary.contains("work_days=5"));
    assert!(summary.contains("calendar_days=5"));
}
