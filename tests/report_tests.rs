use chrono::{NaiveDate, Weekday};
use std::collections::HashSet;
use worklog_tool::{
    AccrualPass, DayAdjustment, HolidayTable, PlanConfig, PlanningMode, REPORT_DAY_LIMIT,
    ReportSummary, write_report_csv,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn weekend_excluded() -> HashSet<Weekday> {
    [Weekday::Sun, Weekday::Sat].into_iter().collect()
}

#[test]
fn csv_report_has_contract_header_and_rows() {
    let config = PlanConfig {
        goal: 16,
        start_date: Some(date(2026, 1, 5)),
        mode: PlanningMode::Automatic,
        excluded_weekdays: weekend_excluded(),
        ..PlanConfig::default()
    };
    let holidays = HolidayTable::default();
    let stats = AccrualPass::new(&config, &holidays).execute();

    let mut buffer = Vec::new();
    write_report_csv(&mut buffer, &config, &stats).unwrap();
    let csv = String::from_utf8(buffer).unwrap();

    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Date,Day,Hours,Status,Daily Log"));
    assert_eq!(lines.next(), Some("2026-01-05,Monday,8,work,"));
    assert_eq!(lines.next(), Some("2026-01-06,Tuesday,8,work,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn csv_report_without_work_days_is_just_the_header() {
    // No start date: the pass yields empty stats, yet the export must still
    // carry the column contract.
    let config = PlanConfig::default();
    let holidays = HolidayTable::default();
    let stats = AccrualPass::new(&config, &holidays).execute();
    assert!(stats.work_days.is_empty());

    let mut buffer = Vec::new();
    write_report_csv(&mut buffer, &config, &stats).unwrap();
    let csv = String::from_utf8(buffer).unwrap();

    assert_eq!(csv, "Date,Day,Hours,Status,Daily Log\n");
}

#[test]
fn csv_quotes_log_text_with_commas_and_doubles_inner_quotes() {
    let mut config = PlanConfig {
        goal: 8,
        start_date: Some(date(2026, 1, 5)),
        mode: PlanningMode::Automatic,
        excluded_weekdays: weekend_excluded(),
        ..PlanConfig::default()
    };
    config.adjustments.insert(
        date(2026, 1, 5),
        DayAdjustment::worked(0).with_log(r#"Standup, then "deep work""#),
    );
    let holidays = HolidayTable::default();
    let stats = AccrualPass::new(&config, &holidays).execute();

    let mut buffer = Vec::new();
    write_report_csv(&mut buffer, &config, &stats).unwrap();
    let csv = String::from_utf8(buffer).unwrap();

    assert!(
        csv.contains(r#"2026-01-05,Monday,8,work,"Standup, then ""deep work""""#),
        "unexpected csv: {csv}"
    );
}

#[test]
fn summary_lists_at_most_forty_days_and_counts_the_rest() {
    // 45 plain weekdays of 8h; keep holidays in so every weekday counts.
    let config = PlanConfig {
        goal: 360,
        start_date: Some(date(2026, 1, 5)),
        mode: PlanningMode::Automatic,
        excluded_weekdays: weekend_excluded(),
        exclude_holidays: false,
        ..PlanConfig::default()
    };
    let holidays = HolidayTable::default();
    let stats = AccrualPass::new(&config, &holidays).execute();
    assert_eq!(stats.work_days.len(), 45);

    let summary = ReportSummary::new(&stats);
    assert_eq!(summary.listed_days.len(), REPORT_DAY_LIMIT);
    assert_eq!(summary.more_count, 5);
    assert_eq!(summary.estimated_end.as_deref(), Some("March 6th, 2026"));

    let text = summary.to_text();
    assert!(text.contains("+5 more"));
    assert!(text.contains("Progress      : 100.0%"));
}

#[test]
fn summary_of_a_short_plan_has_no_more_notice() {
    let config = PlanConfig {
        goal: 16,
        start_date: Some(date(2026, 1, 5)),
        mode: PlanningMode::Automatic,
        excluded_weekdays: weekend_excluded(),
        ..PlanConfig::default()
    };
    let holidays = HolidayTable::default();
    let stats = AccrualPass::new(&config, &holidays).execute();

    let summary = ReportSummary::new(&stats);
    assert_eq!(summary.listed_days.len(), 2);
    assert_eq!(summary.more_count, 0);
    assert!(!summary.to_text().contains("more"));
}
