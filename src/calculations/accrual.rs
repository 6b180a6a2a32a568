use crate::calculations::day_hours::day_hours;
use crate::config::{PlanConfig, PlanningMode};
use crate::holidays::HolidayTable;
use crate::stats::{AccrualStats, WorkDay};
use chrono::{Duration, NaiveDate};

/// Hard ceiling on the day scan, roughly eight years. Guarantees the pass
/// terminates even when the goal is unreachable.
pub const MAX_SCAN_DAYS: i64 = 3000;

/// Manual plans stop once the goal is met and a full year passes without
/// another override entry, so open-ended logs terminate.
const MANUAL_QUIET_DAYS: i64 = 365;

/// One accrual computation over a borrowed configuration. Pure and
/// idempotent: no I/O, no retained state, identical inputs give identical
/// output.
pub struct AccrualPass<'a> {
    config: &'a PlanConfig,
    holidays: &'a HolidayTable,
}

impl<'a> AccrualPass<'a> {
    pub fn new(config: &'a PlanConfig, holidays: &'a HolidayTable) -> Self {
        Self { config, holidays }
    }

    /// Walk forward one calendar day at a time from the start date, resolving
    /// hours per day and accruing toward the goal. A missing start date
    /// short-circuits to empty stats; "not yet configured" is a normal state.
    pub fn execute(&self) -> AccrualStats {
        let Some(start) = self.config.start_date else {
            return AccrualStats::empty();
        };
        match self.config.mode {
            PlanningMode::Automatic => self.run_automatic(start),
            PlanningMode::Manual => self.run_manual(start),
        }
    }

    fn resolve(&self, date: NaiveDate) -> u32 {
        day_hours(
            date,
            &self.config.adjustments,
            self.config.mode,
            &self.config.excluded_weekdays,
            self.config.exclude_holidays,
            self.holidays,
        )
    }

    /// Automatic policy: hours contribute in full only while the total is
    /// still below the goal, so the crossing day may overshoot but no day
    /// after it counts. A day is recorded only while the running total stays
    /// at or below the goal, keeping the reported list capped at completion.
    /// The scan stops at goal crossing.
    fn run_automatic(&self, start: NaiveDate) -> AccrualStats {
        let goal = self.config.goal;
        let mut accumulated: u32 = 0;
        let mut work_days: Vec<WorkDay> = Vec::new();
        let mut counted_days: usize = 0;
        let mut end_date: Option<NaiveDate> = None;

        for offset in 0..MAX_SCAN_DAYS {
            let date = start + Duration::days(offset);
            let hours = self.resolve(date);

            if hours > 0 && accumulated < goal {
                counted_days += 1;
                accumulated = accumulated.saturating_add(hours);
                if accumulated <= goal {
                    work_days.push(WorkDay { date, hours });
                }
            }

            if accumulated >= goal {
                end_date = Some(date);
                break;
            }
        }

        AccrualStats::package(goal, start, accumulated, end_date, counted_days, work_days)
    }

    /// Manual policy: every positive day contributes in full and is always
    /// recorded, past the goal too, so actual overtime and extra days stay
    /// visible. Only days that contributed while the total was still below
    /// the goal count toward the goal metric.
    fn run_manual(&self, start: NaiveDate) -> AccrualStats {
        let goal = self.config.goal;
        let mut accumulated: u32 = 0;
        let mut work_days: Vec<WorkDay> = Vec::new();
        let mut counted_days: usize = 0;
        let mut end_date: Option<NaiveDate> = None;
        let mut quiet_days: i64 = 0;

        for offset in 0..MAX_SCAN_DAYS {
            let date = start + Duration::days(offset);
            let hours = self.resolve(date);

            if hours > 0 {
                if accumulated < goal {
                    counted_days += 1;
                }
                accumulated = accumulated.saturating_add(hours);
                work_days.push(WorkDay { date, hours });
            }

            if end_date.is_none() && accumulated >= goal {
                end_date = Some(date);
            }

            if self.config.adjustments.contains_key(&date) {
                quiet_days = 0;
            } else {
                quiet_days += 1;
            }
            if end_date.is_some() && quiet_days >= MANUAL_QUIET_DAYS {
                break;
            }
        }

        AccrualStats::package(goal, start, accumulated, end_date, counted_days, work_days)
    }
}
