use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar day contributing positive hours. Recomputed on every pass,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDay {
    pub date: NaiveDate,
    pub hours: u32,
}

/// Derived aggregate of one accrual pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualStats {
    pub goal: u32,
    pub accumulated_hours: u32,
    pub remaining_hours: u32,
    pub exceeded: bool,
    pub excess_hours: u32,
    /// Clamped to [0, 100]; defined as 0 when the goal is unset.
    pub progress_percent: f64,
    pub estimated_end_date: Option<NaiveDate>,
    /// Days whose hours contributed toward reaching the goal.
    pub work_days_count: usize,
    /// Calendar span from start to the estimated end, inclusive; 0 when the
    /// end date is absent.
    pub total_calendar_days: i64,
    pub work_days: Vec<WorkDay>,
}

impl AccrualStats {
    /// The well-defined zero result for a plan with no start date.
    pub fn empty() -> Self {
        Self {
            goal: 0,
            accumulated_hours: 0,
            remaining_hours: 0,
            exceeded: false,
            excess_hours: 0,
            progress_percent: 0.0,
            estimated_end_date: None,
            work_days_count: 0,
            total_calendar_days: 0,
            work_days: Vec::new(),
        }
    }

    /// Package raw accumulator output into the derived aggregate. Purely
    /// arithmetic over already-validated numbers; no failure modes.
    pub(crate) fn package(
        goal: u32,
        start: NaiveDate,
        accumulated: u32,
        end_date: Option<NaiveDate>,
        work_days_count: usize,
        work_days: Vec<WorkDay>,
    ) -> Self {
        let progress_percent = if goal > 0 {
            (f64::from(accumulated) / f64::from(goal) * 100.0).min(100.0)
        } else {
            0.0
        };
        let exceeded = accumulated > goal;
        let total_calendar_days = end_date
            .map(|end| end.signed_duration_since(start).num_days() + 1)
            .unwrap_or(0);

        Self {
            goal,
            accumulated_hours: accumulated,
            remaining_hours: goal.saturating_sub(accumulated),
            exceeded,
            excess_hours: if exceeded { accumulated - goal } else { 0 },
            progress_percent,
            estimated_end_date: end_date,
            work_days_count,
            total_calendar_days,
            work_days,
        }
    }

    /// Estimated end date in the long report format, e.g. "January 9th, 2026".
    pub fn estimated_end_date_str(&self) -> Option<String> {
        self.estimated_end_date.map(format_long_date)
    }

    pub fn to_cli_summary(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("accumulated={}h", self.accumulated_hours));
        parts.push(format!("goal={}h", self.goal));
        parts.push(format!("progress={:.1}%", self.progress_percent));
        if let Some(end) = self.estimated_end_date {
            parts.push(format!("end={}", end));
        }
        if self.exceeded {
            parts.push(format!("excess={}h", self.excess_hours));
        } else if self.remaining_hours > 0 {
            parts.push(format!("remaining={}h", self.remaining_hours));
        }
        parts.push(format!("work_days={}", self.work_days_count));
        if self.total_calendar_days > 0 {
            parts.push(format!("calendar_days={}", self.total_calendar_days));
        }
        parts.join(", ")
    }
}

pub fn format_long_date(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        day,
        ordinal_suffix(day),
        date.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
