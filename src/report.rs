//! Data the report/export collaborators consume: the CSV rendition of the
//! work-day list and the summary a document renderer pages through.

use crate::config::{DayStatus, PlanConfig};
use crate::persistence::PersistenceResult;
use crate::stats::{AccrualStats, WorkDay, format_long_date};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Document summaries list at most this many work days before the
/// "+N more" notice.
pub const REPORT_DAY_LIMIT: usize = 40;

const CSV_HEADER: [&str; 5] = ["Date", "Day", "Hours", "Status", "Daily Log"];

#[derive(Serialize)]
struct ReportCsvRecord {
    date: String,
    day: String,
    hours: u32,
    status: String,
    daily_log: String,
}

impl ReportCsvRecord {
    fn new(config: &PlanConfig, work_day: &WorkDay) -> Self {
        let adjustment = config.adjustments.get(&work_day.date);
        let status = match adjustment.map(|a| a.status) {
            Some(DayStatus::Off) => "off",
            _ => "work",
        };
        Self {
            date: work_day.date.format("%Y-%m-%d").to_string(),
            day: work_day.date.format("%A").to_string(),
            hours: work_day.hours,
            status: status.to_string(),
            daily_log: adjustment.and_then(|a| a.log.clone()).unwrap_or_default(),
        }
    }
}

/// Write the work-day list as CSV. The header row is written even when the
/// list is empty, so the export always carries the column contract. Quoting
/// of log text that carries commas, quotes, or newlines follows RFC 4180 via
/// the csv writer.
pub fn write_report_csv<W: Write>(
    writer: W,
    config: &PlanConfig,
    stats: &AccrualStats,
) -> PersistenceResult<()> {
    // Auto-headers only fire on the first serialized row; the header is
    // written by hand instead so an empty list still produces it.
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;
    for work_day in &stats.work_days {
        csv_writer.serialize(ReportCsvRecord::new(config, work_day))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn save_report_to_csv<P: AsRef<Path>>(
    path: P,
    config: &PlanConfig,
    stats: &AccrualStats,
) -> PersistenceResult<()> {
    let file = File::create(path)?;
    write_report_csv(file, config, stats)
}

/// Everything a document renderer needs: the summary fields plus the first
/// `REPORT_DAY_LIMIT` work days and the count left out.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub goal: u32,
    pub accumulated_hours: u32,
    pub progress_percent: f64,
    pub estimated_end: Option<String>,
    pub listed_days: Vec<WorkDay>,
    pub more_count: usize,
}

impl ReportSummary {
    pub fn new(stats: &AccrualStats) -> Self {
        Self {
            goal: stats.goal,
            accumulated_hours: stats.accumulated_hours,
            progress_percent: stats.progress_percent,
            estimated_end: stats.estimated_end_date_str(),
            listed_days: stats
                .work_days
                .iter()
                .take(REPORT_DAY_LIMIT)
                .copied()
                .collect(),
            more_count: stats.work_days.len().saturating_sub(REPORT_DAY_LIMIT),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Goal          : {}h\n", self.goal));
        out.push_str(&format!("Accumulated   : {}h\n", self.accumulated_hours));
        out.push_str(&format!("Progress      : {:.1}%\n", self.progress_percent));
        match &self.estimated_end {
            Some(end) => out.push_str(&format!("Estimated end : {}\n", end)),
            None => out.push_str("Estimated end : -\n"),
        }
        out.push('\n');
        for work_day in &self.listed_days {
            out.push_str(&format!(
                "{}  {}h  ({})\n",
                work_day.date,
                work_day.hours,
                format_long_date(work_day.date)
            ));
        }
        if self.more_count > 0 {
            out.push_str(&format!("+{} more\n", self.more_count));
        }
        out
    }
}
