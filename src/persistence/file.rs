use super::{PersistenceError, PersistenceResult};
use crate::config::{self, DayAdjustment, DayMap, PlanConfig, PlanningMode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

/// Wire shape of a backup file. The field names and shapes are a
/// compatibility contract; import validates every field and rejects the
/// whole file on any mismatch, never applying a partial configuration.
#[derive(Serialize, Deserialize)]
pub struct BackupSnapshot {
    goal: GoalField,
    #[serde(rename = "startDateStr")]
    start_date_str: String,
    adjustments: BTreeMap<String, DayAdjustment>,
    mode: PlanningMode,
    #[serde(rename = "excludedDays")]
    excluded_days: Vec<u8>,
    #[serde(rename = "excludeHolidays", default = "default_exclude_holidays")]
    exclude_holidays: bool,
}

/// The goal field is a number, or the empty string when unset.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum GoalField {
    Hours(u32),
    Unset(String),
}

fn default_exclude_holidays() -> bool {
    true
}

impl BackupSnapshot {
    pub fn from_config(config: &PlanConfig) -> Self {
        let adjustments = config
            .adjustments
            .iter()
            .map(|(date, adjustment)| (format_date(*date), adjustment.clone()))
            .collect();

        Self {
            goal: GoalField::Hours(config.goal),
            start_date_str: config.start_date.map(format_date).unwrap_or_default(),
            adjustments,
            mode: config.mode,
            excluded_days: config.excluded_day_indexes(),
            exclude_holidays: config.exclude_holidays,
        }
    }

    pub fn into_config(self) -> PersistenceResult<PlanConfig> {
        let goal = match self.goal {
            GoalField::Hours(hours) => hours,
            GoalField::Unset(text) if text.is_empty() => 0,
            GoalField::Unset(text) => {
                return Err(PersistenceError::InvalidData(format!(
                    "goal must be a number or empty, got '{text}'"
                )));
            }
        };

        let start_date = if self.start_date_str.is_empty() {
            None
        } else {
            Some(parse_date(&self.start_date_str)?)
        };

        let mut adjustments = DayMap::new();
        for (key, adjustment) in self.adjustments {
            adjustments.insert(parse_date(&key)?, adjustment);
        }

        let mut excluded_weekdays = std::collections::HashSet::new();
        for index in self.excluded_days {
            let weekday = config::weekday_from_index(index).ok_or_else(|| {
                PersistenceError::InvalidData(format!(
                    "excluded day index {index} out of range 0-6"
                ))
            })?;
            excluded_weekdays.insert(weekday);
        }

        Ok(PlanConfig {
            goal,
            start_date,
            adjustments,
            mode: self.mode,
            excluded_weekdays,
            exclude_holidays: self.exclude_holidays,
        })
    }
}

pub fn save_config_to_json<P: AsRef<Path>>(config: &PlanConfig, path: P) -> PersistenceResult<()> {
    let snapshot = BackupSnapshot::from_config(config);
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &snapshot)?;
    Ok(())
}

pub fn load_config_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<PlanConfig> {
    let file = File::open(path)?;
    let snapshot: BackupSnapshot = serde_json::from_reader(file)?;
    snapshot.into_config()
}

/// In-memory variants of the backup round trip, for callers that hand the
/// bytes to their own transport.
pub fn config_to_backup_string(config: &PlanConfig) -> PersistenceResult<String> {
    let snapshot = BackupSnapshot::from_config(config);
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

pub fn config_from_backup_str(contents: &str) -> PersistenceResult<PlanConfig> {
    let snapshot: BackupSnapshot = serde_json::from_str(contents)?;
    snapshot.into_config()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_date(input: &str) -> PersistenceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| PersistenceError::InvalidData(format!("invalid date '{input}': {e}")))
}
