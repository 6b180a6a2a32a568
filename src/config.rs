use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Manual per-day overrides, keyed by calendar date. Keys are unique and
/// serialize as ISO dates on the wire.
pub type DayMap = BTreeMap<NaiveDate, DayAdjustment>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Work,
    Off,
}

/// A caller-authored exception to the inferred schedule for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAdjustment {
    pub status: DayStatus,
    #[serde(default)]
    pub overtime: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
}

impl DayAdjustment {
    pub fn worked(overtime: u32) -> Self {
        Self {
            status: DayStatus::Work,
            overtime,
            log: None,
        }
    }

    pub fn off() -> Self {
        Self {
            status: DayStatus::Off,
            overtime: 0,
            log: None,
        }
    }

    pub fn with_log(mut self, log: impl Into<String>) -> Self {
        self.log = Some(log.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanningMode {
    /// Schedule driven entirely by explicit per-day overrides.
    Manual,
    /// Schedule inferred from the weekly pattern, overrides on top.
    Automatic,
}

/// Immutable-per-computation plan configuration. The accrual pass never
/// retains a reference to it across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanConfig {
    /// Target hours. Zero means "not yet configured".
    pub goal: u32,
    pub start_date: Option<NaiveDate>,
    pub adjustments: DayMap,
    pub mode: PlanningMode,
    pub excluded_weekdays: HashSet<Weekday>,
    pub exclude_holidays: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            goal: 0,
            start_date: None,
            adjustments: DayMap::new(),
            mode: PlanningMode::Automatic,
            excluded_weekdays: HashSet::new(),
            exclude_holidays: true,
        }
    }
}

impl PlanConfig {
    /// Excluded weekdays as wire indexes, sorted.
    pub fn excluded_day_indexes(&self) -> Vec<u8> {
        let mut indexes: Vec<u8> = self.excluded_weekdays.iter().copied().map(weekday_index).collect();
        indexes.sort_unstable();
        indexes
    }
}

/// Weekday numbering used on the wire and in excluded-day sets: Sunday = 0.
pub fn weekday_index(day: Weekday) -> u8 {
    day.num_days_from_sunday() as u8
}

pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
