pub mod calculations;
pub mod config;
pub mod holidays;
pub mod persistence;
pub mod report;
pub mod selection;
pub mod stats;

pub use calculations::accrual::{AccrualPass, MAX_SCAN_DAYS};
pub use calculations::day_hours::{BASE_DAY_HOURS, day_hours, is_weekend};
pub use config::{DayAdjustment, DayMap, DayStatus, PlanConfig, PlanningMode};
pub use holidays::{Holiday, HolidayKind, HolidayTable};
#[cfg(feature = "sqlite")]
pub use persistence::sqlite::SqliteConfigStore;
pub use persistence::{
    BackupSnapshot, ConfigStore, PersistenceError, config_from_backup_str,
    config_to_backup_string, load_config_from_json, save_config_to_json,
};
pub use report::{REPORT_DAY_LIMIT, ReportSummary, save_report_to_csv, write_report_csv};
pub use stats::{AccrualStats, WorkDay, format_long_date};
