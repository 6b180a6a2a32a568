use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The table covers exactly one calendar year.
pub const TABLE_YEAR: i32 = 2026;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    /// Federal holiday, normally a non-working day.
    Regular,
    /// Observance an employer may or may not grant.
    Special,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    pub name: &'static str,
    pub kind: HolidayKind,
}

/// Static date-to-holiday lookup for a fixed year. No side effects; a date
/// absent from the table is simply not a holiday.
#[derive(Debug, Clone)]
pub struct HolidayTable {
    entries: HashMap<NaiveDate, Holiday>,
}

impl Default for HolidayTable {
    fn default() -> Self {
        Self::for_year(TABLE_YEAR)
    }
}

impl HolidayTable {
    /// Standard US federal holidays plus the common employer observances.
    pub fn for_year(year: i32) -> Self {
        let mut table = Self {
            entries: HashMap::new(),
        };

        table.insert(ymd(year, 1, 1), "New Year's Day", HolidayKind::Regular);

        // Martin Luther King Jr. Day (3rd Monday in January)
        table.insert(
            Self::nth_weekday(year, 1, Weekday::Mon, 3),
            "Martin Luther King Jr. Day",
            HolidayKind::Regular,
        );

        // Presidents' Day (3rd Monday in February)
        table.insert(
            Self::nth_weekday(year, 2, Weekday::Mon, 3),
            "Presidents' Day",
            HolidayKind::Regular,
        );

        // Memorial Day (last Monday in May)
        table.insert(
            Self::last_weekday(year, 5, Weekday::Mon),
            "Memorial Day",
            HolidayKind::Regular,
        );

        table.insert(ymd(year, 6, 19), "Juneteenth", HolidayKind::Regular);
        table.insert(ymd(year, 7, 4), "Independence Day", HolidayKind::Regular);

        // Labor Day (1st Monday in September)
        table.insert(
            Self::nth_weekday(year, 9, Weekday::Mon, 1),
            "Labor Day",
            HolidayKind::Regular,
        );

        // Columbus Day (2nd Monday in October)
        table.insert(
            Self::nth_weekday(year, 10, Weekday::Mon, 2),
            "Columbus Day",
            HolidayKind::Regular,
        );

        table.insert(ymd(year, 11, 11), "Veterans Day", HolidayKind::Regular);

        // Thanksgiving (4th Thursday in November) and the day after
        let thanksgiving = Self::nth_weekday(year, 11, Weekday::Thu, 4);
        table.insert(thanksgiving, "Thanksgiving", HolidayKind::Regular);
        table.insert(
            thanksgiving + Duration::days(1),
            "Day After Thanksgiving",
            HolidayKind::Special,
        );

        table.insert(ymd(year, 12, 24), "Christmas Eve", HolidayKind::Special);
        table.insert(ymd(year, 12, 25), "Christmas Day", HolidayKind::Regular);
        table.insert(ymd(year, 12, 31), "New Year's Eve", HolidayKind::Special);

        table
    }

    pub fn lookup(&self, date: NaiveDate) -> Option<&Holiday> {
        self.entries.get(&date)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, date: NaiveDate, name: &'static str, kind: HolidayKind) {
        self.entries.insert(date, Holiday { name, kind });
    }

    /// Helper: Find the nth occurrence of a weekday in a month
    fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u32) -> NaiveDate {
        let mut date = ymd(year, month, 1);
        let mut count = 0;

        while date.month() == month {
            if date.weekday() == weekday {
                count += 1;
                if count == n {
                    return date;
                }
            }
            date = date + Duration::days(1);
        }
        panic!("Could not find {}th {} in {}/{}", n, weekday, month, year);
    }

    /// Helper: Find the last occurrence of a weekday in a month
    fn last_weekday(year: i32, month: u32, weekday: Weekday) -> NaiveDate {
        let mut date = if month == 12 {
            ymd(year + 1, 1, 1)
        } else {
            ymd(year, month + 1, 1)
        };
        date = date - Duration::days(1); // Last day of the month

        while date.weekday() != weekday {
            date = date - Duration::days(1);
        }
        date
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid holiday table date")
}
