//! Calendar day classification.
//!
//! This module determines whether a calendar date is a working day, a weekend
//! day, or an observed holiday. Business-day counting and the working-day
//! leave calculator are built on it.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::Holiday;

/// What kind of day a calendar date is for leave purposes.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::DayKind;
///
/// let kind = DayKind::Weekend;
/// assert!(!kind.is_working());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday through Friday with no active holiday.
    Working,
    /// Saturday or Sunday.
    Weekend,
    /// A weekday on which an active holiday falls.
    Holiday,
}

impl DayKind {
    /// Returns true for [`DayKind::Working`].
    pub fn is_working(&self) -> bool {
        *self == DayKind::Working
    }
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Working => write!(f, "Working"),
            DayKind::Weekend => write!(f, "Weekend"),
            DayKind::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Returns true if `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Determines whether a date is a non-working day.
///
/// A date is non-working if it falls on Saturday or Sunday, or if it matches
/// any date in `holidays` exactly. The caller is expected to have filtered the
/// holiday list down to active holidays; an empty list observes no holidays.
///
/// # Arguments
///
/// * `date` - The date to check
/// * `holidays` - Dates of the active holidays
///
/// # Example
///
/// ```
/// use leave_engine::calculation::is_non_working_day;
/// use chrono::NaiveDate;
///
/// // 2024-06-08 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
/// assert!(is_non_working_day(saturday, &[]));
///
/// // 2024-07-04 is a Thursday
/// let holiday = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
/// assert!(!is_non_working_day(holiday, &[]));
/// assert!(is_non_working_day(holiday, &[holiday]));
/// ```
pub fn is_non_working_day(date: NaiveDate, holidays: &[NaiveDate]) -> bool {
    is_weekend(date) || holidays.contains(&date)
}

/// Classifies a date against a full holiday list.
///
/// Inactive holidays are ignored. A holiday that falls on a weekend is
/// reported as [`DayKind::Weekend`].
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{classify_day, DayKind};
/// use leave_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(); // Wednesday
/// let holidays = vec![Holiday {
///     id: "hol_xmas".to_string(),
///     name: "Christmas Day".to_string(),
///     date,
///     description: String::new(),
///     is_active: true,
/// }];
///
/// assert_eq!(classify_day(date, &holidays), DayKind::Holiday);
/// ```
pub fn classify_day(date: NaiveDate, holidays: &[Holiday]) -> DayKind {
    if is_weekend(date) {
        DayKind::Weekend
    } else if holidays.iter().any(|h| h.falls_on(date)) {
        DayKind::Holiday
    } else {
        DayKind::Working
    }
}
