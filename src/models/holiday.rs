//! Holiday model.
//!
//! This module contains the [`Holiday`] type used by the calendar day classifier
//! and the business-day counter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named holiday configured by administrators.
///
/// Only holidays flagged `is_active` are observed when counting business days.
///
/// # Example
///
/// ```
/// use leave_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     id: "hol_001".to_string(),
///     name: "Independence Day".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
///     description: String::new(),
///     is_active: true,
/// };
/// assert!(holiday.falls_on(NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    /// Unique identifier for the holiday.
    pub id: String,
    /// The name of the holiday.
    pub name: String,
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// A free-form description.
    #[serde(default)]
    pub description: String,
    /// Whether the holiday is currently observed.
    pub is_active: bool,
}

impl Holiday {
    /// Returns true if this holiday is active and falls on `date`.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.is_active && self.date == date
    }
}

/// Returns the dates of the active holidays in `holidays`.
///
/// This is the filtering step callers perform before handing a holiday list
/// to [`count_business_days`](crate::calculation::count_business_days).
///
/// # Example
///
/// ```
/// use leave_engine::models::{Holiday, active_holiday_dates};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
/// let holidays = vec![
///     Holiday {
///         id: "hol_001".to_string(),
///         name: "Christmas Day".to_string(),
///         date,
///         description: String::new(),
///         is_active: true,
///     },
///     Holiday {
///         id: "hol_002".to_string(),
///         name: "Retired Holiday".to_string(),
///         date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///         description: String::new(),
///         is_active: false,
///     },
/// ];
///
/// assert_eq!(active_holiday_dates(&holidays), vec![date]);
/// ```
pub fn active_holiday_dates(holidays: &[Holiday]) -> Vec<NaiveDate> {
    holidays
        .iter()
        .filter(|h| h.is_active)
        .map(|h| h.date)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_holiday(id: &str, date: &str, is_active: bool) -> Holiday {
        Holiday {
            id: id.to_string(),
            name: format!("Holiday {}", id),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description: String::new(),
            is_active,
        }
    }

    #[test]
    fn test_deserialize_holiday_from_api_payload() {
        let json = r#"{
            "id": "hol_001",
            "name": "New Year's Day",
            "date": "2025-01-01",
            "description": "Public holiday",
            "isActive": true,
            "createdAt": "2024-11-02T10:00:00Z"
        }"#;

        let holiday: Holiday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.name, "New Year's Day");
        assert_eq!(holiday.date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert!(holiday.is_active);
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let json = r#"{"id": "h", "name": "H", "date": "2025-05-01", "isActive": false}"#;

        let holiday: Holiday = serde_json::from_str(json).unwrap();
        assert!(holiday.description.is_empty());
    }

    #[test]
    fn test_inactive_holiday_never_falls_on_its_date() {
        let holiday = make_holiday("h1", "2025-05-01", false);
        assert!(!holiday.falls_on(holiday.date));
    }

    #[test]
    fn test_active_holiday_dates_skips_inactive() {
        let holidays = vec![
            make_holiday("h1", "2025-01-01", true),
            make_holiday("h2", "2025-01-02", false),
            make_holiday("h3", "2025-12-25", true),
        ];

        let dates = active_holiday_dates(&holidays);
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
            ]
        );
    }

    #[test]
    fn test_active_holiday_dates_empty_input() {
        assert!(active_holiday_dates(&[]).is_empty());
    }
}
