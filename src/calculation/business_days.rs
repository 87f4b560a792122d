//! Business-day counting.
//!
//! Counts the working days in an inclusive date range, excluding weekends
//! and active holidays.

use chrono::NaiveDate;
use tracing::debug;

use super::day_classification::is_non_working_day;

/// Returns every date in `[start_date, end_date]`, in order.
///
/// The iterator is empty when `start_date > end_date`.
pub(crate) fn dates_between(
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> impl Iterator<Item = NaiveDate> {
    start_date
        .iter_days()
        .take_while(move |date| *date <= end_date)
}

/// Counts the business days in an inclusive date range.
///
/// Iterates each calendar date from `start_date` to `end_date` inclusive and
/// counts the dates that are not weekends and not in `holidays`.
///
/// # Arguments
///
/// * `start_date` - First date of the range (inclusive)
/// * `end_date` - Last date of the range (inclusive)
/// * `holidays` - Dates of the active holidays
///
/// # Returns
///
/// The number of working days. A reversed range (`start_date > end_date`)
/// is an empty range and yields 0.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::count_business_days;
/// use chrono::NaiveDate;
///
/// // Monday 2024-06-03 through Sunday 2024-06-09
/// let start = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
/// assert_eq!(count_business_days(start, end, &[]), 5);
///
/// // With a holiday on Wednesday
/// let wednesday = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
/// assert_eq!(count_business_days(start, end, &[wednesday]), 4);
/// ```
pub fn count_business_days(
    start_date: NaiveDate,
    end_date: NaiveDate,
    holidays: &[NaiveDate],
) -> u32 {
    let count = dates_between(start_date, end_date)
        .filter(|date| !is_non_working_day(*date, holidays))
        .count() as u32;

    debug!(
        start_date = %start_date,
        end_date = %end_date,
        holidays = holidays.len(),
        business_days = count,
        "Counted business days"
    );

    count
}

/// Lists the business days in an inclusive date range.
///
/// Same rules as [`count_business_days`]; the length of the result always
/// equals its count.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::business_days_in;
/// use chrono::NaiveDate;
///
/// // Friday 2024-06-07 through Monday 2024-06-10
/// let start = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// assert_eq!(
///     business_days_in(start, end, &[]),
///     vec![start, end]
/// );
/// ```
pub fn business_days_in(
    start_date: NaiveDate,
    end_date: NaiveDate,
    holidays: &[NaiveDate],
) -> Vec<NaiveDate> {
    dates_between(start_date, end_date)
        .filter(|date| !is_non_working_day(*date, holidays))
        .collect()
}
