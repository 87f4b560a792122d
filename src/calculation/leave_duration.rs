//! Leave duration calculation.
//!
//! This module computes how many days a leave request spans, both as an
//! inclusive calendar-day count and as the day count a request consumes
//! once half-day semantics are applied.
//!
//! # Reversed ranges
//!
//! A range whose end date is before its start date is rejected with
//! [`EngineError::InvalidRange`] rather than clamped.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::RequestType;

use super::business_days::count_business_days;
use super::day_classification::is_non_working_day;

/// The day count contributed by a half-day request.
pub const HALF_DAY: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

fn ensure_ordered(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<()> {
    if end_date < start_date {
        return Err(EngineError::InvalidRange {
            start_date,
            end_date,
        });
    }
    Ok(())
}

/// Calculates the inclusive calendar-day span of a leave request.
///
/// # Arguments
///
/// * `start_date` - First day of leave (inclusive)
/// * `end_date` - Last day of leave (inclusive)
///
/// # Returns
///
/// `(end_date - start_date) + 1`, always at least 1, or
/// [`EngineError::InvalidRange`] if `end_date < start_date`.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::calculate_leave_duration;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
/// assert_eq!(calculate_leave_duration(start, end).unwrap(), 5);
/// assert_eq!(calculate_leave_duration(start, start).unwrap(), 1);
/// assert!(calculate_leave_duration(end, start).is_err());
/// ```
pub fn calculate_leave_duration(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<u32> {
    ensure_ordered(start_date, end_date)?;
    let days = (end_date - start_date).num_days() + 1;
    Ok(days as u32)
}

/// Calculates the number of days a request of `request_type` consumes.
///
/// Full-day requests consume their calendar-day span. Half-day requests
/// consume 0.5. This function does not check that a half-day request covers
/// a single date; that check belongs to
/// [`validate_draft`](crate::calculation::validate_draft).
///
/// # Example
///
/// ```
/// use leave_engine::calculation::calculate_request_days;
/// use leave_engine::models::RequestType;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let days = calculate_request_days(date, date, RequestType::HalfDayMorning).unwrap();
/// assert_eq!(days, Decimal::new(5, 1));
/// ```
pub fn calculate_request_days(
    start_date: NaiveDate,
    end_date: NaiveDate,
    request_type: RequestType,
) -> EngineResult<Decimal> {
    let duration = calculate_leave_duration(start_date, end_date)?;

    let days = if request_type.is_half_day() {
        HALF_DAY
    } else {
        Decimal::from(duration)
    };

    debug!(
        start_date = %start_date,
        end_date = %end_date,
        request_type = ?request_type,
        days = %days,
        "Calculated request days"
    );

    Ok(days)
}

/// Calculates the working days a request consumes.
///
/// Full-day requests consume one day per business day in the range. A
/// half-day request consumes 0.5 when `start_date` is a working day and
/// nothing when it falls on a weekend or holiday.
///
/// # Arguments
///
/// * `start_date` - First day of leave (inclusive)
/// * `end_date` - Last day of leave (inclusive)
/// * `request_type` - Full or half day
/// * `holidays` - Dates of the active holidays
///
/// # Example
///
/// ```
/// use leave_engine::calculation::calculate_working_request_days;
/// use leave_engine::models::RequestType;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Friday 2024-06-07 through Tuesday 2024-06-11
/// let start = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
/// let days = calculate_working_request_days(start, end, RequestType::FullDay, &[]).unwrap();
/// assert_eq!(days, Decimal::from(3));
/// ```
pub fn calculate_working_request_days(
    start_date: NaiveDate,
    end_date: NaiveDate,
    request_type: RequestType,
    holidays: &[NaiveDate],
) -> EngineResult<Decimal> {
    ensure_ordered(start_date, end_date)?;

    if request_type.is_half_day() {
        if is_non_working_day(start_date, holidays) {
            return Ok(Decimal::ZERO);
        }
        return Ok(HALF_DAY);
    }

    Ok(Decimal::from(count_business_days(start_date, end_date, holidays)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_half_day_constant() {
        assert_eq!(HALF_DAY, dec("0.5"));
    }

    // ==========================================================================
    // calculate_leave_duration
    // ==========================================================================

    #[test]
    fn test_duration_monday_to_friday() {
        assert_eq!(
            calculate_leave_duration(make_date("2024-06-03"), make_date("2024-06-07")).unwrap(),
            5
        );
    }

    #[test]
    fn test_duration_includes_weekends() {
        assert_eq!(
            calculate_leave_duration(make_date("2024-06-03"), make_date("2024-06-09")).unwrap(),
            7
        );
    }

    #[test]
    fn test_duration_across_year_boundary() {
        assert_eq!(
            calculate_leave_duration(make_date("2024-12-30"), make_date("2025-01-02")).unwrap(),
            4
        );
    }

    #[test]
    fn test_duration_reversed_range_is_invalid() {
        let result = calculate_leave_duration(make_date("2024-06-07"), make_date("2024-06-03"));
        match result {
            Err(EngineError::InvalidRange {
                start_date,
                end_date,
            }) => {
                assert_eq!(start_date, make_date("2024-06-07"));
                assert_eq!(end_date, make_date("2024-06-03"));
            }
            other => panic!("Expected InvalidRange, got {:?}", other),
        }
    }

    // ==========================================================================
    // calculate_request_days
    // ==========================================================================

    #[test]
    fn test_request_days_full_day_matches_duration() {
        let days = calculate_request_days(
            make_date("2024-06-03"),
            make_date("2024-06-07"),
            RequestType::FullDay,
        )
        .unwrap();
        assert_eq!(days, dec("5"));
    }

    #[test]
    fn test_request_days_half_day_morning() {
        let date = make_date("2024-06-03");
        assert_eq!(
            calculate_request_days(date, date, RequestType::HalfDayMorning).unwrap(),
            dec("0.5")
        );
    }

    #[test]
    fn test_request_days_half_day_afternoon() {
        let date = make_date("2024-06-03");
        assert_eq!(
            calculate_request_days(date, date, RequestType::HalfDayAfternoon).unwrap(),
            dec("0.5")
        );
    }

    #[test]
    fn test_request_days_half_day_multi_date_not_enforced() {
        let days = calculate_request_days(
            make_date("2024-06-03"),
            make_date("2024-06-05"),
            RequestType::HalfDayMorning,
        )
        .unwrap();
        assert_eq!(days, dec("0.5"));
    }

    #[test]
    fn test_request_days_reversed_range_is_invalid() {
        let result = calculate_request_days(
            make_date("2024-06-05"),
            make_date("2024-06-03"),
            RequestType::HalfDayMorning,
        );
        assert!(matches!(result, Err(EngineError::InvalidRange { .. })));
    }

    // ==========================================================================
    // calculate_working_request_days
    // ==========================================================================

    #[test]
    fn test_working_days_excludes_weekend_and_holiday() {
        let holidays = [make_date("2024-06-05")];
        let days = calculate_working_request_days(
            make_date("2024-06-03"),
            make_date("2024-06-09"),
            RequestType::FullDay,
            &holidays,
        )
        .unwrap();
        assert_eq!(days, dec("4"));
    }

    #[test]
    fn test_working_days_half_day_on_holiday_is_zero() {
        let date = make_date("2024-06-05");
        let days =
            calculate_working_request_days(date, date, RequestType::HalfDayAfternoon, &[date])
                .unwrap();
        assert_eq!(days, Decimal::ZERO);
    }

    #[test]
    fn test_working_days_half_day_on_weekday() {
        let date = make_date("2024-06-05");
        let days =
            calculate_working_request_days(date, date, RequestType::HalfDayMorning, &[]).unwrap();
        assert_eq!(days, dec("0.5"));
    }

    #[test]
    fn test_working_days_reversed_range_is_invalid() {
        let result = calculate_working_request_days(
            make_date("2024-06-09"),
            make_date("2024-06-03"),
            RequestType::FullDay,
            &[],
        );
        assert!(matches!(result, Err(EngineError::InvalidRange { .. })));
    }

    proptest! {
        #[test]
        fn prop_single_day_duration_is_one(offset in 0i64..20_000) {
            let date = make_date("1990-01-01") + chrono::Duration::days(offset);
            prop_assert_eq!(calculate_leave_duration(date, date).unwrap(), 1);
        }

        #[test]
        fn prop_duration_is_span_plus_one(offset in 0i64..20_000, span in 0i64..500) {
            let start = make_date("1990-01-01") + chrono::Duration::days(offset);
            let end = start + chrono::Duration::days(span);
            prop_assert_eq!(calculate_leave_duration(start, end).unwrap() as i64, span + 1);
        }

        #[test]
        fn prop_reversed_range_always_rejected(offset in 0i64..20_000, span in 1i64..500) {
            let start = make_date("1990-01-01") + chrono::Duration::days(offset);
            let end = start - chrono::Duration::days(span);
            prop_assert!(calculate_leave_duration(start, end).is_err());
        }
    }
}
