//! Leave request creation checks.
//!
//! Validates a draft leave request before it is submitted and computes the
//! preview `numberOfDays` shown in the request form.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveRequest, LeaveStatus, LeaveType, RequestType};

use super::leave_duration::calculate_request_days;

/// The fields an employee fills in to request leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestDraft {
    /// The leave type being requested.
    pub leave_type_id: String,
    /// First requested date (inclusive).
    pub start_date: NaiveDate,
    /// Last requested date (inclusive).
    pub end_date: NaiveDate,
    /// Full day or half day.
    pub request_type: RequestType,
    /// The employee's stated reason.
    #[serde(default)]
    pub reason: String,
}

/// Validates a draft and returns the number of days it would consume.
///
/// Checks, in order:
/// - the range is not reversed ([`EngineError::InvalidRange`])
/// - a half-day request covers exactly one date ([`EngineError::InvalidHalfDayRange`])
/// - when `leave_type` is given, it is active and allows half days if one is
///   requested ([`EngineError::InvalidLeaveType`])
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{validate_draft, LeaveRequestDraft};
/// use leave_engine::models::RequestType;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let draft = LeaveRequestDraft {
///     leave_type_id: "lt_annual".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
///     request_type: RequestType::HalfDayMorning,
///     reason: String::new(),
/// };
/// assert!(validate_draft(&draft, None).is_err());
/// ```
pub fn validate_draft(
    draft: &LeaveRequestDraft,
    leave_type: Option<&LeaveType>,
) -> EngineResult<Decimal> {
    if draft.end_date < draft.start_date {
        return Err(EngineError::InvalidRange {
            start_date: draft.start_date,
            end_date: draft.end_date,
        });
    }

    if draft.request_type.is_half_day() && draft.start_date != draft.end_date {
        return Err(EngineError::InvalidHalfDayRange {
            start_date: draft.start_date,
            end_date: draft.end_date,
        });
    }

    if let Some(leave_type) = leave_type {
        if leave_type.id != draft.leave_type_id {
            return Err(EngineError::InvalidLeaveType {
                leave_type_id: draft.leave_type_id.clone(),
                message: format!("draft refers to a different leave type than '{}'", leave_type.id),
            });
        }
        if !leave_type.is_active {
            return Err(EngineError::InvalidLeaveType {
                leave_type_id: leave_type.id.clone(),
                message: "leave type is not active".to_string(),
            });
        }
        if draft.request_type.is_half_day() && !leave_type.is_half_day_allowed {
            return Err(EngineError::InvalidLeaveType {
                leave_type_id: leave_type.id.clone(),
                message: "half-day requests are not allowed".to_string(),
            });
        }
    }

    let days = calculate_request_days(draft.start_date, draft.end_date, draft.request_type)?;
    debug!(leave_type_id = %draft.leave_type_id, days = %days, "Validated leave request draft");
    Ok(days)
}

impl LeaveRequestDraft {
    /// Validates the draft and turns it into a pending [`LeaveRequest`].
    pub fn into_pending(
        self,
        id: impl Into<String>,
        user_id: impl Into<String>,
        leave_type: Option<&LeaveType>,
    ) -> EngineResult<LeaveRequest> {
        let number_of_days = validate_draft(&self, leave_type)?;

        Ok(LeaveRequest {
            id: id.into(),
            user_id: user_id.into(),
            leave_type_id: self.leave_type_id,
            start_date: self.start_date,
            end_date: self.end_date,
            request_type: self.request_type,
            number_of_days,
            reason: self.reason,
            status: LeaveStatus::Pending,
            approver_id: None,
            approver_comments: None,
            approved_at: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_draft(start: &str, end: &str, request_type: RequestType) -> LeaveRequestDraft {
        LeaveRequestDraft {
            leave_type_id: "lt_annual".to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            request_type,
            reason: "Personal".to_string(),
        }
    }

    fn make_leave_type(is_active: bool, is_half_day_allowed: bool) -> LeaveType {
        LeaveType {
            id: "lt_annual".to_string(),
            name: "Annual Leave".to_string(),
            description: String::new(),
            default_days: Decimal::from(20),
            is_carry_forward: true,
            max_carry_forward_days: Some(Decimal::from(5)),
            is_active,
            applicable_gender: None,
            is_half_day_allowed,
            is_paid_leave: true,
        }
    }

    #[test]
    fn test_full_day_draft_returns_span() {
        let draft = make_draft("2024-06-03", "2024-06-07", RequestType::FullDay);
        assert_eq!(validate_draft(&draft, None).unwrap(), Decimal::from(5));
    }

    #[test]
    fn test_half_day_single_date_returns_half() {
        let draft = make_draft("2024-06-03", "2024-06-03", RequestType::HalfDayAfternoon);
        let leave_type = make_leave_type(true, true);
        assert_eq!(
            validate_draft(&draft, Some(&leave_type)).unwrap(),
            Decimal::from_str("0.5").unwrap()
        );
    }

    #[test]
    fn test_reversed_range_rejected() {
        let draft = make_draft("2024-06-07", "2024-06-03", RequestType::FullDay);
        assert!(matches!(
            validate_draft(&draft, None),
            Err(EngineError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_half_day_over_multiple_dates_rejected() {
        let draft = make_draft("2024-06-03", "2024-06-04", RequestType::HalfDayMorning);
        assert!(matches!(
            validate_draft(&draft, None),
            Err(EngineError::InvalidHalfDayRange { .. })
        ));
    }

    #[test]
    fn test_half_day_on_full_day_only_leave_type_rejected() {
        let draft = make_draft("2024-06-03", "2024-06-03", RequestType::HalfDayMorning);
        let leave_type = make_leave_type(true, false);

        match validate_draft(&draft, Some(&leave_type)) {
            Err(EngineError::InvalidLeaveType { message, .. }) => {
                assert_eq!(message, "half-day requests are not allowed");
            }
            other => panic!("Expected InvalidLeaveType, got {:?}", other),
        }
    }

    #[test]
    fn test_inactive_leave_type_rejected() {
        let draft = make_draft("2024-06-03", "2024-06-04", RequestType::FullDay);
        let leave_type = make_leave_type(false, true);
        assert!(matches!(
            validate_draft(&draft, Some(&leave_type)),
            Err(EngineError::InvalidLeaveType { .. })
        ));
    }

    #[test]
    fn test_mismatched_leave_type_rejected() {
        let draft = make_draft("2024-06-03", "2024-06-04", RequestType::FullDay);
        let mut leave_type = make_leave_type(true, true);
        leave_type.id = "lt_sick".to_string();
        assert!(validate_draft(&draft, Some(&leave_type)).is_err());
    }

    #[test]
    fn test_into_pending_builds_request() {
        let draft = make_draft("2024-06-03", "2024-06-05", RequestType::FullDay);

        let request = draft.into_pending("lr_100", "usr_emp", None).unwrap();

        assert_eq!(request.status, LeaveStatus::Pending);
        assert_eq!(request.number_of_days, Decimal::from(3));
        assert_eq!(request.user_id, "usr_emp");
        assert_eq!(request.reason, "Personal");
    }

    #[test]
    fn test_deserialize_draft_from_form_payload() {
        let json = r#"{
            "leaveTypeId": "lt_annual",
            "startDate": "2024-06-03",
            "endDate": "2024-06-03",
            "requestType": "half_day_morning",
            "reason": "Appointment"
        }"#;

        let draft: LeaveRequestDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.request_type, RequestType::HalfDayMorning);
    }
}
