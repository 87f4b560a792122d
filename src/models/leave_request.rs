//! Leave request model and related types.
//!
//! This module defines the [`LeaveRequest`] struct together with the
//! [`RequestType`], [`LeaveStatus`] and [`LeaveAction`] enums that drive the
//! request status machine.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How much of each requested day is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// Whole days across the requested range.
    FullDay,
    /// The morning half of a single date.
    HalfDayMorning,
    /// The afternoon half of a single date.
    HalfDayAfternoon,
}

impl RequestType {
    /// Returns true for either half-day variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::RequestType;
    ///
    /// assert!(RequestType::HalfDayMorning.is_half_day());
    /// assert!(!RequestType::FullDay.is_half_day());
    /// ```
    pub fn is_half_day(&self) -> bool {
        matches!(self, RequestType::HalfDayMorning | RequestType::HalfDayAfternoon)
    }
}

/// The lifecycle state of a leave request.
///
/// `Pending` is the only state with outgoing transitions; the other three
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved by an authorized approver.
    Approved,
    /// Rejected by an authorized approver.
    Rejected,
    /// Withdrawn by its owner.
    Cancelled,
}

impl LeaveStatus {
    /// Returns true if no further transitions are permitted from this state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Approved => write!(f, "approved"),
            LeaveStatus::Rejected => write!(f, "rejected"),
            LeaveStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// An action that moves a leave request out of `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveAction {
    /// Approve the request.
    Approve,
    /// Reject the request.
    Reject,
    /// Cancel the request.
    Cancel,
}

impl LeaveAction {
    /// The status a request ends up in when this action succeeds.
    pub fn target_status(&self) -> LeaveStatus {
        match self {
            LeaveAction::Approve => LeaveStatus::Approved,
            LeaveAction::Reject => LeaveStatus::Rejected,
            LeaveAction::Cancel => LeaveStatus::Cancelled,
        }
    }
}

impl std::fmt::Display for LeaveAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveAction::Approve => write!(f, "approve"),
            LeaveAction::Reject => write!(f, "reject"),
            LeaveAction::Cancel => write!(f, "cancel"),
        }
    }
}

/// A leave request as exchanged with the leave-management API.
///
/// `number_of_days` is a client-side preview; the server recomputes it.
///
/// # Example
///
/// ```
/// use leave_engine::models::{LeaveRequest, LeaveStatus, RequestType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = LeaveRequest {
///     id: "lr_001".to_string(),
///     user_id: "usr_001".to_string(),
///     leave_type_id: "lt_annual".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
///     request_type: RequestType::FullDay,
///     number_of_days: Decimal::from(5),
///     reason: "Family trip".to_string(),
///     status: LeaveStatus::Pending,
///     approver_id: None,
///     approver_comments: None,
///     approved_at: None,
/// };
/// assert!(request.is_owned_by("usr_001"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The employee who submitted the request.
    pub user_id: String,
    /// The leave type being requested.
    pub leave_type_id: String,
    /// First requested date (inclusive).
    pub start_date: NaiveDate,
    /// Last requested date (inclusive).
    pub end_date: NaiveDate,
    /// Full day or half day.
    pub request_type: RequestType,
    /// Number of days the request consumes.
    #[serde(with = "rust_decimal::serde::float")]
    pub number_of_days: Decimal,
    /// The employee's stated reason.
    #[serde(default)]
    pub reason: String,
    /// Current lifecycle state.
    pub status: LeaveStatus,
    /// Who approved or rejected the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver_id: Option<String>,
    /// Comments left by the approver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver_comments: Option<String>,
    /// When the decision was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
}

impl LeaveRequest {
    /// Returns true if `user_id` submitted this request.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    /// Returns true while the request still awaits a decision.
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_leave_request_from_api_payload() {
        let json = r#"{
            "id": "lr_001",
            "userId": "usr_001",
            "leaveTypeId": "lt_annual",
            "startDate": "2024-06-03",
            "endDate": "2024-06-03",
            "requestType": "half_day_morning",
            "numberOfDays": 0.5,
            "reason": "Dentist",
            "status": "pending",
            "leaveType": {"id": "lt_annual", "name": "Annual Leave"}
        }"#;

        let request: LeaveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.request_type, RequestType::HalfDayMorning);
        assert_eq!(request.number_of_days, Decimal::from_str("0.5").unwrap());
        assert_eq!(request.status, LeaveStatus::Pending);
        assert!(request.approver_comments.is_none());
    }

    #[test]
    fn test_number_of_days_serializes_as_json_number() {
        let json = r#"{
            "id": "lr_002",
            "userId": "usr_001",
            "leaveTypeId": "lt_sick",
            "startDate": "2024-06-04",
            "endDate": "2024-06-04",
            "requestType": "half_day_afternoon",
            "numberOfDays": 0.5,
            "status": "pending"
        }"#;

        let request: LeaveRequest = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["numberOfDays"].as_f64(), Some(0.5));
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
        assert_eq!(
            serde_json::to_string(&RequestType::HalfDayAfternoon).unwrap(),
            "\"half_day_afternoon\""
        );
    }

    #[test]
    fn test_only_pending_is_not_terminal() {
        assert!(!LeaveStatus::Pending.is_terminal());
        assert!(LeaveStatus::Approved.is_terminal());
        assert!(LeaveStatus::Rejected.is_terminal());
        assert!(LeaveStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_action_target_status() {
        assert_eq!(LeaveAction::Approve.target_status(), LeaveStatus::Approved);
        assert_eq!(LeaveAction::Reject.target_status(), LeaveStatus::Rejected);
        assert_eq!(LeaveAction::Cancel.target_status(), LeaveStatus::Cancelled);
    }

    #[test]
    fn test_half_day_detection() {
        assert!(RequestType::HalfDayAfternoon.is_half_day());
        assert!(RequestType::HalfDayMorning.is_half_day());
        assert!(!RequestType::FullDay.is_half_day());
    }
}
