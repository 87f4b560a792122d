//! Leave type model.
//!
//! The leave type schema carries the carry-forward and gender-applicability
//! fields used by the leave-type administration forms.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Gender restriction for a leave type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male employees.
    Male,
    /// Female employees.
    Female,
    /// Neither of the above.
    Other,
}

/// A configurable category of leave (annual, sick, parental...).
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveType;
/// use rust_decimal::Decimal;
///
/// let annual = LeaveType {
///     id: "lt_annual".to_string(),
///     name: "Annual Leave".to_string(),
///     description: String::new(),
///     default_days: Decimal::from(20),
///     is_carry_forward: true,
///     max_carry_forward_days: Some(Decimal::from(5)),
///     is_active: true,
///     applicable_gender: None,
///     is_half_day_allowed: true,
///     is_paid_leave: true,
/// };
/// assert_eq!(annual.carry_forward_limit(), Decimal::from(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveType {
    /// Unique identifier for the leave type.
    pub id: String,
    /// Display name.
    pub name: String,
    /// A free-form description.
    #[serde(default)]
    pub description: String,
    /// Days granted per year by default.
    #[serde(with = "rust_decimal::serde::float")]
    pub default_days: Decimal,
    /// Whether unused days roll over into the next year.
    pub is_carry_forward: bool,
    /// Cap on rolled-over days.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub max_carry_forward_days: Option<Decimal>,
    /// Whether employees may currently request this leave type.
    pub is_active: bool,
    /// Restricts the leave type to one gender when set.
    #[serde(default)]
    pub applicable_gender: Option<Gender>,
    /// Whether half-day requests are accepted.
    pub is_half_day_allowed: bool,
    /// Whether the leave is paid.
    pub is_paid_leave: bool,
}

impl LeaveType {
    /// Maximum days that may carry forward; zero when carry-forward is disabled.
    pub fn carry_forward_limit(&self) -> Decimal {
        if !self.is_carry_forward {
            return Decimal::ZERO;
        }
        self.max_carry_forward_days.unwrap_or(Decimal::ZERO)
    }

    /// Returns true if an employee of `gender` may take this leave.
    ///
    /// An unrestricted leave type applies to everyone, including employees
    /// whose gender is unknown.
    pub fn applies_to(&self, gender: Option<Gender>) -> bool {
        match self.applicable_gender {
            None => true,
            Some(required) => gender == Some(required),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_leave_type() -> LeaveType {
        LeaveType {
            id: "lt_maternity".to_string(),
            name: "Maternity Leave".to_string(),
            description: String::new(),
            default_days: Decimal::from(90),
            is_carry_forward: false,
            max_carry_forward_days: Some(Decimal::from(10)),
            is_active: true,
            applicable_gender: Some(Gender::Female),
            is_half_day_allowed: false,
            is_paid_leave: true,
        }
    }

    #[test]
    fn test_deserialize_leave_type_with_null_gender() {
        let json = r#"{
            "id": "lt_annual",
            "name": "Annual Leave",
            "description": "Yearly entitlement",
            "defaultDays": 20,
            "isCarryForward": true,
            "maxCarryForwardDays": 5,
            "isActive": true,
            "applicableGender": null,
            "isHalfDayAllowed": true,
            "isPaidLeave": true
        }"#;

        let leave_type: LeaveType = serde_json::from_str(json).unwrap();
        assert_eq!(leave_type.applicable_gender, None);
        assert_eq!(leave_type.carry_forward_limit(), Decimal::from(5));
    }

    #[test]
    fn test_day_counts_serialize_as_json_numbers() {
        let value = serde_json::to_value(make_leave_type()).unwrap();
        assert_eq!(value["defaultDays"].as_f64(), Some(90.0));
        assert_eq!(value["maxCarryForwardDays"].as_f64(), Some(10.0));
    }

    #[test]
    fn test_missing_carry_forward_cap_is_none() {
        let json = r#"{
            "id": "lt_unpaid",
            "name": "Unpaid Leave",
            "defaultDays": 0,
            "isCarryForward": false,
            "isActive": true,
            "isHalfDayAllowed": true,
            "isPaidLeave": false
        }"#;

        let leave_type: LeaveType = serde_json::from_str(json).unwrap();
        assert_eq!(leave_type.max_carry_forward_days, None);
    }

    #[test]
    fn test_carry_forward_limit_zero_when_disabled() {
        let leave_type = make_leave_type();
        assert_eq!(leave_type.carry_forward_limit(), Decimal::ZERO);
    }

    #[test]
    fn test_gender_restriction() {
        let leave_type = make_leave_type();
        assert!(leave_type.applies_to(Some(Gender::Female)));
        assert!(!leave_type.applies_to(Some(Gender::Male)));
        assert!(!leave_type.applies_to(None));
    }

    #[test]
    fn test_unrestricted_applies_to_unknown_gender() {
        let mut leave_type = make_leave_type();
        leave_type.applicable_gender = None;
        assert!(leave_type.applies_to(None));
        assert!(leave_type.applies_to(Some(Gender::Other)));
    }
}
