//! Leave balance model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user's entitlement for one leave type in one year.
///
/// The server maintains `remaining_days = total_days - used_days - pending_days`;
/// the client only displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalance {
    /// Unique identifier for the balance record.
    pub id: String,
    /// The user the balance belongs to.
    pub user_id: String,
    /// The leave type the balance applies to.
    pub leave_type_id: String,
    /// The leave year.
    pub year: i32,
    /// Days granted for the year.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_days: Decimal,
    /// Days consumed by approved requests.
    #[serde(with = "rust_decimal::serde::float")]
    pub used_days: Decimal,
    /// Days held by pending requests.
    #[serde(with = "rust_decimal::serde::float")]
    pub pending_days: Decimal,
    /// Days left, as reported by the server.
    #[serde(with = "rust_decimal::serde::float")]
    pub remaining_days: Decimal,
    /// Days carried over from the previous year.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub carry_forward_days: Option<Decimal>,
}

impl LeaveBalance {
    /// Recomputes the remaining days from the balance components.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::LeaveBalance;
    /// use rust_decimal::Decimal;
    ///
    /// let balance = LeaveBalance {
    ///     id: "bal_001".to_string(),
    ///     user_id: "usr_001".to_string(),
    ///     leave_type_id: "lt_annual".to_string(),
    ///     year: 2024,
    ///     total_days: Decimal::from(20),
    ///     used_days: Decimal::from(5),
    ///     pending_days: Decimal::new(25, 1),
    ///     remaining_days: Decimal::new(125, 1),
    ///     carry_forward_days: None,
    /// };
    /// assert_eq!(balance.computed_remaining_days(), Decimal::new(125, 1));
    /// ```
    pub fn computed_remaining_days(&self) -> Decimal {
        self.total_days - self.used_days - self.pending_days
    }

    /// Returns true if the server-reported remaining days match the components.
    pub fn is_consistent(&self) -> bool {
        self.remaining_days == self.computed_remaining_days()
    }

    /// Advisory check that `days` fit in the remaining balance.
    pub fn covers(&self, days: Decimal) -> bool {
        days <= self.computed_remaining_days()
    }
}
