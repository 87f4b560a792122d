//! Core data models for the leave engine.
//!
//! This module contains the domain models exchanged with the leave-management API.

mod holiday;
mod leave_balance;
mod leave_request;
mod leave_type;
mod user;

pub use holiday::{Holiday, active_holiday_dates};
pub use leave_balance::LeaveBalance;
pub use leave_request::{LeaveAction, LeaveRequest, LeaveStatus, RequestType};
pub use leave_type::{Gender, LeaveType};
pub use user::{Actor, ApprovalLevel, AuthUser, Role};
