//! Calculation logic for the leave engine.
//!
//! This module contains the calendar day classifier, the business-day counter,
//! the leave duration calculator, request validation, the leave request status
//! machine, and date display formatting.

mod business_days;
mod day_classification;
mod formatting;
mod leave_duration;
mod request_validation;
mod status_machine;

pub use business_days::{business_days_in, count_business_days};
pub use day_classification::{DayKind, classify_day, is_non_working_day, is_weekend};
pub use formatting::{format_date, format_date_range, format_date_time};
pub use leave_duration::{
    HALF_DAY, calculate_leave_duration, calculate_request_days, calculate_working_request_days,
};
pub use request_validation::{LeaveRequestDraft, validate_draft};
pub use status_machine::{StatusTransition, approve, available_actions, cancel, reject};
