//! Error types for the leave engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all validation failures the engine can report. None of them are fatal:
//! callers surface them as user-visible messages.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{LeaveAction, LeaveStatus};

/// The main error type for the leave engine.
///
/// All fallible operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::InvalidRange {
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range: end date 2024-06-03 is before start date 2024-06-07"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The end date of a range falls before its start date.
    #[error("Invalid date range: end date {end_date} is before start date {start_date}")]
    InvalidRange {
        /// The start of the rejected range.
        start_date: NaiveDate,
        /// The end of the rejected range.
        end_date: NaiveDate,
    },

    /// A half-day request was paired with a range covering more than one date.
    #[error("Half-day request must cover a single date, got {start_date} to {end_date}")]
    InvalidHalfDayRange {
        /// The start of the rejected range.
        start_date: NaiveDate,
        /// The end of the rejected range.
        end_date: NaiveDate,
    },

    /// A status transition was attempted from the wrong state or by the wrong actor.
    #[error("Cannot {action} leave request '{request_id}' in status {from}: {reason}")]
    InvalidTransition {
        /// The ID of the leave request.
        request_id: String,
        /// The status the request was in when the transition was attempted.
        from: LeaveStatus,
        /// The attempted action.
        action: LeaveAction,
        /// Why the transition was refused.
        reason: String,
    },

    /// The leave type does not permit the requested leave.
    #[error("Invalid leave type '{leave_type_id}': {message}")]
    InvalidLeaveType {
        /// The ID of the leave type.
        leave_type_id: String,
        /// A description of the violated rule.
        message: String,
    },

    /// A leave type ID was not found in the configuration.
    #[error("Leave type not found: {id}")]
    LeaveTypeNotFound {
        /// The ID that was not found.
        id: String,
    },

    /// A date string could not be parsed.
    #[error("Invalid date '{value}'")]
    InvalidDate {
        /// The unparseable input.
        value: String,
    },

    /// The stored session token has expired.
    #[error("Session expired at {expired_at}")]
    SessionExpired {
        /// The token's expiry, in seconds since the Unix epoch.
        expired_at: i64,
    },

    /// The stored session could not be read.
    #[error("Invalid session: {message}")]
    InvalidSession {
        /// A description of what was wrong with the session.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
