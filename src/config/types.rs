//! Configuration types for the leave calendar.
//!
//! This module contains the structures deserialized from the YAML files of a
//! calendar configuration directory.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::models::{Holiday, LeaveType};

/// Structure of `holidays.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// All configured holidays, active or not.
    pub holidays: Vec<Holiday>,
}

/// Structure of `leave_types.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveTypesConfig {
    /// All configured leave types.
    pub leave_types: Vec<LeaveType>,
}

/// The complete calendar configuration.
///
/// Aggregates the holiday calendar and the leave-type catalogue loaded from a
/// configuration directory.
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    /// Holidays sorted by date, oldest first.
    holidays: Vec<Holiday>,
    /// Leave types by ID.
    leave_types: HashMap<String, LeaveType>,
}

impl CalendarConfig {
    /// Creates a new CalendarConfig from its component parts.
    pub fn new(holidays: Vec<Holiday>, leave_types: Vec<LeaveType>) -> Self {
        let mut sorted_holidays = holidays;
        sorted_holidays.sort_by(|a, b| a.date.cmp(&b.date));
        Self {
            holidays: sorted_holidays,
            leave_types: leave_types
                .into_iter()
                .map(|lt| (lt.id.clone(), lt))
                .collect(),
        }
    }

    /// Returns all holidays, oldest first.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Returns all leave types by ID.
    pub fn leave_types(&self) -> &HashMap<String, LeaveType> {
        &self.leave_types
    }

    /// Returns the active holidays falling in `year`.
    pub fn active_holidays_in_year(&self, year: i32) -> impl Iterator<Item = &Holiday> {
        self.holidays
            .iter()
            .filter(move |h| h.is_active && h.date.year() == year)
    }

    /// Returns the active holidays between two dates, inclusive.
    pub fn active_holidays_between(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> impl Iterator<Item = &Holiday> {
        self.holidays
            .iter()
            .filter(move |h| h.is_active && h.date >= start_date && h.date <= end_date)
    }
}
