//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the holiday
//! calendar and leave-type catalogue from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, LeaveType, active_holiday_dates};

use super::types::{CalendarConfig, HolidaysConfig, LeaveTypesConfig};

/// Loads and provides access to the calendar configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── holidays.yaml     # Company holiday calendar
/// └── leave_types.yaml  # Leave-type catalogue
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
/// use leave_engine::calculation::count_business_days;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
///
/// let start = NaiveDate::from_ymd_opt(2024, 12, 23).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 12, 27).unwrap();
/// let days = count_business_days(start, end, &loader.active_holiday_dates());
/// println!("Business days: {}", days);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalendarConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing
    /// - Either file contains invalid YAML
    /// - Two leave types share an ID
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let holidays_path = path.join("holidays.yaml");
        let holidays = Self::load_yaml::<HolidaysConfig>(&holidays_path)?;

        let leave_types_path = path.join("leave_types.yaml");
        let leave_types = Self::load_yaml::<LeaveTypesConfig>(&leave_types_path)?;

        if let Some(id) = duplicate_leave_type_id(&leave_types.leave_types) {
            return Err(EngineError::ConfigParseError {
                path: leave_types_path.display().to_string(),
                message: format!("duplicate leave type id '{}'", id),
            });
        }

        info!(
            path = %path.display(),
            holidays = holidays.holidays.len(),
            leave_types = leave_types.leave_types.len(),
            "Loaded calendar configuration"
        );

        Self::from_parts(holidays.holidays, leave_types.leave_types)
    }

    /// Builds a loader from in-memory data, e.g. lists fetched from the API.
    ///
    /// Returns `InvalidLeaveType` if two leave types share an ID.
    pub fn from_parts(holidays: Vec<Holiday>, leave_types: Vec<LeaveType>) -> EngineResult<Self> {
        if let Some(id) = duplicate_leave_type_id(&leave_types) {
            return Err(EngineError::InvalidLeaveType {
                leave_type_id: id,
                message: "duplicate leave type id".to_string(),
            });
        }

        Ok(Self {
            config: CalendarConfig::new(holidays, leave_types),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying calendar configuration.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Returns the active holidays, oldest first.
    pub fn active_holidays(&self) -> Vec<&Holiday> {
        self.config.holidays().iter().filter(|h| h.is_active).collect()
    }

    /// Returns the dates of the active holidays, ready for business-day counting.
    pub fn active_holiday_dates(&self) -> Vec<NaiveDate> {
        active_holiday_dates(self.config.holidays())
    }

    /// Returns the active holidays in `year`, oldest first.
    pub fn holidays_in_year(&self, year: i32) -> Vec<&Holiday> {
        self.config.active_holidays_in_year(year).collect()
    }

    /// Returns the active holiday dates within an inclusive range.
    pub fn holiday_dates_between(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Vec<NaiveDate> {
        self.config
            .active_holidays_between(start_date, end_date)
            .map(|h| h.date)
            .collect()
    }

    /// Gets a leave type by its ID.
    ///
    /// # Returns
    ///
    /// Returns the leave type if found, or `LeaveTypeNotFound` error.
    pub fn get_leave_type(&self, id: &str) -> EngineResult<&LeaveType> {
        self.config
            .leave_types()
            .get(id)
            .ok_or_else(|| EngineError::LeaveTypeNotFound { id: id.to_string() })
    }

    /// Returns the leave types employees may currently request, sorted by name.
    pub fn active_leave_types(&self) -> Vec<&LeaveType> {
        let mut leave_types: Vec<&LeaveType> = self
            .config
            .leave_types()
            .values()
            .filter(|lt| lt.is_active)
            .collect();
        leave_types.sort_by(|a, b| a.name.cmp(&b.name));
        leave_types
    }
}

/// Returns the first leave type ID that appears more than once.
fn duplicate_leave_type_id(leave_types: &[LeaveType]) -> Option<String> {
    let mut seen = HashSet::new();
    leave_types
        .iter()
        .find(|lt| !seen.insert(lt.id.as_str()))
        .map(|lt| lt.id.clone())
}
