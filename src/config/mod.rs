//! Configuration loading and management for the leave engine.
//!
//! This module loads the holiday calendar and leave-type catalogue from YAML
//! files.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Observed holidays: {}", config.active_holidays().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarConfig, HolidaysConfig, LeaveTypesConfig};
