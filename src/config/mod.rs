//! Configuration loading and management for the TimeTrack engine.
//!
//! This module provides functionality to load engine configuration from YAML
//! files: payroll rates, the network allow-list and the seed employee
//! directory.
//!
//! # Example
//!
//! ```no_run
//! use timetrack_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Currency: {}", config.currency());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EmployeesConfig, EngineConfig, NetworkSettings, OvertimeSettings, PayrollSettings,
    ProrationSettings, StatutoryRates,
};
