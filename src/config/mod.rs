//! Configuration loading and management for the compensation engine.
//!
//! This module provides functionality to load tax-year tables and rates
//! from YAML files: the contribution and income-tax schedules, payroll
//! premium multipliers, consigned-loan rates and contractor regimes.
//!
//! # Example
//!
//! ```no_run
//! use clt_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/clt2026").unwrap();
//! println!("Loaded tables: {}", loader.config().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ContributionTable, EngineConfig, FamilyAllowance, IncomeTaxTable, LoanConfig, PayrollConfig,
    PremiumRates, RegimeRate, RegimesConfig, TableMetadata, TablesConfig, TaxTier,
};
