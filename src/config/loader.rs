//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tax-year
//! tables and rates from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    EngineConfig, LoanConfig, PayrollConfig, RegimeRate, RegimesConfig, TablesConfig, TaxTier,
};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a per-tax-year
/// directory and validates the tier schedules before handing out an
/// immutable [`EngineConfig`].
///
/// # Directory Structure
///
/// ```text
/// config/clt2026/
/// ├── tables.yaml   # metadata + contribution + income-tax schedules
/// ├── payroll.yaml  # premium multipliers, workload, benefits
/// ├── loans.yaml    # consigned-loan cap/guarantee/fine rates
/// └── regimes.yaml  # contractor (PJ) regime rates
/// ```
///
/// # Example
///
/// ```no_run
/// use clt_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/clt2026").unwrap();
/// println!("Tables: {}", loader.config().metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/clt2026")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A tier schedule has non-increasing limits
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let tables = Self::load_yaml::<TablesConfig>(&path.join("tables.yaml"))?;
        let payroll = Self::load_yaml::<PayrollConfig>(&path.join("payroll.yaml"))?;
        let loans = Self::load_yaml::<LoanConfig>(&path.join("loans.yaml"))?;
        let regimes = Self::load_yaml::<RegimesConfig>(&path.join("regimes.yaml"))?;

        Self::validate_schedule("contribution", &tables.contribution.tiers, true)?;
        Self::validate_schedule("income_tax", &tables.income_tax.tiers, false)?;

        Ok(Self {
            config: EngineConfig::new(tables, payroll, loans, regimes),
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

    /// Checks that tier limits are strictly increasing and, when the
    /// schedule is bounded, that every tier carries a limit.
    fn validate_schedule(name: &str, tiers: &[TaxTier], bounded: bool) -> EngineResult<()> {
        if tiers.is_empty() {
            return Err(EngineError::InvalidSchedule {
                schedule: name.to_string(),
                message: "schedule has no tiers".to_string(),
            });
        }

        let mut previous = Decimal::ZERO;
        for (index, tier) in tiers.iter().enumerate() {
            match tier.up_to {
                Some(limit) => {
                    if limit <= previous {
                        return Err(EngineError::InvalidSchedule {
                            schedule: name.to_string(),
                            message: format!("tier {} limit {} is not increasing", index, limit),
                        });
                    }
                    previous = limit;
                }
                None => {
                    // Only the last tier of an unbounded schedule may omit its limit.
                    if bounded || index != tiers.len() - 1 {
                        return Err(EngineError::InvalidSchedule {
                            schedule: name.to_string(),
                            message: format!("tier {} is missing its upper limit", index),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Gets a contractor regime by its code.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use clt_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/clt2026")?;
    /// let regime = loader.get_regime("simples_anexo_iii")?;
    /// println!("Regime: {}", regime.name);
    /// # Ok::<(), clt_engine::error::EngineError>(())
    /// ```
    pub fn get_regime(&self, code: &str) -> EngineResult<&RegimeRate> {
        self.config
            .regimes()
            .get(code)
            .ok_or_else(|| EngineError::UnknownRegime {
                regime: code.to_string(),
            })
    }
}
