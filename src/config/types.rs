//! Configuration types for the compensation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the per-tax-year YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Metadata about the loaded tax-year tables.
#[derive(Debug, Clone, Deserialize)]
pub struct TableMetadata {
    /// A short code identifying the table set (e.g., "clt2026").
    pub code: String,
    /// Human-readable description of the table set.
    pub name: String,
    /// The tax year these tables apply to.
    pub tax_year: i32,
    /// URL documenting the source of the constants.
    pub source_url: String,
}

/// A single tier of a progressive schedule.
///
/// `up_to` is the tier's upper limit; the last tier of the income-tax
/// schedule omits it, meaning "no ceiling".
#[derive(Debug, Clone, Deserialize)]
pub struct TaxTier {
    /// Upper limit of this tier, or `None` for an unbounded last tier.
    pub up_to: Option<Decimal>,
    /// Marginal or formula rate as a fraction (e.g., 0.075 for 7.5%).
    pub rate: Decimal,
    /// Fixed deduction used by the single-formula evaluation mode.
    #[serde(default)]
    pub deduction: Decimal,
}

/// The social-security contribution schedule, evaluated cumulatively.
///
/// Every tier carries an upper limit; once income exceeds the last limit
/// the contribution is pinned at the schedule ceiling.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionTable {
    /// Ordered tiers with strictly increasing limits.
    pub tiers: Vec<TaxTier>,
}

impl ContributionTable {
    /// The highest tier limit, above which contributions stop growing.
    pub fn ceiling_income(&self) -> Decimal {
        self.tiers
            .last()
            .and_then(|t| t.up_to)
            .unwrap_or(Decimal::ZERO)
    }
}

/// The income-tax schedule and the thresholds of the three-way policy.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxTable {
    /// Ordered tiers; evaluated as `base × rate − deduction`.
    pub tiers: Vec<TaxTier>,
    /// Gross income at or below which tax is zero regardless of base.
    pub exemption_threshold: Decimal,
    /// Gross income ceiling of the linear phase-in band.
    pub transition_ceiling: Decimal,
    /// Rate applied to `gross − exemption_threshold` inside the band.
    pub transition_rate: Decimal,
    /// Flat deduction substitutable for itemized deductions.
    pub simplified_deduction: Decimal,
    /// Monthly deduction per dependent.
    pub dependent_deduction: Decimal,
}

/// Multipliers for the variable-earnings (extras) categories.
#[derive(Debug, Clone, Deserialize)]
pub struct PremiumRates {
    /// Tier-1 overtime multiplier (e.g., 1.5 for 50% premium).
    pub overtime_tier1: Decimal,
    /// Tier-2 overtime multiplier (e.g., 2.0 for 100% premium).
    pub overtime_tier2: Decimal,
    /// Night-shift premium as a fraction of the hourly rate.
    pub night_shift: Decimal,
    /// On-call premium as a fraction of the hourly rate.
    pub on_call: Decimal,
    /// Suppressed-rest-period premium multiplier.
    pub rest_suppression: Decimal,
    /// Weekly-paid-rest reflex fraction applied to the extras subtotal.
    pub rest_reflex: Decimal,
}

/// Family-allowance (salário-família) parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct FamilyAllowance {
    /// Credit per dependent.
    pub per_dependent: Decimal,
    /// Gross income ceiling for eligibility.
    pub income_ceiling: Decimal,
}

/// Payroll configuration from payroll.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// Default monthly workload divisor for the hourly rate (220).
    pub workload_divisor: Decimal,
    /// Premium multipliers for the extras categories.
    pub premiums: PremiumRates,
    /// Legal cap on the transport-benefit deduction as a fraction of gross.
    pub transport_cap_rate: Decimal,
    /// Family-allowance parameters.
    pub family_allowance: FamilyAllowance,
}

/// Consigned-loan configuration from loans.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct LoanConfig {
    /// Cap on the payroll deduction as a fraction of the relevant net pay.
    pub installment_cap_rate: Decimal,
    /// Fraction of the guarantee fund usable as loan collateral.
    pub guarantee_rate: Decimal,
    /// Fraction of the fund balance paid as the severance fine.
    pub fine_rate: Decimal,
    /// Monthly employer accrual rate used to estimate a missing fund balance.
    pub fund_monthly_rate: Decimal,
}

/// Tax treatment of a single contractor (PJ) regime.
#[derive(Debug, Clone, Deserialize)]
pub struct RegimeRate {
    /// Human-readable regime name.
    pub name: String,
    /// Tax as a fraction of monthly revenue.
    #[serde(default)]
    pub rate: Decimal,
    /// Fixed monthly fee charged regardless of revenue.
    #[serde(default)]
    pub fixed_fee: Decimal,
}

/// Contractor regimes configuration from regimes.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct RegimesConfig {
    /// Map of regime code to its tax treatment.
    pub regimes: HashMap<String, RegimeRate>,
}

/// Tables configuration file structure (tables.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct TablesConfig {
    /// Table-set metadata.
    pub metadata: TableMetadata,
    /// The contribution schedule.
    pub contribution: ContributionTable,
    /// The income-tax schedule and policy thresholds.
    pub income_tax: IncomeTaxTable,
}

/// The complete engine configuration for one tax year.
///
/// Aggregates all constants loaded from the YAML files of a configuration
/// directory. Immutable after loading; every calculator borrows it.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: TableMetadata,
    contribution: ContributionTable,
    income_tax: IncomeTaxTable,
    payroll: PayrollConfig,
    loans: LoanConfig,
    regimes: HashMap<String, RegimeRate>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        tables: TablesConfig,
        payroll: PayrollConfig,
        loans: LoanConfig,
        regimes: RegimesConfig,
    ) -> Self {
        Self {
            metadata: tables.metadata,
            contribution: tables.contribution,
            income_tax: tables.income_tax,
            payroll,
            loans,
            regimes: regimes.regimes,
        }
    }

    /// Returns the table-set metadata.
    pub fn metadata(&self) -> &TableMetadata {
        &self.metadata
    }

    /// Returns the contribution schedule.
    pub fn contribution(&self) -> &ContributionTable {
        &self.contribution
    }

    /// Returns the income-tax schedule.
    pub fn income_tax(&self) -> &IncomeTaxTable {
        &self.income_tax
    }

    /// Returns the payroll configuration.
    pub fn payroll(&self) -> &PayrollConfig {
        &self.payroll
    }

    /// Returns the consigned-loan configuration.
    pub fn loans(&self) -> &LoanConfig {
        &self.loans
    }

    /// Returns the contractor regimes keyed by regime code.
    pub fn regimes(&self) -> &HashMap<String, RegimeRate> {
        &self.regimes
    }
}
