//! Input records for the scenario calculators.
//!
//! Every calculator receives one fully-owned input record per invocation.
//! Values outside the documented domain (negative pay, negative hours) are
//! treated as zero by the calculators rather than rejected; the engine has
//! no validation layer of its own.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hour counts for the variable-earnings (extras) categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraHours {
    /// Overtime hours at the tier-1 (50%) premium.
    #[serde(default)]
    pub overtime_tier1: Decimal,
    /// Overtime hours at the tier-2 (100%) premium.
    #[serde(default)]
    pub overtime_tier2: Decimal,
    /// Hours worked under the night-shift premium.
    #[serde(default)]
    pub night_shift: Decimal,
    /// Hours on call (sobreaviso).
    #[serde(default)]
    pub on_call: Decimal,
    /// Hours of suppressed intra-shift rest periods.
    #[serde(default)]
    pub rest_suppression: Decimal,
    /// Whether to add the paid-weekly-rest reflex over the subtotal.
    #[serde(default)]
    pub include_rest_reflex: bool,
}

/// Transport-benefit parameters for the monthly salary scenario.
///
/// The deduction is the lesser of the legal percentage of gross pay and
/// the actual cost (`daily_cost × work_days`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportInput {
    /// Actual transport cost per work day.
    pub daily_cost: Decimal,
    /// Number of work days in the month.
    pub work_days: u32,
}

/// Terms of an outstanding consigned (payroll-deducted) loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Contracted monthly installment; bounds the payroll deduction when set.
    #[serde(default)]
    pub monthly_installment: Option<Decimal>,
    /// Outstanding loan balance to be amortized.
    pub outstanding_balance: Decimal,
    /// Whether the guarantee-fund collateral clause was contracted.
    #[serde(default)]
    pub guarantee_enabled: bool,
    /// Guarantee fund (FGTS) balance backing the guarantee step; falls
    /// back to the settlement-level balance (supplied or estimated from
    /// tenure) when absent.
    #[serde(default)]
    pub fund_balance: Option<Decimal>,
}

/// Legal grounds for an employment termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Dismissal without cause (employer-initiated).
    NoCauseDismissal,
    /// Employee resignation.
    Resignation,
    /// Termination by mutual agreement.
    MutualAgreement,
    /// Dismissal for cause.
    ForCauseDismissal,
}

/// How the prior-notice period was handled at termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeStatus {
    /// The notice period was worked through.
    Worked,
    /// The notice period was indemnified in cash.
    Indemnified,
    /// The notice period was owed but not served.
    NotServed,
}

/// Input for the monthly salary scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySalaryInput {
    /// Gross base salary for the month.
    pub gross_salary: Decimal,
    /// Number of dependents for tax and allowance purposes.
    #[serde(default)]
    pub dependents: u32,
    /// Extra-work hour counts, if any.
    #[serde(default)]
    pub extras: Option<ExtraHours>,
    /// Monthly workload divisor override (defaults to the configured 220).
    #[serde(default)]
    pub workload_hours: Option<Decimal>,
    /// Transport-benefit parameters; the deduction applies when present.
    #[serde(default)]
    pub transport: Option<TransportInput>,
    /// Outstanding consigned loan, if any.
    #[serde(default)]
    pub loan: Option<LoanInput>,
}

/// Input for the vacation scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationInput {
    /// Gross base salary.
    pub gross_salary: Decimal,
    /// Number of dependents for tax purposes.
    #[serde(default)]
    pub dependents: u32,
    /// Extra-work hour counts, if any.
    #[serde(default)]
    pub extras: Option<ExtraHours>,
    /// Monthly workload divisor override.
    #[serde(default)]
    pub workload_hours: Option<Decimal>,
    /// Vacation days taken (capped at 30).
    pub days_taken: u32,
    /// Vacation days sold back (abono pecuniário, capped at 10).
    #[serde(default)]
    pub sold_days: u32,
    /// Whether to advance half of the 13th salary with the vacation pay.
    #[serde(default)]
    pub advance_thirteenth: bool,
    /// Outstanding consigned loan, if any.
    #[serde(default)]
    pub loan: Option<LoanInput>,
}

/// Input for the 13th-salary (year-end bonus) scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirteenthInput {
    /// Gross base salary.
    pub gross_salary: Decimal,
    /// Number of dependents for tax purposes.
    #[serde(default)]
    pub dependents: u32,
    /// Extra-work hour counts, if any.
    #[serde(default)]
    pub extras: Option<ExtraHours>,
    /// Monthly workload divisor override.
    #[serde(default)]
    pub workload_hours: Option<Decimal>,
    /// Months worked in the year (capped at 12).
    pub months_worked: u32,
    /// Outstanding consigned loan, if any.
    #[serde(default)]
    pub loan: Option<LoanInput>,
}

/// Input for the severance settlement scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceInput {
    /// Gross base salary at termination.
    pub gross_salary: Decimal,
    /// Number of dependents for tax purposes.
    #[serde(default)]
    pub dependents: u32,
    /// Extra-work hour counts for the exit month, if any.
    #[serde(default)]
    pub extras: Option<ExtraHours>,
    /// Monthly workload divisor override.
    #[serde(default)]
    pub workload_hours: Option<Decimal>,
    /// Employment start date.
    pub hire_date: NaiveDate,
    /// Employment termination date.
    pub termination_date: NaiveDate,
    /// Legal grounds for the termination.
    pub reason: TerminationReason,
    /// How the prior-notice period was handled.
    pub notice: NoticeStatus,
    /// Whether a fully-vested, untaken vacation period is owed.
    #[serde(default)]
    pub expired_vacation: bool,
    /// FGTS balance; estimated from tenure and salary when absent.
    #[serde(default)]
    pub fund_balance: Option<Decimal>,
    /// 13th-salary advance already paid this year, deducted from the settlement.
    #[serde(default)]
    pub thirteenth_advance: Decimal,
    /// Outstanding consigned loan, if any.
    #[serde(default)]
    pub loan: Option<LoanInput>,
}

/// Input for the contractor (PJ) comparison scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractorInput {
    /// Monthly invoiced revenue.
    pub monthly_revenue: Decimal,
    /// Contractor regime code (e.g., "simples_anexo_iii").
    pub regime: String,
    /// Fixed monthly costs (accounting, fees, etc.).
    #[serde(default)]
    pub monthly_costs: Decimal,
}

/// Input for the standalone income-tax simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxInput {
    /// Gross monthly income.
    pub gross_income: Decimal,
    /// Social-security contribution; computed from gross when absent.
    #[serde(default)]
    pub contribution: Option<Decimal>,
    /// Number of dependents.
    #[serde(default)]
    pub dependents: u32,
    /// Deductible alimony payments.
    #[serde(default)]
    pub alimony: Decimal,
    /// Other itemizable deductions.
    #[serde(default)]
    pub other_deductions: Decimal,
}
