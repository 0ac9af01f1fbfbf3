//! Result records produced by the scenario calculators.
//!
//! Results are value objects: produced once per invocation, never mutated
//! after construction and safe to serialize directly to a display or
//! export layer. Calling a calculator twice with identical inputs yields
//! identical records; request metadata (id, timestamp) is added by the
//! API layer, not here.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tag identifying which scenario produced a result record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Net monthly salary.
    MonthlySalary,
    /// Vacation pay.
    Vacation,
    /// 13th-salary installments.
    ThirteenthSalary,
    /// Severance settlement.
    Severance,
    /// Contractor (PJ) comparison.
    Contractor,
    /// Standalone income-tax simulation.
    IncomeTax,
}

/// Monetary breakdown of the variable-earnings categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtrasBreakdown {
    /// Hourly rate derived from base pay and the workload divisor.
    pub hourly_rate: Decimal,
    /// Tier-1 overtime amount.
    pub overtime_tier1: Decimal,
    /// Tier-2 overtime amount.
    pub overtime_tier2: Decimal,
    /// Night-shift premium amount.
    pub night_shift: Decimal,
    /// On-call premium amount.
    pub on_call: Decimal,
    /// Suppressed-rest premium amount.
    pub rest_suppression: Decimal,
    /// Sum of the five category amounts.
    pub subtotal: Decimal,
    /// Paid-weekly-rest reflex over the subtotal, when requested.
    pub rest_reflex: Decimal,
    /// Subtotal plus reflex.
    pub total: Decimal,
}

impl ExtrasBreakdown {
    /// An all-zero breakdown, used when no extra hours were supplied.
    pub fn zero() -> Self {
        Self {
            hourly_rate: Decimal::ZERO,
            overtime_tier1: Decimal::ZERO,
            overtime_tier2: Decimal::ZERO,
            night_shift: Decimal::ZERO,
            on_call: Decimal::ZERO,
            rest_suppression: Decimal::ZERO,
            subtotal: Decimal::ZERO,
            rest_reflex: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Outcome of the consigned-loan deduction waterfall.
///
/// Conservation invariant: `amount_deducted + guarantee_used + fine_used
/// + remaining_balance` equals the outstanding balance the waterfall
/// started from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanAllocation {
    /// Cap on the payroll deduction (fraction of the relevant net pay).
    pub cap_amount: Decimal,
    /// Amount deducted from the net payment.
    pub amount_deducted: Decimal,
    /// Amount covered by the guarantee fraction of the fund balance.
    pub guarantee_used: Decimal,
    /// Amount covered by the severance fine.
    pub fine_used: Decimal,
    /// Balance left for the employee to renegotiate directly.
    pub remaining_balance: Decimal,
}

/// Result of the monthly salary scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySalaryResult {
    /// Gross base salary.
    pub gross_salary: Decimal,
    /// Variable-earnings breakdown.
    pub extras: ExtrasBreakdown,
    /// Gross salary plus extras.
    pub total_gross: Decimal,
    /// Social-security contribution.
    pub contribution: Decimal,
    /// Income tax withheld.
    pub income_tax: Decimal,
    /// Transport-benefit deduction.
    pub transport_deduction: Decimal,
    /// Family-allowance credit.
    pub family_allowance: Decimal,
    /// Net pay before any loan deduction.
    pub net_before_loan: Decimal,
    /// Loan waterfall outcome, when a loan was supplied.
    pub loan: Option<LoanAllocation>,
    /// Final net pay.
    pub net_pay: Decimal,
}

/// Result of the vacation scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationResult {
    /// Pay for the vacation days taken.
    pub vacation_gross: Decimal,
    /// Constitutional one-third bonus on the vacation pay.
    pub vacation_third: Decimal,
    /// Pay for the sold days (indemnity nature, untaxed).
    pub sold_value: Decimal,
    /// One-third bonus on the sold days.
    pub sold_third: Decimal,
    /// Half-salary 13th advance paid with the vacation, when requested.
    pub thirteenth_advance: Decimal,
    /// Social-security contribution on the taxable portion.
    pub contribution: Decimal,
    /// Income tax on the taxable portion.
    pub income_tax: Decimal,
    /// Net payment before any loan deduction.
    pub net_before_loan: Decimal,
    /// Loan waterfall outcome, when a loan was supplied.
    pub loan: Option<LoanAllocation>,
    /// Final net payment.
    pub net_pay: Decimal,
}

/// Result of the 13th-salary scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirteenthResult {
    /// Full 13th-salary value proportional to months worked.
    pub full_value: Decimal,
    /// First installment (half of the full value, no deductions).
    pub first_installment: Decimal,
    /// Social-security contribution on the full value.
    pub contribution: Decimal,
    /// Income tax on the full value.
    pub income_tax: Decimal,
    /// Second installment after deductions, floored at zero.
    pub second_installment: Decimal,
    /// Sum of both installments before any loan deduction.
    pub net_before_loan: Decimal,
    /// Loan waterfall outcome, when a loan was supplied.
    pub loan: Option<LoanAllocation>,
    /// Final net total across both installments.
    pub net_total: Decimal,
}

/// Result of the severance settlement scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceResult {
    /// Human-readable description of the settlement outcome.
    pub label: String,
    /// Pay for the days worked in the exit month.
    pub salary_balance: Decimal,
    /// Variable-earnings breakdown for the exit month.
    pub extras: ExtrasBreakdown,
    /// Prior-notice days owed (worked or indemnified).
    pub notice_days: u32,
    /// Cash indemnity for an unworked notice period.
    pub notice_indemnity: Decimal,
    /// Notional exit date after notice projection, when applicable.
    pub projected_termination_date: Option<NaiveDate>,
    /// Proportional 13th-salary share (twelfths vested).
    pub thirteenth_share: Decimal,
    /// Proportional vacation share (twelfths vested).
    pub vacation_share: Decimal,
    /// One-third bonus on the proportional vacation share.
    pub vacation_third: Decimal,
    /// Fully-vested untaken vacation credit, when owed.
    pub expired_vacation: Decimal,
    /// One-third bonus on the expired vacation credit.
    pub expired_vacation_third: Decimal,
    /// Guarantee-fund balance used for the fine (supplied or estimated).
    pub fund_balance: Decimal,
    /// Severance fine on the fund balance.
    pub fund_fine: Decimal,
    /// Sum of all amounts owed to the employee.
    pub gross_total: Decimal,
    /// Social-security contribution on the taxable portion.
    pub contribution: Decimal,
    /// Income tax on the taxable portion.
    pub income_tax: Decimal,
    /// Deduction for an unserved notice period.
    pub notice_deduction: Decimal,
    /// Deduction for a 13th-salary advance already paid.
    pub advance_deduction: Decimal,
    /// Net settlement before any loan deduction.
    pub net_before_loan: Decimal,
    /// Loan waterfall outcome, when a loan was supplied.
    pub loan: Option<LoanAllocation>,
    /// Final net settlement paid to the employee.
    pub net_total: Decimal,
}

/// Result of the contractor (PJ) comparison scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractorResult {
    /// Monthly invoiced revenue.
    pub monthly_revenue: Decimal,
    /// Regime code the tax was computed under.
    pub regime: String,
    /// Tax due under the selected regime (rate plus fixed fee).
    pub tax: Decimal,
    /// Fixed monthly costs subtracted from the revenue.
    pub monthly_costs: Decimal,
    /// Net monthly income.
    pub net_income: Decimal,
}

/// Which deduction path the income-tax simulator found more favorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionPath {
    /// Itemized deductions (contribution, dependents, alimony, other).
    Itemized,
    /// The flat simplified deduction.
    Simplified,
}

/// Result of the standalone income-tax simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxSimulation {
    /// Gross monthly income the simulation ran on.
    pub gross_income: Decimal,
    /// Social-security contribution used (supplied or computed).
    pub contribution: Decimal,
    /// Tax base under itemized deductions.
    pub itemized_base: Decimal,
    /// Tax base under the flat simplified deduction.
    pub simplified_base: Decimal,
    /// The more favorable deduction path.
    pub chosen_path: DeductionPath,
    /// Income tax due.
    pub tax: Decimal,
    /// Effective rate as a percentage of gross income.
    pub effective_rate: Decimal,
}
