//! Vacation pay scenario.
//!
//! Vacation pay is the monthly remuneration (gross plus extras)
//! proportional to the days taken, plus the constitutional one-third
//! bonus. Sold days (abono pecuniário, at most 10) are indemnity in
//! nature and stay out of the tax base, as does the optional half-salary
//! 13th advance.

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::{ExtrasBreakdown, VacationInput, VacationResult};

use super::brackets::{cumulative_contribution, income_tax};
use super::extras::calculate_extras;
use super::loan::allocate_loan;
use super::rounding::{floor_zero, round2};

/// Maximum number of vacation days in one period.
pub const MAX_VACATION_DAYS: u32 = 30;

/// Maximum number of days that can be sold back.
pub const MAX_SOLD_DAYS: u32 = 10;

const THIRTY: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
const THREE: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Calculates the vacation payment for one input record.
pub fn calculate_vacation(input: &VacationInput, config: &EngineConfig) -> VacationResult {
    let gross_salary = floor_zero(input.gross_salary);

    let extras = match &input.extras {
        Some(hours) => calculate_extras(gross_salary, input.workload_hours, hours, config.payroll()),
        None => ExtrasBreakdown::zero(),
    };

    let monthly_total = gross_salary + extras.total;

    let days_taken = input.days_taken.min(MAX_VACATION_DAYS);
    let sold_days = input.sold_days.min(MAX_SOLD_DAYS);

    let vacation_gross = round2(monthly_total * Decimal::from(days_taken) / THIRTY);
    let vacation_third = round2(vacation_gross / THREE);

    let sold_value = round2(monthly_total * Decimal::from(sold_days) / THIRTY);
    let sold_third = round2(sold_value / THREE);

    let thirteenth_advance = if input.advance_thirteenth {
        round2(gross_salary / Decimal::TWO)
    } else {
        Decimal::ZERO
    };

    // Only the vacation pay and its one-third are taxable; the sold days
    // and the 13th advance are settled without deductions here.
    let taxable = vacation_gross + vacation_third;
    let contribution = round2(cumulative_contribution(taxable, config.contribution()));

    let tax_table = config.income_tax();
    let dependent_deduction = tax_table.dependent_deduction * Decimal::from(input.dependents);
    let tax_base = taxable - contribution - dependent_deduction;
    let tax = round2(income_tax(taxable, tax_base, tax_table));

    let net_before_loan = floor_zero(round2(
        taxable - contribution - tax + sold_value + sold_third + thirteenth_advance,
    ));

    let loan = input
        .loan
        .as_ref()
        .map(|loan_input| allocate_loan(loan_input, net_before_loan, config.loans(), None));

    let loan_deduction = loan
        .as_ref()
        .map(|l| l.amount_deducted)
        .unwrap_or(Decimal::ZERO);

    let net_pay = floor_zero(round2(net_before_loan - loan_deduction));

    VacationResult {
        vacation_gross,
        vacation_third,
        sold_value,
        sold_third,
        thirteenth_advance,
        contribution,
        income_tax: tax,
        net_before_loan,
        loan,
        net_pay,
    }
}
