//! 13th-salary (year-end bonus) scenario.
//!
//! The bonus vests one twelfth of the monthly remuneration per month
//! worked and is paid in two installments: the first is half the full
//! value with no deductions; the second settles the contribution and the
//! income tax computed over the full value, minus what was already paid.

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::{ExtrasBreakdown, ThirteenthInput, ThirteenthResult};

use super::brackets::{cumulative_contribution, income_tax};
use super::extras::calculate_extras;
use super::loan::allocate_loan;
use super::rounding::{floor_zero, round2};

const TWELVE: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Calculates the two 13th-salary installments for one input record.
pub fn calculate_thirteenth(input: &ThirteenthInput, config: &EngineConfig) -> ThirteenthResult {
    let gross_salary = floor_zero(input.gross_salary);

    let extras = match &input.extras {
        Some(hours) => calculate_extras(gross_salary, input.workload_hours, hours, config.payroll()),
        None => ExtrasBreakdown::zero(),
    };

    let monthly_total = gross_salary + extras.total;
    let months = input.months_worked.min(12);

    let full_value = round2(monthly_total * Decimal::from(months) / TWELVE);
    let first_installment = round2(full_value / Decimal::TWO);

    let contribution = round2(cumulative_contribution(full_value, config.contribution()));

    let tax_table = config.income_tax();
    let dependent_deduction = tax_table.dependent_deduction * Decimal::from(input.dependents);
    let tax_base = full_value - contribution - dependent_deduction;
    let tax = round2(income_tax(full_value, tax_base, tax_table));

    let second_installment = floor_zero(round2(
        full_value - contribution - tax - first_installment,
    ));

    let net_before_loan = round2(first_installment + second_installment);

    let loan = input
        .loan
        .as_ref()
        .map(|loan_input| allocate_loan(loan_input, net_before_loan, config.loans(), None));

    let loan_deduction = loan
        .as_ref()
        .map(|l| l.amount_deducted)
        .unwrap_or(Decimal::ZERO);

    let net_total = floor_zero(round2(net_before_loan - loan_deduction));

    ThirteenthResult {
        full_value,
        first_installment,
        contribution,
        income_tax: tax,
        second_installment,
        net_before_loan,
        loan,
        net_total,
    }
}
