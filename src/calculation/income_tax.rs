//! Standalone income-tax simulation.
//!
//! Evaluates both deduction paths (itemized versus the flat simplified
//! deduction) against the same gross income, picks the one producing the
//! lower tax base and reports the resulting tax and effective rate.

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::{DeductionPath, IncomeTaxInput, IncomeTaxSimulation};

use super::brackets::{cumulative_contribution, income_tax};
use super::rounding::{floor_zero, round2};

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Simulates the monthly income tax for one gross income.
///
/// The social-security contribution can be supplied (already withheld by
/// another payer) or is computed from the schedule. Both deduction paths
/// always use the same contribution figure, so the comparison isolates
/// the deduction choice itself.
pub fn simulate_income_tax(input: &IncomeTaxInput, config: &EngineConfig) -> IncomeTaxSimulation {
    let gross = floor_zero(input.gross_income);
    let table = config.income_tax();

    let contribution = match input.contribution {
        Some(value) => floor_zero(value),
        None => round2(cumulative_contribution(gross, config.contribution())),
    };

    let dependent_deduction = table.dependent_deduction * Decimal::from(input.dependents);
    let itemized_base = floor_zero(
        gross
            - contribution
            - dependent_deduction
            - floor_zero(input.alimony)
            - floor_zero(input.other_deductions),
    );
    let simplified_base = floor_zero(gross - table.simplified_deduction);

    // Lower base, lower tax: the schedule is monotone in the base.
    let (chosen_path, base) = if itemized_base <= simplified_base {
        (DeductionPath::Itemized, itemized_base)
    } else {
        (DeductionPath::Simplified, simplified_base)
    };

    let tax = round2(income_tax(gross, base, table));
    let effective_rate = if gross > Decimal::ZERO {
        round2(tax / gross * HUNDRED)
    } else {
        Decimal::ZERO
    };

    IncomeTaxSimulation {
        gross_income: gross,
        contribution,
        itemized_base,
        simplified_base,
        chosen_path,
        tax,
        effective_rate,
    }
}
