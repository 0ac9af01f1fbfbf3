//! Contractor (PJ) comparison scenario.
//!
//! Treats the configured regime table as data: each regime is an
//! effective rate over revenue plus an optional fixed monthly fee, so
//! adding a regime is a config change, not a code change.

#[cfg(test)]
use rust_decimal::Decimal;

use crate::config::RegimeRate;
use crate::models::{ContractorInput, ContractorResult};

use super::rounding::{floor_zero, round2};

/// Calculates the contractor net income under one tax regime.
///
/// The regime is resolved by the caller (so an unknown code surfaces as
/// a typed error before any arithmetic runs).
pub fn calculate_contractor(input: &ContractorInput, regime: &RegimeRate) -> ContractorResult {
    let revenue = floor_zero(input.monthly_revenue);
    let costs = floor_zero(input.monthly_costs);

    let tax = round2(revenue * regime.rate + regime.fixed_fee);
    let net_income = floor_zero(round2(revenue - tax - costs));

    ContractorResult {
        monthly_revenue: revenue,
        regime: input.regime.clone(),
        tax,
        monthly_costs: costs,
        net_income,
    }
}
