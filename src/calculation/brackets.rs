//! Progressive bracket evaluation.
//!
//! The two tier schedules are evaluated by two distinct algorithms that
//! happen to share a data shape:
//!
//! - the contribution schedule is a **cumulative marginal sum**: each tier
//!   contributes `(min(amount, limit) − previous limit) × rate`, and the
//!   result is pinned at the schedule ceiling once the amount exceeds the
//!   top limit;
//! - the income-tax schedule is a **single-tier formula**: the first tier
//!   whose limit covers the base supplies `base × rate − deduction`.
//!
//! On top of the tiered formula, [`income_tax`] applies the three-way
//! policy keyed on the *pre-deduction* gross amount: full exemption below
//! a threshold, a legislated linear phase-in inside a transition band, and
//! a best-of between itemized and simplified deductions above it.
//!
//! All functions here are total: out-of-domain amounts yield zero, never
//! an error. Results are returned unrounded; callers round when storing.

use rust_decimal::Decimal;

use crate::config::{ContributionTable, IncomeTaxTable, TaxTier};

/// Computes the cumulative marginal contribution for an amount.
///
/// Negative or zero amounts contribute nothing. Amounts above the top
/// tier limit pay the fixed ceiling contribution.
///
/// # Example
///
/// ```no_run
/// use clt_engine::calculation::cumulative_contribution;
/// use clt_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/clt2026").unwrap();
/// let contribution =
///     cumulative_contribution(Decimal::from(3000), loader.config().contribution());
/// assert!(contribution > Decimal::ZERO);
/// ```
pub fn cumulative_contribution(amount: Decimal, table: &ContributionTable) -> Decimal {
    if amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut previous = Decimal::ZERO;
    let mut total = Decimal::ZERO;

    for tier in &table.tiers {
        // Bounded schedule; tiers without a limit were rejected at load time.
        let Some(limit) = tier.up_to else { break };
        if amount <= previous {
            break;
        }
        let marginal = amount.min(limit) - previous;
        if marginal > Decimal::ZERO {
            total += marginal * tier.rate;
        }
        previous = limit;
    }

    total
}

/// Evaluates the single-tier `rate × base − deduction` formula.
///
/// The first tier whose limit is at least `base` (or the unbounded last
/// tier) is matched; the result is floored at zero.
pub fn tiered_tax(base: Decimal, tiers: &[TaxTier]) -> Decimal {
    if base <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let matched = tiers.iter().find(|t| t.up_to.is_none_or(|limit| base <= limit));

    match matched {
        Some(tier) => (base * tier.rate - tier.deduction).max(Decimal::ZERO),
        None => Decimal::ZERO,
    }
}

/// Computes income tax under the three-way policy.
///
/// The policy is driven by the pre-deduction `gross`, not the
/// post-contribution `base`:
///
/// - `gross` ≤ exemption threshold: zero, regardless of base;
/// - threshold < `gross` ≤ transition ceiling: linear phase-in of
///   `(gross − threshold) × transition_rate`;
/// - above the ceiling: the lesser of the tiered formula on `base`
///   (itemized) and on `gross − simplified_deduction` (simplified);
///   the taxpayer always gets the more favorable path.
pub fn income_tax(gross: Decimal, base: Decimal, table: &IncomeTaxTable) -> Decimal {
    if gross <= table.exemption_threshold {
        return Decimal::ZERO;
    }

    if gross <= table.transition_ceiling {
        let phased = (gross - table.exemption_threshold) * table.transition_rate;
        return phased.max(Decimal::ZERO);
    }

    let itemized = tiered_tax(base, &table.tiers);
    let simplified = tiered_tax(gross - table.simplified_deduction, &table.tiers);
    itemized.min(simplified)
}
