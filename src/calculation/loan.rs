//! Consigned-loan deduction waterfall.
//!
//! Allocates a single outstanding loan balance against, in strict order:
//!
//! 1. a capped percentage of the relevant net payment (always);
//! 2. the guarantee fraction of the accrued fund balance (severance
//!    settlements only, when the guarantee clause was contracted);
//! 3. the severance-fine fraction of the same fund (severance settlements
//!    only, when the termination reason legally grants the fine);
//!
//! stopping as soon as the balance is covered or the sources are
//! exhausted. Whatever remains is reported, never hidden: it is debt the
//! employee must renegotiate directly. The allocation conserves value:
//! `deducted + guarantee_used + fine_used + remaining == balance`.

use rust_decimal::Decimal;

use crate::config::LoanConfig;
use crate::models::{LoanAllocation, LoanInput};

use super::rounding::{floor_zero, round2};

/// Collateral sources available to a severance-settlement waterfall.
///
/// Eligibility is decided by the severance calculator's decision table;
/// payroll scenarios pass no collateral at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanCollateral {
    /// Accrued guarantee-fund balance (supplied or estimated).
    pub fund_balance: Decimal,
    /// Severance fine available to cover the balance.
    pub severance_fine: Decimal,
    /// Whether the termination reason allows the guarantee step.
    pub guarantee_eligible: bool,
    /// Whether the termination reason allows the fine step.
    pub fine_eligible: bool,
}

/// Runs the deduction waterfall for an outstanding consigned loan.
///
/// `relevant_net` is the net payment the payroll deduction draws from;
/// the step-1 deduction is bounded by the configured cap rate, by the
/// net payment itself and, when contracted, by the monthly installment.
/// Steps 2 and 3 only run when `collateral` is supplied (severance
/// settlements).
pub fn allocate_loan(
    loan: &LoanInput,
    relevant_net: Decimal,
    config: &LoanConfig,
    collateral: Option<&LoanCollateral>,
) -> LoanAllocation {
    let balance = floor_zero(loan.outstanding_balance);
    let net = floor_zero(relevant_net);

    // Step 1: payroll deduction capped at a fraction of the net payment.
    let cap_amount = round2(net * config.installment_cap_rate);
    let mut deductible = balance.min(cap_amount).min(net);
    if let Some(installment) = loan.monthly_installment {
        deductible = deductible.min(floor_zero(installment));
    }
    let amount_deducted = deductible;
    let mut remaining = balance - amount_deducted;

    let mut guarantee_used = Decimal::ZERO;
    let mut fine_used = Decimal::ZERO;

    if let Some(collateral) = collateral {
        // Step 2: guarantee fraction of the fund balance.
        if remaining > Decimal::ZERO && collateral.guarantee_eligible && loan.guarantee_enabled {
            let capacity = round2(floor_zero(collateral.fund_balance) * config.guarantee_rate);
            guarantee_used = remaining.min(capacity);
            remaining -= guarantee_used;
        }

        // Step 3: severance fine.
        if remaining > Decimal::ZERO && collateral.fine_eligible {
            fine_used = remaining.min(floor_zero(collateral.severance_fine));
            remaining -= fine_used;
        }
    }

    LoanAllocation {
        cap_amount,
        amount_deducted,
        guarantee_used,
        fine_used,
        remaining_balance: remaining,
    }
}
