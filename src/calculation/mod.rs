//! Calculation logic for the compensation engine.
//!
//! This module contains all the calculation functions for the simulation
//! scenarios, including half-cent rounding, progressive contribution and
//! income-tax schedules, twelfth vesting over date ranges, variable-earnings
//! (extras) valuation, the consigned-loan deduction waterfall, net monthly
//! salary, vacation pay, 13th-salary installments, severance settlements,
//! contractor regime comparison, and the standalone income-tax simulator.

mod brackets;
mod contractor;
mod extras;
mod income_tax;
mod loan;
mod monthly;
mod rounding;
mod severance;
mod thirteenth;
mod vacation;
mod vesting;

pub use brackets::{cumulative_contribution, income_tax, tiered_tax};
pub use contractor::calculate_contractor;
pub use extras::calculate_extras;
pub use income_tax::simulate_income_tax;
pub use loan::{LoanCollateral, allocate_loan};
pub use monthly::calculate_monthly_salary;
pub use rounding::{floor_zero, round2};
pub use severance::calculate_severance;
pub use thirteenth::calculate_thirteenth;
pub use vacation::{MAX_SOLD_DAYS, MAX_VACATION_DAYS, calculate_vacation};
pub use vesting::{VESTING_DAY_THRESHOLD, vested_twelfths};
