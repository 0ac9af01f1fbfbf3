//! Severance settlement (TRCT) scenario.
//!
//! The most branch-heavy calculator in the engine. The legal consequences
//! of a termination are resolved up front by an explicit decision table
//! keyed on (reason × notice status); the amounts themselves are then a
//! straight-line composition of the other components:
//!
//! - pay for the days worked in the exit month, plus extras;
//! - the prior-notice indemnity, whose indemnified form *projects* a
//!   notional later exit date that extends every vesting computation;
//! - the proportional 13th share, split across a calendar-year boundary
//!   when the projected exit lands in the following year;
//! - the proportional vacation share anchored to the hire anniversary,
//!   plus any fully-vested expired vacation;
//! - the severance fine on the guarantee-fund balance;
//! - one unified contribution/income-tax pass over the taxable portion
//!   (vacation amounts are indemnities and stay out of the base);
//! - the consigned-loan waterfall with its severance-specific collateral
//!   steps.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::{
    ExtrasBreakdown, NoticeStatus, SeveranceInput, SeveranceResult, TerminationReason,
};

use super::brackets::{cumulative_contribution, income_tax};
use super::extras::calculate_extras;
use super::loan::{allocate_loan, LoanCollateral};
use super::rounding::{floor_zero, round2};
use super::vesting::vested_twelfths;

const THIRTY: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
const THREE: Decimal = Decimal::from_parts(3, 0, 0, false, 0);
const TWELVE: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Base prior-notice days, before the tenure bonus.
const NOTICE_BASE_DAYS: u32 = 30;
/// Extra notice days granted per year worked.
const NOTICE_DAYS_PER_YEAR: u32 = 3;
/// Statutory ceiling on the notice period.
const NOTICE_MAX_DAYS: u32 = 90;

/// What a (reason × notice status) combination legally entitles.
///
/// One row of the decision table; every field is decided here and only
/// consumed below, so each combination is independently testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entitlements {
    /// Proportional 13th and vacation shares are owed.
    proportional_benefits: bool,
    /// A cash indemnity for the unworked notice period is owed.
    notice_indemnity: bool,
    /// The notice period projects a notional later exit date.
    projects_exit: bool,
    /// The severance fine on the fund balance is owed.
    fund_fine: bool,
    /// The loan waterfall may draw on the fund guarantee.
    loan_guarantee: bool,
    /// The loan waterfall may draw on the severance fine.
    loan_fine: bool,
    /// An unserved notice period is deducted from the settlement.
    deduct_unserved_notice: bool,
}

/// The severance decision table.
fn entitlements(reason: TerminationReason, notice: NoticeStatus) -> Entitlements {
    use NoticeStatus::*;
    use TerminationReason::*;

    match (reason, notice) {
        (NoCauseDismissal, Worked) => Entitlements {
            proportional_benefits: true,
            notice_indemnity: false,
            projects_exit: false,
            fund_fine: true,
            loan_guarantee: true,
            loan_fine: true,
            deduct_unserved_notice: false,
        },
        // An unserved notice on a no-cause dismissal is the employer's
        // burden: it is settled as if indemnified.
        (NoCauseDismissal, Indemnified) | (NoCauseDismissal, NotServed) => Entitlements {
            proportional_benefits: true,
            notice_indemnity: true,
            projects_exit: true,
            fund_fine: true,
            loan_guarantee: true,
            loan_fine: true,
            deduct_unserved_notice: false,
        },
        (Resignation, NotServed) => Entitlements {
            proportional_benefits: true,
            notice_indemnity: false,
            projects_exit: false,
            fund_fine: false,
            loan_guarantee: true,
            loan_fine: false,
            deduct_unserved_notice: true,
        },
        (Resignation, Worked) | (Resignation, Indemnified) => Entitlements {
            proportional_benefits: true,
            notice_indemnity: false,
            projects_exit: false,
            fund_fine: false,
            loan_guarantee: true,
            loan_fine: false,
            deduct_unserved_notice: false,
        },
        (MutualAgreement, _) => Entitlements {
            proportional_benefits: true,
            notice_indemnity: false,
            projects_exit: false,
            fund_fine: false,
            loan_guarantee: true,
            loan_fine: false,
            deduct_unserved_notice: false,
        },
        (ForCauseDismissal, _) => Entitlements {
            proportional_benefits: false,
            notice_indemnity: false,
            projects_exit: false,
            fund_fine: false,
            loan_guarantee: false,
            loan_fine: false,
            deduct_unserved_notice: false,
        },
    }
}

fn reason_label(reason: TerminationReason) -> &'static str {
    match reason {
        TerminationReason::NoCauseDismissal => "dismissal without cause",
        TerminationReason::Resignation => "resignation",
        TerminationReason::MutualAgreement => "termination by mutual agreement",
        TerminationReason::ForCauseDismissal => "dismissal for cause",
    }
}

/// Calculates the severance settlement for one input record.
///
/// An inverted date range (termination before hire) short-circuits to an
/// all-zero result with a descriptive label; no error is raised.
pub fn calculate_severance(input: &SeveranceInput, config: &EngineConfig) -> SeveranceResult {
    if input.termination_date < input.hire_date {
        return zero_result("invalid period: termination precedes hire");
    }

    let rules = entitlements(input.reason, input.notice);
    let gross_salary = floor_zero(input.gross_salary);

    let extras = match &input.extras {
        Some(hours) => calculate_extras(gross_salary, input.workload_hours, hours, config.payroll()),
        None => ExtrasBreakdown::zero(),
    };
    let monthly_total = gross_salary + extras.total;

    let daily_rate = gross_salary / THIRTY;

    // Pay for the days worked in the exit month, capped at a full month.
    // A last-day exit pays the full 30 commercial days, so a complete
    // February is worth the same as a complete January.
    let exit_day = if is_month_end(input.termination_date) {
        30
    } else {
        input.termination_date.day().min(30)
    };
    let salary_balance = round2(daily_rate * Decimal::from(exit_day));

    // Notice period: 30 days plus 3 per full year worked, capped at 90.
    let months_employed = whole_months_between(input.hire_date, input.termination_date);
    let years_worked = months_employed / 12;
    let notice_days = (NOTICE_BASE_DAYS + NOTICE_DAYS_PER_YEAR * years_worked).min(NOTICE_MAX_DAYS);

    let notice_indemnity = if rules.notice_indemnity {
        round2(daily_rate * Decimal::from(notice_days))
    } else {
        Decimal::ZERO
    };

    // The indemnified notice projects a notional exit that extends the
    // vesting windows for the proportional benefits.
    let projected_exit = if rules.projects_exit {
        input
            .termination_date
            .checked_add_days(chrono::Days::new(notice_days as u64))
            .unwrap_or(input.termination_date)
    } else {
        input.termination_date
    };
    let projected_termination_date = (projected_exit != input.termination_date).then_some(projected_exit);

    // Proportional 13th: one segment per calendar year, separately
    // vested and summed, so a projection across New Year is exact.
    let thirteenth_share = if rules.proportional_benefits {
        let year = input.termination_date.year();
        let year_start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(input.termination_date);
        let year_end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(projected_exit);

        let first_start = input.hire_date.max(year_start);
        let first_end = projected_exit.min(year_end);
        let mut share = twelfth_value(monthly_total, vested_twelfths(first_start, first_end));

        if projected_exit.year() > year {
            let next_start =
                NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap_or(projected_exit);
            share += twelfth_value(monthly_total, vested_twelfths(next_start, projected_exit));
        }
        share
    } else {
        Decimal::ZERO
    };

    // Proportional vacation: anchored to the hire anniversary preceding
    // the actual termination, vested through the projected exit. When
    // the projection crosses an anniversary the run exceeds 12 twelfths,
    // crediting the period that completed inside the notice window.
    let (vacation_share, vacation_third) = if rules.proportional_benefits {
        let anchor = latest_anniversary(input.hire_date, input.termination_date);
        let months = vested_twelfths(anchor, projected_exit);
        let share = twelfth_value(monthly_total, months);
        (share, round2(share / THREE))
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    let (expired_vacation, expired_vacation_third) = if input.expired_vacation {
        (round2(gross_salary), round2(gross_salary / THREE))
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    // Fund balance: supplied, or estimated from the monthly accrual rate
    // over the whole months of employment.
    let fund_balance = match input.fund_balance {
        Some(balance) => floor_zero(balance),
        None => round2(
            gross_salary * config.loans().fund_monthly_rate * Decimal::from(months_employed),
        ),
    };

    let fund_fine = if rules.fund_fine {
        round2(fund_balance * config.loans().fine_rate)
    } else {
        Decimal::ZERO
    };

    // One unified tax pass: days worked, extras and the 13th share are
    // taxable; vacation amounts and the fine are indemnities.
    let taxable = salary_balance + extras.total + thirteenth_share;
    let contribution = round2(cumulative_contribution(taxable, config.contribution()));

    let tax_table = config.income_tax();
    let dependent_deduction = tax_table.dependent_deduction * Decimal::from(input.dependents);
    let tax = round2(income_tax(taxable, taxable - contribution - dependent_deduction, tax_table));

    let notice_deduction = if rules.deduct_unserved_notice {
        round2(gross_salary)
    } else {
        Decimal::ZERO
    };

    let advance_deduction = floor_zero(input.thirteenth_advance);

    let gross_total = round2(
        salary_balance
            + extras.total
            + notice_indemnity
            + thirteenth_share
            + vacation_share
            + vacation_third
            + expired_vacation
            + expired_vacation_third
            + fund_fine,
    );

    let net_before_loan = floor_zero(round2(
        gross_total - contribution - tax - notice_deduction - advance_deduction,
    ));

    let loan = input.loan.as_ref().map(|loan_input| {
        // A balance supplied on the loan itself wins over the
        // settlement-level one for the guarantee step; the fine always
        // follows the balance the fine was computed on.
        let collateral = LoanCollateral {
            fund_balance: loan_input.fund_balance.map_or(fund_balance, floor_zero),
            severance_fine: fund_fine,
            guarantee_eligible: rules.loan_guarantee,
            fine_eligible: rules.loan_fine,
        };
        allocate_loan(loan_input, net_before_loan, config.loans(), Some(&collateral))
    });

    // The payroll deduction and the fine collateral both come out of the
    // settlement cash; the guarantee step draws on the fund account,
    // which is paid out separately.
    let loan_cash_out = loan
        .as_ref()
        .map(|l| l.amount_deducted + l.fine_used)
        .unwrap_or(Decimal::ZERO);

    let net_total = floor_zero(round2(net_before_loan - loan_cash_out));

    SeveranceResult {
        label: reason_label(input.reason).to_string(),
        salary_balance,
        extras,
        notice_days,
        notice_indemnity,
        projected_termination_date,
        thirteenth_share,
        vacation_share,
        vacation_third,
        expired_vacation,
        expired_vacation_third,
        fund_balance,
        fund_fine,
        gross_total,
        contribution,
        income_tax: tax,
        notice_deduction,
        advance_deduction,
        net_before_loan,
        loan,
        net_total,
    }
}

/// Value of `months` twelfths of the monthly remuneration.
fn twelfth_value(monthly_total: Decimal, months: u32) -> Decimal {
    round2(monthly_total * Decimal::from(months) / TWELVE)
}

/// Whether `date` is the last day of its calendar month.
fn is_month_end(date: NaiveDate) -> bool {
    date.succ_opt().map_or(true, |next| next.month() != date.month())
}

/// Whole months elapsed between two dates.
fn whole_months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }
    let mut months =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// The most recent hire anniversary on or before `by`.
///
/// A February 29 hire date falls back to February 28 in non-leap years.
fn latest_anniversary(hire: NaiveDate, by: NaiveDate) -> NaiveDate {
    let candidate = anniversary_in(hire, by.year());
    let anniversary = if candidate > by {
        anniversary_in(hire, by.year() - 1)
    } else {
        candidate
    };
    anniversary.max(hire)
}

fn anniversary_in(hire: NaiveDate, year: i32) -> NaiveDate {
    let mut day = hire.day();
    loop {
        if let Some(date) = NaiveDate::from_ymd_opt(year, hire.month(), day) {
            return date;
        }
        if day == 1 {
            return hire;
        }
        day -= 1;
    }
}

fn zero_result(label: &str) -> SeveranceResult {
    SeveranceResult {
        label: label.to_string(),
        salary_balance: Decimal::ZERO,
        extras: ExtrasBreakdown::zero(),
        notice_days: 0,
        notice_indemnity: Decimal::ZERO,
        projected_termination_date: None,
        thirteenth_share: Decimal::ZERO,
        vacation_share: Decimal::ZERO,
        vacation_third: Decimal::ZERO,
        expired_vacation: Decimal::ZERO,
        expired_vacation_third: Decimal::ZERO,
        fund_balance: Decimal::ZERO,
        fund_fine: Decimal::ZERO,
        gross_total: Decimal::ZERO,
        contribution: Decimal::ZERO,
        income_tax: Decimal::ZERO,
        notice_deduction: Decimal::ZERO,
        advance_deduction: Decimal::ZERO,
        net_before_loan: Decimal::ZERO,
        loan: None,
        net_total: Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::LoanInput;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn load_config() -> EngineConfig {
        ConfigLoader::load("./config/clt2026")
            .unwrap()
            .config()
            .clone()
    }

    fn base_input(reason: TerminationReason, notice: NoticeStatus) -> SeveranceInput {
        SeveranceInput {
            gross_salary: dec("3000"),
            dependents: 0,
            extras: None,
            workload_hours: None,
            hire_date: date(2020, 3, 1),
            termination_date: date(2026, 8, 20),
            reason,
            notice,
            expired_vacation: false,
            fund_balance: None,
            thirteenth_advance: Decimal::ZERO,
            loan: None,
        }
    }

    // ==========================================================================
    // Decision table rows
    // ==========================================================================

    #[test]
    fn test_table_no_cause_indemnified() {
        let rules = entitlements(
            TerminationReason::NoCauseDismissal,
            NoticeStatus::Indemnified,
        );
        assert!(rules.notice_indemnity);
        assert!(rules.projects_exit);
        assert!(rules.fund_fine);
        assert!(rules.loan_guarantee);
        assert!(rules.loan_fine);
        assert!(!rules.deduct_unserved_notice);
    }

    #[test]
    fn test_table_no_cause_worked_has_no_indemnity() {
        let rules = entitlements(TerminationReason::NoCauseDismissal, NoticeStatus::Worked);
        assert!(!rules.notice_indemnity);
        assert!(!rules.projects_exit);
        assert!(rules.fund_fine);
    }

    #[test]
    fn test_table_resignation_not_served_deducts_notice() {
        let rules = entitlements(TerminationReason::Resignation, NoticeStatus::NotServed);
        assert!(rules.deduct_unserved_notice);
        assert!(!rules.fund_fine);
        assert!(rules.loan_guarantee);
        assert!(!rules.loan_fine);
    }

    #[test]
    fn test_table_mutual_agreement_guarantee_only() {
        let rules = entitlements(TerminationReason::MutualAgreement, NoticeStatus::Worked);
        assert!(!rules.fund_fine);
        assert!(rules.loan_guarantee);
        assert!(!rules.loan_fine);
        assert!(rules.proportional_benefits);
    }

    #[test]
    fn test_table_for_cause_loses_everything() {
        let rules = entitlements(TerminationReason::ForCauseDismissal, NoticeStatus::Worked);
        assert!(!rules.proportional_benefits);
        assert!(!rules.fund_fine);
        assert!(!rules.loan_guarantee);
        assert!(!rules.loan_fine);
    }

    // ==========================================================================
    // Settlement amounts
    // ==========================================================================

    #[test]
    fn test_no_cause_indemnified_full_settlement() {
        let config = load_config();
        let input = base_input(
            TerminationReason::NoCauseDismissal,
            NoticeStatus::Indemnified,
        );

        let result = calculate_severance(&input, &config);

        // 20 days worked in August.
        assert_eq!(result.salary_balance, dec("2000.00"));
        // 6 full years: 30 + 18 = 48 notice days.
        assert_eq!(result.notice_days, 48);
        assert_eq!(result.notice_indemnity, dec("4800.00"));
        // Exit projected to 2026-10-07.
        assert_eq!(result.projected_termination_date, Some(date(2026, 10, 7)));
        // 13th: Jan..Sep vest, October ends on the 7th: 9 twelfths.
        assert_eq!(result.thirteenth_share, dec("2250.00"));
        // Vacation anchored to 2026-03-01: Mar..Sep vest: 7 twelfths.
        assert_eq!(result.vacation_share, dec("1750.00"));
        assert_eq!(result.vacation_third, dec("583.33"));
        // Estimated fund: 3000 × 0.08 × 77 months = 18480; fine 40%.
        assert_eq!(result.fund_balance, dec("18480.00"));
        assert_eq!(result.fund_fine, dec("7392.00"));
        // Taxable: 2000 + 2250 = 4250, below the exemption threshold.
        assert_eq!(result.contribution, dec("398.60"));
        assert_eq!(result.income_tax, Decimal::ZERO);

        assert_eq!(result.gross_total, dec("18775.33"));
        assert_eq!(result.net_total, dec("18376.73"));
    }

    #[test]
    fn test_notice_days_capped_at_ninety() {
        let config = load_config();
        let mut input = base_input(
            TerminationReason::NoCauseDismissal,
            NoticeStatus::Indemnified,
        );
        input.hire_date = date(1999, 1, 10);

        let result = calculate_severance(&input, &config);
        assert_eq!(result.notice_days, 90);
    }

    #[test]
    fn test_projection_across_year_boundary_splits_thirteenth() {
        let config = load_config();
        let mut input = base_input(
            TerminationReason::NoCauseDismissal,
            NoticeStatus::Indemnified,
        );
        input.hire_date = date(2016, 5, 2);
        input.termination_date = date(2026, 11, 20);

        let result = calculate_severance(&input, &config);
        // 10 full years: 60 notice days, projecting to 2027-01-19.
        assert_eq!(result.notice_days, 60);
        assert_eq!(result.projected_termination_date, Some(date(2027, 1, 19)));
        // Segment 2026: 12 twelfths; segment 2027: Jan 19 vests 1 more.
        assert_eq!(result.thirteenth_share, dec("3250.00"));
    }

    #[test]
    fn test_projection_across_anniversary_credits_completed_period() {
        let config = load_config();
        let mut worked = base_input(TerminationReason::NoCauseDismissal, NoticeStatus::Worked);
        worked.termination_date = date(2026, 2, 20);
        let mut indemnified = base_input(
            TerminationReason::NoCauseDismissal,
            NoticeStatus::Indemnified,
        );
        indemnified.termination_date = date(2026, 2, 20);

        let served = calculate_severance(&worked, &config);
        let projected = calculate_severance(&indemnified, &config);

        // 5 full years: 45 notice days, projecting past the March 1
        // anniversary to 2026-04-06.
        assert_eq!(projected.notice_days, 45);
        assert_eq!(projected.projected_termination_date, Some(date(2026, 4, 6)));
        // Worked notice: the 2025-03-01 period has all 12 twelfths.
        assert_eq!(served.vacation_share, dec("3000.00"));
        assert_eq!(served.vacation_third, dec("1000.00"));
        // The projection completes that period and opens the next one:
        // 12 twelfths plus March 2026, nothing cut down to the new anchor.
        assert_eq!(projected.vacation_share, dec("3250.00"));
        assert_eq!(projected.vacation_third, dec("1083.33"));
        assert!(projected.vacation_share >= served.vacation_share);
    }

    #[test]
    fn test_month_end_exit_pays_a_full_salary_balance() {
        let config = load_config();
        let mut input = base_input(TerminationReason::NoCauseDismissal, NoticeStatus::Worked);

        input.termination_date = date(2026, 2, 28);
        let february = calculate_severance(&input, &config);
        assert_eq!(february.salary_balance, dec("3000.00"));

        input.termination_date = date(2026, 1, 31);
        let january = calculate_severance(&input, &config);
        assert_eq!(january.salary_balance, dec("3000.00"));

        input.termination_date = date(2026, 2, 27);
        let partial = calculate_severance(&input, &config);
        assert_eq!(partial.salary_balance, dec("2700.00"));
    }

    #[test]
    fn test_resignation_without_notice_deducts_a_salary() {
        let config = load_config();
        let input = base_input(TerminationReason::Resignation, NoticeStatus::NotServed);

        let result = calculate_severance(&input, &config);
        assert_eq!(result.notice_deduction, dec("3000.00"));
        assert_eq!(result.notice_indemnity, Decimal::ZERO);
        assert_eq!(result.fund_fine, Decimal::ZERO);
        assert_eq!(result.projected_termination_date, None);
    }

    #[test]
    fn test_for_cause_pays_only_days_worked() {
        let config = load_config();
        let mut input = base_input(TerminationReason::ForCauseDismissal, NoticeStatus::Worked);
        input.expired_vacation = true;

        let result = calculate_severance(&input, &config);
        assert_eq!(result.thirteenth_share, Decimal::ZERO);
        assert_eq!(result.vacation_share, Decimal::ZERO);
        assert_eq!(result.fund_fine, Decimal::ZERO);
        // Expired vacation is an acquired right and survives the cause.
        assert_eq!(result.expired_vacation, dec("3000.00"));
        assert_eq!(result.expired_vacation_third, dec("1000.00"));
    }

    #[test]
    fn test_explicit_fund_balance_overrides_estimate() {
        let config = load_config();
        let mut input = base_input(
            TerminationReason::NoCauseDismissal,
            NoticeStatus::Indemnified,
        );
        input.fund_balance = Some(dec("10000"));

        let result = calculate_severance(&input, &config);
        assert_eq!(result.fund_balance, dec("10000"));
        assert_eq!(result.fund_fine, dec("4000.00"));
    }

    #[test]
    fn test_thirteenth_advance_deducted() {
        let config = load_config();
        let mut input = base_input(
            TerminationReason::NoCauseDismissal,
            NoticeStatus::Indemnified,
        );
        input.thirteenth_advance = dec("1500.00");

        let without = calculate_severance(
            &base_input(
                TerminationReason::NoCauseDismissal,
                NoticeStatus::Indemnified,
            ),
            &config,
        );
        let result = calculate_severance(&input, &config);
        assert_eq!(result.advance_deduction, dec("1500.00"));
        assert_eq!(result.net_total, round2(without.net_total - dec("1500.00")));
    }

    #[test]
    fn test_inverted_dates_short_circuit_to_zero() {
        let config = load_config();
        let mut input = base_input(
            TerminationReason::NoCauseDismissal,
            NoticeStatus::Indemnified,
        );
        input.hire_date = date(2026, 9, 1);
        input.termination_date = date(2026, 8, 1);

        let result = calculate_severance(&input, &config);
        assert_eq!(result.label, "invalid period: termination precedes hire");
        assert_eq!(result.gross_total, Decimal::ZERO);
        assert_eq!(result.net_total, Decimal::ZERO);
    }

    #[test]
    fn test_loan_uses_guarantee_and_fine_on_no_cause() {
        let config = load_config();
        let mut input = base_input(
            TerminationReason::NoCauseDismissal,
            NoticeStatus::Indemnified,
        );
        input.fund_balance = Some(dec("10000"));
        input.loan = Some(LoanInput {
            monthly_installment: None,
            outstanding_balance: dec("50000"),
            guarantee_enabled: true,
            fund_balance: None,
        });

        let result = calculate_severance(&input, &config);
        let allocation = result.loan.as_ref().unwrap();
        // Guarantee step: 10000 × 10% = 1000; fine step: up to 4000.
        assert_eq!(allocation.guarantee_used, dec("1000.00"));
        assert_eq!(allocation.fine_used, dec("4000.00"));
        assert!(allocation.remaining_balance > Decimal::ZERO);
        // Cash out: payroll deduction plus the fine collateral.
        assert_eq!(
            result.net_total,
            round2(result.net_before_loan - allocation.amount_deducted - allocation.fine_used)
        );
    }

    #[test]
    fn test_loan_supplied_fund_balance_backs_the_guarantee() {
        let config = load_config();
        let mut input = base_input(
            TerminationReason::NoCauseDismissal,
            NoticeStatus::Indemnified,
        );
        input.fund_balance = Some(dec("10000"));
        input.loan = Some(LoanInput {
            monthly_installment: None,
            outstanding_balance: dec("50000"),
            guarantee_enabled: true,
            fund_balance: Some(dec("30000")),
        });

        let result = calculate_severance(&input, &config);
        let allocation = result.loan.as_ref().unwrap();
        // The guarantee draws on the loan's own balance: 30000 × 10%.
        assert_eq!(allocation.guarantee_used, dec("3000.00"));
        // The fine stays on the settlement-level balance: 10000 × 40%.
        assert_eq!(result.fund_fine, dec("4000.00"));
        assert_eq!(allocation.fine_used, dec("4000.00"));
    }

    #[test]
    fn test_loan_fine_unavailable_on_resignation() {
        let config = load_config();
        let mut input = base_input(TerminationReason::Resignation, NoticeStatus::Worked);
        input.fund_balance = Some(dec("10000"));
        input.loan = Some(LoanInput {
            monthly_installment: None,
            outstanding_balance: dec("50000"),
            guarantee_enabled: true,
            fund_balance: None,
        });

        let result = calculate_severance(&input, &config);
        let allocation = result.loan.as_ref().unwrap();
        assert_eq!(allocation.guarantee_used, dec("1000.00"));
        assert_eq!(allocation.fine_used, Decimal::ZERO);
    }

    #[test]
    fn test_anniversary_handles_leap_day_hire() {
        let hire = date(2024, 2, 29);
        assert_eq!(latest_anniversary(hire, date(2026, 6, 1)), date(2026, 2, 28));
        assert_eq!(latest_anniversary(hire, date(2028, 6, 1)), date(2028, 2, 29));
    }

    #[test]
    fn test_anniversary_never_precedes_hire() {
        let hire = date(2026, 5, 10);
        assert_eq!(latest_anniversary(hire, date(2026, 7, 1)), hire);
    }

    #[test]
    fn test_whole_months_between_day_sensitive() {
        assert_eq!(whole_months_between(date(2020, 3, 1), date(2026, 8, 20)), 77);
        assert_eq!(whole_months_between(date(2026, 1, 20), date(2026, 2, 19)), 0);
        assert_eq!(whole_months_between(date(2026, 1, 20), date(2026, 2, 20)), 1);
    }

    #[test]
    fn test_idempotent() {
        let config = load_config();
        let input = base_input(
            TerminationReason::NoCauseDismissal,
            NoticeStatus::Indemnified,
        );

        assert_eq!(
            calculate_severance(&input, &config),
            calculate_severance(&input, &config)
        );
    }
}
