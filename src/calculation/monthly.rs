//! Monthly salary scenario.
//!
//! Composes the extras aggregator, the contribution schedule, the
//! income-tax policy, the transport-benefit deduction, the
//! family-allowance credit and the loan waterfall into one net-pay
//! result.

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::{ExtrasBreakdown, MonthlySalaryInput, MonthlySalaryResult};

use super::brackets::{cumulative_contribution, income_tax};
use super::extras::calculate_extras;
use super::loan::allocate_loan;
use super::rounding::{floor_zero, round2};

/// Calculates the net monthly salary for one input record.
///
/// A pure function: identical inputs always produce the identical result.
///
/// # Example
///
/// ```no_run
/// use clt_engine::calculation::calculate_monthly_salary;
/// use clt_engine::config::ConfigLoader;
/// use clt_engine::models::MonthlySalaryInput;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/clt2026").unwrap();
/// let input = MonthlySalaryInput {
///     gross_salary: Decimal::from(3000),
///     dependents: 0,
///     extras: None,
///     workload_hours: None,
///     transport: None,
///     loan: None,
/// };
/// let result = calculate_monthly_salary(&input, loader.config());
/// assert!(result.net_pay > Decimal::ZERO);
/// ```
pub fn calculate_monthly_salary(
    input: &MonthlySalaryInput,
    config: &EngineConfig,
) -> MonthlySalaryResult {
    let gross_salary = floor_zero(input.gross_salary);

    let extras = match &input.extras {
        Some(hours) => calculate_extras(gross_salary, input.workload_hours, hours, config.payroll()),
        None => ExtrasBreakdown::zero(),
    };

    let total_gross = round2(gross_salary + extras.total);

    let contribution = round2(cumulative_contribution(total_gross, config.contribution()));

    let tax_table = config.income_tax();
    let dependent_deduction = tax_table.dependent_deduction * Decimal::from(input.dependents);
    let tax_base = total_gross - contribution - dependent_deduction;
    let tax = round2(income_tax(total_gross, tax_base, tax_table));

    let transport_deduction = match &input.transport {
        Some(transport) => {
            let legal_cap = gross_salary * config.payroll().transport_cap_rate;
            let actual_cost =
                floor_zero(transport.daily_cost) * Decimal::from(transport.work_days);
            round2(legal_cap.min(actual_cost))
        }
        None => Decimal::ZERO,
    };

    let allowance = &config.payroll().family_allowance;
    let family_allowance = if total_gross <= allowance.income_ceiling {
        round2(allowance.per_dependent * Decimal::from(input.dependents))
    } else {
        Decimal::ZERO
    };

    let net_before_loan = floor_zero(round2(
        total_gross - contribution - tax - transport_deduction + family_allowance,
    ));

    // The loan draws from the tax-net payment, before the transport
    // deduction and the allowance credit.
    let loan = input.loan.as_ref().map(|loan_input| {
        let relevant_net = floor_zero(total_gross - contribution - tax);
        allocate_loan(loan_input, relevant_net, config.loans(), None)
    });

    let loan_deduction = loan
        .as_ref()
        .map(|l| l.amount_deducted)
        .unwrap_or(Decimal::ZERO);

    let net_pay = floor_zero(round2(net_before_loan - loan_deduction));

    MonthlySalaryResult {
        gross_salary,
        extras,
        total_gross,
        contribution,
        income_tax: tax,
        transport_deduction,
        family_allowance,
        net_before_loan,
        loan,
        net_pay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{ExtraHours, LoanInput, TransportInput};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn load_config() -> EngineConfig {
        ConfigLoader::load("./config/clt2026")
            .unwrap()
            .config()
            .clone()
    }

    fn base_input(gross: &str) -> MonthlySalaryInput {
        MonthlySalaryInput {
            gross_salary: dec(gross),
            dependents: 0,
            extras: None,
            workload_hours: None,
            transport: None,
            loan: None,
        }
    }

    #[test]
    fn test_exempt_salary_pays_no_income_tax() {
        let config = load_config();

        let result = calculate_monthly_salary(&base_input("3000"), &config);
        assert_eq!(result.income_tax, Decimal::ZERO);
        // 121.575 + (2902.84−1621)×0.09 + (3000−2902.84)×0.12 = 248.60
        assert_eq!(result.contribution, dec("248.60"));
        assert_eq!(result.net_pay, dec("2751.40"));
    }

    #[test]
    fn test_transition_band_salary() {
        let config = load_config();

        let result = calculate_monthly_salary(&base_input("5200"), &config);
        // Linear phase-in: (5200 − 5000) × 0.3581 = 71.62
        assert_eq!(result.income_tax, dec("71.62"));
        assert!(result.net_pay > Decimal::ZERO);
    }

    #[test]
    fn test_extras_enter_the_tax_base() {
        let config = load_config();

        let mut input = base_input("2200");
        input.extras = Some(ExtraHours {
            overtime_tier1: dec("10"),
            ..Default::default()
        });

        let result = calculate_monthly_salary(&input, &config);
        assert_eq!(result.extras.total, dec("150.00"));
        assert_eq!(result.total_gross, dec("2350.00"));

        let without_extras = calculate_monthly_salary(&base_input("2200"), &config);
        assert!(result.contribution > without_extras.contribution);
    }

    #[test]
    fn test_transport_deduction_capped_at_six_percent() {
        let config = load_config();

        let mut input = base_input("3000");
        input.transport = Some(TransportInput {
            daily_cost: dec("20.00"),
            work_days: 22,
        });

        // Actual cost 440.00 exceeds 6% of gross (180.00).
        let result = calculate_monthly_salary(&input, &config);
        assert_eq!(result.transport_deduction, dec("180.00"));
    }

    #[test]
    fn test_transport_deduction_uses_actual_cost_when_cheaper() {
        let config = load_config();

        let mut input = base_input("3000");
        input.transport = Some(TransportInput {
            daily_cost: dec("5.00"),
            work_days: 20,
        });

        let result = calculate_monthly_salary(&input, &config);
        assert_eq!(result.transport_deduction, dec("100.00"));
    }

    #[test]
    fn test_family_allowance_for_low_income() {
        let config = load_config();

        let mut input = base_input("1800");
        input.dependents = 2;

        let result = calculate_monthly_salary(&input, &config);
        assert_eq!(result.family_allowance, dec("124.08"));
    }

    #[test]
    fn test_family_allowance_denied_above_ceiling() {
        let config = load_config();

        let mut input = base_input("2500");
        input.dependents = 2;

        let result = calculate_monthly_salary(&input, &config);
        assert_eq!(result.family_allowance, Decimal::ZERO);
    }

    #[test]
    fn test_loan_deduction_capped() {
        let config = load_config();

        let mut input = base_input("3000");
        input.loan = Some(LoanInput {
            monthly_installment: None,
            outstanding_balance: dec("5000"),
            guarantee_enabled: false,
            fund_balance: None,
        });

        let result = calculate_monthly_salary(&input, &config);
        let allocation = result.loan.unwrap();
        // Relevant net: 3000 − 248.60 − 0 = 2751.40; cap 35% = 962.99.
        assert_eq!(allocation.cap_amount, dec("962.99"));
        assert_eq!(allocation.amount_deducted, dec("962.99"));
        assert_eq!(result.net_pay, dec("1788.41"));
    }

    #[test]
    fn test_negative_gross_treated_as_zero() {
        let config = load_config();

        let result = calculate_monthly_salary(&base_input("-1000"), &config);
        assert_eq!(result.total_gross, Decimal::ZERO);
        assert_eq!(result.net_pay, Decimal::ZERO);
    }

    #[test]
    fn test_idempotent() {
        let config = load_config();
        let mut input = base_input("5200");
        input.dependents = 1;
        input.extras = Some(ExtraHours {
            overtime_tier1: dec("8"),
            include_rest_reflex: true,
            ..Default::default()
        });

        let first = calculate_monthly_salary(&input, &config);
        let second = calculate_monthly_salary(&input, &config);
        assert_eq!(first, second);
    }
}
