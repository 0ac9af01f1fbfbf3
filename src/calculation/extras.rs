//! Variable-earnings (extras) aggregation.
//!
//! Converts hour-based extra-work inputs into monetary amounts using an
//! hourly rate derived from gross pay and the monthly workload divisor.
//! Category multipliers come from configuration: overtime at two premium
//! tiers, the night-shift premium, the on-call premium and the
//! suppressed-rest premium, plus an optional 20% reflex for the paid
//! weekly rest over the subtotal.

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::models::{ExtraHours, ExtrasBreakdown};

use super::rounding::round2;

/// Computes the monetary breakdown for a set of extra-work hours.
///
/// The hourly rate is `base_pay / workload`, where `workload` is the
/// caller's override when positive or the configured divisor otherwise.
/// Negative hour counts contribute nothing. A zero or negative base pay
/// yields an all-zero breakdown; there is no division by zero.
///
/// # Example
///
/// ```no_run
/// use clt_engine::calculation::calculate_extras;
/// use clt_engine::config::ConfigLoader;
/// use clt_engine::models::ExtraHours;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/clt2026").unwrap();
/// let hours = ExtraHours {
///     overtime_tier1: Decimal::from(10),
///     ..Default::default()
/// };
/// let breakdown =
///     calculate_extras(Decimal::from(2200), None, &hours, loader.config().payroll());
/// // 2200 / 220 = 10/h; 10h × 10 × 1.5 = 150.00
/// assert_eq!(breakdown.overtime_tier1, Decimal::from(150));
/// ```
pub fn calculate_extras(
    base_pay: Decimal,
    workload_hours: Option<Decimal>,
    hours: &ExtraHours,
    payroll: &PayrollConfig,
) -> ExtrasBreakdown {
    if base_pay <= Decimal::ZERO {
        return ExtrasBreakdown::zero();
    }

    let workload = match workload_hours {
        Some(w) if w > Decimal::ZERO => w,
        _ => payroll.workload_divisor,
    };

    let hourly_rate = base_pay / workload;
    let rates = &payroll.premiums;

    let category = |count: Decimal, multiplier: Decimal| -> Decimal {
        if count <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        round2(hourly_rate * multiplier * count)
    };

    let overtime_tier1 = category(hours.overtime_tier1, rates.overtime_tier1);
    let overtime_tier2 = category(hours.overtime_tier2, rates.overtime_tier2);
    let night_shift = category(hours.night_shift, rates.night_shift);
    let on_call = category(hours.on_call, rates.on_call);
    let rest_suppression = category(hours.rest_suppression, rates.rest_suppression);

    let subtotal = overtime_tier1 + overtime_tier2 + night_shift + on_call + rest_suppression;

    let rest_reflex = if hours.include_rest_reflex {
        round2(subtotal * rates.rest_reflex)
    } else {
        Decimal::ZERO
    };

    ExtrasBreakdown {
        hourly_rate: round2(hourly_rate),
        overtime_tier1,
        overtime_tier2,
        night_shift,
        on_call,
        rest_suppression,
        subtotal,
        rest_reflex,
        total: subtotal + rest_reflex,
    }
}
