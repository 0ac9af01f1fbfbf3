//! Proportional vesting (avos) calculation.
//!
//! Benefits such as the 13th salary and vacation vest in whole twelfths:
//! a calendar month counts only when at least 15 of its days fall within
//! the employment interval. The month an interval ends in is measured by
//! the end day-of-month, so a termination on the 15th or later vests that
//! month; the month an interval starts in is measured by the days left
//! from the start date to the month's end.
//!
//! Intervals spanning a calendar-year boundary are handled naturally by
//! the month-by-month walk; callers needing per-year splits (the 13th
//! salary resets every January) invoke the calculator once per segment
//! and sum.

use chrono::{Datelike, NaiveDate};

/// Minimum day-count for a calendar month to vest one twelfth.
pub const VESTING_DAY_THRESHOLD: u32 = 15;

/// Counts the whole twelfths vested between two dates, inclusive.
///
/// Returns 0 when `start > end`. The walk is bounded by the interval
/// length (at most ~36 iterations for any plausible span).
///
/// # Example
///
/// ```
/// use clt_engine::calculation::vested_twelfths;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
/// assert_eq!(vested_twelfths(start, end), 12);
/// ```
pub fn vested_twelfths(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }

    let mut count = 0;
    let mut cursor = month_start(start);
    let last_month = month_start(end);

    while cursor <= last_month {
        let covered_days = if cursor == last_month {
            end.day()
        } else if cursor == month_start(start) {
            days_in_month(cursor) - start.day() + 1
        } else {
            days_in_month(cursor)
        };

        if covered_days >= VESTING_DAY_THRESHOLD {
            count += 1;
        }

        cursor = next_month_start(cursor);
    }

    count
}

/// The first day of the month containing `date`.
fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The first day of the month after the one containing `date`.
fn next_month_start(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// Number of days in the month containing `date`.
fn days_in_month(date: NaiveDate) -> u32 {
    let next = next_month_start(date);
    next.pred_opt().map_or(30, |d| d.day())
}
