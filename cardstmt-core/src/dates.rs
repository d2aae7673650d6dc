//! Year assignment for two-digit MM/DD statement dates.
//!
//! Statements print transaction dates without a year. The billing cycle on
//! page one pins them down; the policy is to never infer a year that would
//! place a transaction after the cycle's end.

use chrono::{Datelike, NaiveDate};

use crate::types::StatementDates;

/// Sort-first sentinel for tokens that cannot form a real calendar date.
pub fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
}

/// Pick the year for a transaction month.
///
/// `today` is the caller's clock, used only when the statement carries
/// neither a billing cycle nor a closing date. Passing it in keeps the
/// resolver deterministic under test.
pub fn resolve_year(month: u32, dates: &StatementDates, today: NaiveDate) -> i32 {
    if let Some(cycle) = dates.cycle {
        if cycle.end.month() < cycle.start.month() {
            // Cycle crosses a year boundary (e.g. Dec 20 - Jan 19).
            if month >= cycle.start.month() {
                return cycle.start.year();
            }
            if month <= cycle.end.month() {
                return cycle.end.year();
            }
            return cycle.start.year();
        }
        // Same-year cycle: in-window dates take the start year, and so do
        // out-of-window stragglers near the cycle edges. Assuming they fall
        // before the cycle keeps us from dating anything after its end.
        return cycle.start.year();
    }

    if let Some(closing) = dates.closing {
        // A late-year transaction on an early-year statement belongs to the
        // previous year.
        if month >= 10 && closing.month() <= 3 {
            return closing.year() - 1;
        }
        return closing.year();
    }

    today.year()
}

/// Resolve an MM/DD token to a full date, falling back to the sort-first
/// sentinel when the token is not a real calendar date.
pub fn resolve_date(month: u32, day: u32, dates: &StatementDates, today: NaiveDate) -> NaiveDate {
    let year = resolve_year(month, dates, today);
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(earliest_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BillingCycle;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cycle(start: NaiveDate, end: NaiveDate) -> StatementDates {
        StatementDates {
            cycle: Some(BillingCycle { start, end }),
            closing: None,
        }
    }

    fn today() -> NaiveDate {
        ymd(2025, 6, 1)
    }

    #[test]
    fn test_same_year_cycle_in_window() {
        let dates = cycle(ymd(2023, 11, 15), ymd(2023, 12, 14));
        assert_eq!(resolve_date(11, 20, &dates, today()), ymd(2023, 11, 20));
    }

    #[test]
    fn test_same_year_cycle_out_of_window_defaults_to_start_year() {
        // 12/31 is after the cycle end; still dated 2023, never forward.
        let dates = cycle(ymd(2023, 11, 15), ymd(2023, 12, 14));
        assert_eq!(resolve_date(12, 31, &dates, today()), ymd(2023, 12, 31));
    }

    #[test]
    fn test_cross_year_cycle_takes_end_year_for_january() {
        let dates = cycle(ymd(2023, 12, 20), ymd(2024, 1, 19));
        assert_eq!(resolve_date(1, 5, &dates, today()), ymd(2024, 1, 5));
    }

    #[test]
    fn test_cross_year_cycle_takes_start_year_for_december() {
        let dates = cycle(ymd(2023, 12, 20), ymd(2024, 1, 19));
        assert_eq!(resolve_date(12, 22, &dates, today()), ymd(2023, 12, 22));
    }

    #[test]
    fn test_cross_year_cycle_mid_months_default_to_start_year() {
        let dates = cycle(ymd(2023, 12, 20), ymd(2024, 1, 19));
        assert_eq!(resolve_year(6, &dates, today()), 2023);
    }

    #[test]
    fn test_closing_date_fallback() {
        let dates = StatementDates {
            cycle: None,
            closing: Some(ymd(2024, 2, 10)),
        };
        assert_eq!(resolve_year(1, &dates, today()), 2024);
        // Late-year transaction against an early-year closing date.
        assert_eq!(resolve_year(11, &dates, today()), 2023);
    }

    #[test]
    fn test_closing_date_late_in_year_never_rolls_back() {
        let dates = StatementDates {
            cycle: None,
            closing: Some(ymd(2023, 11, 30)),
        };
        assert_eq!(resolve_year(10, &dates, today()), 2023);
    }

    #[test]
    fn test_last_resort_uses_injected_today() {
        let dates = StatementDates::default();
        assert_eq!(resolve_year(3, &dates, ymd(2022, 8, 1)), 2022);
    }

    #[test]
    fn test_invalid_calendar_date_falls_back_to_sentinel() {
        let dates = cycle(ymd(2023, 11, 15), ymd(2023, 12, 14));
        assert_eq!(resolve_date(13, 45, &dates, today()), earliest_date());
    }
}
