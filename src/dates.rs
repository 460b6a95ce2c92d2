//! Evergreen demo dates. Everything is computed from an injected `today` so
//! the demo always looks current: the next renewal sits exactly two weeks
//! out, and anniversary policies anchor to a fixed month/day in the most
//! recent past year. Dates never influence script content, only display.

use chrono::{Datelike, Duration, NaiveDate};

pub const WEEKS_UNTIL_RENEWAL: i64 = 2;
pub const EXPIRING_SOON_DAYS: i64 = 90;

/// How a policy's term is anchored relative to `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyTerm {
    /// Expires at the next renewal (two weeks out), effective a year before.
    NextRenewal,
    /// Effective on the most recent occurrence of month/day, one-year term.
    Anniversary { month: u32, day: u32 },
}

/// The next renewal date, always exactly two weeks from `today`.
pub fn next_renewal(today: NaiveDate) -> NaiveDate {
    today + Duration::weeks(WEEKS_UNTIL_RENEWAL)
}

/// (effective, expires) for a policy term.
pub fn term_dates(today: NaiveDate, term: PolicyTerm) -> (NaiveDate, NaiveDate) {
    match term {
        PolicyTerm::NextRenewal => {
            let expires = next_renewal(today);
            (shift_year(expires, -1), expires)
        }
        PolicyTerm::Anniversary { month, day } => {
            let candidate = NaiveDate::from_ymd_opt(today.year(), month, day).unwrap_or(today);
            let effective = if candidate > today {
                shift_year(candidate, -1)
            } else {
                candidate
            };
            (effective, shift_year(effective, 1))
        }
    }
}

/// True when `expires` is in the future but within the expiring-soon window.
pub fn is_expiring_soon(today: NaiveDate, expires: NaiveDate) -> bool {
    let days_until = (expires - today).num_days();
    days_until > 0 && days_until <= EXPIRING_SOON_DAYS
}

pub fn days_until(today: NaiveDate, date: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// MM/DD/YYYY, the display format used across the coverage tables.
pub fn format_policy_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// "March 2026" style, used in chat copy and the lease pill.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Carrier policy number with the issuance year taken from the effective date.
pub fn policy_number(prefix: &str, effective: NaiveDate, suffix: &str) -> String {
    format!("{}-{}-{}", prefix, effective.year(), suffix)
}

fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    // Feb 29 in a non-leap target year slides to Mar 1.
    date.with_year(date.year() + years)
        .or_else(|| NaiveDate::from_ymd_opt(date.year() + years, 3, 1))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn renewal_is_two_weeks_out() {
        let today = date(2026, 8, 24);
        assert_eq!(next_renewal(today), date(2026, 9, 7));
    }

    #[test]
    fn next_renewal_term_spans_a_year() {
        let today = date(2026, 8, 24);
        let (effective, expires) = term_dates(today, PolicyTerm::NextRenewal);
        assert_eq!(expires, date(2026, 9, 7));
        assert_eq!(effective, date(2025, 9, 7));
    }

    #[test]
    fn anniversary_in_the_future_rolls_back_a_year() {
        let today = date(2026, 2, 1);
        let (effective, expires) = term_dates(today, PolicyTerm::Anniversary { month: 3, day: 15 });
        assert_eq!(effective, date(2025, 3, 15));
        assert_eq!(expires, date(2026, 3, 15));
    }

    #[test]
    fn anniversary_in_the_past_stays_in_current_year() {
        let today = date(2026, 8, 24);
        let (effective, expires) = term_dates(today, PolicyTerm::Anniversary { month: 6, day: 8 });
        assert_eq!(effective, date(2026, 6, 8));
        assert_eq!(expires, date(2027, 6, 8));
    }

    #[test]
    fn expiring_soon_window() {
        let today = date(2026, 8, 24);
        assert!(is_expiring_soon(today, today + Duration::days(14)));
        assert!(is_expiring_soon(today, today + Duration::days(90)));
        assert!(!is_expiring_soon(today, today + Duration::days(91)));
        assert!(!is_expiring_soon(today, today));
        assert!(!is_expiring_soon(today, today - Duration::days(1)));
    }

    #[test]
    fn policy_number_embeds_issuance_year() {
        assert_eq!(policy_number("CGL", date(2025, 9, 7), "88412"), "CGL-2025-88412");
    }
}
