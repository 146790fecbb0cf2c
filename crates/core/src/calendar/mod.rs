//! Calendar utilities pinned to a single reference timezone.
//!
//! The user base operates in one geographic region, so day and month
//! boundaries are computed in Asia/Jakarta no matter where the code runs.
//! A server in another timezone must not roll "today" over early or late.
//!
//! Calculations that depend on the current date take it as an explicit
//! parameter; `today()` exists for callers at the edge.

use arta_shared::types::MonthKey;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// The fixed reference timezone for day and month boundaries.
pub const TIMEZONE: Tz = chrono_tz::Asia::Jakarta;

/// The current instant in the reference timezone.
#[must_use]
pub fn now() -> DateTime<Tz> {
    Utc::now().with_timezone(&TIMEZONE)
}

/// Today's date in the reference timezone.
#[must_use]
pub fn today() -> NaiveDate {
    now().date_naive()
}

/// The current month in the reference timezone.
#[must_use]
pub fn current_month() -> MonthKey {
    MonthKey::from_date(today())
}

/// The calendar date of a UTC instant, in the reference timezone.
#[must_use]
pub fn local_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&TIMEZONE).date_naive()
}

/// Returns true if `date` falls on the same calendar day as `reference`.
#[must_use]
pub fn is_same_day(date: NaiveDate, reference: NaiveDate) -> bool {
    date == reference
}

/// Distinct months of the given dates, newest first.
#[must_use]
pub fn unique_months(dates: &[NaiveDate]) -> Vec<MonthKey> {
    let mut months: Vec<MonthKey> = dates.iter().copied().map(MonthKey::from_date).collect();
    months.sort_unstable();
    months.dedup();
    months.reverse();
    months
}

/// Whole-or-partial months from `from` to `to`, floored at zero.
///
/// A month is treated as 30 days. This is an intentional simplification,
/// not calendar-accurate: spans crossing 28/29/31-day months drift from
/// true calendar-month differences.
#[must_use]
pub fn approx_months_between(from: NaiveDate, to: NaiveDate) -> u32 {
    let days = (to - from).num_days();
    if days <= 0 {
        return 0;
    }
    let days = u64::try_from(days).unwrap_or(u64::MAX);
    u32::try_from(days.div_ceil(30)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_unique_months_sorted_descending() {
        let dates = [
            date(2026, 1, 5),
            date(2026, 3, 1),
            date(2026, 1, 20),
            date(2025, 12, 31),
        ];
        let months: Vec<String> = unique_months(&dates)
            .into_iter()
            .map(|m| m.to_string())
            .collect();
        assert_eq!(months, ["2026-03", "2026-01", "2025-12"]);
    }

    #[test]
    fn test_unique_months_empty() {
        assert!(unique_months(&[]).is_empty());
    }

    #[rstest]
    #[case(date(2026, 1, 1), date(2026, 1, 1), 0)] // same day
    #[case(date(2026, 1, 1), date(2025, 12, 1), 0)] // past -> floored
    #[case(date(2026, 1, 1), date(2026, 1, 2), 1)] // 1 day -> 1 month
    #[case(date(2026, 1, 1), date(2026, 1, 31), 1)] // 30 days
    #[case(date(2026, 1, 1), date(2026, 2, 1), 2)] // 31 days -> rounds up
    #[case(date(2026, 2, 1), date(2026, 3, 1), 1)] // 28 days (Feb)
    #[case(date(2024, 2, 1), date(2024, 3, 1), 1)] // 29 days (leap Feb)
    #[case(date(2026, 1, 1), date(2026, 7, 1), 7)] // 181 days, not 6 calendar months
    fn test_approx_months_is_30_day_based(
        #[case] from: NaiveDate,
        #[case] to: NaiveDate,
        #[case] expected: u32,
    ) {
        assert_eq!(approx_months_between(from, to), expected);
    }

    #[test]
    fn test_is_same_day() {
        assert!(is_same_day(date(2026, 2, 14), date(2026, 2, 14)));
        assert!(!is_same_day(date(2026, 2, 14), date(2026, 2, 15)));
    }
}
