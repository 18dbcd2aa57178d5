//! Availability arithmetic for recurring weekly tour schedules.
//!
//! Translates a set of allowed weekdays into concrete bookable dates within a
//! lookahead window, for the booking date picker and default-date selection.
//! None of these functions fail: an empty weekday set or an exhausted horizon
//! degrades to a documented fallback value so the date picker never crashes.

use chrono::{Duration, NaiveDate};
use shared::Weekday;

/// How many days ahead availability is computed by default.
pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Enumerate every bookable date in `[from, from + horizon_days]`.
///
/// A date is bookable when its weekday appears in `allowed_weekdays`. Output
/// is in ascending order. An empty weekday set yields an empty list.
pub fn available_dates(
    allowed_weekdays: &[Weekday],
    from: NaiveDate,
    horizon_days: u32,
) -> Vec<NaiveDate> {
    let mut dates = Vec::new();

    for offset in 0..=horizon_days as i64 {
        let date = from + Duration::days(offset);
        if allowed_weekdays.iter().any(|day| day.matches(date)) {
            dates.push(date);
        }
    }

    dates
}

/// First bookable date on or after `from`, or `from` itself when the schedule
/// yields nothing within the horizon.
pub fn first_available_date(
    allowed_weekdays: &[Weekday],
    from: NaiveDate,
    horizon_days: u32,
) -> NaiveDate {
    available_dates(allowed_weekdays, from, horizon_days)
        .into_iter()
        .next()
        .unwrap_or(from)
}

/// First entry of `available_dates` that is on or after `reference`.
///
/// Falls back to the first entry when `reference` is past every known date
/// (wrap-to-first, kept from the source behavior), and to `reference` itself
/// when the list is empty.
pub fn next_available_on_or_after(available_dates: &[NaiveDate], reference: NaiveDate) -> NaiveDate {
    available_dates
        .iter()
        .copied()
        .find(|date| *date >= reference)
        .or_else(|| available_dates.first().copied())
        .unwrap_or(reference)
}

/// Whether a specific date is bookable under the schedule.
pub fn is_date_available(
    allowed_weekdays: &[Weekday],
    from: NaiveDate,
    horizon_days: u32,
    date: NaiveDate,
) -> bool {
    available_dates(allowed_weekdays, from, horizon_days).contains(&date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_available_dates_mon_wed_fri() {
        // 2024-01-01 is a Monday
        let allowed = [Weekday::Monday, Weekday::Wednesday, Weekday::Friday];
        let dates = available_dates(&allowed, date(2024, 1, 1), 30);

        assert_eq!(dates[0], date(2024, 1, 1));
        assert!(dates.contains(&date(2024, 1, 3)));
        assert!(dates.contains(&date(2024, 1, 5)));
        assert!(dates.contains(&date(2024, 1, 8)));

        // No Tuesdays, Thursdays or weekend days
        assert!(!dates.contains(&date(2024, 1, 2)));
        assert!(!dates.contains(&date(2024, 1, 4)));
        assert!(!dates.contains(&date(2024, 1, 6)));
        assert!(!dates.contains(&date(2024, 1, 7)));

        // 3 allowed weekdays over 31 days starting on an allowed Monday
        assert_eq!(dates.len(), 14);
    }

    #[test]
    fn test_available_dates_properties() {
        let allowed = [Weekday::Tuesday, Weekday::Saturday];
        let from = date(2024, 3, 14);
        let dates = available_dates(&allowed, from, 30);

        // All within [from, from + 30], strictly ascending, only allowed weekdays
        for window in dates.windows(2) {
            assert!(window[0] < window[1]);
        }
        for d in &dates {
            assert!(*d >= from && *d <= from + Duration::days(30));
            assert!(allowed.iter().any(|day| day.matches(*d)));
        }
    }

    #[test]
    fn test_available_dates_horizon_inclusive() {
        // Horizon of 0 still considers `from` itself
        let monday = date(2024, 1, 1);
        assert_eq!(available_dates(&[Weekday::Monday], monday, 0), vec![monday]);
        assert!(available_dates(&[Weekday::Tuesday], monday, 0).is_empty());

        // from + 30 lands on a Wednesday (2024-01-31) and is included
        let dates = available_dates(&[Weekday::Wednesday], monday, 30);
        assert_eq!(dates.last().copied(), Some(date(2024, 1, 31)));
    }

    #[test]
    fn test_available_dates_empty_weekdays() {
        assert!(available_dates(&[], date(2024, 1, 1), 30).is_empty());
    }

    #[test]
    fn test_available_dates_idempotent() {
        let allowed = [Weekday::Friday, Weekday::Sunday];
        let from = date(2025, 6, 10);
        assert_eq!(
            available_dates(&allowed, from, 30),
            available_dates(&allowed, from, 30)
        );
    }

    #[test]
    fn test_first_available_date() {
        // 2024-01-01 is a Monday; first Wednesday is Jan 3
        assert_eq!(
            first_available_date(&[Weekday::Wednesday], date(2024, 1, 1), 30),
            date(2024, 1, 3)
        );
        // A schedule starting on its own weekday returns `from`
        assert_eq!(
            first_available_date(&[Weekday::Monday], date(2024, 1, 1), 30),
            date(2024, 1, 1)
        );
    }

    #[test]
    fn test_first_available_date_falls_back_to_from() {
        let from = date(2024, 1, 1);
        assert_eq!(first_available_date(&[], from, 30), from);
    }

    #[test]
    fn test_next_available_on_or_after() {
        let dates = [date(2024, 1, 3), date(2024, 1, 5), date(2024, 1, 8)];
        assert_eq!(next_available_on_or_after(&dates, date(2024, 1, 4)), date(2024, 1, 5));
        assert_eq!(next_available_on_or_after(&dates, date(2024, 1, 5)), date(2024, 1, 5));
        assert_eq!(next_available_on_or_after(&dates, date(2024, 1, 1)), date(2024, 1, 3));
    }

    #[test]
    fn test_next_available_wraps_to_first() {
        // Reference past all entries wraps to the first (source behavior,
        // even though that proposes a past date)
        let dates = [date(2024, 1, 3), date(2024, 1, 5)];
        assert_eq!(next_available_on_or_after(&dates, date(2024, 1, 10)), date(2024, 1, 3));
    }

    #[test]
    fn test_next_available_empty_list() {
        assert_eq!(next_available_on_or_after(&[], date(2024, 1, 4)), date(2024, 1, 4));
    }

    #[test]
    fn test_is_date_available() {
        let allowed = [Weekday::Monday];
        let from = date(2024, 1, 1);
        assert!(is_date_available(&allowed, from, 30, date(2024, 1, 8)));
        assert!(!is_date_available(&allowed, from, 30, date(2024, 1, 9)));
        // Outside the horizon
        assert!(!is_date_available(&allowed, from, 30, date(2024, 2, 5)));
    }
}
