//! Calendar domain logic for the booking date picker.
//!
//! Turns a tour's enumerated availability into a month grid the picker can
//! render directly, and tracks the month/year the picker is focused on. All
//! date computations live here; callers only handle presentation.

use chrono::{Datelike, NaiveDate};
use log::debug;
use shared::{CalendarDay, CalendarDayType, CalendarFocusDate, CalendarMonth};
use std::sync::{Arc, Mutex};

/// Calendar service that handles all date-picker business logic.
#[derive(Clone)]
pub struct CalendarService {
    /// Current focus date for calendar navigation (month/year only).
    /// Kept in memory, not persisted.
    current_focus_date: Arc<Mutex<CalendarFocusDate>>,
}

impl CalendarService {
    pub fn new() -> Self {
        Self {
            current_focus_date: Arc::new(Mutex::new(CalendarFocusDate::default())),
        }
    }

    /// Generate a month grid with each day flagged as bookable or not.
    ///
    /// `available_dates` is the enumerated availability for the tour; days of
    /// the month not present in it render as unavailable.
    pub fn generate_month(
        &self,
        month: u32,
        year: u32,
        available_dates: &[NaiveDate],
    ) -> CalendarMonth {
        let days_in_month = self.days_in_month(month, year);
        let first_day = self.first_day_of_month(month, year);

        debug!(
            "Generating calendar for {}/{}: {} days, first weekday {}",
            month, year, days_in_month, first_day
        );

        let mut calendar_days = Vec::new();

        // Empty cells before the 1st so the grid aligns on Sunday
        for _ in 0..first_day {
            calendar_days.push(CalendarDay {
                day: 0,
                date: None,
                available: false,
                day_type: CalendarDayType::PaddingBefore,
            });
        }

        for day in 1..=days_in_month {
            let date = NaiveDate::from_ymd_opt(year as i32, month, day);
            let available = date
                .map(|d| available_dates.contains(&d))
                .unwrap_or(false);

            calendar_days.push(CalendarDay {
                day,
                date,
                available,
                day_type: CalendarDayType::MonthDay,
            });
        }

        CalendarMonth {
            month,
            year,
            days: calendar_days,
            first_day_of_week: first_day,
        }
    }

    /// Number of days in a given month and year.
    pub fn days_in_month(&self, month: u32, year: u32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    pub fn is_leap_year(&self, year: u32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Weekday of the 1st of the month (0 = Sunday, 1 = Monday, ...).
    pub fn first_day_of_month(&self, month: u32, year: u32) -> u32 {
        if let Some(date) = NaiveDate::from_ymd_opt(year as i32, month, 1) {
            date.weekday().num_days_from_sunday()
        } else {
            0
        }
    }

    /// Human-readable name for a month number.
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Format a date for confirmation screens, e.g. `January 3, 2024`.
    pub fn format_date_for_display(&self, date: NaiveDate) -> String {
        format!(
            "{} {}, {}",
            self.month_name(date.month()),
            date.day(),
            date.year()
        )
    }

    /// Month/year one month earlier, rolling the year back from January.
    pub fn previous_month(&self, current_month: u32, current_year: u32) -> (u32, u32) {
        if current_month == 1 {
            (12, current_year - 1)
        } else {
            (current_month - 1, current_year)
        }
    }

    /// Month/year one month later, rolling the year forward from December.
    pub fn next_month(&self, current_month: u32, current_year: u32) -> (u32, u32) {
        if current_month == 12 {
            (1, current_year + 1)
        } else {
            (current_month + 1, current_year)
        }
    }

    /// Get the current focus date for calendar navigation.
    pub fn get_focus_date(&self) -> CalendarFocusDate {
        self.current_focus_date.lock().unwrap().clone()
    }

    /// Set the focus date for calendar navigation.
    pub fn set_focus_date(&self, month: u32, year: u32) -> Result<CalendarFocusDate, String> {
        if !(1..=12).contains(&month) {
            return Err(format!("Invalid month: {}. Must be between 1 and 12", month));
        }

        let new_focus_date = CalendarFocusDate { month, year };

        {
            let mut focus_date = self.current_focus_date.lock().unwrap();
            *focus_date = new_focus_date.clone();
        }

        Ok(new_focus_date)
    }

    /// Move the picker one month back.
    pub fn navigate_previous_month(&self) -> CalendarFocusDate {
        let current = self.get_focus_date();
        let (month, year) = self.previous_month(current.month, current.year);
        let new_focus_date = CalendarFocusDate { month, year };

        *self.current_focus_date.lock().unwrap() = new_focus_date.clone();
        new_focus_date
    }

    /// Move the picker one month forward.
    pub fn navigate_next_month(&self) -> CalendarFocusDate {
        let current = self.get_focus_date();
        let (month, year) = self.next_month(current.month, current.year);
        let new_focus_date = CalendarFocusDate { month, year };

        *self.current_focus_date.lock().unwrap() = new_focus_date.clone();
        new_focus_date
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::availability;
    use shared::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        let service = CalendarService::new();

        assert_eq!(service.days_in_month(1, 2025), 31);
        assert_eq!(service.days_in_month(4, 2025), 30);
        assert_eq!(service.days_in_month(2, 2025), 28);
        assert_eq!(service.days_in_month(2, 2024), 29);
    }

    #[test]
    fn test_is_leap_year() {
        let service = CalendarService::new();

        assert!(!service.is_leap_year(2025));
        assert!(service.is_leap_year(2024));
        assert!(!service.is_leap_year(1900)); // Divisible by 100 but not 400
        assert!(service.is_leap_year(2000));
    }

    #[test]
    fn test_first_day_of_month() {
        let service = CalendarService::new();

        // January 2024 starts on a Monday
        assert_eq!(service.first_day_of_month(1, 2024), 1);
        // September 2024 starts on a Sunday
        assert_eq!(service.first_day_of_month(9, 2024), 0);
    }

    #[test]
    fn test_month_name() {
        let service = CalendarService::new();

        assert_eq!(service.month_name(1), "January");
        assert_eq!(service.month_name(12), "December");
        assert_eq!(service.month_name(13), "Invalid Month");
    }

    #[test]
    fn test_format_date_for_display() {
        let service = CalendarService::new();
        assert_eq!(service.format_date_for_display(date(2024, 1, 3)), "January 3, 2024");
    }

    #[test]
    fn test_navigation() {
        let service = CalendarService::new();

        assert_eq!(service.previous_month(6, 2025), (5, 2025));
        assert_eq!(service.previous_month(1, 2025), (12, 2024));
        assert_eq!(service.next_month(6, 2025), (7, 2025));
        assert_eq!(service.next_month(12, 2025), (1, 2026));
    }

    #[test]
    fn test_generate_month_grid_shape() {
        let service = CalendarService::new();

        // January 2024: 31 days, starts Monday -> 1 padding cell
        let month = service.generate_month(1, 2024, &[]);
        assert_eq!(month.first_day_of_week, 1);
        assert_eq!(month.days.len(), 32);
        assert_eq!(month.days[0].day_type, CalendarDayType::PaddingBefore);
        assert_eq!(month.days[1].day, 1);
        assert_eq!(month.days[1].date, Some(date(2024, 1, 1)));
        assert_eq!(month.days.last().unwrap().day, 31);
    }

    #[test]
    fn test_generate_month_availability_flags() {
        let service = CalendarService::new();

        let available =
            availability::available_dates(&[Weekday::Monday, Weekday::Wednesday], date(2024, 1, 1), 30);
        let month = service.generate_month(1, 2024, &available);

        let day = |n: u32| {
            month
                .days
                .iter()
                .find(|d| d.day == n && d.day_type == CalendarDayType::MonthDay)
                .unwrap()
        };

        assert!(day(1).available); // Monday
        assert!(!day(2).available); // Tuesday
        assert!(day(3).available); // Wednesday
        assert!(!day(6).available); // Saturday
        assert!(day(31).available); // Wednesday, horizon edge
    }

    #[test]
    fn test_set_focus_date() {
        let service = CalendarService::new();

        let focus = service.set_focus_date(6, 2025).unwrap();
        assert_eq!(focus.month, 6);
        assert_eq!(focus.year, 2025);

        let retrieved = service.get_focus_date();
        assert_eq!(retrieved.month, 6);
        assert_eq!(retrieved.year, 2025);

        assert!(service.set_focus_date(13, 2025).is_err());
        assert!(service.set_focus_date(0, 2025).is_err());
    }

    #[test]
    fn test_navigate_focus() {
        let service = CalendarService::new();

        service.set_focus_date(1, 2025).unwrap();
        let focus = service.navigate_previous_month();
        assert_eq!((focus.month, focus.year), (12, 2024));

        service.set_focus_date(12, 2025).unwrap();
        let focus = service.navigate_next_month();
        assert_eq!((focus.month, focus.year), (1, 2026));
    }
}
