use chrono::NaiveDate;
use shared::{BookingConfirmation, CalendarMonth};

/// Availability enumeration for one tour's date picker.
#[derive(Debug, Clone)]
pub struct TourAvailabilityQuery {
    pub tour_id: String,
    /// Reference date; defaults to today when None
    pub from: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct TourAvailabilityResult {
    pub dates: Vec<NaiveDate>,
    pub first_available: NaiveDate,
}

/// Month grid for one tour's date picker.
#[derive(Debug, Clone)]
pub struct TourCalendarQuery {
    pub tour_id: String,
    pub month: u32,
    pub year: u32,
}

#[derive(Debug, Clone)]
pub struct TourCalendarResult {
    pub calendar: CalendarMonth,
}

#[derive(Debug, Clone)]
pub struct SubmitBookingResult {
    pub confirmation: BookingConfirmation,
}
