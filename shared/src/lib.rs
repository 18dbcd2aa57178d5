use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week used to express a recurring weekly tour schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven weekdays, Monday first.
    pub fn all() -> [Weekday; 7] {
        [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ]
    }

    /// Whether a concrete calendar date falls on this weekday.
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.to_chrono() == date.weekday()
    }

    pub fn to_chrono(self) -> chrono::Weekday {
        match self {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}

/// A single bookable time window within a tour day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourSession {
    pub id: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Optional label such as "Morning Tour"
    pub title: Option<String>,
}

impl TourSession {
    /// Human-readable session label, e.g. `Morning Tour (09:30 - 14:00)`.
    pub fn label(&self) -> String {
        let times = format!(
            "{} - {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        );
        match &self.title {
            Some(title) => format!("{} ({})", title, times),
            None => times,
        }
    }
}

/// Recurring weekly schedule for a tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourSchedule {
    /// Weekdays on which the tour runs
    pub available_days: Vec<Weekday>,
    pub sessions: Vec<TourSession>,
    pub notes: Option<String>,
}

/// A named location with coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
}

/// One stop on a tour program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourProgramItem {
    pub title: String,
    pub description: String,
    pub location: Place,
}

/// Category used by the tour list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TourCategory {
    Popular,
    New,
    Historical,
    Cultural,
}

/// Filter applied to the tour list. `All` disables category filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TourFilter {
    All,
    Popular,
    New,
    Historical,
    Cultural,
}

impl TourFilter {
    /// Whether a tour in the given category passes this filter.
    pub fn accepts(&self, category: TourCategory) -> bool {
        match self {
            TourFilter::All => true,
            TourFilter::Popular => category == TourCategory::Popular,
            TourFilter::New => category == TourCategory::New,
            TourFilter::Historical => category == TourCategory::Historical,
            TourFilter::Cultural => category == TourCategory::Cultural,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub id: String,
    pub title: String,
    /// Per-person price in USD
    pub price_per_person: f64,
    pub rating: f64,
    pub duration: String,
    pub description: String,
    pub category: TourCategory,
    pub program: Vec<TourProgramItem>,
    pub schedule: Option<TourSchedule>,
    pub meeting_point: Option<String>,
    pub included_services: Vec<String>,
    pub excluded_services: Vec<String>,
    pub visiting_places: Vec<Place>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
}

/// Vehicle tier for a transfer/taxi service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    Vip,
    Standard,
    Airport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceCategory {
    Taxi,
    Transfer,
}

/// A transfer or taxi service offered through the hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Fixed per-vehicle price in USD; taxis are metered instead
    pub price: f64,
    pub rating: f64,
    pub category: ServiceCategory,
    pub vehicle_type: VehicleType,
    pub max_passengers: u32,
    pub features: Vec<String>,
}

impl Service {
    /// Price text shown to the guest. Taxi rides are metered, transfers have
    /// a fixed per-vehicle price.
    pub fn price_display(&self) -> String {
        if self.category == ServiceCategory::Taxi {
            "Metered Price".to_string()
        } else {
            format!("${:.0}", self.price)
        }
    }
}

/// Airports served by airport transfers and airport taxis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Airport {
    IstanbulAirport,
    SabihaGokcen,
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Airport::IstanbulAirport => "Istanbul Airport",
            Airport::SabihaGokcen => "Sabiha Gokcen Airport",
        };
        write!(f, "{}", name)
    }
}

/// Role of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Guest,
    Manager,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Guest => "guest",
            UserRole::Manager => "manager",
        }
    }

    pub fn parse(value: &str) -> Option<UserRole> {
        match value {
            "guest" => Some(UserRole::Guest),
            "manager" => Some(UserRole::Manager),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleResponse {
    /// None when no session role is cached
    pub role: Option<UserRole>,
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarDayType {
    /// Empty padding day before the start of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// A single cell of the booking date picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// 1-based day of month; 0 for padding cells
    pub day: u32,
    /// Concrete date; None for padding cells
    pub date: Option<NaiveDate>,
    /// Whether the tour runs on this date
    pub available: bool,
    pub day_type: CalendarDayType,
}

/// A calendar month annotated with tour availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: u32,
    pub days: Vec<CalendarDay>,
    /// Weekday of the 1st (0 = Sunday, 1 = Monday, ...)
    pub first_day_of_week: u32,
}

/// Month/year the date picker is currently showing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarFocusDate {
    pub month: u32,
    pub year: u32,
}

impl Default for CalendarFocusDate {
    fn default() -> Self {
        let now = chrono::Local::now();
        Self {
            month: now.month(),
            year: now.year() as u32,
        }
    }
}

/// Enumerated bookable dates for one tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub tour_id: String,
    pub dates: Vec<NaiveDate>,
    /// First bookable date, or the requested start date when none exist
    pub first_available: NaiveDate,
}

/// A guest's tour booking submission. Transient: confirmed at the front
/// desk, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourBookingRequest {
    pub tour_id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub number_of_people: u32,
    /// Names of additional guests beyond the lead guest
    pub guest_names: Vec<String>,
    pub room_numbers: Vec<String>,
    pub date: NaiveDate,
    pub session_id: Option<String>,
}

/// A guest's transfer/taxi booking submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceBookingRequest {
    pub service_id: String,
    pub full_name: String,
    pub room_number: String,
    pub phone_number: String,
    pub email: String,
    pub number_of_people: u32,
    pub guest_names: Vec<String>,
    /// Lead guest passport, required for transfer services
    pub passport_number: Option<String>,
    /// Passports for additional guests on transfer services
    pub passport_numbers: Vec<String>,
    /// Defaults to the selected hotel when omitted
    pub pickup_location: Option<String>,
    /// Required for city taxi rides
    pub destination: Option<String>,
    pub airport: Option<Airport>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub customer_message: Option<String>,
}

/// Summary of a confirmed booking, shown to the guest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDetails {
    pub title: String,
    pub date: String,
    pub number_of_people: u32,
    pub total_price: String,
    pub session_time: String,
    pub hotel_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// Front-desk reference for the request
    pub reference: String,
    pub details: BookingDetails,
}
