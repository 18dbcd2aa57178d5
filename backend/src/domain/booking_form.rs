//! Booking form state as immutable values with pure transitions.
//!
//! Each reducer consumes a form and returns the next state; nothing mutates
//! in place and validation is a pure function of the value. The REST layer
//! builds a form from a submitted request, but interactive clients can apply
//! the same transitions step by step.

use chrono::{NaiveDate, NaiveTime};
use shared::{Service, ServiceCategory, Tour, TourSession, VehicleType};

use crate::domain::availability;
use crate::domain::error::DomainError;

/// Tour booking form. `guest_names[0]` is the lead guest and stays empty;
/// additional guests fill the following slots.
#[derive(Debug, Clone, PartialEq)]
pub struct TourBookingForm {
    pub tour: Tour,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub number_of_people: u32,
    pub guest_names: Vec<String>,
    pub room_numbers: Vec<String>,
    pub selected_date: NaiveDate,
    pub selected_session: Option<TourSession>,
}

impl TourBookingForm {
    /// Fresh form for a tour: one guest, the first bookable date, the first
    /// session preselected.
    pub fn new(tour: Tour, today: NaiveDate) -> Self {
        let selected_date = tour
            .schedule
            .as_ref()
            .map(|schedule| {
                availability::first_available_date(
                    &schedule.available_days,
                    today,
                    availability::DEFAULT_HORIZON_DAYS,
                )
            })
            .unwrap_or(today);

        let selected_session = tour
            .schedule
            .as_ref()
            .and_then(|schedule| schedule.sessions.first().cloned());

        Self {
            tour,
            full_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            number_of_people: 1,
            guest_names: vec![String::new()],
            room_numbers: vec![String::new()],
            selected_date,
            selected_session,
        }
    }

    pub fn with_full_name(self, full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..self
        }
    }

    pub fn with_contact(self, email: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            phone_number: phone_number.into(),
            ..self
        }
    }

    pub fn with_room_numbers(self, room_numbers: Vec<String>) -> Self {
        Self {
            room_numbers,
            ..self
        }
    }

    /// Add one guest slot to the party.
    pub fn add_guest(self) -> Self {
        let mut guest_names = self.guest_names;
        guest_names.push(String::new());
        Self {
            number_of_people: self.number_of_people + 1,
            guest_names,
            ..self
        }
    }

    /// Drop the last guest slot; the party never shrinks below the lead
    /// guest.
    pub fn remove_guest(self) -> Self {
        if self.number_of_people <= 1 {
            return self;
        }
        let number_of_people = self.number_of_people - 1;
        let mut guest_names = self.guest_names;
        guest_names.truncate(number_of_people as usize);
        Self {
            number_of_people,
            guest_names,
            ..self
        }
    }

    pub fn with_guest_name(self, index: usize, name: impl Into<String>) -> Self {
        let mut guest_names = self.guest_names;
        if let Some(slot) = guest_names.get_mut(index) {
            *slot = name.into();
        }
        Self {
            guest_names,
            ..self
        }
    }

    pub fn with_date(self, selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            ..self
        }
    }

    /// Select a session by id; an unknown id clears the selection.
    pub fn with_session_id(self, session_id: Option<&str>) -> Self {
        let selected_session = session_id.and_then(|id| {
            self.tour
                .schedule
                .as_ref()
                .and_then(|schedule| schedule.sessions.iter().find(|s| s.id == id).cloned())
        });
        Self {
            selected_session,
            ..self
        }
    }

    /// Per-person price times party size.
    pub fn total_price(&self) -> f64 {
        self.tour.price_per_person * self.number_of_people as f64
    }

    pub fn formatted_total_price(&self) -> String {
        format!("${:.2}", self.total_price())
    }

    /// Whether the selected date is bookable, looking ahead from `today`.
    pub fn is_date_available(&self, today: NaiveDate) -> bool {
        match self.tour.schedule.as_ref() {
            Some(schedule) => availability::is_date_available(
                &schedule.available_days,
                today,
                availability::DEFAULT_HORIZON_DAYS,
                self.selected_date,
            ),
            None => false,
        }
    }

    /// Snap an unavailable selection back to the first bookable date.
    pub fn snap_to_available(self, today: NaiveDate) -> Self {
        if self.is_date_available(today) {
            return self;
        }
        let snapped = self
            .tour
            .schedule
            .as_ref()
            .map(|schedule| {
                availability::first_available_date(
                    &schedule.available_days,
                    today,
                    availability::DEFAULT_HORIZON_DAYS,
                )
            })
            .unwrap_or(self.selected_date);
        self.with_date(snapped)
    }

    /// Check every rule; the first failing one yields its message.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.full_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Please enter your full name".to_string(),
            ));
        }

        if self.room_numbers.is_empty() || self.room_numbers.iter().any(|r| r.trim().is_empty()) {
            return Err(DomainError::Validation(
                "Please enter your room number".to_string(),
            ));
        }

        if self.phone_number.trim().is_empty() {
            return Err(DomainError::Validation(
                "Please enter your phone number".to_string(),
            ));
        }

        if self.number_of_people > 1
            && self
                .guest_names
                .iter()
                .skip(1)
                .any(|name| name.trim().is_empty())
        {
            return Err(DomainError::Validation(
                "Please enter all guest names".to_string(),
            ));
        }

        if self.selected_session.is_none() {
            return Err(DomainError::Validation(
                "Please select a tour time".to_string(),
            ));
        }

        Ok(())
    }
}

/// Transfer/taxi booking form.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceBookingForm {
    pub service: Service,
    pub full_name: String,
    pub room_number: String,
    pub phone_number: String,
    pub email: String,
    pub number_of_people: u32,
    pub guest_names: Vec<String>,
    pub passport_number: String,
    pub passport_numbers: Vec<String>,
    pub pickup_location: String,
    pub destination: String,
    pub customer_message: String,
    pub selected_date: NaiveDate,
    pub selected_time: NaiveTime,
}

impl ServiceBookingForm {
    pub fn new(service: Service, today: NaiveDate, now: NaiveTime) -> Self {
        let slots = service.max_passengers as usize;
        Self {
            service,
            full_name: String::new(),
            room_number: String::new(),
            phone_number: String::new(),
            email: String::new(),
            number_of_people: 1,
            guest_names: vec![String::new(); slots],
            passport_number: String::new(),
            passport_numbers: vec![String::new(); slots],
            pickup_location: String::new(),
            destination: String::new(),
            customer_message: String::new(),
            selected_date: today,
            selected_time: now,
        }
    }

    pub fn is_city_taxi(&self) -> bool {
        self.service.category == ServiceCategory::Taxi
            && self.service.vehicle_type == VehicleType::Standard
    }

    pub fn is_airport_taxi(&self) -> bool {
        self.service.category == ServiceCategory::Taxi
            && self.service.vehicle_type == VehicleType::Airport
    }

    /// Default the pickup location to the selected hotel when the guest left
    /// it blank.
    pub fn with_pickup_from_hotel(self, hotel_name: &str) -> Self {
        if !self.pickup_location.trim().is_empty() {
            return self;
        }
        Self {
            pickup_location: hotel_name.to_string(),
            ..self
        }
    }

    /// Party size is clamped to `1..=max_passengers` for the vehicle.
    pub fn with_number_of_people(self, count: u32) -> Self {
        Self {
            number_of_people: count.clamp(1, self.service.max_passengers),
            ..self
        }
    }

    /// A pickup on the current day may not be in the past; snap it to now.
    pub fn with_pickup_time(self, date: NaiveDate, time: NaiveTime, today: NaiveDate, now: NaiveTime) -> Self {
        let selected_time = if date == today && time < now { now } else { time };
        Self {
            selected_date: date,
            selected_time,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.full_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Please enter your full name".to_string(),
            ));
        }

        if self.room_number.trim().is_empty() {
            return Err(DomainError::Validation(
                "Please enter your room number".to_string(),
            ));
        }

        if self.phone_number.trim().is_empty() {
            return Err(DomainError::Validation(
                "Please enter your phone number".to_string(),
            ));
        }

        if self.is_city_taxi() && self.destination.trim().is_empty() {
            return Err(DomainError::Validation(
                "Please enter your destination".to_string(),
            ));
        }

        // Taxis are done; transfers also need passports for every traveller
        if self.is_city_taxi() || self.is_airport_taxi() {
            return Ok(());
        }

        if self.passport_number.trim().is_empty() {
            return Err(DomainError::Validation(
                "Please enter your passport number".to_string(),
            ));
        }

        for index in 1..self.number_of_people as usize {
            let name_missing = self
                .guest_names
                .get(index)
                .map(|n| n.trim().is_empty())
                .unwrap_or(true);
            let passport_missing = self
                .passport_numbers
                .get(index)
                .map(|p| p.trim().is_empty())
                .unwrap_or(true);
            if name_missing || passport_missing {
                return Err(DomainError::Validation(
                    "Please enter all guest names and passport numbers".to_string(),
                ));
            }
        }

        Ok(())
    }
}
