//! Booking submission: availability queries, date-picker calendars, and the
//! final validate-and-confirm step for tour and service requests.
//!
//! Requests are confirmed manually at the front desk, so a submission is
//! logged and acknowledged but never persisted.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use log::info;
use shared::{
    BookingConfirmation, BookingDetails, ServiceBookingRequest, Tour, TourBookingRequest,
};
use uuid::Uuid;

use crate::domain::availability;
use crate::domain::booking_form::{ServiceBookingForm, TourBookingForm};
use crate::domain::calendar::CalendarService;
use crate::domain::commands::bookings::{
    SubmitBookingResult, TourAvailabilityQuery, TourAvailabilityResult, TourCalendarQuery,
    TourCalendarResult,
};
use crate::domain::error::DomainError;
use crate::domain::hotel_service::HotelService;
use crate::domain::service_catalog::ServiceCatalog;
use crate::domain::tour_service::TourService;

#[derive(Clone)]
pub struct BookingService {
    tour_service: TourService,
    service_catalog: ServiceCatalog,
    hotel_service: HotelService,
    calendar_service: CalendarService,
}

impl BookingService {
    pub fn new(
        tour_service: TourService,
        service_catalog: ServiceCatalog,
        hotel_service: HotelService,
        calendar_service: CalendarService,
    ) -> Self {
        Self {
            tour_service,
            service_catalog,
            hotel_service,
            calendar_service,
        }
    }

    fn find_tour(&self, tour_id: &str) -> Result<Tour> {
        self.tour_service
            .get_tour(crate::domain::commands::catalog::GetTourQuery {
                tour_id: tour_id.to_string(),
            })?
            .tour
            .ok_or_else(|| DomainError::not_found("Tour", tour_id).into())
    }

    /// Enumerate bookable dates for a tour's date picker.
    pub fn tour_availability(&self, query: TourAvailabilityQuery) -> Result<TourAvailabilityResult> {
        let tour = self.find_tour(&query.tour_id)?;
        let from = query.from.unwrap_or_else(|| Local::now().date_naive());

        let allowed_days = tour
            .schedule
            .as_ref()
            .map(|schedule| schedule.available_days.clone())
            .unwrap_or_default();

        let dates =
            availability::available_dates(&allowed_days, from, availability::DEFAULT_HORIZON_DAYS);
        let first_available =
            availability::first_available_date(&allowed_days, from, availability::DEFAULT_HORIZON_DAYS);

        info!(
            "Availability for tour {}: {} bookable dates from {}",
            query.tour_id,
            dates.len(),
            from
        );

        Ok(TourAvailabilityResult {
            dates,
            first_available,
        })
    }

    /// Month grid for a tour's date picker.
    pub fn tour_calendar(&self, query: TourCalendarQuery) -> Result<TourCalendarResult> {
        if !(1..=12).contains(&query.month) {
            return Err(DomainError::Validation(format!(
                "Invalid month: {}. Must be between 1 and 12",
                query.month
            ))
            .into());
        }

        let availability = self.tour_availability(TourAvailabilityQuery {
            tour_id: query.tour_id,
            from: None,
        })?;

        let calendar =
            self.calendar_service
                .generate_month(query.month, query.year, &availability.dates);

        Ok(TourCalendarResult { calendar })
    }

    /// Validate and confirm a tour booking request.
    pub fn submit_tour_booking(&self, request: TourBookingRequest) -> Result<SubmitBookingResult> {
        let today = Local::now().date_naive();
        self.submit_tour_booking_at(request, today)
    }

    /// Submission with an explicit "today" so availability snapping is
    /// deterministic under test.
    pub fn submit_tour_booking_at(
        &self,
        request: TourBookingRequest,
        today: NaiveDate,
    ) -> Result<SubmitBookingResult> {
        let tour = self.find_tour(&request.tour_id)?;

        // The declared party size drives the guest slots; names fill them and
        // validation rejects any slot left unnamed
        let party_size = request.number_of_people.max(1);
        if request.guest_names.len() as u32 > party_size - 1 {
            return Err(DomainError::Validation(
                "Number of people does not match the guest list".to_string(),
            )
            .into());
        }

        let mut form = TourBookingForm::new(tour, today)
            .with_full_name(request.full_name)
            .with_contact(request.email, request.phone_number)
            .with_room_numbers(request.room_numbers)
            .with_session_id(request.session_id.as_deref())
            .with_date(request.date);

        for _ in 1..party_size {
            form = form.add_guest();
        }
        for (index, name) in request.guest_names.iter().enumerate() {
            form = form.with_guest_name(index + 1, name.clone());
        }

        form.validate()?;

        // A stale date picker can submit a day the tour no longer runs on;
        // fall back to the first bookable date instead of rejecting
        let form = form.snap_to_available(today);

        let hotel_name = self
            .hotel_service
            .selected_hotel()
            .map(|hotel| hotel.name)
            .unwrap_or_else(|| "Unknown".to_string());

        let session_time = form
            .selected_session
            .as_ref()
            .map(|session| session.label())
            .unwrap_or_else(|| "Not selected".to_string());

        let details = BookingDetails {
            title: form.tour.title.clone(),
            date: self.calendar_service.format_date_for_display(form.selected_date),
            number_of_people: form.number_of_people,
            total_price: form.formatted_total_price(),
            session_time,
            hotel_name,
        };

        let confirmation = BookingConfirmation {
            reference: format!("booking::{}", Uuid::new_v4()),
            details,
        };

        info!(
            "Tour booking {}: '{}' on {} for {} ({}), session '{}', hotel '{}', guest {}",
            confirmation.reference,
            confirmation.details.title,
            confirmation.details.date,
            confirmation.details.number_of_people,
            confirmation.details.total_price,
            confirmation.details.session_time,
            confirmation.details.hotel_name,
            form.full_name,
        );

        Ok(SubmitBookingResult { confirmation })
    }

    /// Validate and confirm a transfer/taxi booking request.
    pub fn submit_service_booking(
        &self,
        request: ServiceBookingRequest,
    ) -> Result<SubmitBookingResult> {
        let now = Local::now();
        self.submit_service_booking_at(request, now.date_naive(), now.time())
    }

    pub fn submit_service_booking_at(
        &self,
        request: ServiceBookingRequest,
        today: NaiveDate,
        now: chrono::NaiveTime,
    ) -> Result<SubmitBookingResult> {
        let service = self
            .service_catalog
            .get_service(&request.service_id)?
            .ok_or_else(|| DomainError::not_found("Service", &request.service_id))?;

        let hotel = self.hotel_service.selected_hotel();
        let hotel_name = hotel
            .as_ref()
            .map(|h| h.name.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        let mut form = ServiceBookingForm::new(service, today, now)
            .with_number_of_people(request.number_of_people)
            .with_pickup_time(request.date, request.time, today, now);

        form.full_name = request.full_name;
        form.room_number = request.room_number;
        form.phone_number = request.phone_number;
        form.email = request.email;
        form.passport_number = request.passport_number.unwrap_or_default();
        form.destination = request.destination.unwrap_or_default();
        // Airport rides carry their destination as an airport choice
        if form.destination.trim().is_empty() && !form.is_city_taxi() {
            if let Some(airport) = request.airport {
                form.destination = airport.to_string();
            }
        }
        form.customer_message = request.customer_message.unwrap_or_default();
        form.pickup_location = request.pickup_location.unwrap_or_default();
        for (index, name) in request.guest_names.iter().enumerate() {
            if let Some(slot) = form.guest_names.get_mut(index + 1) {
                *slot = name.clone();
            }
        }
        for (index, passport) in request.passport_numbers.iter().enumerate() {
            if let Some(slot) = form.passport_numbers.get_mut(index + 1) {
                *slot = passport.clone();
            }
        }

        let form = form.with_pickup_from_hotel(&hotel_name);

        form.validate()?;

        let pickup = format!(
            "{} at {}",
            self.calendar_service.format_date_for_display(form.selected_date),
            form.selected_time.format("%H:%M"),
        );

        let details = BookingDetails {
            title: form.service.name.clone(),
            date: self.calendar_service.format_date_for_display(form.selected_date),
            number_of_people: form.number_of_people,
            total_price: form.service.price_display(),
            session_time: pickup,
            hotel_name,
        };

        let confirmation = BookingConfirmation {
            reference: format!("booking::{}", Uuid::new_v4()),
            details,
        };

        info!(
            "Service booking {}: '{}' pickup {} from '{}' for {} ({}), guest {}",
            confirmation.reference,
            confirmation.details.title,
            confirmation.details.session_time,
            form.pickup_location,
            confirmation.details.number_of_people,
            confirmation.details.total_price,
            form.full_name,
        );

        Ok(SubmitBookingResult { confirmation })
    }
}
