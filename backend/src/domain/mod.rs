//! Domain services for the concierge backend.

pub mod auth_service;
pub mod availability;
pub mod booking_form;
pub mod booking_service;
pub mod calendar;
pub mod catalog;
pub mod commands;
pub mod error;
pub mod hotel_service;
pub mod service_catalog;
pub mod tour_service;

pub use auth_service::AuthService;
pub use booking_service::BookingService;
pub use calendar::CalendarService;
pub use error::DomainError;
pub use hotel_service::HotelService;
pub use service_catalog::ServiceCatalog;
pub use tour_service::TourService;
