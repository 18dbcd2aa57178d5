//! # Concierge Backend
//!
//! Domain services and storage for the hotel concierge product: guests and
//! managers authenticate, browse hotel-provided tours and transfer/taxi
//! services, and submit booking requests that are confirmed manually at the
//! front desk.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub mod domain;
pub mod rest;
pub mod storage;

pub use storage::yaml::YamlConnection;

/// Main backend struct that orchestrates all services.
#[derive(Clone)]
pub struct Backend {
    pub auth_service: domain::AuthService,
    pub tour_service: domain::TourService,
    pub service_catalog: domain::ServiceCatalog,
    pub hotel_service: domain::HotelService,
    pub calendar_service: domain::CalendarService,
    pub booking_service: domain::BookingService,
}

impl Backend {
    /// Create a backend over the default data directory.
    pub fn new() -> Result<Self> {
        let connection = Arc::new(YamlConnection::new_default()?);
        Ok(Self::with_connection(connection))
    }

    /// Create a backend rooted at an explicit data directory.
    pub fn new_with_data_dir<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let connection = Arc::new(YamlConnection::new(data_dir)?);
        Ok(Self::with_connection(connection))
    }

    fn with_connection(connection: Arc<YamlConnection>) -> Self {
        let auth_service = domain::AuthService::new(connection);
        let tour_service = domain::TourService::new();
        let service_catalog = domain::ServiceCatalog::new();
        let hotel_service = domain::HotelService::new();
        let calendar_service = domain::CalendarService::new();
        let booking_service = domain::BookingService::new(
            tour_service.clone(),
            service_catalog.clone(),
            hotel_service.clone(),
            calendar_service.clone(),
        );

        Backend {
            auth_service,
            tour_service,
            service_catalog,
            hotel_service,
            calendar_service,
            booking_service,
        }
    }
}
