use shared::{Hotel, Service, ServiceCategory, Tour, TourFilter};

/// Tour list query: free-text search plus category filter.
#[derive(Debug, Clone)]
pub struct SearchToursQuery {
    pub query: Option<String>,
    pub filter: TourFilter,
}

impl Default for SearchToursQuery {
    fn default() -> Self {
        Self {
            query: None,
            filter: TourFilter::All,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchToursResult {
    pub tours: Vec<Tour>,
}

#[derive(Debug, Clone)]
pub struct GetTourQuery {
    pub tour_id: String,
}

#[derive(Debug, Clone)]
pub struct GetTourResult {
    pub tour: Option<Tour>,
}

/// Service list query: free-text search plus optional category filter
/// (None lists every category).
#[derive(Debug, Clone, Default)]
pub struct SearchServicesQuery {
    pub query: Option<String>,
    pub category: Option<ServiceCategory>,
}

#[derive(Debug, Clone)]
pub struct SearchServicesResult {
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, Default)]
pub struct SearchHotelsQuery {
    pub query: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchHotelsResult {
    pub hotels: Vec<Hotel>,
}

#[derive(Debug, Clone)]
pub struct SelectHotelCommand {
    pub hotel_id: String,
}

#[derive(Debug, Clone)]
pub struct SelectHotelResult {
    pub hotel: Hotel,
}
