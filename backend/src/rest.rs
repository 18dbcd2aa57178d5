//! Axum handlers for the concierge HTTP API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::{
    AvailabilityResponse, LoginRequest, LoginResponse, RoleResponse, ServiceBookingRequest,
    ServiceCategory, TourBookingRequest, TourFilter,
};
use tracing::info;

use crate::domain::commands::auth::LoginCommand;
use crate::domain::commands::bookings::{TourAvailabilityQuery, TourCalendarQuery};
use crate::domain::commands::catalog::{
    GetTourQuery, SearchHotelsQuery, SearchServicesQuery, SearchToursQuery, SelectHotelCommand,
};
use crate::domain::DomainError;
use crate::Backend;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub backend: Backend,
}

impl AppState {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }
}

/// Map a domain error to a status code: guest-caused failures become 4xx,
/// everything else 500.
fn error_response(err: anyhow::Error) -> Response {
    match err.downcast_ref::<DomainError>() {
        Some(DomainError::Validation(message)) => {
            (StatusCode::BAD_REQUEST, message.clone()).into_response()
        }
        Some(DomainError::InvalidCredentials) => {
            (StatusCode::UNAUTHORIZED, err.to_string()).into_response()
        }
        Some(DomainError::NotFound { .. }) => {
            (StatusCode::NOT_FOUND, err.to_string()).into_response()
        }
        None => {
            tracing::error!("Internal error: {:?}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
        }
    }
}

/// Query parameters for the tour list endpoint
#[derive(Deserialize, Debug)]
pub struct TourListQuery {
    pub q: Option<String>,
    pub filter: Option<TourFilter>,
}

/// Axum handler function for GET /api/tours
pub async fn list_tours(
    State(state): State<AppState>,
    Query(query): Query<TourListQuery>,
) -> impl IntoResponse {
    info!("GET /api/tours - query: {:?}", query);

    let request = SearchToursQuery {
        query: query.q,
        filter: query.filter.unwrap_or(TourFilter::All),
    };

    match state.backend.tour_service.search_tours(request) {
        Ok(result) => (StatusCode::OK, Json(result.tours)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Axum handler function for GET /api/tours/:id
pub async fn get_tour(
    State(state): State<AppState>,
    Path(tour_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/tours/{}", tour_id);

    match state.backend.tour_service.get_tour(GetTourQuery { tour_id }) {
        Ok(result) => match result.tour {
            Some(tour) => (StatusCode::OK, Json(tour)).into_response(),
            None => (StatusCode::NOT_FOUND, "Tour not found").into_response(),
        },
        Err(e) => error_response(e),
    }
}

/// Query parameters for the availability endpoint
#[derive(Deserialize, Debug)]
pub struct AvailabilityQueryParams {
    pub from: Option<NaiveDate>,
}

/// Axum handler function for GET /api/tours/:id/availability
pub async fn tour_availability(
    State(state): State<AppState>,
    Path(tour_id): Path<String>,
    Query(params): Query<AvailabilityQueryParams>,
) -> impl IntoResponse {
    info!("GET /api/tours/{}/availability - {:?}", tour_id, params);

    let query = TourAvailabilityQuery {
        tour_id: tour_id.clone(),
        from: params.from,
    };

    match state.backend.booking_service.tour_availability(query) {
        Ok(result) => (
            StatusCode::OK,
            Json(AvailabilityResponse {
                tour_id,
                dates: result.dates,
                first_available: result.first_available,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// Query parameters for the calendar endpoint
#[derive(Deserialize, Debug)]
pub struct CalendarQueryParams {
    pub month: u32,
    pub year: u32,
}

/// Axum handler function for GET /api/tours/:id/calendar
pub async fn tour_calendar(
    State(state): State<AppState>,
    Path(tour_id): Path<String>,
    Query(params): Query<CalendarQueryParams>,
) -> impl IntoResponse {
    info!("GET /api/tours/{}/calendar - {:?}", tour_id, params);

    let query = TourCalendarQuery {
        tour_id,
        month: params.month,
        year: params.year,
    };

    match state.backend.booking_service.tour_calendar(query) {
        Ok(result) => (StatusCode::OK, Json(result.calendar)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Query parameters for the service list endpoint
#[derive(Deserialize, Debug)]
pub struct ServiceListQuery {
    pub q: Option<String>,
    pub category: Option<ServiceCategory>,
}

/// Axum handler function for GET /api/services
pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<ServiceListQuery>,
) -> impl IntoResponse {
    info!("GET /api/services - query: {:?}", query);

    let request = SearchServicesQuery {
        query: query.q,
        category: query.category,
    };

    match state.backend.service_catalog.search_services(request) {
        Ok(result) => (StatusCode::OK, Json(result.services)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Query parameters for the hotel list endpoint
#[derive(Deserialize, Debug)]
pub struct HotelListQuery {
    pub q: Option<String>,
}

/// Axum handler function for GET /api/hotels
pub async fn list_hotels(
    State(state): State<AppState>,
    Query(query): Query<HotelListQuery>,
) -> impl IntoResponse {
    info!("GET /api/hotels - query: {:?}", query);

    match state
        .backend
        .hotel_service
        .search_hotels(SearchHotelsQuery { query: query.q })
    {
        Ok(result) => (StatusCode::OK, Json(result.hotels)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Axum handler function for POST /api/hotels/:id/select
pub async fn select_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<String>,
) -> impl IntoResponse {
    info!("POST /api/hotels/{}/select", hotel_id);

    match state
        .backend
        .hotel_service
        .select_hotel(SelectHotelCommand { hotel_id })
    {
        Ok(result) => (StatusCode::OK, Json(result.hotel)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Axum handler function for POST /api/auth/guest
pub async fn login_guest(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/auth/guest");

    match state.backend.auth_service.login_as_guest() {
        Ok(result) => (StatusCode::OK, Json(LoginResponse { role: result.role })).into_response(),
        Err(e) => error_response(e),
    }
}

/// Axum handler function for POST /api/auth/login
pub async fn login_manager(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    info!("POST /api/auth/login - email: {}", request.email);

    let command = LoginCommand {
        email: request.email,
        password: request.password,
    };

    match state.backend.auth_service.login_as_manager(command) {
        Ok(result) => (StatusCode::OK, Json(LoginResponse { role: result.role })).into_response(),
        Err(e) => error_response(e),
    }
}

/// Axum handler function for POST /api/auth/logout
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/auth/logout");

    match state.backend.auth_service.logout() {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

/// Axum handler function for GET /api/auth/role
pub async fn get_role(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/auth/role");

    match state.backend.auth_service.load_saved_role() {
        Ok(result) => (StatusCode::OK, Json(RoleResponse { role: result.role })).into_response(),
        Err(e) => error_response(e),
    }
}

/// Axum handler function for POST /api/bookings/tour
pub async fn book_tour(
    State(state): State<AppState>,
    Json(request): Json<TourBookingRequest>,
) -> impl IntoResponse {
    info!("POST /api/bookings/tour - tour: {}", request.tour_id);

    match state.backend.booking_service.submit_tour_booking(request) {
        Ok(result) => (StatusCode::CREATED, Json(result.confirmation)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Axum handler function for POST /api/bookings/service
pub async fn book_service(
    State(state): State<AppState>,
    Json(request): Json<ServiceBookingRequest>,
) -> impl IntoResponse {
    info!("POST /api/bookings/service - service: {}", request.service_id);

    match state.backend.booking_service.submit_service_booking(request) {
        Ok(result) => (StatusCode::CREATED, Json(result.confirmation)).into_response(),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::tempdir;

    fn setup_test_state() -> (tempfile::TempDir, AppState) {
        let temp_dir = tempdir().unwrap();
        let backend = Backend::new_with_data_dir(temp_dir.path()).unwrap();
        (temp_dir, AppState::new(backend))
    }

    #[tokio::test]
    async fn test_list_tours_handler() {
        let (_dir, state) = setup_test_state();

        let response = list_tours(
            State(state),
            Query(TourListQuery {
                q: None,
                filter: None,
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_tour_handler() {
        let (_dir, state) = setup_test_state();

        let found = get_tour(State(state.clone()), Path("turkish-hamam".to_string()))
            .await
            .into_response();
        assert_eq!(found.status(), StatusCode::OK);

        let missing = get_tour(State(state), Path("no-such-tour".to_string()))
            .await
            .into_response();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tour_availability_handler() {
        let (_dir, state) = setup_test_state();

        let response = tour_availability(
            State(state),
            Path("turkish-hamam".to_string()),
            Query(AvailabilityQueryParams {
                from: NaiveDate::from_ymd_opt(2024, 1, 1),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_tour_calendar_handler_rejects_invalid_month() {
        let (_dir, state) = setup_test_state();

        let response = tour_calendar(
            State(state),
            Path("turkish-hamam".to_string()),
            Query(CalendarQueryParams {
                month: 13,
                year: 2024,
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_handlers() {
        let (_dir, state) = setup_test_state();

        let guest = login_guest(State(state.clone())).await.into_response();
        assert_eq!(guest.status(), StatusCode::OK);

        let ok = login_manager(
            State(state.clone()),
            Json(LoginRequest {
                email: "admin@hotel.com".to_string(),
                password: "admin123".to_string(),
            }),
        )
        .await
        .into_response();
        assert_eq!(ok.status(), StatusCode::OK);

        let bad = login_manager(
            State(state.clone()),
            Json(LoginRequest {
                email: "admin@hotel.com".to_string(),
                password: "wrong".to_string(),
            }),
        )
        .await
        .into_response();
        assert_eq!(bad.status(), StatusCode::UNAUTHORIZED);

        let out = logout(State(state.clone())).await.into_response();
        assert_eq!(out.status(), StatusCode::NO_CONTENT);

        let role = get_role(State(state)).await.into_response();
        assert_eq!(role.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_select_hotel_handler() {
        let (_dir, state) = setup_test_state();

        let ok = select_hotel(State(state.clone()), Path("dream-hotel".to_string()))
            .await
            .into_response();
        assert_eq!(ok.status(), StatusCode::OK);

        let missing = select_hotel(State(state), Path("no-such-hotel".to_string()))
            .await
            .into_response();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_book_tour_handler() {
        let (_dir, state) = setup_test_state();

        let request = TourBookingRequest {
            tour_id: "turkish-hamam".to_string(),
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: "+90 555 000 0000".to_string(),
            number_of_people: 1,
            guest_names: vec![],
            room_numbers: vec!["101".to_string()],
            date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            session_id: Some("hamam-morning".to_string()),
        };

        let created = book_tour(State(state.clone()), Json(request.clone()))
            .await
            .into_response();
        assert_eq!(created.status(), StatusCode::CREATED);

        let invalid = book_tour(
            State(state),
            Json(TourBookingRequest {
                full_name: "".to_string(),
                ..request
            }),
        )
        .await
        .into_response();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_book_service_handler() {
        let (_dir, state) = setup_test_state();

        let request = ServiceBookingRequest {
            service_id: "vip-airport-transfer".to_string(),
            full_name: "Jane Doe".to_string(),
            room_number: "101".to_string(),
            phone_number: "+90 555 000 0000".to_string(),
            email: "jane@example.com".to_string(),
            number_of_people: 1,
            guest_names: vec![],
            passport_number: Some("U1234567".to_string()),
            passport_numbers: vec![],
            pickup_location: Some("Lobby".to_string()),
            destination: None,
            airport: Some(shared::Airport::IstanbulAirport),
            date: NaiveDate::from_ymd_opt(2030, 1, 2).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            customer_message: None,
        };

        let created = book_service(State(state), Json(request))
            .await
            .into_response();
        assert_eq!(created.status(), StatusCode::CREATED);
    }
}
