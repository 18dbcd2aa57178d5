use std::net::SocketAddr;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, Level};

use concierge_backend::rest::{self, AppState};
use concierge_backend::Backend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Setting up concierge backend");
    let backend = Backend::new()?;
    let state = AppState::new(backend);

    // CORS setup to allow the guest-facing app to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/tours", get(rest::list_tours))
        .route("/tours/:id", get(rest::get_tour))
        .route("/tours/:id/availability", get(rest::tour_availability))
        .route("/tours/:id/calendar", get(rest::tour_calendar))
        .route("/services", get(rest::list_services))
        .route("/hotels", get(rest::list_hotels))
        .route("/hotels/:id/select", post(rest::select_hotel))
        .route("/auth/guest", post(rest::login_guest))
        .route("/auth/login", post(rest::login_manager))
        .route("/auth/logout", post(rest::logout))
        .route("/auth/role", get(rest::get_role))
        .route("/bookings/tour", post(rest::book_tour))
        .route("/bookings/service", post(rest::book_service));

    let app = Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
