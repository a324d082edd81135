//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::hello))
        .merge(destination_routes())
        .merge(expense_routes())
        .merge(itinerary_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Destination routes
fn destination_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/destinations",
            get(handlers::destination::list_destinations)
                .post(handlers::destination::create_destination),
        )
        .route(
            "/destinations/{destination_id}",
            get(handlers::destination::get_destination)
                .put(handlers::destination::update_destination)
                .delete(handlers::destination::delete_destination),
        )
}

/// Expense routes, scoped by destination
fn expense_routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(handlers::expense::list_expenses))
        .route(
            "/expenses/{destination_id}",
            get(handlers::expense::list_destination_expenses)
                .post(handlers::expense::add_expense),
        )
        .route(
            "/expenses/{destination_id}/{expense_id}",
            get(handlers::expense::get_expense)
                .put(handlers::expense::update_expense)
                .delete(handlers::expense::delete_expense),
        )
}

/// Itinerary routes, scoped by destination
fn itinerary_routes() -> Router<AppState> {
    Router::new()
        .route("/itineraries", get(handlers::itinerary::list_itineraries))
        .route(
            "/itineraries/{destination_id}",
            get(handlers::itinerary::list_destination_itinerary)
                .post(handlers::itinerary::add_activity),
        )
        .route(
            "/itineraries/{destination_id}/{itinerary_id}",
            get(handlers::itinerary::get_activity)
                .put(handlers::itinerary::update_activity)
                .delete(handlers::itinerary::delete_activity),
        )
}
