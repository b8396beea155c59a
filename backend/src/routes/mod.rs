//! API route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::AppState;

/// All routes mounted under `/api/v1`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/checkout", checkout_routes())
        .nest("/bookings", booking_routes())
        .nest("/catalog", catalog_routes())
        .route("/health", get(handlers::health::health_check))
}

fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::checkout::create_checkout_session))
        .route("/package", get(handlers::checkout::package_checkout_redirect))
}

fn booking_routes() -> Router<AppState> {
    Router::new().route("/", post(handlers::booking::submit_booking))
}

fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/ingredients", get(handlers::catalog::list_ingredients))
        .route("/packages", get(handlers::catalog::list_packages))
}
