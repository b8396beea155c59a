//! Velvet Pour backend server
//!
//! Serves the booking and checkout API behind the marketing site: static
//! catalogs, Stripe checkout session creation and booking-inquiry email
//! dispatch.

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use external::mailer::SmtpMailer;
use external::payments::StripeClient;
use services::booking::BookingService;
use services::checkout::CheckoutService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub checkout: Arc<CheckoutService>,
    pub booking: Arc<BookingService<SmtpMailer>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vp_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::load()?);
    tracing::info!("Starting Velvet Pour backend ({})", config.environment);

    let stripe = StripeClient::new(config.stripe.secret_key.clone());
    let mailer = SmtpMailer::new(&config.smtp)?;

    let state = AppState {
        checkout: Arc::new(CheckoutService::new(stripe, config.clone())),
        booking: Arc::new(BookingService::new(mailer, config.clone())),
        config: config.clone(),
    };

    let app = create_app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router
fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Velvet Pour API" }))
        .nest("/api/v1", routes::api_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
