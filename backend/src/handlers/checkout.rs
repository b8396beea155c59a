//! Checkout handlers

use axum::{
    extract::{Query, State},
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};
use shared::models::CheckoutRequest;

use crate::error::AppResult;
use crate::AppState;

/// Response carrying the hosted payment page URL
#[derive(Serialize)]
pub struct CheckoutSessionResponse {
    pub url: String,
}

/// Create a checkout session for a package or a custom mix
pub async fn create_checkout_session(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> AppResult<Json<CheckoutSessionResponse>> {
    let session = state.checkout.create_session(request).await?;
    Ok(Json(CheckoutSessionResponse { url: session.url }))
}

/// Query parameters of the email checkout link
#[derive(Deserialize)]
pub struct PackageLinkQuery {
    pub package: Option<String>,
    pub email: Option<String>,
}

/// GET entry point used by links in the confirmation email.
///
/// Link clicks cannot render a JSON error, so every failure falls back to a
/// redirect to the services page.
pub async fn package_checkout_redirect(
    State(state): State<AppState>,
    Query(query): Query<PackageLinkQuery>,
) -> Redirect {
    let fallback = format!(
        "{}/services",
        state.config.site.base_url.trim_end_matches('/')
    );

    let Some(package) = query.package else {
        return Redirect::to(&fallback);
    };

    match state
        .checkout
        .create_package_session(&package, query.email)
        .await
    {
        Ok(session) => Redirect::to(&session.url),
        Err(err) => {
            tracing::error!("Package checkout link failed: {:?}", err);
            Redirect::to(&fallback)
        }
    }
}
