//! Booking intake handler

use axum::{extract::State, Json};
use serde::Serialize;
use shared::models::BookingRequest;

use crate::error::AppResult;
use crate::AppState;

/// Booking submission response
#[derive(Serialize)]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
}

/// Accept a booking inquiry and dispatch both emails
pub async fn submit_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> AppResult<Json<BookingResponse>> {
    state.booking.submit_booking(request).await?;
    Ok(Json(BookingResponse {
        success: true,
        message: "Emails sent successfully".to_string(),
    }))
}
