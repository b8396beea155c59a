//! Validation rules shared between the backend and the browser

use crate::models::BookingRequest;

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate a booking submission: `name`, `email` and `eventType` are
/// required, everything else is optional. A guest count of zero is rejected.
pub fn validate_booking(request: &BookingRequest) -> Result<(), &'static str> {
    if request.name.trim().is_empty() {
        return Err("Missing required field: name");
    }
    if request.email.trim().is_empty() {
        return Err("Missing required field: email");
    }
    validate_email(request.email.trim())?;
    if request.event_type.trim().is_empty() {
        return Err("Missing required field: eventType");
    }
    if request.guest_count == Some(0) {
        return Err("Guest count must be greater than zero");
    }
    Ok(())
}
