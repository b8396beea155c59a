//! Booking request wire type and date presentation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Event types offered on the contact form
pub const EVENT_TYPES: &[&str] = &[
    "Wedding",
    "Corporate Event",
    "Birthday Party",
    "Private Party",
    "Custom Order",
    "Other",
];

/// Placeholder shown when no usable event date was submitted
pub const DATE_NOT_SPECIFIED: &str = "Not specified";

/// A prospective customer's event-catering inquiry.
///
/// Transient: received, validated, turned into two emails, discarded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub event_type: String,
    /// `YYYY-MM-DD` from the date picker; may be empty
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub guest_count: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
    /// Share reference produced by the mix builder, if the visitor saved one
    #[serde(default)]
    pub saved_mix: Option<String>,
}

impl BookingRequest {
    /// Optional field normalized so blank submissions count as absent
    pub fn normalized(field: &Option<String>) -> Option<&str> {
        field
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// Format a `YYYY-MM-DD` event date in the en-GB long form,
/// e.g. `Saturday, 20 June 2026`. Missing or unparseable dates fall back to
/// the fixed placeholder.
pub fn format_event_date(event_date: Option<&str>) -> String {
    event_date
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
        .map(|date| date.format("%A, %-d %B %Y").to_string())
        .unwrap_or_else(|| DATE_NOT_SPECIFIED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_long_uk_date() {
        assert_eq!(format_event_date(Some("2026-06-20")), "Saturday, 20 June 2026");
    }

    #[test]
    fn missing_or_invalid_date_uses_placeholder() {
        assert_eq!(format_event_date(None), DATE_NOT_SPECIFIED);
        assert_eq!(format_event_date(Some("")), DATE_NOT_SPECIFIED);
        assert_eq!(format_event_date(Some("next friday")), DATE_NOT_SPECIFIED);
    }

    #[test]
    fn blank_optionals_normalize_to_none() {
        assert_eq!(BookingRequest::normalized(&Some("  ".to_string())), None);
        assert_eq!(
            BookingRequest::normalized(&Some(" 0770 000 000 ".to_string())),
            Some("0770 000 000")
        );
        assert_eq!(BookingRequest::normalized(&None), None);
    }
}
