// Pure validation of a submitted event payload.
//
// Purpose
// - Check the payload against the form rules and collect every failing
//   field with its message, so the API can answer with the full list.
//
// Responsibilities
// - Never perform input or output; the caller supplies the current time.

use chrono::DateTime;
use serde::Serialize;

use crate::modules::events::core::record::EventPayload;

const MAX_EVENT_NAME_LENGTH: usize = 100;
const MAX_LOCATION_LENGTH: usize = 200;
const MAX_EVENT_DESCRIPTION_LENGTH: usize = 1000;
const MIN_PRICE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate `payload` against the form rules. `now_ms` is the current
/// unix-millisecond time used for the future-date check.
pub fn validate_event(payload: &EventPayload, now_ms: i64) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if payload.name.is_empty() {
        errors.push(FieldError::new("name", "Event name is required"));
    } else if payload.name.chars().count() > MAX_EVENT_NAME_LENGTH {
        errors.push(FieldError::new(
            "name",
            format!("Event name must be less than {MAX_EVENT_NAME_LENGTH} characters"),
        ));
    }

    if !payload.phone.is_empty() && !is_valid_phone(&payload.phone) {
        errors.push(FieldError::new("phone", "Please enter a valid phone number"));
    }

    if payload.date_time.is_empty() {
        errors.push(FieldError::new("date_time", "Date and time are required"));
    } else {
        match DateTime::parse_from_rfc3339(&payload.date_time) {
            Ok(date) if date.timestamp_millis() > now_ms => {}
            _ => errors.push(FieldError::new(
                "date_time",
                "Event date must be a valid date in the future",
            )),
        }
    }

    if payload.location.is_empty() {
        errors.push(FieldError::new("location", "Location is required"));
    } else if payload.location.chars().count() > MAX_LOCATION_LENGTH {
        errors.push(FieldError::new(
            "location",
            format!("Location must be less than {MAX_LOCATION_LENGTH} characters"),
        ));
    }

    if !payload.cost_per_person.is_empty() {
        match parse_price(&payload.cost_per_person) {
            Some(price) if price >= MIN_PRICE => {}
            Some(_) => errors.push(FieldError::new(
                "cost_per_person",
                format!("Price must be at least ${MIN_PRICE}"),
            )),
            None => errors.push(FieldError::new("cost_per_person", "Please enter a valid price")),
        }
    }

    if payload.description.chars().count() > MAX_EVENT_DESCRIPTION_LENGTH {
        errors.push(FieldError::new(
            "description",
            format!("Description must be less than {MAX_EVENT_DESCRIPTION_LENGTH} characters"),
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

// E.164 shape: optional '+', leading digit 1-9, 2 to 15 digits total.
fn is_valid_phone(raw: &str) -> bool {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    let mut chars = digits.chars();
    match chars.next() {
        Some(c) if ('1'..='9').contains(&c) => {}
        _ => return false,
    }
    let rest: Vec<char> = chars.collect();
    (1..=14).contains(&rest.len()) && rest.iter().all(char::is_ascii_digit)
}

// Optional '$', then digits with at most two fraction digits.
fn parse_price(raw: &str) -> Option<f64> {
    let digits = raw.strip_prefix('$').unwrap_or(raw);
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };
    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if let Some(fraction) = fraction {
        if fraction.is_empty() || fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }
    }
    digits.parse().ok()
}
