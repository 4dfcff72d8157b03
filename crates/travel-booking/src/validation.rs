//! Pure request validation.
//!
//! Every check returns a tagged result instead of raising: the services
//! pattern-match on `Err(ValidationError)` and fold it into a
//! VALIDATION_ERROR outcome. No function here touches a repository or
//! holds state.

use std::fmt;
use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::bookings::domain::BookingRequest;
use crate::employees::domain::EmployeeRequest;

/// Fixed wire format for booking departure/return date-times.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A failed check, identifying the offending field and a caller-facing
/// reason. The reason alone is the compatibility surface; the field name
/// feeds structured logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for ValidationError {}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("email pattern is a valid regex")
    })
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks presence of all required employee fields and the email shape.
pub fn validate_employee_fields(request: &EmployeeRequest) -> Result<(), ValidationError> {
    if is_blank(&request.employee_id) {
        return Err(ValidationError::new("employeeId", "Employee ID is required"));
    }
    if is_blank(&request.name) {
        return Err(ValidationError::new("name", "Employee name is required"));
    }
    if is_blank(&request.email) {
        return Err(ValidationError::new("email", "Email is required"));
    }
    if !email_pattern().is_match(&request.email) {
        return Err(ValidationError::new("email", "Invalid email format"));
    }
    if is_blank(&request.department) {
        return Err(ValidationError::new("department", "Department is required"));
    }
    if is_blank(&request.cost_center_ref) {
        return Err(ValidationError::new(
            "costCenterRef",
            "Cost center reference is required",
        ));
    }
    Ok(())
}

/// Checks presence of all required booking fields and the traveler count.
pub fn validate_booking_fields(request: &BookingRequest) -> Result<(), ValidationError> {
    if is_blank(&request.employee_id) {
        return Err(ValidationError::new("employeeId", "Employee ID is required"));
    }
    if is_blank(&request.resource_type) {
        return Err(ValidationError::new(
            "resourceType",
            "Resource type is required",
        ));
    }
    if is_blank(&request.destination) {
        return Err(ValidationError::new(
            "destination",
            "Destination is required",
        ));
    }
    if is_blank(&request.departure_date) {
        return Err(ValidationError::new(
            "departureDate",
            "Departure date is required",
        ));
    }
    if is_blank(&request.return_date) {
        return Err(ValidationError::new(
            "returnDate",
            "Return date is required",
        ));
    }
    match request.traveler_count {
        Some(count) if count >= 1 => {}
        _ => {
            return Err(ValidationError::new(
                "travelerCount",
                "Traveler count must be at least 1",
            ))
        }
    }
    if is_blank(&request.cost_center_ref) {
        return Err(ValidationError::new(
            "costCenterRef",
            "Cost center reference is required",
        ));
    }
    if is_blank(&request.trip_purpose) {
        return Err(ValidationError::new(
            "tripPurpose",
            "Trip purpose is required",
        ));
    }
    Ok(())
}

/// Parses both dates with [`DATE_TIME_FORMAT`] and requires departure to be
/// strictly before return. Equality is rejected with its own message so
/// callers can tell the two logical failures apart.
pub fn validate_booking_dates(
    departure_date: &str,
    return_date: &str,
) -> Result<(), ValidationError> {
    let departure = NaiveDateTime::parse_from_str(departure_date, DATE_TIME_FORMAT);
    let ret = NaiveDateTime::parse_from_str(return_date, DATE_TIME_FORMAT);

    let (departure, ret) = match (departure, ret) {
        (Ok(departure), Ok(ret)) => (departure, ret),
        _ => {
            return Err(ValidationError::new(
                "departureDate",
                "Invalid date format. Expected 'yyyy-MM-dd HH:mm:ss'",
            ))
        }
    };

    if departure > ret {
        return Err(ValidationError::new(
            "departureDate",
            "Departure date must be before return date",
        ));
    }
    if departure == ret {
        return Err(ValidationError::new(
            "departureDate",
            "Departure and return dates cannot be the same",
        ));
    }
    Ok(())
}

/// Case-insensitive membership check against an allowed status set, for
/// callers that only need validity and not the parsed enum value. The
/// status enums' `parse` methods apply the same normalization.
pub fn is_valid_status_value(candidate: &str, allowed: &[&str]) -> bool {
    let normalized = candidate.trim().to_ascii_uppercase();
    allowed.iter().any(|status| *status == normalized)
}
