use serde::{Deserialize, Serialize};

use crate::outcome::OutcomeStatus;

/// Reference prefix for system-generated booking identifiers.
pub const BOOKING_REF_PREFIX: &str = "BKG-";

/// Lifecycle status of a booking.
///
/// ```text
///         create
///           |
///       [PENDING] --update--> [CONFIRMED] --update--> [COMPLETED] (terminal)
///           |                      |
///           +--------update-------------------------> [CANCELLED] (terminal)
/// ```
///
/// Any non-terminal status may move to any of the four values, including
/// itself; the two terminal statuses accept no further transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Wire values accepted by status updates, in the order quoted in
    /// validation messages.
    pub const ALLOWED: [&'static str; 4] = ["PENDING", "CONFIRMED", "CANCELLED", "COMPLETED"];

    pub const fn label(self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Completed => "COMPLETED",
        }
    }

    /// Case-insensitive parse of a candidate wire value.
    pub fn parse(candidate: &str) -> Option<Self> {
        match candidate.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Some(BookingStatus::Pending),
            "CONFIRMED" => Some(BookingStatus::Confirmed),
            "CANCELLED" => Some(BookingStatus::Cancelled),
            "COMPLETED" => Some(BookingStatus::Completed),
            _ => None,
        }
    }

    /// CANCELLED and COMPLETED retire a booking for good.
    pub const fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Completed)
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

/// Booking record as persisted. Dates stay strings in the fixed
/// `yyyy-MM-dd HH:mm:ss` wire format; field names serialize in camelCase
/// as a compatibility surface. Timestamps are stamped by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_reference_id: String,
    pub employee_id: String,
    pub resource_type: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: String,
    pub traveler_count: i32,
    pub cost_center_ref: String,
    pub trip_purpose: String,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Booking {
    /// Builds a fresh, not-yet-persisted record from a validated request
    /// and a generated reference. Status and timestamps are left for the
    /// repository to stamp.
    pub fn from_request(booking_reference_id: String, request: &BookingRequest) -> Self {
        Self {
            booking_reference_id,
            employee_id: request.employee_id.clone(),
            resource_type: request.resource_type.clone(),
            destination: request.destination.clone(),
            departure_date: request.departure_date.clone(),
            return_date: request.return_date.clone(),
            traveler_count: request.traveler_count.unwrap_or_default(),
            cost_center_ref: request.cost_center_ref.clone(),
            trip_purpose: request.trip_purpose.clone(),
            status: BookingStatus::default(),
            created_at: None,
            updated_at: None,
        }
    }

    /// One-line summary used by lookup outcomes:
    /// `{resourceType} to {destination} [{status}]`.
    pub fn summary(&self) -> String {
        format!(
            "{} to {} [{}]",
            self.resource_type,
            self.destination,
            self.status.label()
        )
    }
}

/// Creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub resource_type: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub departure_date: String,
    #[serde(default)]
    pub return_date: String,
    #[serde(default)]
    pub traveler_count: Option<i32>,
    #[serde(default)]
    pub cost_center_ref: String,
    #[serde(default)]
    pub trip_purpose: String,
}

/// Uniform service outcome for booking operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOutcome {
    pub status: OutcomeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_reference_id: Option<String>,
    pub message: String,
}

impl BookingOutcome {
    pub fn success(booking_reference_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Success,
            booking_reference_id: Some(booking_reference_id.into()),
            message: message.into(),
        }
    }

    pub fn error(
        status: OutcomeStatus,
        booking_reference_id: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            booking_reference_id,
            message: message.into(),
        }
    }
}
