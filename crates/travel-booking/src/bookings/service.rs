use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use super::domain::{Booking, BookingOutcome, BookingRequest, BookingStatus, BOOKING_REF_PREFIX};
use super::repository::BookingRepository;
use crate::outcome::OutcomeStatus;
use crate::repository::RepositoryError;
use crate::validation::{is_blank, validate_booking_dates, validate_booking_fields};

/// Business logic for the full booking lifecycle:
/// create → confirm → complete, with cancel as the other terminal state.
///
/// Holds no mutable state; any operation may run concurrently. Every
/// public operation returns a [`BookingOutcome`] value. Validation
/// failures short-circuit before reference generation and persistence, so
/// no partial writes occur.
pub struct BookingService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R> BookingService<R>
where
    R: BookingRepository + ?Sized,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a booking under a fresh `BKG-<uuid>` reference. Collisions
    /// are astronomically unlikely, so no uniqueness check is performed.
    pub fn create_booking(&self, request: BookingRequest) -> BookingOutcome {
        info!(employee_id = %request.employee_id, "processing booking request");

        if let Err(err) = validate_booking_fields(&request) {
            error!(field = err.field, "validation error in booking request: {err}");
            return BookingOutcome::error(OutcomeStatus::ValidationError, None, err.reason);
        }
        if let Err(err) = validate_booking_dates(&request.departure_date, &request.return_date) {
            error!(field = err.field, "validation error in booking request: {err}");
            return BookingOutcome::error(OutcomeStatus::ValidationError, None, err.reason);
        }

        let booking_reference_id = generate_booking_reference();
        let booking = Booking::from_request(booking_reference_id, &request);

        match self.repository.save(booking) {
            Ok(saved) => {
                info!(reference = %saved.booking_reference_id, "booking created successfully");
                BookingOutcome::success(
                    saved.booking_reference_id,
                    format!(
                        "Booking created successfully for employee {}",
                        request.employee_id
                    ),
                )
            }
            Err(err) => self.system_error(
                None,
                "Failed to save booking. Please try again later.",
                &err,
            ),
        }
    }

    pub fn get_booking_by_reference_id(&self, booking_reference_id: &str) -> BookingOutcome {
        info!(reference = %booking_reference_id, "looking up booking");

        if is_blank(booking_reference_id) {
            return BookingOutcome::error(
                OutcomeStatus::ValidationError,
                None,
                "Booking reference ID is required",
            );
        }

        match self.repository.find_by_reference_id(booking_reference_id) {
            Ok(Some(booking)) => {
                info!(
                    reference = %booking_reference_id,
                    status = booking.status.label(),
                    "found booking"
                );
                BookingOutcome::success(booking.booking_reference_id.clone(), booking.summary())
            }
            Ok(None) => BookingOutcome::error(
                OutcomeStatus::NotFound,
                Some(booking_reference_id.to_string()),
                format!("Booking not found: {booking_reference_id}"),
            ),
            Err(err) => self.system_error(
                Some(booking_reference_id.to_string()),
                "Failed to retrieve booking. Please try again later.",
                &err,
            ),
        }
    }

    /// Secondary lookup by employee. A blank id yields a single-element
    /// error list rather than an empty one, keeping the return type
    /// uniform for callers that always expect a list on this path.
    pub fn get_bookings_by_employee_id(&self, employee_id: &str) -> Vec<BookingOutcome> {
        info!(%employee_id, "searching bookings for employee");

        if is_blank(employee_id) {
            return vec![BookingOutcome::error(
                OutcomeStatus::ValidationError,
                None,
                "Employee ID is required",
            )];
        }

        match self.repository.find_by_employee_id(employee_id) {
            Ok(bookings) => bookings
                .iter()
                .map(|booking| {
                    BookingOutcome::success(booking.booking_reference_id.clone(), booking.summary())
                })
                .collect(),
            Err(err) => vec![self.system_error(
                None,
                "Failed to search bookings. Please try again later.",
                &err,
            )],
        }
    }

    /// Soft delete: bookings are retired through the state machine, never
    /// removed.
    pub fn cancel_booking(&self, booking_reference_id: &str) -> BookingOutcome {
        info!(reference = %booking_reference_id, "cancelling booking");
        self.update_booking_status(booking_reference_id, "CANCELLED")
    }

    /// Applies one transition of the booking state machine. The current
    /// record is loaded first so the terminal-state guard can reject any
    /// transition out of CANCELLED or COMPLETED, with no self-transition
    /// exception.
    pub fn update_booking_status(
        &self,
        booking_reference_id: &str,
        new_status: &str,
    ) -> BookingOutcome {
        info!(reference = %booking_reference_id, %new_status, "updating booking status");

        if is_blank(booking_reference_id) {
            return BookingOutcome::error(
                OutcomeStatus::ValidationError,
                None,
                "Booking reference ID is required",
            );
        }
        if is_blank(new_status) {
            return BookingOutcome::error(
                OutcomeStatus::ValidationError,
                Some(booking_reference_id.to_string()),
                "New status is required",
            );
        }

        let Some(status) = BookingStatus::parse(new_status) else {
            return BookingOutcome::error(
                OutcomeStatus::ValidationError,
                Some(booking_reference_id.to_string()),
                format!(
                    "Invalid status. Allowed values: {}",
                    BookingStatus::ALLOWED.join(", ")
                ),
            );
        };

        let current = match self.repository.find_by_reference_id(booking_reference_id) {
            Ok(Some(booking)) => booking,
            Ok(None) => {
                return BookingOutcome::error(
                    OutcomeStatus::NotFound,
                    Some(booking_reference_id.to_string()),
                    format!("Booking not found: {booking_reference_id}"),
                )
            }
            Err(err) => {
                return self.system_error(
                    Some(booking_reference_id.to_string()),
                    "Failed to update booking status. Please try again later.",
                    &err,
                )
            }
        };

        if current.status.is_terminal() {
            return BookingOutcome::error(
                OutcomeStatus::ValidationError,
                Some(booking_reference_id.to_string()),
                format!("Cannot update booking in {} state", current.status.label()),
            );
        }

        match self.repository.update_status(booking_reference_id, status) {
            Ok(Some(updated)) => {
                info!(
                    reference = %booking_reference_id,
                    status = updated.status.label(),
                    "booking status updated"
                );
                BookingOutcome::success(
                    updated.booking_reference_id.clone(),
                    format!("Booking status updated to {}", updated.status.label()),
                )
            }
            Ok(None) => BookingOutcome::error(
                OutcomeStatus::NotFound,
                Some(booking_reference_id.to_string()),
                format!("Booking not found: {booking_reference_id}"),
            ),
            Err(err) => self.system_error(
                Some(booking_reference_id.to_string()),
                "Failed to update booking status. Please try again later.",
                &err,
            ),
        }
    }

    /// Unfiltered enumeration. A full table scan on the persistent
    /// backend, so reserve this for admin and diagnostic paths.
    pub fn get_all_bookings(&self) -> Vec<BookingOutcome> {
        info!("retrieving all bookings");

        match self.repository.find_all() {
            Ok(bookings) => bookings
                .iter()
                .map(|booking| {
                    BookingOutcome::success(booking.booking_reference_id.clone(), booking.summary())
                })
                .collect(),
            Err(err) => vec![self.system_error(
                None,
                "Failed to retrieve bookings. Please try again later.",
                &err,
            )],
        }
    }

    fn system_error(
        &self,
        booking_reference_id: Option<String>,
        message: &str,
        err: &RepositoryError,
    ) -> BookingOutcome {
        error!(reference = ?booking_reference_id, "booking repository failure: {err}");
        BookingOutcome::error(OutcomeStatus::SystemError, booking_reference_id, message)
    }
}

fn generate_booking_reference() -> String {
    format!("{BOOKING_REF_PREFIX}{}", Uuid::new_v4())
}
