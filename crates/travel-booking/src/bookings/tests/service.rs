use std::sync::Arc;

use regex::Regex;

use super::common::*;
use crate::bookings::domain::BOOKING_REF_PREFIX;
use crate::bookings::BookingService;
use crate::outcome::OutcomeStatus;

#[test]
fn create_booking_generates_a_prefixed_reference() {
    let (service, _) = build_service();

    let outcome = service.create_booking(booking_request());

    assert_eq!(outcome.status, OutcomeStatus::Success);
    assert_eq!(
        outcome.message,
        "Booking created successfully for employee EMP9876"
    );
    let reference = outcome.booking_reference_id.expect("reference assigned");
    let pattern = Regex::new(r"^BKG-[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("valid pattern");
    assert!(pattern.is_match(&reference), "got {reference}");
}

#[test]
fn identical_requests_get_distinct_references() {
    let (service, repository) = build_service();

    let first = service.create_booking(booking_request());
    let second = service.create_booking(booking_request());

    assert_ne!(first.booking_reference_id, second.booking_reference_id);
    assert_eq!(
        crate::bookings::BookingRepository::count_by_employee_id(&*repository, "EMP9876")
            .expect("counts"),
        2
    );
}

#[test]
fn create_booking_rejects_missing_fields_before_persisting() {
    let (service, repository) = build_service();

    let mut request = booking_request();
    request.employee_id = "   ".to_string();
    let outcome = service.create_booking(request);

    assert_eq!(outcome.status, OutcomeStatus::ValidationError);
    assert_eq!(outcome.message, "Employee ID is required");
    assert!(outcome.booking_reference_id.is_none());
    assert!(crate::bookings::BookingRepository::find_all(&*repository)
        .expect("scan")
        .is_empty());
}

#[test]
fn create_booking_rejects_zero_travelers() {
    let (service, _) = build_service();

    let mut request = booking_request();
    request.traveler_count = Some(0);
    let outcome = service.create_booking(request);

    assert_eq!(outcome.status, OutcomeStatus::ValidationError);
    assert_eq!(outcome.message, "Traveler count must be at least 1");
}

#[test]
fn create_booking_rejects_departure_after_return() {
    let (service, _) = build_service();

    let mut request = booking_request();
    request.departure_date = "2024-11-09 08:00:00".to_string();
    let outcome = service.create_booking(request);

    assert_eq!(outcome.status, OutcomeStatus::ValidationError);
    assert_eq!(outcome.message, "Departure date must be before return date");
}

#[test]
fn create_booking_rejects_equal_departure_and_return() {
    let (service, _) = build_service();

    let mut request = booking_request();
    request.return_date = request.departure_date.clone();
    let outcome = service.create_booking(request);

    assert_eq!(outcome.status, OutcomeStatus::ValidationError);
    assert_eq!(
        outcome.message,
        "Departure and return dates cannot be the same"
    );
}

#[test]
fn create_booking_rejects_malformed_dates() {
    let (service, _) = build_service();

    let mut request = booking_request();
    request.departure_date = "2024-11-05T08:00:00Z".to_string();
    let outcome = service.create_booking(request);

    assert_eq!(outcome.status, OutcomeStatus::ValidationError);
    assert_eq!(
        outcome.message,
        "Invalid date format. Expected 'yyyy-MM-dd HH:mm:ss'"
    );
}

#[test]
fn lookup_returns_summary_for_existing_booking() {
    let (service, _) = build_service();
    let created = service.create_booking(booking_request());
    let reference = created.booking_reference_id.expect("reference assigned");

    let outcome = service.get_booking_by_reference_id(&reference);

    assert_eq!(outcome.status, OutcomeStatus::Success);
    assert_eq!(outcome.message, "Flight to NYC [PENDING]");
    assert_eq!(outcome.booking_reference_id.as_deref(), Some(reference.as_str()));
}

#[test]
fn lookup_is_read_only() {
    let (service, _) = build_service();
    let created = service.create_booking(booking_request());
    let reference = created.booking_reference_id.expect("reference assigned");

    let first = service.get_booking_by_reference_id(&reference);
    let second = service.get_booking_by_reference_id(&reference);

    assert_eq!(first, second);
}

#[test]
fn lookup_of_unknown_reference_is_not_found() {
    let (service, _) = build_service();

    let outcome = service.get_booking_by_reference_id("BKG-missing");

    assert_eq!(outcome.status, OutcomeStatus::NotFound);
    assert_eq!(outcome.message, "Booking not found: BKG-missing");
    assert_eq!(outcome.booking_reference_id.as_deref(), Some("BKG-missing"));
}

#[test]
fn lookup_of_blank_reference_is_a_validation_error() {
    let (service, _) = build_service();

    let outcome = service.get_booking_by_reference_id("  ");

    assert_eq!(outcome.status, OutcomeStatus::ValidationError);
    assert_eq!(outcome.message, "Booking reference ID is required");
}

#[test]
fn employee_search_with_blank_id_yields_one_error_entry() {
    let (service, _) = build_service();

    let outcomes = service.get_bookings_by_employee_id("");

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].status, OutcomeStatus::ValidationError);
    assert_eq!(outcomes[0].message, "Employee ID is required");
}

#[test]
fn employee_search_returns_only_matching_bookings() {
    let (service, _) = build_service();
    service.create_booking(booking_request());
    let mut other = booking_request();
    other.employee_id = "EMP0001".to_string();
    service.create_booking(other);

    let outcomes = service.get_bookings_by_employee_id("EMP9876");

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].status, OutcomeStatus::Success);
    assert_eq!(outcomes[0].message, "Flight to NYC [PENDING]");
}

#[test]
fn status_update_walks_the_lifecycle() {
    let (service, _) = build_service();
    let created = service.create_booking(booking_request());
    let reference = created.booking_reference_id.expect("reference assigned");

    let confirmed = service.update_booking_status(&reference, "confirmed");
    assert_eq!(confirmed.status, OutcomeStatus::Success);
    assert_eq!(confirmed.message, "Booking status updated to CONFIRMED");

    let completed = service.update_booking_status(&reference, "COMPLETED");
    assert_eq!(completed.status, OutcomeStatus::Success);
    assert_eq!(completed.message, "Booking status updated to COMPLETED");
}

#[test]
fn status_update_rejects_unknown_values() {
    let (service, _) = build_service();
    let created = service.create_booking(booking_request());
    let reference = created.booking_reference_id.expect("reference assigned");

    let outcome = service.update_booking_status(&reference, "ARCHIVED");

    assert_eq!(outcome.status, OutcomeStatus::ValidationError);
    assert_eq!(
        outcome.message,
        "Invalid status. Allowed values: PENDING, CONFIRMED, CANCELLED, COMPLETED"
    );
}

#[test]
fn status_update_requires_a_status_value() {
    let (service, _) = build_service();

    let outcome = service.update_booking_status("BKG-1", "  ");

    assert_eq!(outcome.status, OutcomeStatus::ValidationError);
    assert_eq!(outcome.message, "New status is required");
}

#[test]
fn terminal_states_accept_no_further_transitions() {
    let (service, _) = build_service();

    for terminal in ["CANCELLED", "COMPLETED"] {
        let created = service.create_booking(booking_request());
        let reference = created.booking_reference_id.expect("reference assigned");
        service.update_booking_status(&reference, terminal);

        for next in ["PENDING", "CONFIRMED", "CANCELLED", "COMPLETED"] {
            let outcome = service.update_booking_status(&reference, next);
            assert_eq!(outcome.status, OutcomeStatus::ValidationError);
            assert_eq!(
                outcome.message,
                format!("Cannot update booking in {terminal} state")
            );
        }
    }
}

#[test]
fn cancel_is_a_status_update_to_cancelled() {
    let (service, _) = build_service();
    let created = service.create_booking(booking_request());
    let reference = created.booking_reference_id.expect("reference assigned");

    let outcome = service.cancel_booking(&reference);

    assert_eq!(outcome.status, OutcomeStatus::Success);
    assert_eq!(outcome.message, "Booking status updated to CANCELLED");

    let second = service.cancel_booking(&reference);
    assert_eq!(second.status, OutcomeStatus::ValidationError);
    assert_eq!(second.message, "Cannot update booking in CANCELLED state");
}

#[test]
fn status_update_of_unknown_booking_is_not_found() {
    let (service, _) = build_service();

    let outcome = service.update_booking_status("BKG-missing", "CONFIRMED");

    assert_eq!(outcome.status, OutcomeStatus::NotFound);
    assert_eq!(outcome.message, "Booking not found: BKG-missing");
}

#[test]
fn repository_failure_becomes_a_generic_system_error() {
    let service = BookingService::new(Arc::new(UnavailableRepository));

    let outcome = service.create_booking(booking_request());
    assert_eq!(outcome.status, OutcomeStatus::SystemError);
    assert_eq!(
        outcome.message,
        "Failed to save booking. Please try again later."
    );
    assert!(!outcome.message.contains("offline"));

    let outcomes = service.get_all_bookings();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].status, OutcomeStatus::SystemError);
}

#[test]
fn get_all_bookings_summarizes_every_record() {
    let (service, _) = build_service();
    service.create_booking(booking_request());
    let mut other = booking_request();
    other.resource_type = "Hotel".to_string();
    other.destination = "Boston".to_string();
    service.create_booking(other);

    let outcomes = service.get_all_bookings();

    assert_eq!(outcomes.len(), 2);
    let messages: Vec<&str> = outcomes.iter().map(|o| o.message.as_str()).collect();
    assert!(messages.contains(&"Flight to NYC [PENDING]"));
    assert!(messages.contains(&"Hotel to Boston [PENDING]"));
}

#[test]
fn reference_prefix_is_stable() {
    let (service, _) = build_service();
    let outcome = service.create_booking(booking_request());
    let reference = outcome.booking_reference_id.expect("reference assigned");
    assert!(reference.starts_with(BOOKING_REF_PREFIX));
}
