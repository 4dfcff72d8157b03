use std::sync::Arc;

use chrono::{Duration, Local};
use clap::Args;
use travel_booking::bookings::{BookingOutcome, BookingRequest, BookingService};
use travel_booking::employees::{EmployeeOutcome, EmployeeRequest, EmployeeService};
use travel_booking::error::AppError;
use travel_booking::storage::{InMemoryBookingRepository, InMemoryEmployeeRepository};
use travel_booking::validation::DATE_TIME_FORMAT;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Destination used for the demo booking
    #[arg(long, default_value = "NYC")]
    pub(crate) destination: String,
    /// Resource type used for the demo booking
    #[arg(long, default_value = "Flight")]
    pub(crate) resource_type: String,
}

/// Runs the full employee and booking walkthrough against in-memory
/// stores, printing each outcome as it happens.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let employee_service = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::default()));
    let booking_service = BookingService::new(Arc::new(InMemoryBookingRepository::default()));

    println!("Corporate travel booking demo\n");

    let registration = EmployeeRequest {
        employee_id: "EMP1001".to_string(),
        name: "Dana Field".to_string(),
        email: "dana.field@example.com".to_string(),
        department: "Engineering".to_string(),
        cost_center_ref: "CC-100".to_string(),
    };

    println!("Registering employee {}", registration.employee_id);
    print_employee(&employee_service.register_employee(registration.clone()));

    println!("Registering the same employee again");
    print_employee(&employee_service.register_employee(registration));

    let departure = Local::now().naive_local() + Duration::days(7);
    let ret = departure + Duration::days(3);
    let booking_request = BookingRequest {
        employee_id: "EMP1001".to_string(),
        resource_type: args.resource_type,
        destination: args.destination,
        departure_date: departure.format(DATE_TIME_FORMAT).to_string(),
        return_date: ret.format(DATE_TIME_FORMAT).to_string(),
        traveler_count: Some(1),
        cost_center_ref: "CC-100".to_string(),
        trip_purpose: "Quarterly planning".to_string(),
    };

    println!("\nCreating a booking for EMP1001");
    let created = booking_service.create_booking(booking_request);
    print_booking(&created);

    let Some(reference) = created.booking_reference_id.clone() else {
        println!("Booking was not created; stopping the walkthrough");
        return Ok(());
    };

    println!("Looking up {reference}");
    print_booking(&booking_service.get_booking_by_reference_id(&reference));

    println!("Confirming, then completing the booking");
    print_booking(&booking_service.update_booking_status(&reference, "CONFIRMED"));
    print_booking(&booking_service.update_booking_status(&reference, "COMPLETED"));

    println!("Attempting to cancel the completed booking");
    print_booking(&booking_service.cancel_booking(&reference));

    println!("\nSuspending the employee, then removing the record");
    print_employee(&employee_service.update_employee_status("EMP1001", "SUSPENDED"));
    print_employee(&employee_service.delete_employee("EMP1001"));

    Ok(())
}

fn print_employee(outcome: &EmployeeOutcome) {
    println!("  [{}] {}", outcome.status.label(), outcome.message);
}

fn print_booking(outcome: &BookingOutcome) {
    match &outcome.booking_reference_id {
        Some(reference) => println!(
            "  [{}] {} ({reference})",
            outcome.status.label(),
            outcome.message
        ),
        None => println!("  [{}] {}", outcome.status.label(), outcome.message),
    }
}
