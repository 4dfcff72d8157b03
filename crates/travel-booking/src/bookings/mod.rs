//! Booking creation, lookup, and the status state machine.
//!
//! Bookings are created under a system-generated `BKG-<uuid>` reference
//! and never hard-deleted: CANCELLED and COMPLETED are terminal statuses
//! that retire the record while preserving its history.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Booking, BookingOutcome, BookingRequest, BookingStatus};
pub use repository::BookingRepository;
pub use router::booking_router;
pub use service::BookingService;
