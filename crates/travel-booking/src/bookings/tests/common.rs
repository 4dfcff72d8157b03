use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::bookings::domain::{Booking, BookingRequest, BookingStatus};
use crate::bookings::repository::BookingRepository;
use crate::bookings::{booking_router, BookingService};
use crate::repository::{RepositoryError, RepositoryResult};
use crate::storage::InMemoryBookingRepository;

pub(super) fn booking_request() -> BookingRequest {
    BookingRequest {
        employee_id: "EMP9876".to_string(),
        resource_type: "Flight".to_string(),
        destination: "NYC".to_string(),
        departure_date: "2024-11-05 08:00:00".to_string(),
        return_date: "2024-11-08 18:00:00".to_string(),
        traveler_count: Some(2),
        cost_center_ref: "CC-456".to_string(),
        trip_purpose: "Client meeting".to_string(),
    }
}

pub(super) fn build_service() -> (
    BookingService<InMemoryBookingRepository>,
    Arc<InMemoryBookingRepository>,
) {
    let repository = Arc::new(InMemoryBookingRepository::default());
    let service = BookingService::new(repository.clone());
    (service, repository)
}

pub(super) fn booking_router_with_service(
    service: BookingService<InMemoryBookingRepository>,
) -> axum::Router {
    booking_router(Arc::new(service))
}

/// Repository whose every call fails, for the SYSTEM_ERROR paths.
pub(super) struct UnavailableRepository;

impl BookingRepository for UnavailableRepository {
    fn save(&self, _booking: Booking) -> RepositoryResult<Booking> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_reference_id(&self, _id: &str) -> RepositoryResult<Option<Booking>> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_employee_id(&self, _employee_id: &str) -> RepositoryResult<Vec<Booking>> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_all(&self) -> RepositoryResult<Vec<Booking>> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete_by_reference_id(&self, _id: &str) -> RepositoryResult<bool> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_status(
        &self,
        _id: &str,
        _status: BookingStatus,
    ) -> RepositoryResult<Option<Booking>> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn exists_by_reference_id(&self, _id: &str) -> RepositoryResult<bool> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn count_by_employee_id(&self, _employee_id: &str) -> RepositoryResult<u64> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
