use super::domain::{Booking, BookingStatus};
use crate::repository::RepositoryResult;

/// Storage contract for booking records.
///
/// `bookingReferenceId` is the primary key; `employeeId` is a secondary
/// lookup key with no referential integrity against the employee store.
/// Absence is a normal return; errors mean the store itself failed.
///
/// Implementations stamp `createdAt`, `updatedAt` and the default PENDING
/// status on first save, and bump `updatedAt` on every write.
pub trait BookingRepository: Send + Sync {
    /// Upserts by reference id and returns the stored record with
    /// timestamps applied.
    fn save(&self, booking: Booking) -> RepositoryResult<Booking>;

    fn find_by_reference_id(&self, booking_reference_id: &str)
        -> RepositoryResult<Option<Booking>>;

    fn find_by_employee_id(&self, employee_id: &str) -> RepositoryResult<Vec<Booking>>;

    fn find_all(&self) -> RepositoryResult<Vec<Booking>>;

    /// Present for operational tooling; the domain service never deletes a
    /// booking; retirement goes through the status state machine.
    fn delete_by_reference_id(&self, booking_reference_id: &str) -> RepositoryResult<bool>;

    /// Sets the status and bumps `updatedAt`, returning the updated record
    /// or `None` if the booking does not exist. Terminal-state policy is
    /// the service's job, not the store's.
    fn update_status(
        &self,
        booking_reference_id: &str,
        status: BookingStatus,
    ) -> RepositoryResult<Option<Booking>>;

    fn exists_by_reference_id(&self, booking_reference_id: &str) -> RepositoryResult<bool>;

    fn count_by_employee_id(&self, employee_id: &str) -> RepositoryResult<u64>;
}
