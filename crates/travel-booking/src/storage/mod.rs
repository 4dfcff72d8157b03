//! Interchangeable persistence backends behind the repository traits.
//!
//! The backend is chosen once at startup from [`StorageConfig`] and the
//! factory hands back trait objects; the domain services never branch on
//! which store they are talking to.

pub mod memory;
pub mod redb;

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};

use crate::bookings::BookingRepository;
use crate::config::{StorageBackend, StorageConfig};
use crate::employees::EmployeeRepository;
use crate::repository::RepositoryResult;

pub use memory::{InMemoryBookingRepository, InMemoryEmployeeRepository};
pub use redb::RedbStore;

/// The repository pair the application wires into its services.
#[derive(Clone)]
pub struct Repositories {
    pub employees: Arc<dyn EmployeeRepository>,
    pub bookings: Arc<dyn BookingRepository>,
}

/// Builds the configured backend. The redb store is opened once here and
/// shared by both repositories.
pub fn build_repositories(config: &StorageConfig) -> RepositoryResult<Repositories> {
    match config.backend {
        StorageBackend::Memory => Ok(Repositories {
            employees: Arc::new(InMemoryEmployeeRepository::default()),
            bookings: Arc::new(InMemoryBookingRepository::default()),
        }),
        StorageBackend::Redb => {
            let store = Arc::new(RedbStore::open(&config.path)?);
            Ok(Repositories {
                employees: store.clone(),
                bookings: store,
            })
        }
    }
}

/// Write-time timestamp, RFC 3339 in UTC. Repositories stamp these; the
/// domain layer never supplies its own.
pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
