//! Embedded persistent backend built on redb.
//!
//! One database file holds both tables; records are stored as JSON under
//! their primary key. A single [`RedbStore`] implements both repository
//! traits so the employee and booking stores share one write-ahead log.

use std::path::Path;

use redb::{Database, ReadableTable, TableDefinition};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::now_timestamp;
use crate::bookings::{Booking, BookingRepository, BookingStatus};
use crate::employees::{Employee, EmployeeRepository, EmployeeStatus};
use crate::repository::{RepositoryError, RepositoryResult};

const EMPLOYEES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("employees");
const BOOKINGS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("bookings");

fn unavailable(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Unavailable(err.to_string())
}

fn codec(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Codec(err.to_string())
}

pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    /// Opens (or creates) the database file and ensures both tables exist,
    /// so later read transactions never observe a missing table.
    pub fn open(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let db = Database::create(path).map_err(unavailable)?;
        Self::init_tables(db)
    }

    /// Backend without a file, used by tests.
    #[cfg(test)]
    pub fn open_in_memory() -> RepositoryResult<Self> {
        let db = Database::builder()
            .create_with_backend(redb::backends::InMemoryBackend::new())
            .map_err(unavailable)?;
        Self::init_tables(db)
    }

    fn init_tables(db: Database) -> RepositoryResult<Self> {
        let txn = db.begin_write().map_err(unavailable)?;
        {
            txn.open_table(EMPLOYEES_TABLE).map_err(unavailable)?;
            txn.open_table(BOOKINGS_TABLE).map_err(unavailable)?;
        }
        txn.commit().map_err(unavailable)?;
        Ok(Self { db })
    }

    fn get<T: DeserializeOwned>(
        &self,
        table: TableDefinition<&str, &[u8]>,
        key: &str,
    ) -> RepositoryResult<Option<T>> {
        let txn = self.db.begin_read().map_err(unavailable)?;
        let table = txn.open_table(table).map_err(unavailable)?;
        match table.get(key).map_err(unavailable)? {
            Some(guard) => {
                let record = serde_json::from_slice(guard.value()).map_err(codec)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    fn put<T: Serialize>(
        &self,
        table: TableDefinition<&str, &[u8]>,
        key: &str,
        record: &T,
    ) -> RepositoryResult<()> {
        let encoded = serde_json::to_vec(record).map_err(codec)?;
        let txn = self.db.begin_write().map_err(unavailable)?;
        {
            let mut table = txn.open_table(table).map_err(unavailable)?;
            table.insert(key, encoded.as_slice()).map_err(unavailable)?;
        }
        txn.commit().map_err(unavailable)?;
        Ok(())
    }

    fn remove(
        &self,
        table: TableDefinition<&str, &[u8]>,
        key: &str,
    ) -> RepositoryResult<bool> {
        let txn = self.db.begin_write().map_err(unavailable)?;
        let removed = {
            let mut table = txn.open_table(table).map_err(unavailable)?;
            let guard = table.remove(key).map_err(unavailable)?;
            guard.is_some()
        };
        txn.commit().map_err(unavailable)?;
        Ok(removed)
    }

    /// Full scan with a record-level filter. Both tables are small enough
    /// for secondary lookups to walk them.
    fn scan<T, F>(
        &self,
        table: TableDefinition<&str, &[u8]>,
        mut keep: F,
    ) -> RepositoryResult<Vec<T>>
    where
        T: DeserializeOwned,
        F: FnMut(&T) -> bool,
    {
        let txn = self.db.begin_read().map_err(unavailable)?;
        let table = txn.open_table(table).map_err(unavailable)?;
        let mut records = Vec::new();
        for entry in table.iter().map_err(unavailable)? {
            let (_, value) = entry.map_err(unavailable)?;
            let record: T = serde_json::from_slice(value.value()).map_err(codec)?;
            if keep(&record) {
                records.push(record);
            }
        }
        Ok(records)
    }
}

impl EmployeeRepository for RedbStore {
    fn save(&self, mut employee: Employee) -> RepositoryResult<Employee> {
        let existing: Option<Employee> = self.get(EMPLOYEES_TABLE, &employee.employee_id)?;
        let now = now_timestamp();
        match existing {
            Some(stored) => employee.created_at = stored.created_at,
            None => {
                employee.created_at = Some(now.clone());
                employee.status = EmployeeStatus::default();
            }
        }
        employee.updated_at = Some(now);
        self.put(EMPLOYEES_TABLE, &employee.employee_id.clone(), &employee)?;
        Ok(employee)
    }

    fn find_by_employee_id(&self, employee_id: &str) -> RepositoryResult<Option<Employee>> {
        self.get(EMPLOYEES_TABLE, employee_id)
    }

    fn find_by_email(&self, email: &str) -> RepositoryResult<Vec<Employee>> {
        self.scan(EMPLOYEES_TABLE, |emp: &Employee| emp.email == email)
    }

    fn find_by_department(&self, department: &str) -> RepositoryResult<Vec<Employee>> {
        self.scan(EMPLOYEES_TABLE, |emp: &Employee| {
            emp.department == department
        })
    }

    fn find_all(&self) -> RepositoryResult<Vec<Employee>> {
        self.scan(EMPLOYEES_TABLE, |_: &Employee| true)
    }

    fn delete_by_employee_id(&self, employee_id: &str) -> RepositoryResult<bool> {
        self.remove(EMPLOYEES_TABLE, employee_id)
    }

    fn update_status(
        &self,
        employee_id: &str,
        status: EmployeeStatus,
    ) -> RepositoryResult<Option<Employee>> {
        let Some(mut employee): Option<Employee> = self.get(EMPLOYEES_TABLE, employee_id)? else {
            return Ok(None);
        };
        employee.status = status;
        employee.updated_at = Some(now_timestamp());
        self.put(EMPLOYEES_TABLE, employee_id, &employee)?;
        Ok(Some(employee))
    }

    fn exists_by_employee_id(&self, employee_id: &str) -> RepositoryResult<bool> {
        Ok(self
            .get::<Employee>(EMPLOYEES_TABLE, employee_id)?
            .is_some())
    }

    fn count(&self) -> RepositoryResult<u64> {
        Ok(self.scan(EMPLOYEES_TABLE, |_: &Employee| true)?.len() as u64)
    }
}

impl BookingRepository for RedbStore {
    fn save(&self, mut booking: Booking) -> RepositoryResult<Booking> {
        let existing: Option<Booking> = self.get(BOOKINGS_TABLE, &booking.booking_reference_id)?;
        let now = now_timestamp();
        match existing {
            Some(stored) => booking.created_at = stored.created_at,
            None => {
                booking.created_at = Some(now.clone());
                booking.status = BookingStatus::default();
            }
        }
        booking.updated_at = Some(now);
        self.put(
            BOOKINGS_TABLE,
            &booking.booking_reference_id.clone(),
            &booking,
        )?;
        Ok(booking)
    }

    fn find_by_reference_id(
        &self,
        booking_reference_id: &str,
    ) -> RepositoryResult<Option<Booking>> {
        self.get(BOOKINGS_TABLE, booking_reference_id)
    }

    fn find_by_employee_id(&self, employee_id: &str) -> RepositoryResult<Vec<Booking>> {
        self.scan(BOOKINGS_TABLE, |booking: &Booking| {
            booking.employee_id == employee_id
        })
    }

    fn find_all(&self) -> RepositoryResult<Vec<Booking>> {
        self.scan(BOOKINGS_TABLE, |_: &Booking| true)
    }

    fn delete_by_reference_id(&self, booking_reference_id: &str) -> RepositoryResult<bool> {
        self.remove(BOOKINGS_TABLE, booking_reference_id)
    }

    fn update_status(
        &self,
        booking_reference_id: &str,
        status: BookingStatus,
    ) -> RepositoryResult<Option<Booking>> {
        let Some(mut booking): Option<Booking> =
            self.get(BOOKINGS_TABLE, booking_reference_id)?
        else {
            return Ok(None);
        };
        booking.status = status;
        booking.updated_at = Some(now_timestamp());
        self.put(BOOKINGS_TABLE, booking_reference_id, &booking)?;
        Ok(Some(booking))
    }

    fn exists_by_reference_id(&self, booking_reference_id: &str) -> RepositoryResult<bool> {
        Ok(self
            .get::<Booking>(BOOKINGS_TABLE, booking_reference_id)?
            .is_some())
    }

    fn count_by_employee_id(&self, employee_id: &str) -> RepositoryResult<u64> {
        Ok(self
            .scan(BOOKINGS_TABLE, |booking: &Booking| {
                booking.employee_id == employee_id
            })?
            .len() as u64)
    }
}
