//! In-memory backends for tests and local development. Data does not
//! survive a restart.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::now_timestamp;
use crate::bookings::{Booking, BookingRepository, BookingStatus};
use crate::employees::{Employee, EmployeeRepository, EmployeeStatus};
use crate::repository::{RepositoryError, RepositoryResult};

fn poisoned(entity: &str) -> RepositoryError {
    RepositoryError::Unavailable(format!("{entity} store mutex poisoned"))
}

#[derive(Default, Clone)]
pub struct InMemoryEmployeeRepository {
    records: Arc<Mutex<HashMap<String, Employee>>>,
}

impl InMemoryEmployeeRepository {
    fn lock(&self) -> RepositoryResult<MutexGuard<'_, HashMap<String, Employee>>> {
        self.records.lock().map_err(|_| poisoned("employee"))
    }

    /// Drops every record; resets state between tests.
    pub fn clear(&self) -> RepositoryResult<()> {
        self.lock()?.clear();
        Ok(())
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn save(&self, mut employee: Employee) -> RepositoryResult<Employee> {
        let mut records = self.lock()?;
        let now = now_timestamp();
        if employee.created_at.is_none() {
            employee.created_at = Some(now.clone());
            employee.status = EmployeeStatus::default();
        }
        employee.updated_at = Some(now);
        records.insert(employee.employee_id.clone(), employee.clone());
        Ok(employee)
    }

    fn find_by_employee_id(&self, employee_id: &str) -> RepositoryResult<Option<Employee>> {
        Ok(self.lock()?.get(employee_id).cloned())
    }

    fn find_by_email(&self, email: &str) -> RepositoryResult<Vec<Employee>> {
        Ok(self
            .lock()?
            .values()
            .filter(|emp| emp.email == email)
            .cloned()
            .collect())
    }

    fn find_by_department(&self, department: &str) -> RepositoryResult<Vec<Employee>> {
        Ok(self
            .lock()?
            .values()
            .filter(|emp| emp.department == department)
            .cloned()
            .collect())
    }

    fn find_all(&self) -> RepositoryResult<Vec<Employee>> {
        Ok(self.lock()?.values().cloned().collect())
    }

    fn delete_by_employee_id(&self, employee_id: &str) -> RepositoryResult<bool> {
        Ok(self.lock()?.remove(employee_id).is_some())
    }

    fn update_status(
        &self,
        employee_id: &str,
        status: EmployeeStatus,
    ) -> RepositoryResult<Option<Employee>> {
        let mut records = self.lock()?;
        match records.get_mut(employee_id) {
            Some(employee) => {
                employee.status = status;
                employee.updated_at = Some(now_timestamp());
                Ok(Some(employee.clone()))
            }
            None => Ok(None),
        }
    }

    fn exists_by_employee_id(&self, employee_id: &str) -> RepositoryResult<bool> {
        Ok(self.lock()?.contains_key(employee_id))
    }

    fn count(&self) -> RepositoryResult<u64> {
        Ok(self.lock()?.len() as u64)
    }
}

#[derive(Default, Clone)]
pub struct InMemoryBookingRepository {
    records: Arc<Mutex<HashMap<String, Booking>>>,
}

impl InMemoryBookingRepository {
    fn lock(&self) -> RepositoryResult<MutexGuard<'_, HashMap<String, Booking>>> {
        self.records.lock().map_err(|_| poisoned("booking"))
    }

    /// Drops every record; resets state between tests.
    pub fn clear(&self) -> RepositoryResult<()> {
        self.lock()?.clear();
        Ok(())
    }
}

impl BookingRepository for InMemoryBookingRepository {
    fn save(&self, mut booking: Booking) -> RepositoryResult<Booking> {
        let mut records = self.lock()?;
        let now = now_timestamp();
        if booking.created_at.is_none() {
            booking.created_at = Some(now.clone());
            booking.status = BookingStatus::default();
        }
        booking.updated_at = Some(now);
        records.insert(booking.booking_reference_id.clone(), booking.clone());
        Ok(booking)
    }

    fn find_by_reference_id(
        &self,
        booking_reference_id: &str,
    ) -> RepositoryResult<Option<Booking>> {
        Ok(self.lock()?.get(booking_reference_id).cloned())
    }

    fn find_by_employee_id(&self, employee_id: &str) -> RepositoryResult<Vec<Booking>> {
        Ok(self
            .lock()?
            .values()
            .filter(|booking| booking.employee_id == employee_id)
            .cloned()
            .collect())
    }

    fn find_all(&self) -> RepositoryResult<Vec<Booking>> {
        Ok(self.lock()?.values().cloned().collect())
    }

    fn delete_by_reference_id(&self, booking_reference_id: &str) -> RepositoryResult<bool> {
        Ok(self.lock()?.remove(booking_reference_id).is_some())
    }

    fn update_status(
        &self,
        booking_reference_id: &str,
        status: BookingStatus,
    ) -> RepositoryResult<Option<Booking>> {
        let mut records = self.lock()?;
        match records.get_mut(booking_reference_id) {
            Some(booking) => {
                booking.status = status;
                booking.updated_at = Some(now_timestamp());
                Ok(Some(booking.clone()))
            }
            None => Ok(None),
        }
    }

    fn exists_by_reference_id(&self, booking_reference_id: &str) -> RepositoryResult<bool> {
        Ok(self.lock()?.contains_key(booking_reference_id))
    }

    fn count_by_employee_id(&self, employee_id: &str) -> RepositoryResult<u64> {
        Ok(self
            .lock()?
            .values()
            .filter(|booking| booking.employee_id == employee_id)
            .count() as u64)
    }
}
