use std::sync::Arc;

use tracing::{error, info, warn};

use super::domain::{Employee, EmployeeOutcome, EmployeeRequest, EmployeeStatus};
use super::repository::EmployeeRepository;
use crate::outcome::OutcomeStatus;
use crate::repository::RepositoryError;
use crate::validation::{is_blank, validate_employee_fields};

/// Business logic for employee registration and management.
///
/// Holds no mutable state; any operation may run concurrently. Every
/// public operation returns an [`EmployeeOutcome`] value. Repository
/// failures are folded into SYSTEM_ERROR with a generic message while the
/// detail goes to the log.
pub struct EmployeeService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R> EmployeeService<R>
where
    R: EmployeeRepository + ?Sized,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new employee. The existence check is a service-level
    /// pre-condition, not a store constraint; the window between check and
    /// write is accepted for this workload.
    pub fn register_employee(&self, request: EmployeeRequest) -> EmployeeOutcome {
        info!(employee_id = %request.employee_id, "processing employee registration");

        if let Err(err) = validate_employee_fields(&request) {
            error!(field = err.field, "validation error in employee request: {err}");
            return EmployeeOutcome::error(
                OutcomeStatus::ValidationError,
                Some(request.employee_id.clone()),
                err.reason,
            );
        }

        match self.repository.exists_by_employee_id(&request.employee_id) {
            Ok(true) => {
                warn!(employee_id = %request.employee_id, "employee already exists");
                return EmployeeOutcome::error(
                    OutcomeStatus::Conflict,
                    Some(request.employee_id.clone()),
                    format!("Employee with ID {} already exists", request.employee_id),
                );
            }
            Ok(false) => {}
            Err(err) => {
                return self.system_error(
                    Some(request.employee_id.clone()),
                    "Failed to save employee. Please try again later.",
                    &err,
                )
            }
        }

        match self.repository.save(Employee::from_request(&request)) {
            Ok(saved) => {
                info!(employee_id = %saved.employee_id, "employee registered successfully");
                EmployeeOutcome::success(&saved, "Employee registered successfully")
            }
            Err(err) => self.system_error(
                Some(request.employee_id),
                "Failed to save employee. Please try again later.",
                &err,
            ),
        }
    }

    pub fn get_employee_by_id(&self, employee_id: &str) -> EmployeeOutcome {
        info!(%employee_id, "looking up employee");

        if is_blank(employee_id) {
            return EmployeeOutcome::error(
                OutcomeStatus::ValidationError,
                None,
                "Employee ID is required",
            );
        }

        match self.repository.find_by_employee_id(employee_id) {
            Ok(Some(employee)) => {
                let message = format!("Employee found: {}", employee.name);
                EmployeeOutcome::success(&employee, message)
            }
            Ok(None) => EmployeeOutcome::error(
                OutcomeStatus::NotFound,
                Some(employee_id.to_string()),
                format!("Employee not found: {employee_id}"),
            ),
            Err(err) => self.system_error(
                Some(employee_id.to_string()),
                "Failed to retrieve employee. Please try again later.",
                &err,
            ),
        }
    }

    /// Exact-match lookup by email. No matches is an empty list, not an
    /// error. Blank input simply matches nothing.
    pub fn get_employees_by_email(&self, email: &str) -> Vec<EmployeeOutcome> {
        info!(%email, "searching employees by email");

        match self.repository.find_by_email(email) {
            Ok(employees) => employees
                .iter()
                .map(|emp| {
                    let message = format!("Employee: {} ({})", emp.name, emp.department);
                    EmployeeOutcome::success(emp, message)
                })
                .collect(),
            Err(err) => vec![self.system_error(
                None,
                "Failed to search employees. Please try again later.",
                &err,
            )],
        }
    }

    /// Exact-match lookup by department; same empty-list contract as
    /// [`Self::get_employees_by_email`].
    pub fn get_employees_by_department(&self, department: &str) -> Vec<EmployeeOutcome> {
        info!(%department, "searching employees by department");

        match self.repository.find_by_department(department) {
            Ok(employees) => employees
                .iter()
                .map(|emp| {
                    let message = format!("Employee: {} ({})", emp.name, emp.email);
                    EmployeeOutcome::success(emp, message)
                })
                .collect(),
            Err(err) => vec![self.system_error(
                None,
                "Failed to search employees. Please try again later.",
                &err,
            )],
        }
    }

    /// Any of the three statuses is reachable from any other; employees
    /// have no terminal states, unlike bookings.
    pub fn update_employee_status(&self, employee_id: &str, new_status: &str) -> EmployeeOutcome {
        info!(%employee_id, %new_status, "updating employee status");

        if is_blank(employee_id) {
            return EmployeeOutcome::error(
                OutcomeStatus::ValidationError,
                None,
                "Employee ID is required",
            );
        }
        if is_blank(new_status) {
            return EmployeeOutcome::error(
                OutcomeStatus::ValidationError,
                Some(employee_id.to_string()),
                "New status is required",
            );
        }

        let Some(status) = EmployeeStatus::parse(new_status) else {
            return EmployeeOutcome::error(
                OutcomeStatus::ValidationError,
                Some(employee_id.to_string()),
                format!(
                    "Invalid status. Allowed values: {}",
                    EmployeeStatus::ALLOWED.join(", ")
                ),
            );
        };

        match self.repository.update_status(employee_id, status) {
            Ok(Some(updated)) => {
                info!(%employee_id, status = status.label(), "employee status updated");
                let message = format!("Employee status updated to {}", updated.status.label());
                EmployeeOutcome::success(&updated, message)
            }
            Ok(None) => EmployeeOutcome::error(
                OutcomeStatus::NotFound,
                Some(employee_id.to_string()),
                format!("Employee not found: {employee_id}"),
            ),
            Err(err) => self.system_error(
                Some(employee_id.to_string()),
                "Failed to update employee status. Please try again later.",
                &err,
            ),
        }
    }

    /// Hard delete. Bookings referencing the deleted employee are left
    /// dangling by design.
    pub fn delete_employee(&self, employee_id: &str) -> EmployeeOutcome {
        info!(%employee_id, "deleting employee");

        if is_blank(employee_id) {
            return EmployeeOutcome::error(
                OutcomeStatus::ValidationError,
                None,
                "Employee ID is required",
            );
        }

        match self.repository.delete_by_employee_id(employee_id) {
            Ok(true) => {
                info!(%employee_id, "employee deleted");
                EmployeeOutcome::bare(
                    OutcomeStatus::Success,
                    Some(employee_id.to_string()),
                    "Employee deleted successfully",
                )
            }
            Ok(false) => EmployeeOutcome::error(
                OutcomeStatus::NotFound,
                Some(employee_id.to_string()),
                format!("Employee not found: {employee_id}"),
            ),
            Err(err) => self.system_error(
                Some(employee_id.to_string()),
                "Failed to delete employee. Please try again later.",
                &err,
            ),
        }
    }

    /// Full enumeration. Fine for the in-memory backend; a table scan on
    /// persistent stores.
    pub fn get_all_employees(&self) -> Vec<EmployeeOutcome> {
        info!("retrieving all employees");

        match self.repository.find_all() {
            Ok(employees) => employees
                .iter()
                .map(|emp| EmployeeOutcome::success(emp, format!("Employee: {}", emp.name)))
                .collect(),
            Err(err) => vec![self.system_error(
                None,
                "Failed to retrieve employees. Please try again later.",
                &err,
            )],
        }
    }

    fn system_error(
        &self,
        employee_id: Option<String>,
        message: &str,
        err: &RepositoryError,
    ) -> EmployeeOutcome {
        error!(employee_id = ?employee_id, "employee repository failure: {err}");
        EmployeeOutcome::error(OutcomeStatus::SystemError, employee_id, message)
    }
}
