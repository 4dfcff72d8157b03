use super::domain::{Employee, EmployeeStatus};
use crate::repository::RepositoryResult;

/// Storage contract for employee records.
///
/// `employeeId` is the primary key; email and department are exact-match
/// secondary lookup keys. Absence is a normal return (`None`, `false`, or
/// an empty list); errors mean the store itself failed.
///
/// Implementations stamp `createdAt`, `updatedAt` and the default ACTIVE
/// status on first save, and bump `updatedAt` on every write.
pub trait EmployeeRepository: Send + Sync {
    /// Upserts by `employeeId` and returns the stored record with
    /// timestamps applied.
    fn save(&self, employee: Employee) -> RepositoryResult<Employee>;

    fn find_by_employee_id(&self, employee_id: &str) -> RepositoryResult<Option<Employee>>;

    fn find_by_email(&self, email: &str) -> RepositoryResult<Vec<Employee>>;

    fn find_by_department(&self, department: &str) -> RepositoryResult<Vec<Employee>>;

    fn find_all(&self) -> RepositoryResult<Vec<Employee>>;

    /// Hard delete. Returns whether a record was removed.
    fn delete_by_employee_id(&self, employee_id: &str) -> RepositoryResult<bool>;

    /// Sets the status and bumps `updatedAt`, returning the updated record
    /// or `None` if the employee does not exist.
    fn update_status(
        &self,
        employee_id: &str,
        status: EmployeeStatus,
    ) -> RepositoryResult<Option<Employee>>;

    fn exists_by_employee_id(&self, employee_id: &str) -> RepositoryResult<bool>;

    fn count(&self) -> RepositoryResult<u64>;
}
