use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::employees::domain::{Employee, EmployeeRequest, EmployeeStatus};
use crate::employees::repository::EmployeeRepository;
use crate::employees::{employee_router, EmployeeService};
use crate::repository::{RepositoryError, RepositoryResult};
use crate::storage::InMemoryEmployeeRepository;

pub(super) fn employee_request() -> EmployeeRequest {
    EmployeeRequest {
        employee_id: "EMP1001".to_string(),
        name: "Dana Field".to_string(),
        email: "dana.field@example.com".to_string(),
        department: "Engineering".to_string(),
        cost_center_ref: "CC-100".to_string(),
    }
}

pub(super) fn second_employee_request() -> EmployeeRequest {
    EmployeeRequest {
        employee_id: "EMP1002".to_string(),
        name: "Robin Okafor".to_string(),
        email: "robin.okafor@example.com".to_string(),
        department: "Engineering".to_string(),
        cost_center_ref: "CC-101".to_string(),
    }
}

pub(super) fn build_service() -> (
    EmployeeService<InMemoryEmployeeRepository>,
    Arc<InMemoryEmployeeRepository>,
) {
    let repository = Arc::new(InMemoryEmployeeRepository::default());
    let service = EmployeeService::new(repository.clone());
    (service, repository)
}

pub(super) fn employee_router_with_service(
    service: EmployeeService<InMemoryEmployeeRepository>,
) -> axum::Router {
    employee_router(Arc::new(service))
}

/// Repository whose every call fails, for the SYSTEM_ERROR paths.
pub(super) struct UnavailableRepository;

impl EmployeeRepository for UnavailableRepository {
    fn save(&self, _employee: Employee) -> RepositoryResult<Employee> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_employee_id(&self, _employee_id: &str) -> RepositoryResult<Option<Employee>> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_email(&self, _email: &str) -> RepositoryResult<Vec<Employee>> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_department(&self, _department: &str) -> RepositoryResult<Vec<Employee>> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_all(&self) -> RepositoryResult<Vec<Employee>> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete_by_employee_id(&self, _employee_id: &str) -> RepositoryResult<bool> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_status(
        &self,
        _employee_id: &str,
        _status: EmployeeStatus,
    ) -> RepositoryResult<Option<Employee>> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn exists_by_employee_id(&self, _employee_id: &str) -> RepositoryResult<bool> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn count(&self) -> RepositoryResult<u64> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
