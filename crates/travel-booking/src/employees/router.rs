use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Router,
};
use serde::Deserialize;

use super::domain::{EmployeeOutcome, EmployeeRequest};
use super::repository::EmployeeRepository;
use super::service::EmployeeService;
use crate::outcome::OutcomeStatus;

/// Router builder exposing the employee CRUD endpoints.
pub fn employee_router<R>(service: Arc<EmployeeService<R>>) -> Router
where
    R: EmployeeRepository + ?Sized + 'static,
{
    Router::new()
        .route(
            "/api/v1/employees",
            get(search_employees_handler::<R>).post(register_handler::<R>),
        )
        .route(
            "/api/v1/employees/:employee_id",
            get(get_employee_handler::<R>).delete(delete_employee_handler::<R>),
        )
        .route(
            "/api/v1/employees/:employee_id/status",
            patch(update_status_handler::<R>),
        )
        .with_state(service)
}

/// Optional exact-match filters; email wins when both are supplied.
#[derive(Debug, Deserialize)]
pub(crate) struct EmployeeSearchQuery {
    pub(crate) email: Option<String>,
    pub(crate) department: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusUpdateBody {
    pub(crate) status: String,
}

fn response_code(status: OutcomeStatus, created: bool) -> StatusCode {
    match status {
        OutcomeStatus::Success => {
            if created {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            }
        }
        OutcomeStatus::ValidationError => StatusCode::BAD_REQUEST,
        OutcomeStatus::NotFound => StatusCode::NOT_FOUND,
        OutcomeStatus::Conflict => StatusCode::CONFLICT,
        OutcomeStatus::SystemError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn respond(outcome: EmployeeOutcome, created: bool) -> Response {
    let code = response_code(outcome.status, created);
    (code, axum::Json(outcome)).into_response()
}

pub(crate) async fn register_handler<R>(
    State(service): State<Arc<EmployeeService<R>>>,
    axum::Json(request): axum::Json<EmployeeRequest>,
) -> Response
where
    R: EmployeeRepository + ?Sized + 'static,
{
    respond(service.register_employee(request), true)
}

pub(crate) async fn get_employee_handler<R>(
    State(service): State<Arc<EmployeeService<R>>>,
    Path(employee_id): Path<String>,
) -> Response
where
    R: EmployeeRepository + ?Sized + 'static,
{
    respond(service.get_employee_by_id(&employee_id), false)
}

pub(crate) async fn search_employees_handler<R>(
    State(service): State<Arc<EmployeeService<R>>>,
    Query(query): Query<EmployeeSearchQuery>,
) -> Response
where
    R: EmployeeRepository + ?Sized + 'static,
{
    let outcomes = if let Some(email) = query.email {
        service.get_employees_by_email(&email)
    } else if let Some(department) = query.department {
        service.get_employees_by_department(&department)
    } else {
        service.get_all_employees()
    };

    (StatusCode::OK, axum::Json(outcomes)).into_response()
}

pub(crate) async fn update_status_handler<R>(
    State(service): State<Arc<EmployeeService<R>>>,
    Path(employee_id): Path<String>,
    axum::Json(body): axum::Json<StatusUpdateBody>,
) -> Response
where
    R: EmployeeRepository + ?Sized + 'static,
{
    respond(
        service.update_employee_status(&employee_id, &body.status),
        false,
    )
}

pub(crate) async fn delete_employee_handler<R>(
    State(service): State<Arc<EmployeeService<R>>>,
    Path(employee_id): Path<String>,
) -> Response
where
    R: EmployeeRepository + ?Sized + 'static,
{
    respond(service.delete_employee(&employee_id), false)
}
