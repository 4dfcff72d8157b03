use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tower::ServiceExt;

use super::common::*;
use crate::employees::router::{
    delete_employee_handler, get_employee_handler, register_handler, search_employees_handler,
    update_status_handler, EmployeeSearchQuery, StatusUpdateBody,
};
use crate::employees::EmployeeService;
use crate::storage::InMemoryEmployeeRepository;

#[tokio::test]
async fn register_handler_returns_created_on_success() {
    let (service, _) = build_service();
    let service = Arc::new(service);

    let response = register_handler::<InMemoryEmployeeRepository>(
        State(service),
        axum::Json(employee_request()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("status").and_then(serde_json::Value::as_str),
        Some("SUCCESS")
    );
    assert_eq!(
        payload
            .get("employeeStatus")
            .and_then(serde_json::Value::as_str),
        Some("ACTIVE")
    );
}

#[tokio::test]
async fn register_handler_maps_duplicates_to_conflict() {
    let (service, _) = build_service();
    service.register_employee(employee_request());
    let service = Arc::new(service);

    let response = register_handler::<InMemoryEmployeeRepository>(
        State(service),
        axum::Json(employee_request()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("message").and_then(serde_json::Value::as_str),
        Some("Employee with ID EMP1001 already exists")
    );
}

#[tokio::test]
async fn get_handler_maps_missing_employees_to_not_found() {
    let (service, _) = build_service();
    let service = Arc::new(service);

    let response = get_employee_handler::<InMemoryEmployeeRepository>(
        State(service),
        Path("EMP9999".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_handler_prefers_email_over_department() {
    let (service, _) = build_service();
    service.register_employee(employee_request());
    service.register_employee(second_employee_request());
    let service = Arc::new(service);

    let response = search_employees_handler::<InMemoryEmployeeRepository>(
        State(service),
        Query(EmployeeSearchQuery {
            email: Some("dana.field@example.com".to_string()),
            department: Some("Engineering".to_string()),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let entries = payload.as_array().expect("list payload");
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].get("message").and_then(serde_json::Value::as_str),
        Some("Employee: Dana Field (Engineering)")
    );
}

#[tokio::test]
async fn status_handler_maps_invalid_values_to_bad_request() {
    let (service, _) = build_service();
    service.register_employee(employee_request());
    let service = Arc::new(service);

    let response = update_status_handler::<InMemoryEmployeeRepository>(
        State(service),
        Path("EMP1001".to_string()),
        axum::Json(StatusUpdateBody {
            status: "DELETED".to_string(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_handler_returns_ok_then_not_found() {
    let (service, _) = build_service();
    service.register_employee(employee_request());
    let service = Arc::new(service);

    let first = delete_employee_handler::<InMemoryEmployeeRepository>(
        State(service.clone()),
        Path("EMP1001".to_string()),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = delete_employee_handler::<InMemoryEmployeeRepository>(
        State(service),
        Path("EMP1001".to_string()),
    )
    .await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn system_errors_surface_as_internal_server_error() {
    let service = Arc::new(EmployeeService::new(Arc::new(UnavailableRepository)));

    let response = register_handler::<UnavailableRepository>(
        State(service),
        axum::Json(employee_request()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn employee_routes_accept_requests_end_to_end() {
    let (service, _) = build_service();
    let router = employee_router_with_service(service);

    let response = router
        .clone()
        .oneshot(
            axum::http::Request::post("/api/v1/employees")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&employee_request()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);

    let lookup = router
        .oneshot(
            axum::http::Request::get("/api/v1/employees/EMP1001")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(lookup.status(), StatusCode::OK);
    let payload = read_json_body(lookup).await;
    assert_eq!(
        payload.get("message").and_then(serde_json::Value::as_str),
        Some("Employee found: Dana Field")
    );
}
