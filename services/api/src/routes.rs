use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use travel_booking::bookings::{booking_router, BookingRepository, BookingService};
use travel_booking::employees::{employee_router, EmployeeRepository, EmployeeService};

use crate::infra::AppState;

/// Merges the domain routers with the operational endpoints.
pub(crate) fn with_api_routes<E, B>(
    employee_service: Arc<EmployeeService<E>>,
    booking_service: Arc<BookingService<B>>,
) -> axum::Router
where
    E: EmployeeRepository + ?Sized + 'static,
    B: BookingRepository + ?Sized + 'static,
{
    employee_router(employee_service)
        .merge(booking_router(booking_service))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
