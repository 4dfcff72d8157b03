use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Router,
};
use serde::Deserialize;

use super::domain::{BookingOutcome, BookingRequest};
use super::repository::BookingRepository;
use super::service::BookingService;
use crate::outcome::OutcomeStatus;

/// Router builder exposing the booking endpoints. There is no DELETE
/// route: bookings are retired via the status state machine.
pub fn booking_router<R>(service: Arc<BookingService<R>>) -> Router
where
    R: BookingRepository + ?Sized + 'static,
{
    Router::new()
        .route(
            "/api/v1/bookings",
            get(search_bookings_handler::<R>).post(create_booking_handler::<R>),
        )
        .route("/api/v1/bookings/:reference_id", get(get_booking_handler::<R>))
        .route(
            "/api/v1/bookings/:reference_id/status",
            patch(update_status_handler::<R>),
        )
        .route(
            "/api/v1/bookings/:reference_id/cancel",
            post(cancel_booking_handler::<R>),
        )
        .with_state(service)
}

/// Optional exact-match filter on the employee secondary key.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookingSearchQuery {
    pub(crate) employee_id: Option<String>,
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
        OutcomeStatus::ValidationError | OutcomeStatus::Conflict => StatusCode::BAD_REQUEST,
        OutcomeStatus::NotFound => StatusCode::NOT_FOUND,
        OutcomeStatus::SystemError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn respond(outcome: BookingOutcome, created: bool) -> Response {
    let code = response_code(outcome.status, created);
    (code, axum::Json(outcome)).into_response()
}

pub(crate) async fn create_booking_handler<R>(
    State(service): State<Arc<BookingService<R>>>,
    axum::Json(request): axum::Json<BookingRequest>,
) -> Response
where
    R: BookingRepository + ?Sized + 'static,
{
    respond(service.create_booking(request), true)
}

pub(crate) async fn get_booking_handler<R>(
    State(service): State<Arc<BookingService<R>>>,
    Path(reference_id): Path<String>,
) -> Response
where
    R: BookingRepository + ?Sized + 'static,
{
    respond(service.get_booking_by_reference_id(&reference_id), false)
}

pub(crate) async fn search_bookings_handler<R>(
    State(service): State<Arc<BookingService<R>>>,
    Query(query): Query<BookingSearchQuery>,
) -> Response
where
    R: BookingRepository + ?Sized + 'static,
{
    let outcomes = match query.employee_id {
        Some(employee_id) => service.get_bookings_by_employee_id(&employee_id),
        None => service.get_all_bookings(),
    };

    (StatusCode::OK, axum::Json(outcomes)).into_response()
}

pub(crate) async fn update_status_handler<R>(
    State(service): State<Arc<BookingService<R>>>,
    Path(reference_id): Path<String>,
    axum::Json(body): axum::Json<StatusUpdateBody>,
) -> Response
where
    R: BookingRepository + ?Sized + 'static,
{
    respond(
        service.update_booking_status(&reference_id, &body.status),
        false,
    )
}

pub(crate) async fn cancel_booking_handler<R>(
    State(service): State<Arc<BookingService<R>>>,
    Path(reference_id): Path<String>,
) -> Response
where
    R: BookingRepository + ?Sized + 'static,
{
    respond(service.cancel_booking(&reference_id), false)
}
