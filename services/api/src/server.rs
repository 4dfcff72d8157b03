use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;
use travel_booking::bookings::BookingService;
use travel_booking::config::AppConfig;
use travel_booking::employees::EmployeeService;
use travel_booking::error::AppError;
use travel_booking::storage::build_repositories;
use travel_booking::telemetry;

use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_api_routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(backend) = args.storage.take() {
        config.storage.backend = backend;
    }
    if let Some(path) = args.storage_path.take() {
        config.storage.path = path;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repositories = build_repositories(&config.storage)?;
    let employee_service = Arc::new(EmployeeService::new(repositories.employees));
    let booking_service = Arc::new(BookingService::new(repositories.bookings));

    let app = with_api_routes(employee_service, booking_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        backend = ?config.storage.backend,
        %addr,
        "travel booking service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
