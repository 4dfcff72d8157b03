use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use travel_booking::config::StorageBackend;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_backend(raw: &str) -> Result<StorageBackend, String> {
    StorageBackend::from_str(raw).map_err(|err| err.to_string())
}
