//! Prometheus metrics recorder and `/metrics` rendering.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;

use crate::error::ServerError;

/// Content type of the `/metrics` response.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Install the Prometheus metrics recorder (global).
///
/// Call once at startup, before anything is recorded. A second call fails.
pub fn install_recorder() -> Result<PrometheusHandle, ServerError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics(e.to_string()))?;
    info!("prometheus metrics recorder installed");
    Ok(handle)
}

/// Render Prometheus text format from the installed recorder.
pub fn render(handle: &PrometheusHandle) -> String {
    handle.render()
}

/// Contact submissions (counter, labels: outcome).
pub const CONTACT_SUBMISSIONS_TOTAL: &str = "contact_submissions_total";
/// Rendered pages (counter, labels: page).
pub const PAGE_VIEWS_TOTAL: &str = "page_views_total";
