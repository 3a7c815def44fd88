//! Prometheus exporter initialization.

use metrics_exporter_prometheus::PrometheusBuilder;
use snafu::prelude::*;
use std::net::SocketAddr;
use tracing::info;

use crate::error::{MetricsError, PrometheusInitSnafu};

/// Histogram buckets for iteration durations (in seconds).
const DURATION_BUCKETS: &[f64] = &[0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 30.0];

/// Install the global Prometheus recorder and serve `/metrics` on `addr`.
///
/// Must be called from within a Tokio runtime; the listener is spawned onto it.
pub fn init(addr: SocketAddr) -> Result<(), MetricsError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .set_buckets(DURATION_BUCKETS)
        .context(PrometheusInitSnafu)?
        .install()
        .context(PrometheusInitSnafu)?;

    info!(%addr, "Metrics server started");
    Ok(())
}
