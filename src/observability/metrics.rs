//! Metrics collection and exposition.
//!
//! # Metrics
//! - `uptrack_probes_total` (counter): probes by outcome class
//! - `uptrack_sources` (gauge): sources seen at cycle start
//! - `uptrack_evictions_total` (counter): sources removed past the threshold
//! - `uptrack_cycle_duration_seconds` (histogram): full-cycle wall time
//!
//! # Design Decisions
//! - Recording is always on and cheap; the Prometheus endpoint is
//!   only installed when enabled in config

use std::net::SocketAddr;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::monitor::probe::ProbeOutcome;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one probe outcome.
pub fn record_probe(outcome: &ProbeOutcome) {
    metrics::counter!("uptrack_probes_total", "outcome" => outcome.metric_class()).increment(1);
}

/// Record the number of sources snapshotted at cycle start.
pub fn record_source_count(count: usize) {
    metrics::gauge!("uptrack_sources").set(count as f64);
}

/// Record an eviction.
pub fn record_eviction() {
    metrics::counter!("uptrack_evictions_total").increment(1);
}

/// Record the wall time of a completed cycle.
pub fn record_cycle_duration(elapsed: Duration) {
    metrics::histogram!("uptrack_cycle_duration_seconds").record(elapsed.as_secs_f64());
}
