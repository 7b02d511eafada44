use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Install the Prometheus recorder and describe all metrics
///
/// Fails if a global recorder is already installed.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "frame_actions_total",
        "Total number of frame actions handled"
    );
    describe_counter!(
        "upstream_requests_total",
        "Total number of requests sent to the indexing API"
    );
    describe_histogram!(
        "upstream_request_duration_seconds",
        "Upstream request duration in seconds"
    );
    describe_counter!(
        "upstream_errors_total",
        "Total number of upstream failures"
    );
    describe_gauge!(
        "frame_info",
        "Frame server version information"
    );

    gauge!("frame_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a handled frame action
pub fn record_frame_action(action: &str) {
    counter!(
        "frame_actions_total",
        "action" => action.to_string(),
    )
    .increment(1);
}

/// Record an upstream request outcome ("success" or "failure")
pub fn record_upstream_request(endpoint: &str, outcome: &str) {
    counter!(
        "upstream_requests_total",
        "endpoint" => endpoint.to_string(),
        "outcome" => outcome.to_string(),
    )
    .increment(1);
}

/// Record upstream request duration
pub fn record_upstream_duration(endpoint: &str, duration: Duration) {
    histogram!(
        "upstream_request_duration_seconds",
        "endpoint" => endpoint.to_string(),
    )
    .record(duration.as_secs_f64());
}

/// Record an upstream failure by kind
pub fn record_upstream_error(endpoint: &str, kind: &str) {
    counter!(
        "upstream_errors_total",
        "endpoint" => endpoint.to_string(),
        "kind" => kind.to_string(),
    )
    .increment(1);
}
