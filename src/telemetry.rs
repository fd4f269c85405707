//! Telemetry metric name constants.
//!
//! Centralised metric names for attrisk operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `attrisk_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `operation` — endpoint invoked ("predict", "feature_info", "health")
//! - `status` — outcome: "ok" or "error"

/// Total requests dispatched to the service.
///
/// Labels: `operation`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "attrisk_requests_total";

/// Request duration in seconds.
///
/// Labels: `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "attrisk_request_duration_seconds";
