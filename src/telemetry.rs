//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus, statsd);
//! without a recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `llm_strings_`. Counters end in `_total`.
//!
//! # Common labels
//!
//! - `provider` — detected provider id, or "unknown"
//! - `severity` — "error" or "warning"

/// Total `normalize` calls (including those made by `validate`).
///
/// Labels: `provider`.
pub const NORMALIZE_TOTAL: &str = "llm_strings_normalize_total";

/// Total connection records validated.
///
/// Labels: `provider`.
pub const VALIDATE_TOTAL: &str = "llm_strings_validate_total";

/// Total validation issues reported.
///
/// Labels: `severity`.
pub const VALIDATION_ISSUES_TOTAL: &str = "llm_strings_validation_issues_total";
