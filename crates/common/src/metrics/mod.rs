//! Metrics and observability utilities
//!
//! Counter helpers for the workflow hot paths, following the metrics-rs
//! naming conventions. Exporter wiring belongs to whatever process hosts
//! the core.

use crate::db::models::{PublicationKind, ReviewAction};
use metrics::{counter, describe_counter, Unit};

/// Metrics prefix for all ScholarTrack metrics
pub const METRICS_PREFIX: &str = "scholartrack";

/// Register all metric descriptions
pub fn register_metrics() {
    describe_counter!(
        format!("{}_submissions_total", METRICS_PREFIX),
        Unit::Count,
        "Publication records created by owners"
    );

    describe_counter!(
        format!("{}_review_transitions_total", METRICS_PREFIX),
        Unit::Count,
        "Administrative approval-workflow transitions applied"
    );

    describe_counter!(
        format!("{}_review_transition_failures_total", METRICS_PREFIX),
        Unit::Count,
        "Approval-workflow transitions refused by the state machine"
    );
}

/// Count one owner submission
pub fn record_submission(kind: PublicationKind) {
    counter!(
        format!("{}_submissions_total", METRICS_PREFIX),
        "kind" => kind.to_string()
    )
    .increment(1);
}

/// Count one applied review transition
pub fn record_transition(kind: PublicationKind, action: ReviewAction) {
    counter!(
        format!("{}_review_transitions_total", METRICS_PREFIX),
        "kind" => kind.to_string(),
        "action" => action.to_string()
    )
    .increment(1);
}

/// Count one refused review transition
pub fn record_transition_failure(kind: PublicationKind, action: ReviewAction) {
    counter!(
        format!("{}_review_transition_failures_total", METRICS_PREFIX),
        "kind" => kind.to_string(),
        "action" => action.to_string()
    )
    .increment(1);
}
