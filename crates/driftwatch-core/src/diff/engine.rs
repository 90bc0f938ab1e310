//! Response comparison engine.
//!
//! The core entry point is [`compare_responses`], which accepts the previous
//! and current snapshots of one endpoint and produces a [`DiffResult`].

use serde_json::Value;

use crate::diff::classify::{classify, mitigation_for, CriticalFieldClassifier, PathClassifier};
use crate::diff::model::{
    BreakingChange, ChangeCategory, DataChange, DiffKind, DiffResult, DiffSummary, FieldDiff,
    PerformanceChange, Severity, StructuralChange,
};
use crate::diff::tree::{compare_trees, json_type};
use crate::errors::{absent_snapshot, unparseable_body, Result};
use crate::model::Response;

/// Header names whose removal is judged at `critical` severity.
const CRITICAL_HEADERS: &[&str] = &[
    "content-type",
    "authorization",
    "location",
    "etag",
    "cache-control",
];

/// Subset of [`CRITICAL_HEADERS`] whose removal also breaks consumers outright.
const BREAKING_HEADER_REMOVALS: &[&str] = &["content-type", "location", "etag"];

/// Floor for the latency significance threshold, in milliseconds.
const MIN_LATENCY_THRESHOLD_MS: u64 = 100;

/// Compare two snapshots of the same endpoint and report every drift.
///
/// Sections run in a fixed order (status code, headers, body, latency) and
/// each appends to the result independently, so output ordering is stable
/// for identical inputs.
///
/// # Arguments
///
/// * `previous` - The snapshot recorded by the last check
/// * `current` - The snapshot just observed
///
/// # Errors
///
/// - `InvalidInput` — either side is `None`; the comparison contract
///   requires two snapshots and there is no partial result
/// - `UnparseableBody` — either body is non-empty and not valid JSON
pub fn compare_responses(
    previous: Option<&Response>,
    current: Option<&Response>,
) -> Result<DiffResult> {
    let previous = previous.ok_or_else(|| absent_snapshot("previous"))?;
    let current = current.ok_or_else(|| absent_snapshot("current"))?;

    let classifier = CriticalFieldClassifier;
    let mut structural_changes = Vec::new();
    let mut data_changes = Vec::new();
    let mut breaking_changes = Vec::new();

    // Status code
    compare_status(previous, current, &mut structural_changes);

    // Headers
    compare_headers(
        previous,
        current,
        &mut structural_changes,
        &mut data_changes,
    );

    // Body
    compare_bodies(
        previous,
        current,
        &classifier,
        &mut structural_changes,
        &mut data_changes,
        &mut breaking_changes,
    )?;

    // Latency
    let performance_change = compare_latency(previous, current);

    // Summary
    let summary = summarize(
        &structural_changes,
        &data_changes,
        &breaking_changes,
        performance_change.as_ref(),
    );
    let has_changes = summary.total_changes > 0;

    Ok(DiffResult {
        has_changes,
        structural_changes,
        data_changes,
        breaking_changes,
        performance_change,
        summary,
    })
}

/// Compare status codes.
///
/// A success turning into a non-success is the one transition consumers
/// cannot paper over, so it alone ranks `critical` and breaking.
fn compare_status(previous: &Response, current: &Response, out: &mut Vec<StructuralChange>) {
    if previous.status_code == current.status_code {
        return;
    }
    let broke_success = previous.is_success() && !current.is_success();
    out.push(StructuralChange {
        path: "$.status_code".to_string(),
        description: format!(
            "status code changed from {} to {}",
            previous.status_code, current.status_code
        ),
        old_value: Some(Value::from(previous.status_code)),
        new_value: Some(Value::from(current.status_code)),
        severity: if broke_success {
            Severity::Critical
        } else {
            Severity::Medium
        },
        breaking: broke_success,
    });
}

/// Compare header maps.
///
/// Keys match exactly as received; the critical-name sets match on the
/// lowercased name so `Content-Type` and `content-type` rank the same.
/// Removals and additions are structural; a value change on a surviving
/// header is a data change.
fn compare_headers(
    previous: &Response,
    current: &Response,
    structural: &mut Vec<StructuralChange>,
    data: &mut Vec<DataChange>,
) {
    for (name, old_value) in &previous.headers {
        match current.headers.get(name) {
            None => {
                let lowered = name.to_ascii_lowercase();
                structural.push(StructuralChange {
                    path: header_path(name),
                    description: format!("header `{}` was removed", name),
                    old_value: Some(Value::String(old_value.clone())),
                    new_value: None,
                    severity: if CRITICAL_HEADERS.contains(&lowered.as_str()) {
                        Severity::Critical
                    } else {
                        Severity::Medium
                    },
                    breaking: BREAKING_HEADER_REMOVALS.contains(&lowered.as_str()),
                });
            }
            Some(new_value) if new_value != old_value => {
                data.push(DataChange {
                    path: header_path(name),
                    old_value: Some(Value::String(old_value.clone())),
                    new_value: Some(Value::String(new_value.clone())),
                    change_type: "header_value_changed".to_string(),
                    severity: if name.eq_ignore_ascii_case("content-type") {
                        Severity::High
                    } else {
                        Severity::Low
                    },
                    description: format!("header `{}` value changed", name),
                });
            }
            Some(_) => {}
        }
    }
    for (name, new_value) in &current.headers {
        if !previous.headers.contains_key(name) {
            structural.push(StructuralChange {
                path: header_path(name),
                description: format!("header `{}` was added", name),
                old_value: None,
                new_value: Some(Value::String(new_value.clone())),
                severity: Severity::Low,
                breaking: false,
            });
        }
    }
}

fn header_path(name: &str) -> String {
    format!("$.headers.{}", name)
}

/// Compare parsed bodies.
///
/// The single failure point of a comparison: either body failing to parse
/// aborts the whole call rather than producing a partial result. Every
/// tree divergence runs through the classifier; structural classifications
/// land in `structural` (and, when breaking, also project into `breaking`),
/// data classifications land in `data`.
fn compare_bodies(
    previous: &Response,
    current: &Response,
    classifier: &dyn PathClassifier,
    structural: &mut Vec<StructuralChange>,
    data: &mut Vec<DataChange>,
    breaking: &mut Vec<BreakingChange>,
) -> Result<()> {
    let old_body = previous
        .parse_body()
        .map_err(|e| unparseable_body("previous", &e))?;
    let new_body = current
        .parse_body()
        .map_err(|e| unparseable_body("current", &e))?;

    for diff in compare_trees(&old_body, &new_body, classifier) {
        let classification = classify(&diff, classifier);
        let description = describe_field_diff(&diff);
        match classification.category {
            ChangeCategory::Structural => {
                if classification.breaking {
                    breaking.push(BreakingChange {
                        change_type: diff.kind.change_type().to_string(),
                        path: diff.path.clone(),
                        description: description.clone(),
                        impact: classification.impact,
                        mitigation: mitigation_for(diff.kind),
                    });
                }
                structural.push(StructuralChange {
                    path: diff.path,
                    description,
                    old_value: diff.old_value,
                    new_value: diff.new_value,
                    severity: classification.severity,
                    breaking: classification.breaking,
                });
            }
            ChangeCategory::Data => {
                data.push(DataChange {
                    path: diff.path,
                    old_value: diff.old_value,
                    new_value: diff.new_value,
                    change_type: "field_modified".to_string(),
                    severity: classification.severity,
                    description,
                });
            }
        }
    }
    Ok(())
}

/// Human-readable one-liner for a body-tree divergence.
fn describe_field_diff(diff: &FieldDiff) -> String {
    match diff.kind {
        DiffKind::Added => format!("field `{}` was added", diff.path),
        DiffKind::Removed => format!("field `{}` was removed", diff.path),
        DiffKind::TypeChanged => {
            let old = diff.old_value.as_ref().map(json_type).unwrap_or("null");
            let new = diff.new_value.as_ref().map(json_type).unwrap_or("null");
            format!(
                "field `{}` changed type from {} to {}",
                diff.path, old, new
            )
        }
        DiffKind::Modified => format!("field `{}` value changed", diff.path),
    }
}

/// Compare observed latencies.
///
/// Only runs when both snapshots measured a latency. A delta is significant
/// once it reaches `max(previous / 10, 100ms)`; anything smaller is probe
/// noise and produces no change at all.
fn compare_latency(previous: &Response, current: &Response) -> Option<PerformanceChange> {
    if !previous.has_latency() || !current.has_latency() {
        return None;
    }
    let previous_ms = previous.latency_ms();
    let current_ms = current.latency_ms();
    let delta_ms = current_ms as i64 - previous_ms as i64;
    let threshold = (previous_ms / 10).max(MIN_LATENCY_THRESHOLD_MS);
    if delta_ms.unsigned_abs() < threshold {
        return None;
    }

    let percent = delta_ms as f64 / previous_ms as f64 * 100.0;
    let verb = if delta_ms > 0 { "regressed" } else { "improved" };
    Some(PerformanceChange {
        previous_ms,
        current_ms,
        delta_ms,
        severity: latency_severity(percent),
        description: format!(
            "response latency {} from {}ms to {}ms ({:+.0}%)",
            verb, previous_ms, current_ms, percent
        ),
    })
}

/// Severity tiers for a latency delta, by percent change against the
/// previous latency. Improvement tiers trip at smaller magnitudes than
/// regression tiers.
fn latency_severity(percent: f64) -> Severity {
    if percent >= 100.0 || percent <= -50.0 {
        Severity::Critical
    } else if percent >= 50.0 || percent <= -25.0 {
        Severity::High
    } else if percent >= 25.0 || percent <= -10.0 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Tally the summary counters over every change the sections produced.
fn summarize(
    structural: &[StructuralChange],
    data: &[DataChange],
    breaking: &[BreakingChange],
    performance: Option<&PerformanceChange>,
) -> DiffSummary {
    let mut summary = DiffSummary {
        total_changes: structural.len() + data.len() + usize::from(performance.is_some()),
        breaking_changes: breaking.len(),
        critical_changes: 0,
        high_changes: 0,
        medium_changes: 0,
        low_changes: 0,
    };
    let severities = structural
        .iter()
        .map(|c| c.severity)
        .chain(data.iter().map(|c| c.severity))
        .chain(performance.map(|c| c.severity));
    for severity in severities {
        match severity {
            Severity::Critical => summary.critical_changes += 1,
            Severity::High => summary.high_changes += 1,
            Severity::Medium => summary.medium_changes += 1,
            Severity::Low => summary.low_changes += 1,
        }
    }
    summary
}
