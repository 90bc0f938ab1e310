//! Change classification over field diffs
//!
//! This module turns raw [`FieldDiff`] observations into
//! [`ChangeClassification`] verdicts: category, breaking-ness, impact,
//! confidence, and reasoning. The path heuristic behind the judgment calls
//! lives behind the `PathClassifier` trait so a contract-aware classifier
//! can be substituted without touching the differ or the aggregator.

use crate::diff::model::{
    ChangeCategory, ChangeClassification, DiffKind, FieldDiff, Impact, Severity,
};

/// Confidence reported on every classification verdict.
///
/// A fixed constant: the classifier has no per-change evidence model, and
/// downstream alert thresholds are tuned against this exact value.
pub const DEFAULT_CONFIDENCE: f64 = 0.8;

/// Path substrings that mark a field as identifier-like or status-like.
///
/// Matching is case-insensitive substring matching over the whole path, so
/// `error_code` matches (`error`, `code`) while `description` does not.
/// The false-positive potential is accepted; this is a heuristic, not a
/// schema-derived fact.
const CRITICAL_FIELD_MARKERS: [&str; 9] = [
    "id", "uuid", "key", "token", "version", "status", "type", "error", "code",
];

/// Strategy for judging how risky a change at a given document path is
///
/// The default implementation is [`CriticalFieldClassifier`]; a future
/// contract-aware classifier can replace it per call site.
pub trait PathClassifier: Send + Sync {
    /// Check whether the path names a critical-looking field
    ///
    /// # Arguments
    /// * `path` - Document path of the observation (e.g. `$.user.id`)
    ///
    /// # Returns
    /// * `true` - Changes at this path deserve escalated severity
    /// * `false` - The path carries no special weight
    fn is_critical(&self, path: &str) -> bool;

    /// Severity for a diff of the given kind at the given path
    ///
    /// The provided mapping is the canonical one: removals are critical on
    /// critical paths and high otherwise, type changes are always critical,
    /// additions are always low, modifications are high on critical paths
    /// and medium otherwise.
    fn severity_for(&self, path: &str, kind: DiffKind) -> Severity {
        match kind {
            DiffKind::Removed => {
                if self.is_critical(path) {
                    Severity::Critical
                } else {
                    Severity::High
                }
            }
            DiffKind::TypeChanged => Severity::Critical,
            DiffKind::Added => Severity::Low,
            DiffKind::Modified => {
                if self.is_critical(path) {
                    Severity::High
                } else {
                    Severity::Medium
                }
            }
        }
    }
}

/// Default path classifier: substring heuristic over critical field markers
///
/// # Example
/// ```
/// use driftwatch_core::diff::classify::{CriticalFieldClassifier, PathClassifier};
///
/// let classifier = CriticalFieldClassifier;
/// assert!(classifier.is_critical("$.user.id"));
/// assert!(classifier.is_critical("$.error_code"));
/// assert!(!classifier.is_critical("$.description"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CriticalFieldClassifier;

impl PathClassifier for CriticalFieldClassifier {
    fn is_critical(&self, path: &str) -> bool {
        let lowered = path.to_ascii_lowercase();
        CRITICAL_FIELD_MARKERS
            .iter()
            .any(|marker| lowered.contains(marker))
    }
}

/// Classify one field diff into a full verdict
pub fn classify(diff: &FieldDiff, classifier: &dyn PathClassifier) -> ChangeClassification {
    let category = match diff.kind {
        DiffKind::Added | DiffKind::Removed | DiffKind::TypeChanged => ChangeCategory::Structural,
        DiffKind::Modified => ChangeCategory::Data,
    };

    let critical_path = classifier.is_critical(&diff.path);
    let breaking = match diff.kind {
        DiffKind::Removed | DiffKind::TypeChanged => true,
        DiffKind::Modified => critical_path,
        DiffKind::Added => false,
    };

    ChangeClassification {
        category,
        severity: diff.severity,
        impact: impact_for(diff.severity),
        breaking,
        confidence: DEFAULT_CONFIDENCE,
        reasoning: build_reasoning(diff.kind, critical_path),
    }
}

/// Additional domain knowledge for context-aware severity assessment
///
/// Populated by callers that know more than the path heuristic does, e.g.
/// a schema validator that knows whether a field is required.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldContext {
    /// Whether the field is required by the known contract
    pub required: bool,
}

/// Re-assess a diff's severity with additional field context
///
/// Escalation is monotonic: a required field raises low to medium and
/// medium to high, and a critical path floors the result at high. The
/// assessed severity is never below the differ's own assignment.
pub fn assess_severity(
    diff: &FieldDiff,
    context: &FieldContext,
    classifier: &dyn PathClassifier,
) -> Severity {
    let mut severity = diff.severity;

    if context.required {
        severity = match severity {
            Severity::Low => Severity::Medium,
            Severity::Medium => Severity::High,
            other => other,
        };
    }

    if classifier.is_critical(&diff.path) && severity < Severity::High {
        severity = Severity::High;
    }

    severity
}

/// Fixed severity-to-impact mapping
fn impact_for(severity: Severity) -> Impact {
    match severity {
        Severity::Critical => Impact::Critical,
        Severity::High => Impact::Major,
        Severity::Medium => Impact::Moderate,
        Severity::Low => Impact::Minor,
    }
}

/// Join the applicable justifications for a verdict
fn build_reasoning(kind: DiffKind, critical_path: bool) -> String {
    let mut reasons: Vec<&str> = Vec::new();

    if kind == DiffKind::Removed {
        reasons.push("field removal is potentially breaking");
    }
    if kind == DiffKind::TypeChanged {
        reasons.push("type changes are breaking");
    }
    if critical_path {
        reasons.push("field is identified as critical");
    }

    if reasons.is_empty() {
        "no heightened-risk indicators matched".to_string()
    } else {
        reasons.join("; ")
    }
}

/// Mitigation hint for a breaking change, keyed by the diff kind
pub(crate) fn mitigation_for(kind: DiffKind) -> String {
    match kind {
        DiffKind::Removed => {
            "Restore the removed field or version the endpoint so consumers can migrate".to_string()
        }
        DiffKind::TypeChanged => {
            "Revert the type change or publish a coordinated migration for consumers".to_string()
        }
        DiffKind::Modified => {
            "Confirm consumers tolerate the new value of this critical field".to_string()
        }
        DiffKind::Added => "Additive change; no consumer action expected".to_string(),
    }
}
