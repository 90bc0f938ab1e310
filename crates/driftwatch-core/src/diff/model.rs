//! Drift diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Change collections are `Vec`s in emission order, which is deterministic
//! because object keys come out of `serde_json`'s sorted maps.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Severity of a single observed change.
///
/// Ordered so aggregation can take the maximum across many observations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Additive or cosmetic change, unlikely to affect consumers
    Low,
    /// Visible change that well-behaved consumers should tolerate
    Medium,
    /// Change likely to affect consumers relying on the current shape
    High,
    /// Change that almost certainly breaks consumers
    Critical,
}

impl Severity {
    /// Lowercase label for rendering
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

/// Consumer impact level derived from severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Impact {
    /// No expected consumer impact
    None,
    /// Cosmetic impact only
    Minor,
    /// Consumers may need minor adjustments
    Moderate,
    /// Consumers likely need code changes
    Major,
    /// Consumers are expected to break outright
    Critical,
}

impl Impact {
    /// Lowercase label for rendering
    pub fn label(&self) -> &'static str {
        match self {
            Impact::None => "none",
            Impact::Minor => "minor",
            Impact::Moderate => "moderate",
            Impact::Major => "major",
            Impact::Critical => "critical",
        }
    }
}

/// What happened to a document node between the two snapshots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DiffKind {
    /// Node exists now but not before
    Added,
    /// Node existed before but not now
    Removed,
    /// Node exists on both sides with the same type but a different value
    Modified,
    /// Node exists on both sides with different JSON types
    TypeChanged,
}

impl DiffKind {
    /// Stable change-type string used on flattened change records
    pub fn change_type(&self) -> &'static str {
        match self {
            DiffKind::Added => "field_added",
            DiffKind::Removed => "field_removed",
            DiffKind::Modified => "field_modified",
            DiffKind::TypeChanged => "type_changed",
        }
    }
}

/// Whether a change alters the response shape or only a value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChangeCategory {
    /// Shape change: presence or type of a node differs
    Structural,
    /// Value change: same shape, different content
    Data,
}

/// One atomic observation from the tree differ.
///
/// Transient: consumed by the classifier immediately, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDiff {
    /// Document path of the observation, root is `$`
    pub path: String,
    /// Kind of divergence observed
    pub kind: DiffKind,
    /// Value on the previous side, if it existed
    pub old_value: Option<Value>,
    /// Value on the current side, if it exists
    pub new_value: Option<Value>,
    /// Severity assigned at emission time
    pub severity: Severity,
}

/// Classification verdict for one field diff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeClassification {
    /// Structural (shape) vs data (value) change
    pub category: ChangeCategory,
    /// Severity carried over from the differ
    pub severity: Severity,
    /// Consumer impact derived from severity
    pub impact: Impact,
    /// Whether the change is judged likely to break consumers
    pub breaking: bool,
    /// Confidence in the verdict; fixed at [`DEFAULT_CONFIDENCE`](crate::diff::classify::DEFAULT_CONFIDENCE)
    pub confidence: f64,
    /// Short human-readable justification of the verdict
    pub reasoning: String,
}

/// A change that alters the shape of the response.
///
/// Covers field added/removed, type changed, status code changed, and
/// header added/removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StructuralChange {
    /// Where the change happened (`$.field`, `$.status_code`, `$.headers.<name>`)
    pub path: String,
    /// Human-readable description of the change
    pub description: String,
    /// Value on the previous side, if any
    pub old_value: Option<Value>,
    /// Value on the current side, if any
    pub new_value: Option<Value>,
    /// Assigned severity
    pub severity: Severity,
    /// Whether this change alone is judged breaking
    pub breaking: bool,
}

/// A change that preserves shape but alters a value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataChange {
    /// Where the change happened
    pub path: String,
    /// Previous value
    pub old_value: Option<Value>,
    /// Current value
    pub new_value: Option<Value>,
    /// Stable change-type string (e.g. `field_modified`, `header_value_changed`)
    pub change_type: String,
    /// Assigned severity
    pub severity: Severity,
    /// Human-readable description of the change
    pub description: String,
}

/// Breaking view over a body structural change.
///
/// A filtered projection: its structural twin is found by path equality,
/// there is no back-reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreakingChange {
    /// Stable change-type string keyed by the diff kind
    pub change_type: String,
    /// Where the change happened
    pub path: String,
    /// Human-readable description of the change
    pub description: String,
    /// Consumer impact level
    pub impact: Impact,
    /// Generated mitigation hint for operators
    pub mitigation: String,
}

/// Latency shift between the two snapshots.
///
/// Present only when the delta crossed the significance threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceChange {
    /// Latency of the previous snapshot in milliseconds
    pub previous_ms: u64,
    /// Latency of the current snapshot in milliseconds
    pub current_ms: u64,
    /// Signed latency delta in milliseconds (negative means faster)
    pub delta_ms: i64,
    /// Severity from the percent-change tiers
    pub severity: Severity,
    /// Human-readable description of the shift
    pub description: String,
}

/// Numeric roll-up over all changes in a diff result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffSummary {
    /// Structural + data changes + 1 if a performance change is present
    pub total_changes: usize,
    /// Number of entries in the breaking-changes collection
    pub breaking_changes: usize,
    /// Changes at critical severity
    pub critical_changes: usize,
    /// Changes at high severity
    pub high_changes: usize,
    /// Changes at medium severity
    pub medium_changes: usize,
    /// Changes at low severity
    pub low_changes: usize,
}

/// The unit of output of one `compare_responses` call.
///
/// Created fresh per comparison and never mutated afterward; callers copy
/// what they need into their own durable records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffResult {
    /// True if any section observed a change
    pub has_changes: bool,
    /// Shape-altering changes in emission order
    pub structural_changes: Vec<StructuralChange>,
    /// Value-only changes in emission order
    pub data_changes: Vec<DataChange>,
    /// Breaking projections of body structural changes
    pub breaking_changes: Vec<BreakingChange>,
    /// Latency shift, when significant
    pub performance_change: Option<PerformanceChange>,
    /// Numeric roll-up
    pub summary: DiffSummary,
}

impl DiffResult {
    /// The change surfaced in one-line alert headlines
    ///
    /// By convention the first structural change; callers wanting more
    /// iterate the collections themselves.
    pub fn representative_change(&self) -> Option<&StructuralChange> {
        self.structural_changes.first()
    }
}

/// Coarse latency direction over a snapshot series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TrendDirection {
    /// Second half of the series is at least 10% faster
    Improving,
    /// Within the +/-10% band
    Stable,
    /// Second half of the series is at least 10% slower
    Degrading,
}

impl TrendDirection {
    /// Lowercase label for rendering
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Stable => "stable",
            TrendDirection::Degrading => "degrading",
        }
    }
}

/// Latency trend over a snapshot series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceTrend {
    /// Mean of the positive latencies across the whole series, in milliseconds
    pub average_response_time_ms: f64,
    /// Direction from comparing the half-series averages
    pub direction: TrendDirection,
    /// Reserved: per-percentile latency deltas, populated once percentile
    /// series are recorded alongside snapshots
    pub percentile_deltas: std::collections::BTreeMap<String, f64>,
}

/// Stability summary over an ordered snapshot history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendAnalysis {
    /// Number of snapshots analyzed
    pub total_responses: usize,
    /// Milliseconds spanned from first to last snapshot timestamp
    pub period_ms: i64,
    /// Fraction of adjacent snapshot pairs that showed changes
    pub change_frequency: f64,
    /// `1.0 - change_frequency`
    pub stability_score: f64,
    /// Latency trend, when enough latencies were recorded
    pub performance: Option<PerformanceTrend>,
}
