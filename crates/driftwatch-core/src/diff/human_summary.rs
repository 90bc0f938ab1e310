//! Human-readable summary renderer for drift results.

use driftwatch_core_types::Sensitive;
use serde_json::Value;

use crate::diff::model::DiffResult;

/// Header names whose values never appear in alert text.
const SENSITIVE_HEADERS: &[&str] = &[
    "authorization",
    "cookie",
    "set-cookie",
    "x-api-key",
    "proxy-authorization",
];

/// Longest rendered value before elision kicks in.
const MAX_VALUE_CHARS: usize = 60;

/// Render a human-readable Markdown summary of a [`DiffResult`].
///
/// The summary is the alert message body for notification channels. It is
/// informational only and does not affect the structured result; values
/// under sensitive header paths are redacted before rendering.
pub fn render_human_summary(diff: &DiffResult) -> String {
    let mut out = String::new();

    // Header
    out.push_str("## Drift Report\n\n");

    if !diff.has_changes {
        out.push_str("_No drift detected._\n");
        return out;
    }

    // Headline counts
    let summary = &diff.summary;
    out.push_str(&format!(
        "**Changes**: {} total, {} breaking  \n\
         **By severity**: {} critical, {} high, {} medium, {} low\n\n",
        summary.total_changes,
        summary.breaking_changes,
        summary.critical_changes,
        summary.high_changes,
        summary.medium_changes,
        summary.low_changes,
    ));

    // Breaking changes lead; they are what the alert exists for
    if !diff.breaking_changes.is_empty() {
        out.push_str("### Breaking Changes\n\n");
        for change in &diff.breaking_changes {
            out.push_str(&format!(
                "- **{}** at `{}` ({} impact): {}\n  Mitigation: {}\n",
                change.change_type,
                change.path,
                change.impact.label(),
                change.description,
                change.mitigation
            ));
        }
        out.push('\n');
    }

    // Structural changes
    if !diff.structural_changes.is_empty() {
        out.push_str("### Structural Changes\n\n");
        for change in &diff.structural_changes {
            out.push_str(&format!(
                "- [{}] `{}`: {} ({} → {})\n",
                change.severity.label(),
                change.path,
                change.description,
                render_value(&change.path, change.old_value.as_ref()),
                render_value(&change.path, change.new_value.as_ref()),
            ));
        }
        out.push('\n');
    }

    // Data changes
    if !diff.data_changes.is_empty() {
        out.push_str("### Data Changes\n\n");
        for change in &diff.data_changes {
            out.push_str(&format!(
                "- [{}] `{}`: {} → {}\n",
                change.severity.label(),
                change.path,
                render_value(&change.path, change.old_value.as_ref()),
                render_value(&change.path, change.new_value.as_ref()),
            ));
        }
        out.push('\n');
    }

    // Performance
    if let Some(perf) = &diff.performance_change {
        out.push_str("### Performance\n\n");
        out.push_str(&format!(
            "- [{}] {}\n\n",
            perf.severity.label(),
            perf.description
        ));
    }

    out
}

/// Render one side of a change for display.
///
/// Values under sensitive header paths pass through [`Sensitive`] so the
/// rendered text carries the redaction marker instead of the secret.
fn render_value(path: &str, value: Option<&Value>) -> String {
    let Some(value) = value else {
        return "_absent_".to_string();
    };
    if is_sensitive_path(path) {
        return format!("`{}`", Sensitive::new(value));
    }
    format!("`{}`", short(&value.to_string()))
}

/// Whether a path addresses a header whose value must not be rendered.
fn is_sensitive_path(path: &str) -> bool {
    match path.strip_prefix("$.headers.") {
        Some(name) => SENSITIVE_HEADERS.contains(&name.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// Elide a rendered value for display.
fn short(rendered: &str) -> String {
    if rendered.len() <= MAX_VALUE_CHARS {
        return rendered.to_string();
    }
    let mut cut = MAX_VALUE_CHARS;
    while !rendered.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…", &rendered[..cut])
}
