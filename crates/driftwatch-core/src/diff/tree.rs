//! Recursive tree differ over parsed JSON documents
//!
//! Walks two `serde_json::Value` trees in lockstep and emits one
//! [`FieldDiff`] per divergence at every depth. Paths are JSON-pointer-like:
//! root is `$`, object members are `$.key`, array elements are `$.items[2]`.
//!
//! Output order is deterministic: object keys iterate in sorted order
//! (serde_json maps are BTreeMaps here) and arrays in index order.

use serde_json::Value;

use crate::diff::classify::PathClassifier;
use crate::diff::model::{DiffKind, FieldDiff};

/// Compare two parsed documents and collect every field-level divergence
///
/// The classifier supplies emission-time severity; the differ itself cannot
/// fail on already-parsed values.
pub fn compare_trees(
    previous: &Value,
    current: &Value,
    classifier: &dyn PathClassifier,
) -> Vec<FieldDiff> {
    let mut diffs = Vec::new();
    compare_value(Some(previous), Some(current), "$", classifier, &mut diffs);
    diffs
}

fn compare_value(
    previous: Option<&Value>,
    current: Option<&Value>,
    path: &str,
    classifier: &dyn PathClassifier,
    out: &mut Vec<FieldDiff>,
) {
    // JSON null and absent are the same observation: "nothing here".
    // Normalizing at every step keeps added/removed reporting symmetric.
    let previous = previous.filter(|v| !v.is_null());
    let current = current.filter(|v| !v.is_null());

    match (previous, current) {
        (None, None) => {}
        (Some(old), None) => {
            out.push(FieldDiff {
                path: path.to_string(),
                kind: DiffKind::Removed,
                old_value: Some(old.clone()),
                new_value: None,
                severity: classifier.severity_for(path, DiffKind::Removed),
            });
        }
        (None, Some(new)) => {
            out.push(FieldDiff {
                path: path.to_string(),
                kind: DiffKind::Added,
                old_value: None,
                new_value: Some(new.clone()),
                severity: classifier.severity_for(path, DiffKind::Added),
            });
        }
        (Some(old), Some(new)) => {
            if json_type(old) != json_type(new) {
                // One diff for the whole subtree; element-level noise under
                // a type change would only obscure the real problem.
                out.push(FieldDiff {
                    path: path.to_string(),
                    kind: DiffKind::TypeChanged,
                    old_value: Some(old.clone()),
                    new_value: Some(new.clone()),
                    severity: classifier.severity_for(path, DiffKind::TypeChanged),
                });
                return;
            }

            match (old, new) {
                (Value::Object(prev_map), Value::Object(curr_map)) => {
                    for (key, old_val) in prev_map {
                        if !curr_map.contains_key(key) {
                            let child_path = object_path(path, key);
                            compare_value(Some(old_val), None, &child_path, classifier, out);
                        }
                    }
                    for (key, new_val) in curr_map {
                        let child_path = object_path(path, key);
                        compare_value(
                            prev_map.get(key),
                            Some(new_val),
                            &child_path,
                            classifier,
                            out,
                        );
                    }
                }
                (Value::Array(prev_items), Value::Array(curr_items)) => {
                    if prev_items.len() != curr_items.len() {
                        out.push(FieldDiff {
                            path: path.to_string(),
                            kind: DiffKind::Modified,
                            old_value: Some(Value::from(prev_items.len())),
                            new_value: Some(Value::from(curr_items.len())),
                            severity: classifier.severity_for(path, DiffKind::Modified),
                        });
                    }
                    let longest = prev_items.len().max(curr_items.len());
                    for i in 0..longest {
                        let child_path = index_path(path, i);
                        compare_value(
                            prev_items.get(i),
                            curr_items.get(i),
                            &child_path,
                            classifier,
                            out,
                        );
                    }
                }
                _ => {
                    if old != new {
                        out.push(FieldDiff {
                            path: path.to_string(),
                            kind: DiffKind::Modified,
                            old_value: Some(old.clone()),
                            new_value: Some(new.clone()),
                            severity: classifier.severity_for(path, DiffKind::Modified),
                        });
                    }
                }
            }
        }
    }
}

/// Runtime JSON type of a value, for type-change detection
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn object_path(parent: &str, key: &str) -> String {
    format!("{}.{}", parent, key)
}

fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}
