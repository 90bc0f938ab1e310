//! Command implementations

use clap::ValueEnum;
use driftwatch_core::errors::DriftwatchError;
use driftwatch_core::model::Response;

pub mod compare;
pub mod trend;

/// Output rendering for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON of the structured result
    Json,
}

fn load_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, DriftwatchError> {
    let bytes = std::fs::read(path).map_err(|source| DriftwatchError::SnapshotRead {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| DriftwatchError::SnapshotDecode {
        path: path.to_string(),
        source,
    })
}

/// Load one recorded snapshot from a JSON file.
pub(crate) fn load_snapshot(path: &str) -> Result<Response, DriftwatchError> {
    load_json(path)
}

/// Load a chronological snapshot history (JSON array, oldest first).
pub(crate) fn load_history(path: &str) -> Result<Vec<Response>, DriftwatchError> {
    load_json(path)
}
