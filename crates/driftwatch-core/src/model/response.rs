use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One observed HTTP response for a monitored endpoint
///
/// Produced by the HTTP collaborator, recorded by the storage collaborator,
/// and borrowed by the engine for the duration of one comparison. Immutable
/// once constructed.
///
/// The serde form is the recorded-snapshot file format: the body travels as
/// base64 (it is opaque bytes, not guaranteed UTF-8) and the latency as
/// integer milliseconds under `latency_ms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// HTTP status code as received
    pub status_code: u16,

    /// Header name to single value, names kept in the case they arrived in
    pub headers: BTreeMap<String, String>,

    /// Raw body bytes, typically UTF-8 JSON; empty is a valid body
    #[serde(with = "body_base64")]
    pub body: Vec<u8>,

    /// When the response was observed
    pub timestamp: DateTime<Utc>,

    /// Round-trip latency of the probe; zero means "not measured"
    #[serde(rename = "latency_ms", with = "duration_millis")]
    pub latency: Duration,
}

impl Response {
    /// Create a snapshot with the given status and body, observed now
    ///
    /// Headers start empty and latency starts at zero; use the `with_*`
    /// builders to fill them in.
    pub fn new(status_code: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status_code,
            headers: BTreeMap::new(),
            body: body.into(),
            timestamp: Utc::now(),
            latency: Duration::ZERO,
        }
    }

    /// Add one header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Replace the full header map
    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Set the observed latency
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Set the observation timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Whether the status code is a 2xx success
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Whether a latency was actually measured for this snapshot
    pub fn has_latency(&self) -> bool {
        !self.latency.is_zero()
    }

    /// Observed latency in whole milliseconds
    pub fn latency_ms(&self) -> u64 {
        self.latency.as_millis() as u64
    }

    /// Parse the body as a JSON document
    ///
    /// An empty body parses to `Value::Null`; anything else must be valid
    /// JSON or the comparison it feeds is rejected wholesale.
    pub fn parse_body(&self) -> serde_json::Result<Value> {
        if self.body.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&self.body)
    }
}

mod body_base64 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, bytes);
        serializer.serialize_str(&encoded)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        base64::Engine::decode(&base64::engine::general_purpose::STANDARD, &encoded)
            .map_err(serde::de::Error::custom)
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(latency: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(latency.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let ms = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(ms))
    }
}
