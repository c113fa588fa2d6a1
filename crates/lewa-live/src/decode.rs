//! Payload decoding for live updates.
//!
//! The decode step is pure: it returns a [`Result`] and performs no logging.
//! The subscription pump is the adapter that turns a [`MalformedPayload`]
//! into a diagnostic and drops the event.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A received payload that does not parse as JSON.
///
/// Recovered locally by the subscription pump: the event is dropped and the
/// subscription stays open.
#[derive(Debug, thiserror::Error)]
#[error("malformed live-update payload: {source}")]
pub struct MalformedPayload {
    /// The offending payload text, verbatim.
    pub payload: String,
    /// The underlying JSON parse error.
    #[source]
    pub source: serde_json::Error,
}

/// Decode one live-update payload as JSON.
///
/// Any JSON value is accepted; shape enforcement is left to typed views
/// like [`ScoreUpdate`].
pub fn decode_update(payload: &str) -> Result<Value, MalformedPayload> {
    serde_json::from_str(payload).map_err(|source| MalformedPayload {
        payload: payload.to_owned(),
        source,
    })
}

/// Typed view over a live ranking event.
///
/// Mirrors the per-user score rows the server publishes while a competition
/// with live ranking is running.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreUpdate {
    /// The scoring user.
    pub user_id: i64,
    /// Words per minute.
    pub wpm: u32,
    /// Accuracy percentage.
    pub accuracy: f64,
}

impl TryFrom<&Value> for ScoreUpdate {
    type Error = serde_json::Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value.clone())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
