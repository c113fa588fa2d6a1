//! Subscription lifecycle: connect, pump, close.
//!
//! [`LiveClient::subscribe`] opens a persistent `text/event-stream` GET to
//! `/competitions/{id}/live` and spawns a pump task that frames the response
//! bytes, decodes each event payload as JSON, and hands decoded values to the
//! caller's callback in arrival order.
//!
//! Failure policy on an open subscription:
//! - Malformed payload: one error-level diagnostic, event dropped, pump
//!   continues.
//! - Transport read error or stream end: one diagnostic, pump stops. No
//!   reconnection or backoff is performed here; that is the caller's call.

use bytes::Bytes;
use futures::{Stream, StreamExt};
use lewa_core::text::truncate_str;
use lewa_core::CompetitionId;
use lewa_settings::LiveSettings;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::decode::decode_update;
use crate::errors::{LiveError, Result};
use crate::sse::SseFrameDecoder;

/// Maximum bytes of a malformed payload echoed into diagnostics.
const PAYLOAD_PREVIEW_BYTES: usize = 200;

/// Client for opening live competition update subscriptions.
#[derive(Clone, Debug)]
pub struct LiveClient {
    http: reqwest::Client,
    base_url: String,
}

impl LiveClient {
    /// Create a client for the given competition server base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client with a caller-supplied `reqwest::Client`.
    #[must_use]
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    /// Create a client from the live section of the settings.
    #[must_use]
    pub fn from_settings(settings: &LiveSettings) -> Self {
        Self::new(settings.base_url.clone())
    }

    /// The configured base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Open a live subscription for a competition.
    ///
    /// `on_update` is invoked once per well-formed event, in transport
    /// arrival order, with the decoded JSON value. Malformed payloads are
    /// logged and dropped without closing the subscription.
    ///
    /// # Errors
    ///
    /// Fails if the connection cannot be established or the server answers
    /// with a non-success status. Errors after this point are reported to
    /// the log only.
    pub async fn subscribe<F>(
        &self,
        competition: &CompetitionId,
        on_update: F,
    ) -> Result<LiveSubscription>
    where
        F: FnMut(Value) + Send + 'static,
    {
        let endpoint = format!("/competitions/{competition}/live");
        let url = format!("{}{endpoint}", self.base_url);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "text/event-stream")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LiveError::Api {
                status: status.as_u16(),
                message: format!("subscription request to {endpoint} rejected"),
            });
        }

        info!(competition = %competition, endpoint = %endpoint, "live subscription opened");

        let stream = Box::pin(response.bytes_stream());
        let cancel = CancellationToken::new();
        let task = tokio::spawn(pump(stream, on_update, cancel.clone()));

        Ok(LiveSubscription {
            competition: competition.clone(),
            endpoint,
            cancel,
            task: Some(task),
        })
    }

    /// Convenience wrapper over [`subscribe`](Self::subscribe) that validates
    /// a raw string ID first.
    pub async fn subscribe_str<F>(&self, competition: &str, on_update: F) -> Result<LiveSubscription>
    where
        F: FnMut(Value) + Send + 'static,
    {
        let id = CompetitionId::new(competition)?;
        self.subscribe(&id, on_update).await
    }
}

/// Handle for one open live-update subscription.
///
/// Owned exclusively by the caller that created it. Dropping the handle
/// cancels the pump; [`close`](Self::close) additionally waits for it to
/// finish, guaranteeing no callback runs afterwards.
#[derive(Debug)]
pub struct LiveSubscription {
    competition: CompetitionId,
    endpoint: String,
    cancel: CancellationToken,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl LiveSubscription {
    /// The competition this subscription follows.
    #[must_use]
    pub fn competition(&self) -> &CompetitionId {
        &self.competition
    }

    /// The derived endpoint path, e.g. `/competitions/42/live`.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether the subscription is closed (explicitly, or because the
    /// transport ended).
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
            || self.task.as_ref().is_none_or(tokio::task::JoinHandle::is_finished)
    }

    /// Stop listening and release the transport.
    ///
    /// Waits for the pump task to exit; once this returns, no further
    /// callback invocations occur.
    pub async fn close(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
        debug!(competition = %self.competition, "live subscription closed");
    }
}

impl Drop for LiveSubscription {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Pump loop: bytes → SSE frames → decoded values → callback.
///
/// Generic over the chunk stream so tests can drive it with in-memory
/// channels instead of a live HTTP response.
async fn pump<S, E, F>(mut stream: S, mut on_update: F, cancel: CancellationToken)
where
    S: Stream<Item = std::result::Result<Bytes, E>> + Unpin,
    E: std::fmt::Display,
    F: FnMut(Value),
{
    let mut decoder = SseFrameDecoder::new();

    loop {
        let chunk = tokio::select! {
            () = cancel.cancelled() => return,
            chunk = stream.next() => chunk,
        };

        match chunk {
            Some(Ok(bytes)) => {
                decoder.feed(&bytes);
                while let Some(payload) = decoder.next_event() {
                    if cancel.is_cancelled() {
                        return;
                    }
                    dispatch(&payload, &mut on_update);
                }
            }
            Some(Err(e)) => {
                // Transport-level failure: surface to the log and stop.
                error!(error = %e, "live stream read failed");
                return;
            }
            None => {
                decoder.finish();
                while let Some(payload) = decoder.next_event() {
                    if cancel.is_cancelled() {
                        return;
                    }
                    dispatch(&payload, &mut on_update);
                }
                debug!("live stream ended");
                return;
            }
        }
    }
}

/// Decode one payload and either deliver it or log why it was dropped.
fn dispatch<F: FnMut(Value)>(payload: &str, on_update: &mut F) {
    match decode_update(payload) {
        Ok(value) => on_update(value),
        Err(err) => {
            error!(
                payload = truncate_str(&err.payload, PAYLOAD_PREVIEW_BYTES),
                error = %err.source,
                "dropping malformed live update"
            );
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
