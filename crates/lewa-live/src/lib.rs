//! # lewa-live
//!
//! Live competition update subscriptions over server-sent events.
//!
//! [`LiveClient::subscribe`] opens a one-way event stream from
//! `/competitions/{id}/live` and forwards each JSON-decoded event to a
//! caller-supplied callback, in arrival order. Malformed payloads and
//! transport errors are reported to the log and never escalate; the returned
//! [`LiveSubscription`] handle is the only way to stop delivery.
//!
//! This crate deliberately implements no reconnection, backoff, ordering
//! across subscriptions, authentication, or multiplexing.

#![deny(unsafe_code)]

pub mod decode;
pub mod errors;
pub mod sse;
pub mod subscription;

pub use decode::{MalformedPayload, ScoreUpdate, decode_update};
pub use errors::{LiveError, Result};
pub use sse::SseFrameDecoder;
pub use subscription::{LiveClient, LiveSubscription};
