//! # lewa-widget
//!
//! Input-method widget bootstrap.
//!
//! The widget itself is an external engine; this crate owns the fixed
//! [`WidgetConfig`] handed to its constructor and the one-shot
//! [`bootstrap`] entry point that constructs it, reports the outcome to the
//! log, and swallows any failure so the host keeps running without it.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod config;
pub mod engine;

pub use bootstrap::{WidgetError, bootstrap};
pub use config::WidgetConfig;
pub use engine::{EngineError, InputMethodEngine};
