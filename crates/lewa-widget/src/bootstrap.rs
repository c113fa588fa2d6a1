//! One-shot widget bootstrap.
//!
//! The host application calls [`bootstrap`] once at startup, after the page
//! elements named in the config exist. Construction failure is terminal for
//! the widget but never for the host: the cause is logged and swallowed,
//! with no retry.

use tracing::{error, info};

use crate::config::WidgetConfig;
use crate::engine::InputMethodEngine;

/// Error raised while constructing the widget.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// The engine constructor failed. Always recovered locally.
    #[error("widget initialization failed: {source}")]
    InitializationFailed {
        /// The underlying engine error.
        #[source]
        source: crate::engine::EngineError,
    },
}

/// Construct the input widget, reporting the outcome to the log.
///
/// Returns the constructed instance on success. On failure the error is
/// logged and `None` is returned; the host keeps running without the widget.
pub fn bootstrap<E: InputMethodEngine>(engine: &E, config: &WidgetConfig) -> Option<E::Widget> {
    match engine.construct(config) {
        Ok(widget) => {
            info!(widget = ?widget, "✅ input widget initialized");
            Some(widget)
        }
        Err(source) => {
            let err = WidgetError::InitializationFailed { source };
            error!(error = %err, "❌ input widget initialization failed");
            None
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
