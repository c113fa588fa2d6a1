//! Seam to the external input-method engine.
//!
//! The engine itself (transliteration, prediction, remote data download) is
//! an external collaborator. This trait is the single point where the
//! bootstrap hands it a configuration and receives a constructed instance
//! or a failure.

use std::fmt;

use crate::config::WidgetConfig;

/// Opaque error produced by an engine constructor.
pub type EngineError = Box<dyn std::error::Error + Send + Sync>;

/// An external input-method engine that can construct widget instances.
pub trait InputMethodEngine {
    /// The constructed widget instance type.
    type Widget: fmt::Debug;

    /// Construct a widget bound to the elements named in `config`.
    ///
    /// # Errors
    ///
    /// Fails if the host elements are missing or the engine cannot start;
    /// the cause is reported by the bootstrap, never propagated past it.
    fn construct(&self, config: &WidgetConfig) -> Result<Self::Widget, EngineError>;
}
