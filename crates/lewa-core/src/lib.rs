//! # lewa-core
//!
//! Foundation types and utilities shared by the lewa client crates.
//!
//! - **Branded IDs**: [`CompetitionId`] as a validated newtype over `String`
//! - **Text utilities**: UTF-8–safe truncation for diagnostic previews
//! - **Logging**: `tracing` subscriber setup and test-side log capture
//!
//! [`CompetitionId`]: ids::CompetitionId

#![deny(unsafe_code)]

pub mod ids;
pub mod logging;
pub mod text;

pub use ids::{CompetitionId, InvalidCompetitionId};
