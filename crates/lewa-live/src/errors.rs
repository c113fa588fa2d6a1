//! Live subscription error types.

use lewa_core::ids::InvalidCompetitionId;

/// Result type alias for live subscription operations.
pub type Result<T> = std::result::Result<T, LiveError>;

/// Errors that can occur when opening a live subscription.
///
/// Failures on an already-open subscription (malformed payloads, transport
/// read errors) are recovered locally and reported to the log; they never
/// surface through this type.
#[derive(Debug, thiserror::Error)]
pub enum LiveError {
    /// The competition ID was not a safe URL path segment.
    #[error("invalid competition ID: {0}")]
    Id(#[from] InvalidCompetitionId),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the subscription request.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use lewa_core::CompetitionId;

    #[test]
    fn id_error_from_conversion() {
        let err: LiveError = CompetitionId::new("").unwrap_err().into();
        assert!(err.to_string().contains("invalid competition ID"));
    }

    #[test]
    fn api_error_display() {
        let err = LiveError::Api {
            status: 404,
            message: "competition not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error (404): competition not found");
    }
}
