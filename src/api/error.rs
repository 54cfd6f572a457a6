//! Fetch Errors
//!
//! Error taxonomy for the fetch boundary. Every variant surfaces to the user
//! as a single message in the page's error state; there is no differentiated
//! recovery and no retry.

use thiserror::Error;

/// Failure modes of a collection fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never completed.
    #[error("Network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Http(u16),
    /// The response body was not valid JSON.
    #[error("Parse error: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_references_status() {
        let message = FetchError::Http(500).to_string();
        assert!(message.contains("500"), "got: {message}");
    }

    #[test]
    fn network_error_carries_transport_detail() {
        let message = FetchError::Network("connection refused".to_string()).to_string();
        assert_eq!(message, "Network error: connection refused");
    }
}
