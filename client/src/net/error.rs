//! Error type returned by every REST call.
//!
//! Callers do not branch on the variant: any failure is logged and the page
//! degrades to empty or stale state. The variants exist so log lines say what
//! actually went wrong.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single HTTP round trip.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, body encode).
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("unexpected status {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    /// The response body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// HTTP is only issued from the browser; server rendering gets this.
    #[error("not available during server rendering")]
    Unavailable,
}
