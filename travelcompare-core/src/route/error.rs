use thiserror::Error;

/// Errors from [`crate::RouteProvider::fetch_route`].
///
/// None of these abort a comparison: the orchestrator logs them and reports
/// the affected mode as having no route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The request could not be sent or the connection failed.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Endpoint that was contacted.
        url: String,
        /// Description of the transport failure.
        message: String,
    },
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint that was contacted.
        url: String,
        /// Configured timeout in whole seconds.
        timeout_secs: u64,
    },
    /// The backend answered with a non-success status.
    #[error("request to {url} failed with status {status}: {message}")]
    Http {
        /// Endpoint that was contacted.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Status text or error body.
        message: String,
    },
    /// The response body could not be interpreted.
    #[error("failed to parse routing response: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },
}
