//! Shared response and error types.

/// Endpoint serving the page's content document.
pub const CONTENT_ENDPOINT: &str = "/api/content";

/// Endpoint accepting table reservations.
pub const RESERVATIONS_ENDPOINT: &str = "/api/reservations";

/// Endpoint accepting takeaway orders.
pub const ORDERS_ENDPOINT: &str = "/api/orders";

/// A completed HTTP exchange: status code and undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure to complete an HTTP exchange at all.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("{0}")]
    Network(String),

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Content loading failed; the page keeps its static markup.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Content request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("Content request returned HTTP {0}")]
    Status(u16),

    #[error("Content document could not be decoded: {0}")]
    Decode(String),
}

/// A form submission did not succeed.
///
/// The `Display` output is exactly the text shown in the feedback region.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("{0}")]
    Transport(#[from] TransportError),

    #[error("{0}")]
    MalformedResponse(String),

    #[error("{message}")]
    Rejected { status: u16, message: String },
}

/// Convenience result type for content loading.
pub type FetchResult<T> = Result<T, FetchError>;

/// Convenience result type for form submission.
pub type SubmissionResult<T> = Result<T, SubmissionError>;
