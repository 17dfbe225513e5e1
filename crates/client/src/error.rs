//! Error types for wirecall-client.

/// Result type alias for wirecall-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for wirecall-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the endpoint produced an unbuildable request.
    pub fn is_invalid_url(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidUrl(_))
    }

    /// Returns true if no response was obtained from the transport.
    pub fn is_request_failed(&self) -> bool {
        matches!(self.kind, ErrorKind::RequestFailed(_))
    }

    /// Returns true if a response arrived with a non-2xx status.
    pub fn is_invalid_response(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidResponse { .. })
    }

    /// Returns true if the response body failed to decode.
    pub fn is_decoding(&self) -> bool {
        matches!(self.kind, ErrorKind::Decoding(_))
    }

    /// Returns the HTTP status code if this is an invalid-response error.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::InvalidResponse { status } => Some(status),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
///
/// A flat, exhaustive taxonomy: callers branch on these four kinds for
/// different user-facing messages, so they are never collapsed. No retries
/// and no recovery happen inside this layer.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The endpoint's base URL or path produced an unbuildable request.
    /// Endpoint values are compile-time constants, so this is a programmer
    /// error and is never worth retrying.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure: connection refused, DNS failure, timeout.
    /// No HTTP response was obtained.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// A response was obtained but its status code fell outside [200, 300).
    /// The body is never decoded for these.
    #[error("invalid response: HTTP {status}")]
    InvalidResponse { status: u16 },

    /// The response body did not match the expected envelope/payload shape.
    #[error("decoding error: {0}")]
    Decoding(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            format!("connection error: {err}")
        } else {
            err.to_string()
        };

        Error::with_source(ErrorKind::RequestFailed(message), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Decoding(err.to_string()), err)
    }
}
