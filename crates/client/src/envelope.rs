//! The generic response envelope every decoded body conforms to.

use serde::{Deserialize, Serialize};

/// Server-reported outcome in the strict envelope shape.
///
/// Backends that report anything outside these three literals need the
/// lenient shape ([`LenientEnvelope`]) instead; with the strict shape an
/// unexpected literal is a decoding error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
    Unknown,
}

/// Generic `{status, message, data}` wrapper used to interpret every decoded
/// response body.
///
/// The server may omit any field. Constructed by decoding a response body
/// (or by hand in test doubles) and immutable thereafter; the caller owns
/// the returned value and branches on `status`.
///
/// The status type parameter selects between the two server contracts in the
/// wild: the default closed [`Status`] enumeration, or a free-form `String`
/// via [`LenientEnvelope`]. Pick one per backend integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T, S = Status> {
    /// Server-reported outcome.
    pub status: Option<S>,
    /// Human-readable message from the server.
    pub message: Option<String>,
    /// Decoded payload, carried on the wire as `data`.
    #[serde(rename = "data")]
    pub payload: Option<T>,
}

/// Envelope variant for backends that report status as an arbitrary string.
pub type LenientEnvelope<T> = ApiEnvelope<T, String>;

impl<T> ApiEnvelope<T> {
    /// Hand-built success envelope, mainly for mock services.
    pub fn success(message: impl Into<String>, payload: T) -> Self {
        Self {
            status: Some(Status::Success),
            message: Some(message.into()),
            payload: Some(payload),
        }
    }

    /// Returns true if the server reported success.
    pub fn is_success(&self) -> bool {
        matches!(self.status, Some(Status::Success))
    }
}

impl<T> LenientEnvelope<T> {
    /// Returns true if the free-form status equals `"success"`.
    pub fn is_success_literal(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}
