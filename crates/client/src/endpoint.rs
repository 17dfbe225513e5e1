//! The endpoint contract: one API call described as pure data.

use std::collections::HashMap;

use bytes::Bytes;
use serde_json::{Map, Value};

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// Wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// One file part of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartPart {
    /// Form field name.
    pub name: String,
    /// File name reported in the Content-Disposition header.
    pub file_name: String,
    /// Raw file bytes, framed unmodified.
    pub data: Bytes,
}

impl MultipartPart {
    /// Create a new part.
    pub fn new(
        name: impl Into<String>,
        file_name: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            file_name: file_name.into(),
            data: data.into(),
        }
    }
}

/// An immutable description of one API call.
///
/// Implementors are plain data plus read-only computed properties: the same
/// field values must always produce the same wire request. No hidden state,
/// no I/O. API-group crates implement this on an enum with one variant per
/// supported call.
///
/// Exactly one body encoding is active per request: `query_params` encode as
/// URL query pairs on GET and as a JSON object body otherwise, and
/// `multipart_parts` (when present) replace any JSON body.
pub trait Endpoint {
    /// Scheme + host + root path, fixed per variant. Must parse as an
    /// absolute URL.
    fn base_url(&self) -> &str;

    /// Full path for the call. Replaces the base URL's path component
    /// rather than appending to it.
    fn path(&self) -> String;

    /// HTTP method for the call.
    fn method(&self) -> HttpMethod;

    /// Extra request headers. Entries here win over anything the builder
    /// sets earlier, except the multipart Content-Type.
    fn headers(&self) -> Option<HashMap<String, String>> {
        None
    }

    /// Dynamically-typed scalar parameters. Placement depends on `method`.
    fn query_params(&self) -> Option<Map<String, Value>> {
        None
    }

    /// Ordered file parts. Presence forces multipart encoding regardless of
    /// `method`.
    fn multipart_parts(&self) -> Option<Vec<MultipartPart>> {
        None
    }
}
