//! Wire request construction from an endpoint value.

use std::collections::HashMap;

use bytes::{BufMut, Bytes, BytesMut};
use serde_json::Value;
use tracing::warn;
use url::Url;
use uuid::Uuid;

use crate::endpoint::{Endpoint, HttpMethod, MultipartPart};
use crate::error::{Error, ErrorKind, Result};

/// A fully assembled request: method, URL, headers, body. Ready for a
/// [`Transport`](crate::Transport), owned by the dispatcher for the duration
/// of one send.
#[derive(Debug, Clone)]
pub struct WireRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: HashMap<String, String>,
    pub body: Option<Bytes>,
}

/// Build a wire request from an endpoint description.
///
/// Pure except for the random multipart boundary. Parameter placement:
/// GET query params go on the URL, non-GET query params become a JSON
/// object body, and multipart parts replace any other body and overwrite
/// the Content-Type header.
///
/// The base URL must parse as an absolute URL; endpoint values are fixed
/// constants, so a failure here is a programmer error and surfaces as
/// [`ErrorKind::InvalidUrl`].
pub fn build_request<E: Endpoint + ?Sized>(endpoint: &E) -> Result<WireRequest> {
    let mut url = Url::parse(endpoint.base_url()).map_err(|err| {
        Error::with_source(
            ErrorKind::InvalidUrl(endpoint.base_url().to_string()),
            err,
        )
    })?;
    // Callers supply the full path; it replaces whatever the base URL had.
    url.set_path(&endpoint.path());

    let method = endpoint.method();
    let mut headers = HashMap::new();
    let mut body = None;

    if let Some(params) = endpoint.query_params() {
        if method == HttpMethod::Get {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &params {
                pairs.append_pair(key, &scalar_text(value));
            }
        } else {
            match serde_json::to_vec(&params) {
                Ok(json) => body = Some(Bytes::from(json)),
                Err(err) => {
                    // Lenient: the request proceeds with no body rather than
                    // aborting construction.
                    warn!(error = %err, "failed to serialize body params, sending empty body");
                }
            }
        }
    }

    if let Some(extra) = endpoint.headers() {
        headers.extend(extra);
    }

    if let Some(parts) = endpoint.multipart_parts() {
        let boundary = format!("Boundary-{}", Uuid::new_v4());
        headers.insert(
            "Content-Type".to_string(),
            format!("multipart/form-data; boundary={boundary}"),
        );
        // Multipart wins over a JSON body: exactly one encoding per request.
        body = Some(encode_multipart(&boundary, &parts));
    }

    Ok(WireRequest {
        method,
        url,
        headers,
        body,
    })
}

/// Natural textual form of a scalar: strings unquoted, numbers and booleans
/// as their literal text.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Standard multipart/form-data framing, including the closing boundary.
fn encode_multipart(boundary: &str, parts: &[MultipartPart]) -> Bytes {
    let mut buf = BytesMut::new();

    for part in parts {
        buf.put_slice(format!("--{boundary}\r\n").as_bytes());
        buf.put_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                part.name, part.file_name
            )
            .as_bytes(),
        );
        buf.put_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        buf.put_slice(&part.data);
        buf.put_slice(b"\r\n");
    }
    buf.put_slice(format!("--{boundary}--\r\n").as_bytes());

    buf.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;
    use std::collections::HashMap;

    struct TestEndpoint {
        base_url: &'static str,
        path: &'static str,
        method: HttpMethod,
        headers: Option<HashMap<String, String>>,
        query_params: Option<Map<String, Value>>,
        multipart_parts: Option<Vec<MultipartPart>>,
    }

    impl TestEndpoint {
        fn new(method: HttpMethod, path: &'static str) -> Self {
            Self {
                base_url: "https://api.example.com/root",
                path,
                method,
                headers: None,
                query_params: None,
                multipart_parts: None,
            }
        }
    }

    impl Endpoint for TestEndpoint {
        fn base_url(&self) -> &str {
            self.base_url
        }
        fn path(&self) -> String {
            self.path.to_string()
        }
        fn method(&self) -> HttpMethod {
            self.method
        }
        fn headers(&self) -> Option<HashMap<String, String>> {
            self.headers.clone()
        }
        fn query_params(&self) -> Option<Map<String, Value>> {
            self.query_params.clone()
        }
        fn multipart_parts(&self) -> Option<Vec<MultipartPart>> {
            self.multipart_parts.clone()
        }
    }

    fn scalar_params() -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("q".to_string(), Value::from("search term"));
        params.insert("page".to_string(), Value::from(3));
        params.insert("active".to_string(), Value::from(true));
        params
    }

    #[test]
    fn test_path_replaces_base_url_path() {
        let endpoint = TestEndpoint::new(HttpMethod::Get, "/users");
        let request = build_request(&endpoint).unwrap();

        assert_eq!(request.url.as_str(), "https://api.example.com/users");
    }

    #[test]
    fn test_get_params_become_url_query() {
        let mut endpoint = TestEndpoint::new(HttpMethod::Get, "/search");
        endpoint.query_params = Some(scalar_params());

        let request = build_request(&endpoint).unwrap();

        let query: HashMap<String, String> = request
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(query.get("q").map(String::as_str), Some("search term"));
        assert_eq!(query.get("page").map(String::as_str), Some("3"));
        assert_eq!(query.get("active").map(String::as_str), Some("true"));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_non_get_params_become_json_body() {
        let mut endpoint = TestEndpoint::new(HttpMethod::Post, "/update");
        endpoint.query_params = Some(scalar_params());

        let request = build_request(&endpoint).unwrap();

        assert!(request.url.query().is_none());
        let body = request.body.expect("POST params should produce a body");
        let decoded: Map<String, Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(decoded, scalar_params());
    }

    #[test]
    fn test_headers_applied_last_write_wins() {
        let mut endpoint = TestEndpoint::new(HttpMethod::Post, "/update");
        endpoint.headers = Some(HashMap::from([(
            "Content-Type".to_string(),
            "application/json; charset=UTF-8".to_string(),
        )]));

        let request = build_request(&endpoint).unwrap();

        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/json; charset=UTF-8")
        );
    }

    #[test]
    fn test_multipart_framing() {
        let mut endpoint = TestEndpoint::new(HttpMethod::Post, "/upload");
        endpoint.multipart_parts = Some(vec![
            MultipartPart::new("first", "a.bin", vec![1u8, 2, 3]),
            MultipartPart::new("second", "b.bin", vec![4u8, 5]),
        ]);

        let request = build_request(&endpoint).unwrap();

        let content_type = request.headers.get("Content-Type").unwrap();
        let boundary = content_type
            .strip_prefix("multipart/form-data; boundary=")
            .expect("Content-Type should carry the boundary");

        let body = request.body.unwrap();
        let text = String::from_utf8_lossy(&body);

        let first = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"first\"; \
             filename=\"a.bin\"\r\nContent-Type: application/octet-stream\r\n\r\n\
             \u{1}\u{2}\u{3}\r\n"
        );
        let second = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"second\"; \
             filename=\"b.bin\"\r\nContent-Type: application/octet-stream\r\n\r\n\
             \u{4}\u{5}\r\n"
        );
        let closing = format!("--{boundary}--\r\n");

        let first_at = text.find(&first).expect("first part framed");
        let second_at = text.find(&second).expect("second part framed");
        assert!(first_at < second_at, "parts must keep input order");
        assert!(text.ends_with(&closing), "closing boundary required");
    }

    #[test]
    fn test_multipart_overrides_json_body_and_content_type() {
        let mut endpoint = TestEndpoint::new(HttpMethod::Post, "/upload");
        endpoint.query_params = Some(scalar_params());
        endpoint.headers = Some(HashMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]));
        endpoint.multipart_parts = Some(vec![MultipartPart::new("f", "f.bin", vec![9u8])]);

        let request = build_request(&endpoint).unwrap();

        assert!(request
            .headers
            .get("Content-Type")
            .unwrap()
            .starts_with("multipart/form-data; boundary="));
        let body = request.body.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("Content-Disposition"));
    }

    #[test]
    fn test_fresh_boundary_per_call() {
        let mut endpoint = TestEndpoint::new(HttpMethod::Post, "/upload");
        endpoint.multipart_parts = Some(vec![MultipartPart::new("f", "f.bin", vec![0u8])]);

        let a = build_request(&endpoint).unwrap();
        let b = build_request(&endpoint).unwrap();
        assert_ne!(
            a.headers.get("Content-Type"),
            b.headers.get("Content-Type"),
            "boundary token must be fresh per call"
        );
    }

    #[test]
    fn test_invalid_base_url_is_an_error() {
        let mut endpoint = TestEndpoint::new(HttpMethod::Get, "/users");
        endpoint.base_url = "not an absolute url";

        let err = build_request(&endpoint).unwrap_err();
        assert!(err.is_invalid_url());
    }

    #[test]
    fn test_exact_bytes_survive_framing() {
        let payload: Vec<u8> = (0u8..=255).collect();
        let mut endpoint = TestEndpoint::new(HttpMethod::Post, "/upload");
        endpoint.multipart_parts = Some(vec![MultipartPart::new(
            "blob",
            "blob.bin",
            payload.clone(),
        )]);

        let request = build_request(&endpoint).unwrap();
        let body = request.body.unwrap();
        let position = body
            .windows(payload.len())
            .position(|window| window == payload.as_slice());
        assert!(position.is_some(), "raw bytes must appear unmodified");
    }
}
