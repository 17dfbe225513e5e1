//! The transport seam: executes one wire request, yields status and bytes.

use std::future::Future;

use bytes::Bytes;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::WireRequest;

/// Raw outcome of executing a request.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Bytes,
}

impl TransportResponse {
    /// Returns true if the status code is in the success range [200, 300).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes wire requests.
///
/// The one shared resource of the client layer. Implementations hold no
/// per-call state, so a single instance may serve any number of concurrent
/// sends. Failure to obtain a response maps to
/// [`ErrorKind::RequestFailed`].
pub trait Transport: Send + Sync {
    /// Execute the request and collect the full response body.
    fn execute(
        &self,
        request: WireRequest,
    ) -> impl Future<Output = Result<TransportResponse>> + Send;
}

/// reqwest-backed transport.
///
/// Cheap to clone; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Build a transport from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|err| {
                Error::with_source(
                    ErrorKind::RequestFailed("failed to construct HTTP client".to_string()),
                    err,
                )
            })?;

        Ok(Self {
            inner,
            config: config.clone(),
        })
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: WireRequest) -> Result<TransportResponse> {
        if self.config.enable_tracing {
            debug!(
                method = request.method.as_str(),
                url = %request.url,
                "sending request"
            );
        }

        let mut req = self
            .inner
            .request(request.method.to_reqwest(), request.url);

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();

        if self.config.enable_tracing {
            if response.status().is_success() {
                debug!(status, "response received");
            } else {
                info!(status, "non-success response");
            }
        }

        let body = response.bytes().await?;

        Ok(TransportResponse { status, body })
    }
}
