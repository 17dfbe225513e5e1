//! The generic send/decode pipeline.

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::{Error, ErrorKind, Result};
use crate::request::build_request;
use crate::transport::{HttpTransport, Transport};

/// Executes endpoint descriptions and decodes their responses.
///
/// Stateless aside from the transport handle it wraps, so one explicitly
/// constructed instance can be shared by every service in a composition
/// root and serve any number of concurrent `send` calls. Each call builds
/// its own independent wire request and owns its own response buffer; no
/// ordering is guaranteed between concurrent calls.
#[derive(Debug, Clone)]
pub struct Dispatcher<T = HttpTransport> {
    transport: T,
}

impl Dispatcher<HttpTransport> {
    /// Create a dispatcher backed by a reqwest transport.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
        })
    }

    /// Create a dispatcher with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(&ClientConfig::default())
    }
}

impl<T: Transport> Dispatcher<T> {
    /// Use a custom transport (test stubs, alternate backends).
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Send the described call and decode the response body into `P`.
    ///
    /// `P` is usually an [`ApiEnvelope`](crate::ApiEnvelope) instantiation.
    /// Failures classify into exactly one of the four
    /// [`ErrorKind`] members:
    /// building the request fails with `InvalidUrl`, transport failures are
    /// `RequestFailed`, a status outside [200, 300) is `InvalidResponse`,
    /// and a body that does not match `P` is `Decoding`. The status gate
    /// runs before decoding, so bodies of failing responses are never
    /// interpreted.
    #[instrument(skip(self, endpoint), fields(method = endpoint.method().as_str(), base_url = endpoint.base_url()))]
    pub async fn send<P, E>(&self, endpoint: &E) -> Result<P>
    where
        P: DeserializeOwned,
        E: Endpoint + ?Sized,
    {
        let request = build_request(endpoint)?;

        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            return Err(Error::new(ErrorKind::InvalidResponse {
                status: response.status,
            }));
        }

        serde_json::from_slice(&response.body).map_err(Into::into)
    }
}
