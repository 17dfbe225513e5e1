//! # wirecall-client
//!
//! Core declarative HTTP client layer.
//!
//! An API call is described as a data value (an [`Endpoint`]): base URL,
//! path, method, headers, query/body parameters, optional multipart file
//! parts. A single generic [`Dispatcher`] turns that description into a wire
//! request, executes it over an injectable [`Transport`], and decodes the
//! response body into a caller-specified typed envelope.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     API-group crates                        │
//! │  (wirecall-users, wirecall-products, ...)                   │
//! │  - Endpoint enums: one variant per call                     │
//! │  - Thin services binding endpoints to typed envelopes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Dispatcher                            │
//! │  - build_request: Endpoint -> WireRequest                   │
//! │  - execute over Transport, gate on 2xx status               │
//! │  - decode body into ApiEnvelope<T>                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Transport (trait)                        │
//! │  - HttpTransport: reqwest-backed implementation             │
//! │  - test stubs implement the same seam                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use wirecall_client::{ApiEnvelope, ClientConfig, Dispatcher, Endpoint};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), wirecall_client::Error> {
//!     let dispatcher = Dispatcher::new(&ClientConfig::default())?;
//!
//!     let envelope: ApiEnvelope<Vec<User>> = dispatcher
//!         .send(&UserEndpoint::GetAllUsers)
//!         .await?;
//!
//!     if envelope.is_success() {
//!         println!("{} users", envelope.payload.unwrap_or_default().len());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod config;
mod dispatcher;
mod endpoint;
mod envelope;
mod error;
mod request;
mod transport;

pub use config::{ClientConfig, ClientConfigBuilder};
pub use dispatcher::Dispatcher;
pub use endpoint::{Endpoint, HttpMethod, MultipartPart};
pub use envelope::{ApiEnvelope, LenientEnvelope, Status};
pub use error::{Error, ErrorKind, Result};
pub use request::{build_request, WireRequest};
pub use transport::{HttpTransport, Transport, TransportResponse};

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("wirecall/", env!("CARGO_PKG_VERSION"));
