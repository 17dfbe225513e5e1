//! # wirecall-products
//!
//! Product API group built on [`wirecall_client`].
//!
//! The product backend reports `status` as a free-form string, so this group
//! targets the lenient envelope shape
//! ([`LenientEnvelope`](wirecall_client::LenientEnvelope)) rather than the
//! closed status enumeration the user group uses. Everything else follows
//! the same pattern: an endpoint enum supplies values, a thin service binds
//! them to typed calls.

mod endpoints;
mod mock;
mod service;
mod types;

pub use endpoints::ProductEndpoint;
pub use mock::MockProductService;
pub use service::{ProductApi, ProductService};
pub use types::Product;
