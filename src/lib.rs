//! # wirecall
//!
//! A declarative HTTP client layer for Rust.
//!
//! Describe an API call as a data value (an endpoint), and let one generic
//! dispatcher build the wire request, execute it, and decode the response
//! into a typed `{status, message, data}` envelope.
//!
//! ## Crates
//!
//! - **wirecall-client** - The core: endpoint contract, request builder,
//!   dispatcher, envelope, error taxonomy
//! - **wirecall-users** - User API group: endpoint values, typed service,
//!   mock double
//! - **wirecall-products** - Product API group over the lenient envelope
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wirecall::client::ClientConfig;
//! use wirecall::users::{UserApi, UserService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = UserService::new(&ClientConfig::default())?;
//!
//!     let envelope = service.get_all_users().await?;
//!     if envelope.is_success() {
//!         for user in envelope.payload.unwrap_or_default() {
//!             println!("{:?}", user.username);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export member crates for convenient access
pub use wirecall_client as client;

#[cfg(feature = "products")]
pub use wirecall_products as products;
#[cfg(feature = "users")]
pub use wirecall_users as users;
