//! # wirecall-users
//!
//! User API group built on [`wirecall_client`].
//!
//! This crate contains no control flow of its own: [`UserEndpoint`] supplies
//! endpoint values, [`UserService`] forwards them to the dispatcher, and
//! consumers branch on the decoded [`ApiEnvelope`](wirecall_client::ApiEnvelope).
//! [`MockUserService`] implements the same [`UserApi`] contract from
//! in-memory data for tests and previews.
//!
//! ## Example
//!
//! ```rust,ignore
//! use wirecall_client::ClientConfig;
//! use wirecall_users::{UserApi, UserService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), wirecall_client::Error> {
//!     let service = UserService::new(&ClientConfig::default())?;
//!
//!     let envelope = service.get_all_users().await?;
//!     for user in envelope.payload.unwrap_or_default() {
//!         println!("{:?}", user.username);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod endpoints;
mod mock;
mod service;
mod types;

pub use endpoints::UserEndpoint;
pub use mock::MockUserService;
pub use service::{UserApi, UserService};
pub use types::User;
