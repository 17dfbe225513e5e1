//! Network-backed user service.

use std::future::Future;

use bytes::Bytes;
use wirecall_client::{ApiEnvelope, ClientConfig, Dispatcher, HttpTransport, Result, Transport};

use crate::endpoints::UserEndpoint;
use crate::types::User;

/// Contract for the user API group.
///
/// One asynchronous method per supported call, each returning a fixed
/// envelope instantiation. [`UserService`] fulfils it over the network;
/// [`MockUserService`](crate::MockUserService) from in-memory data.
pub trait UserApi {
    fn get_all_users(&self) -> impl Future<Output = Result<ApiEnvelope<Vec<User>>>> + Send;

    fn get_user(&self, id: i64) -> impl Future<Output = Result<ApiEnvelope<User>>> + Send;

    fn set_current_user_data(&self) -> impl Future<Output = Result<ApiEnvelope<User>>> + Send;

    fn upload_profile_image(
        &self,
        image: Bytes,
    ) -> impl Future<Output = Result<ApiEnvelope<User>>> + Send;
}

/// Thin binding from typed calls to [`UserEndpoint`] values.
///
/// Does nothing but select an endpoint and forward to the dispatcher.
#[derive(Debug, Clone)]
pub struct UserService<T: Transport = HttpTransport> {
    dispatcher: Dispatcher<T>,
}

impl UserService<HttpTransport> {
    /// Create a service with its own reqwest-backed dispatcher.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            dispatcher: Dispatcher::new(config)?,
        })
    }
}

impl<T: Transport> UserService<T> {
    /// Bind to an existing dispatcher, sharing its transport.
    pub fn from_dispatcher(dispatcher: Dispatcher<T>) -> Self {
        Self { dispatcher }
    }
}

impl<T: Transport> UserApi for UserService<T> {
    async fn get_all_users(&self) -> Result<ApiEnvelope<Vec<User>>> {
        self.dispatcher.send(&UserEndpoint::GetAllUsers).await
    }

    async fn get_user(&self, id: i64) -> Result<ApiEnvelope<User>> {
        self.dispatcher.send(&UserEndpoint::GetUser { id }).await
    }

    async fn set_current_user_data(&self) -> Result<ApiEnvelope<User>> {
        self.dispatcher.send(&UserEndpoint::SetCurrentUserData).await
    }

    async fn upload_profile_image(&self, image: Bytes) -> Result<ApiEnvelope<User>> {
        self.dispatcher
            .send(&UserEndpoint::UploadProfileImage { image })
            .await
    }
}
