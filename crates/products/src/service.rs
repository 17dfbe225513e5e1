//! Network-backed product service.

use std::future::Future;

use wirecall_client::{
    ClientConfig, Dispatcher, HttpTransport, LenientEnvelope, Result, Transport,
};

use crate::endpoints::ProductEndpoint;
use crate::types::Product;

/// Contract for the product API group.
pub trait ProductApi {
    fn get_all_products(
        &self,
    ) -> impl Future<Output = Result<LenientEnvelope<Vec<Product>>>> + Send;

    fn get_product(&self, id: i64)
        -> impl Future<Output = Result<LenientEnvelope<Product>>> + Send;
}

/// Thin binding from typed calls to [`ProductEndpoint`] values.
#[derive(Debug, Clone)]
pub struct ProductService<T: Transport = HttpTransport> {
    dispatcher: Dispatcher<T>,
}

impl ProductService<HttpTransport> {
    /// Create a service with its own reqwest-backed dispatcher.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            dispatcher: Dispatcher::new(config)?,
        })
    }
}

impl<T: Transport> ProductService<T> {
    /// Bind to an existing dispatcher, sharing its transport.
    pub fn from_dispatcher(dispatcher: Dispatcher<T>) -> Self {
        Self { dispatcher }
    }
}

impl<T: Transport> ProductApi for ProductService<T> {
    async fn get_all_products(&self) -> Result<LenientEnvelope<Vec<Product>>> {
        self.dispatcher.send(&ProductEndpoint::GetAllProducts).await
    }

    async fn get_product(&self, id: i64) -> Result<LenientEnvelope<Product>> {
        self.dispatcher.send(&ProductEndpoint::GetProduct { id }).await
    }
}
