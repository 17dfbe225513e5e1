//! In-memory double for the product API.

use wirecall_client::{LenientEnvelope, Result};

use crate::service::ProductApi;
use crate::types::Product;

/// Serves canned product data through the [`ProductApi`] contract.
#[derive(Debug, Clone)]
pub struct MockProductService {
    products: Vec<Product>,
}

fn mock_product(id: i64, name: &str, price: f64) -> Product {
    Product {
        id: Some(id),
        name: Some(name.to_string()),
        price: Some(price),
        description: Some(format!("{name} (sample)")),
    }
}

fn success<T>(message: &str, payload: T) -> LenientEnvelope<T> {
    LenientEnvelope {
        status: Some("success".to_string()),
        message: Some(message.to_string()),
        payload: Some(payload),
    }
}

impl Default for MockProductService {
    fn default() -> Self {
        Self {
            products: vec![
                mock_product(1, "Widget", 9.99),
                mock_product(2, "Gadget", 24.5),
            ],
        }
    }
}

impl MockProductService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductApi for MockProductService {
    async fn get_all_products(&self) -> Result<LenientEnvelope<Vec<Product>>> {
        Ok(success("All Products", self.products.clone()))
    }

    async fn get_product(&self, id: i64) -> Result<LenientEnvelope<Product>> {
        let found = self
            .products
            .iter()
            .find(|p| p.id == Some(id))
            .cloned()
            .unwrap_or_else(|| mock_product(id, "Sample", 1.0));
        Ok(success("The Product", found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_serves_fixed_products() {
        let mock = MockProductService::new();
        let envelope = mock.get_all_products().await.unwrap();

        assert!(envelope.is_success_literal());
        assert_eq!(envelope.payload.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_finds_known_product() {
        let mock = MockProductService::new();
        let envelope = mock.get_product(2).await.unwrap();
        assert_eq!(envelope.payload.unwrap().name.as_deref(), Some("Gadget"));
    }
}
