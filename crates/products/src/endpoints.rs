//! Endpoint values for the product API group.

use std::collections::HashMap;

use serde_json::{Map, Value};
use wirecall_client::{Endpoint, HttpMethod};

/// One variant per supported product call. Both calls are GETs; this group
/// has no mutations and no multipart uploads.
#[derive(Debug, Clone)]
pub enum ProductEndpoint {
    GetAllProducts,
    GetProduct { id: i64 },
}

impl Endpoint for ProductEndpoint {
    fn base_url(&self) -> &str {
        "https://second-group-example.com/api/"
    }

    fn path(&self) -> String {
        match self {
            Self::GetAllProducts => "/products/".to_string(),
            Self::GetProduct { id } => format!("/product/{id}/"),
        }
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn headers(&self) -> Option<HashMap<String, String>> {
        Some(HashMap::from([(
            "Content-Type".to_string(),
            "application/json; charset=UTF-8".to_string(),
        )]))
    }

    fn query_params(&self) -> Option<Map<String, Value>> {
        match self {
            Self::GetAllProducts => {
                let mut params = Map::new();
                params.insert("page".to_string(), Value::from(1));
                params.insert("pageSize".to_string(), Value::from(20));
                Some(params)
            }
            Self::GetProduct { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wirecall_client::build_request;

    #[test]
    fn test_get_all_products_paginates_on_url() {
        let request = build_request(&ProductEndpoint::GetAllProducts).unwrap();

        assert_eq!(request.url.path(), "/products/");
        let query: HashMap<String, String> = request
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(query.get("page").map(String::as_str), Some("1"));
        assert_eq!(query.get("pageSize").map(String::as_str), Some("20"));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_get_product_path_carries_id() {
        let request = build_request(&ProductEndpoint::GetProduct { id: 12 }).unwrap();
        assert_eq!(request.url.path(), "/product/12/");
        assert_eq!(request.method, HttpMethod::Get);
    }
}
