//! Product API group payload types.

use serde::{Deserialize, Serialize};

/// A product record as the server reports it. Any field may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}
