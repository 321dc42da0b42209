use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog product.
///
/// The catalog service sends either numeric or string ids; both are kept
/// verbatim so they can be used as stable list keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

/// Product returned by the catalog endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub company: String,
    pub category: String,
    /// Price in currency units, non-negative
    pub price: f64,
    pub rating: f64,
    /// Discount in percent; `0` means no discount
    pub discount: f64,
    /// `true` = in stock
    pub availability: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    pub fn has_discount(&self) -> bool {
        self.discount > 0.0
    }
}
