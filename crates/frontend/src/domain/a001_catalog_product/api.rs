use contracts::domain::a001_catalog_product::Product;
use gloo_net::http::Request;
use thiserror::Error;

/// Message shown for any non-success HTTP status
pub const STATUS_ERROR_MESSAGE: &str = "Failed to fetch products";

/// Failure of one catalog request. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request did not complete
    #[error("{0}")]
    Network(String),
    /// The service answered with a non-success status
    #[error("{}", STATUS_ERROR_MESSAGE)]
    Status(u16),
    /// The body is not a list of products
    #[error("{0}")]
    Decode(String),
}

/// GET the product list from `url`.
pub async fn fetch_products(url: &str) -> Result<Vec<Product>, FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    check_status(response.status())?;

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    decode_products(&body)
}

/// Any status outside `200..=299` is a failure; the body is not inspected.
pub fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}

pub fn decode_products(body: &str) -> Result<Vec<Product>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_catalog_product::ProductId;

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(404), Err(FetchError::Status(404)));
        assert_eq!(check_status(500), Err(FetchError::Status(500)));
        assert_eq!(check_status(302), Err(FetchError::Status(302)));
    }

    #[test]
    fn test_status_error_message_is_fixed() {
        assert_eq!(FetchError::Status(404).to_string(), STATUS_ERROR_MESSAGE);
        assert_eq!(FetchError::Status(503).to_string(), STATUS_ERROR_MESSAGE);
    }

    #[test]
    fn test_network_error_keeps_transport_message() {
        let err = FetchError::Network("Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Failed to fetch");
    }

    #[test]
    fn test_decode_products() {
        let body = r#"[
            {"id": 1, "name": "Phone X", "company": "AMZ", "category": "Phone",
             "price": 699, "rating": 4.5, "discount": 10, "availability": true,
             "imageUrl": "https://img.example/1.png"}
        ]"#;
        let products = decode_products(body).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, ProductId::Number(1));
        assert_eq!(products[0].name, "Phone X");
    }

    #[test]
    fn test_decode_empty_list() {
        assert_eq!(decode_products("[]").unwrap(), Vec::new());
    }

    #[test]
    fn test_decode_error_is_reported() {
        let err = decode_products(r#"{"message": "not a list"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(!err.to_string().is_empty());
    }
}
