//! Product domain entity and its create payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A stored catalog product.
///
/// Also the body of a full-replace update, where `id` must match the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    /// Unique product identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Display name
    #[validate(length(min = 1, message = "Product name is required"))]
    #[schema(example = "Product1")]
    pub name: String,
    /// Free-form description, empty when omitted
    #[serde(default)]
    #[schema(example = "Description1")]
    pub description: String,
    /// Unit price
    #[schema(example = 10.0)]
    pub price: f64,
    /// Units in stock
    #[schema(example = 5)]
    pub quantity: i32,
}

/// Product creation payload.
///
/// The id is optional: when omitted the database assigns one, when present
/// it is stored as given and collides like any other primary key.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct NewProduct {
    /// Caller-chosen identifier
    #[serde(default)]
    #[schema(example = 1)]
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "Product name is required"))]
    #[schema(example = "Product1")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "Description1")]
    pub description: String,
    #[schema(example = 10.0)]
    pub price: f64,
    #[schema(example = 5)]
    pub quantity: i32,
}

impl NewProduct {
    /// The product this payload describes once stored under `id`.
    pub fn into_product(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

impl From<Product> for NewProduct {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_id_is_optional() {
        let payload: NewProduct = serde_json::from_str(
            r#"{"name":"Product1","description":"Description1","price":10,"quantity":5}"#,
        )
        .unwrap();

        assert_eq!(payload.id, None);
        assert_eq!(payload.into_product(7).id, 7);
    }

    #[test]
    fn test_description_is_optional_but_name_is_not() {
        let payload: NewProduct =
            serde_json::from_str(r#"{"name":"Product1","price":10,"quantity":5}"#).unwrap();
        assert_eq!(payload.description, "");
        assert!(payload.validate().is_ok());

        let product = Product {
            id: 1,
            name: String::new(),
            description: String::new(),
            price: 10.0,
            quantity: 5,
        };

        assert!(product.validate().is_err());
    }
}
