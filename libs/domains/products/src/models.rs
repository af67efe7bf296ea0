use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};

/// Product entity - represents a record in the `products` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB), assigned on create
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product description
    pub description: Option<String>,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub quantity: i32,
    /// Free-text category label, no link to the Category entity
    pub category: Option<String>,
}

/// Category entity - declared schema for the `categories` collection.
///
/// No route references categories; the schema exists alongside the
/// product schema the way the stored data does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Category name
    pub name: Option<String>,
}

/// DTO for creating a new product.
///
/// Every field is optional at the serde layer; required-ness is enforced
/// when the persistence layer materializes the entity (`Product::new`),
/// so a rejected payload surfaces as an operation failure, not a
/// transport-level client error.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    /// Defaults to 1 when omitted
    pub quantity: Option<i32>,
    pub category: Option<String>,
}

/// DTO for updating an existing product; only supplied fields are applied
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub category: Option<String>,
}

/// Query filters for listing products
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Exact name to match (case-sensitive)
    pub name: Option<String>,
}

impl Product {
    /// Materialize a product from a create payload, enforcing the declared
    /// schema at write time: `name` required and non-empty, `price`
    /// required, `quantity` defaulting to 1. Assigns the identifier.
    pub fn new(input: CreateProduct) -> ProductResult<Self> {
        let name = match input.name {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(ProductError::Validation(
                    "missing required field: name".to_string(),
                ));
            }
        };

        let price = input.price.ok_or_else(|| {
            ProductError::Validation("missing required field: price".to_string())
        })?;

        Ok(Self {
            id: Uuid::now_v7(),
            name,
            description: input.description,
            price,
            quantity: input.quantity.unwrap_or(1),
            category: input.category,
        })
    }

    /// Apply updates from an UpdateProduct DTO, leaving absent fields
    /// untouched.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(category) = update.category {
            self.category = Some(category);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(name: Option<&str>, price: Option<f64>) -> CreateProduct {
        CreateProduct {
            name: name.map(String::from),
            price,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_defaults_quantity_to_one() {
        let product = Product::new(create_input(Some("Scarf"), Some(15.0))).unwrap();
        assert_eq!(product.name, "Scarf");
        assert_eq!(product.price, 15.0);
        assert_eq!(product.quantity, 1);
        assert_eq!(product.description, None);
        assert_eq!(product.category, None);
    }

    #[test]
    fn test_new_keeps_supplied_quantity() {
        let input = CreateProduct {
            quantity: Some(10),
            ..create_input(Some("Jacket"), Some(100.0))
        };
        let product = Product::new(input).unwrap();
        assert_eq!(product.quantity, 10);
    }

    #[test]
    fn test_new_rejects_missing_name() {
        let err = Product::new(create_input(None, Some(15.0))).unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let err = Product::new(create_input(Some(""), Some(15.0))).unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[test]
    fn test_new_rejects_missing_price() {
        let err = Product::new(create_input(Some("Scarf"), None)).unwrap_err();
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn test_new_assigns_distinct_ids() {
        let a = Product::new(create_input(Some("Scarf"), Some(15.0))).unwrap();
        let b = Product::new(create_input(Some("Scarf"), Some(15.0))).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_update_changes_only_supplied_fields() {
        let mut product = Product::new(CreateProduct {
            description: Some("Leather Jacket with Fur".to_string()),
            quantity: Some(10),
            category: Some("Men".to_string()),
            ..create_input(Some("Jacket"), Some(100.0))
        })
        .unwrap();
        let original_id = product.id;

        product.apply_update(UpdateProduct {
            price: Some(120.0),
            ..Default::default()
        });

        assert_eq!(product.id, original_id);
        assert_eq!(product.name, "Jacket");
        assert_eq!(product.description.as_deref(), Some("Leather Jacket with Fur"));
        assert_eq!(product.price, 120.0);
        assert_eq!(product.quantity, 10);
        assert_eq!(product.category.as_deref(), Some("Men"));
    }

    #[test]
    fn test_product_serializes_id_as_underscore_id() {
        let product = Product::new(create_input(Some("Hat"), Some(20.0))).unwrap();
        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("_id").is_some());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_category_name_is_optional() {
        let category: Category =
            serde_json::from_value(serde_json::json!({ "_id": Uuid::now_v7() })).unwrap();
        assert_eq!(category.name, None);
    }
}
