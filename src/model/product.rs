//! The product record and its create/update payloads.
//!
//! # Actor Framework
//! [`Product`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait (see
//! [`crate::product_actor::entity`]), allowing it to be managed by a
//! [`ResourceActor`](actor_framework::ResourceActor):
//! - Creation parameters ([`ProductCreate`])
//! - Update parameters ([`ProductUpdate`])

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

/// Type-safe identifier for Products.
///
/// Serialized as the bare hyphenated UUID string, both on the wire and in the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub Uuid);

impl ProductId {
    /// A fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: f64,
    pub price: f64,
    pub description: String,
    pub category: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the actor system)
    /// * `params` - The caller-supplied fields
    pub fn new(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            quantity: params.quantity,
            price: params.price,
            description: params.description,
            category: params.category,
        }
    }

    /// Shallow merge: every field present in `update` overwrites the current value.
    /// The id is never touched.
    pub fn apply(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
    }
}

/// Payload for creating a product. The id is always assigned by the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub quantity: f64,
    pub price: f64,
    pub description: String,
    pub category: String,
}

/// Payload for updating a product; absent fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product::new(
            ProductId::generate(),
            ProductCreate {
                name: "Widget".to_string(),
                quantity: 4.0,
                price: 9.5,
                description: "A widget".to_string(),
                category: "Tools".to_string(),
            },
        )
    }

    #[test]
    fn test_apply_only_overwrites_supplied_fields() {
        let original = widget();
        let mut product = original.clone();

        product.apply(ProductUpdate {
            price: Some(12.0),
            category: Some("Hardware".to_string()),
            ..Default::default()
        });

        assert_eq!(product.id, original.id);
        assert_eq!(product.price, 12.0);
        assert_eq!(product.category, "Hardware");
        assert_eq!(product.name, original.name);
        assert_eq!(product.quantity, original.quantity);
        assert_eq!(product.description, original.description);
    }

    #[test]
    fn test_empty_update_is_a_no_op() {
        let original = widget();
        let mut product = original.clone();
        product.apply(ProductUpdate::default());
        assert_eq!(product, original);
    }

    #[test]
    fn test_product_json_shape() {
        let product = widget();
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["id"], product.id.to_string());
        assert_eq!(value["name"], "Widget");
        assert_eq!(value["quantity"], 4.0);
        assert_eq!(value["price"], 9.5);
        assert_eq!(value["description"], "A widget");
        assert_eq!(value["category"], "Tools");
    }

    #[test]
    fn test_product_id_parses_and_displays() {
        let id: ProductId = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert!("not-a-uuid".parse::<ProductId>().is_err());
    }
}
