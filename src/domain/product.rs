use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type ProductId = u64;

/// Represents a product in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub in_stock: i32,
}

/// Payload for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub in_stock: i32,
}

impl ProductCreate {
    /// Checks the payload before it reaches a store.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if self.price < Decimal::ZERO {
            return Err(format!("price must not be negative, got {}", self.price));
        }
        if self.in_stock < 0 {
            return Err(format!("in_stock must not be negative, got {}", self.in_stock));
        }
        Ok(())
    }

    /// Builds the full Product once the store has assigned an identifier.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            in_stock: self.in_stock,
        }
    }
}
