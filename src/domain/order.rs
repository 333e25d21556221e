use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::{Product, ProductId};
use super::user::{User, UserId};

pub type OrderId = u64;

/// Represents a customer order.
///
/// Embeds the user and product rows that were current when the order was
/// saved. An absent `id` means the order has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: Option<OrderId>,
    pub product: Product,
    pub quantity: i32,
    pub order_date: NaiveDate,
    pub total: Decimal,
    pub user: User,
}

/// Payload for creating or updating an order.
///
/// With an `id` the request updates that order in place; without one it
/// creates a brand-new order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRequest {
    pub id: Option<OrderId>,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub order_date: NaiveDate,
    pub total: Decimal,
}

impl OrderRequest {
    /// Checks the payload before any store lookup happens.
    pub fn validate(&self) -> Result<(), String> {
        if self.quantity < 1 {
            return Err(format!("quantity must be positive, got {}", self.quantity));
        }
        Ok(())
    }
}
