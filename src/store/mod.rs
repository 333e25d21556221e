//! Persistence contracts for the three entity stores.
//!
//! The order workflow and the CRUD services depend only on these traits;
//! [`memory`] provides the process-local implementation.

pub mod memory;

use async_trait::async_trait;

use crate::domain::{
    Order, OrderId, Product, ProductCreate, ProductId, User, UserCreate, UserId,
};

/// Store for user rows.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Builds a user from the payload, assigns an identifier, and persists it.
    async fn create(&self, payload: UserCreate) -> User;

    /// Returns the user or nothing; no side effects.
    async fn find_by_id(&self, id: UserId) -> Option<User>;

    async fn find_all(&self) -> Vec<User>;
}

/// Store for product rows.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Builds a product from the payload, assigns an identifier, and persists it.
    async fn create(&self, payload: ProductCreate) -> Product;

    /// Returns the product or nothing; no side effects.
    async fn find_by_id(&self, id: ProductId) -> Option<Product>;

    /// Overwrites the stored product by identifier, returns the persisted value.
    async fn save(&self, product: Product) -> Product;

    async fn find_all(&self) -> Vec<Product>;
}

/// Store for order rows.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Returns the order or nothing; no side effects.
    async fn find_by_id(&self, id: OrderId) -> Option<Order>;

    /// Creates the order (assigning an identifier when absent) or overwrites
    /// it by identifier, and returns the persisted value.
    async fn save(&self, order: Order) -> Order;

    /// Returns all orders, no ordering guarantee.
    async fn find_all(&self) -> Vec<Order>;
}
