//! Process-local stores backed by a HashMap per entity.
//!
//! Identifiers are assigned from an atomic counter starting at 1. Locks are
//! held only for the map access, never across an await point.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{
    Order, OrderId, Product, ProductCreate, ProductId, User, UserCreate, UserId,
};
use super::{OrderStore, ProductStore, UserStore};

pub struct MemoryUserStore {
    rows: RwLock<HashMap<UserId, User>>,
    next_id: AtomicU64,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, payload: UserCreate) -> User {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = payload.into_user(id);
        self.rows.write().insert(id, user.clone());
        user
    }

    async fn find_by_id(&self, id: UserId) -> Option<User> {
        self.rows.read().get(&id).cloned()
    }

    async fn find_all(&self) -> Vec<User> {
        self.rows.read().values().cloned().collect()
    }
}

pub struct MemoryProductStore {
    rows: RwLock<HashMap<ProductId, Product>>,
    next_id: AtomicU64,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create(&self, payload: ProductCreate) -> Product {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = payload.into_product(id);
        self.rows.write().insert(id, product.clone());
        product
    }

    async fn find_by_id(&self, id: ProductId) -> Option<Product> {
        self.rows.read().get(&id).cloned()
    }

    async fn save(&self, product: Product) -> Product {
        self.rows.write().insert(product.id, product.clone());
        product
    }

    async fn find_all(&self) -> Vec<Product> {
        self.rows.read().values().cloned().collect()
    }
}

pub struct MemoryOrderStore {
    rows: RwLock<HashMap<OrderId, Order>>,
    next_id: AtomicU64,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for MemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn find_by_id(&self, id: OrderId) -> Option<Order> {
        self.rows.read().get(&id).cloned()
    }

    async fn save(&self, mut order: Order) -> Order {
        let id = match order.id {
            Some(id) => id,
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        order.id = Some(id);
        self.rows.write().insert(id, order.clone());
        order
    }

    async fn find_all(&self) -> Vec<Order> {
        self.rows.read().values().cloned().collect()
    }
}
