//! # Mock Stores
//!
//! Recording fakes for testing the services in isolation.
//!
//! # Testing Strategy
//! The services depend on the store traits, not on a concrete backend. Tests
//! substitute these fakes: each one serves pre-loaded rows, behaves like a
//! real store on `save` (so repeated calls observe earlier writes), and
//! records every call. Tests then assert call counts, zero-interaction, and
//! the exact values that were passed to `save`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{
    Order, OrderId, Product, ProductCreate, ProductId, User, UserCreate, UserId,
};
use crate::store::{OrderStore, ProductStore, UserStore};

pub struct MockUserStore {
    rows: Mutex<HashMap<UserId, User>>,
    next_id: AtomicU64,
    created: Mutex<Vec<UserCreate>>,
    find_by_id_calls: Mutex<Vec<UserId>>,
    find_all_calls: AtomicUsize,
}

impl MockUserStore {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Self {
            rows: Mutex::new(users.into_iter().map(|u| (u.id, u)).collect()),
            next_id: AtomicU64::new(next_id),
            created: Mutex::new(Vec::new()),
            find_by_id_calls: Mutex::new(Vec::new()),
            find_all_calls: AtomicUsize::new(0),
        }
    }

    /// Payloads passed to `create`, in call order.
    pub fn created(&self) -> Vec<UserCreate> {
        self.created.lock().clone()
    }

    /// Total calls across every store operation.
    pub fn interactions(&self) -> usize {
        self.created.lock().len()
            + self.find_by_id_calls.lock().len()
            + self.find_all_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn create(&self, payload: UserCreate) -> User {
        self.created.lock().push(payload.clone());
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = payload.into_user(id);
        self.rows.lock().insert(id, user.clone());
        user
    }

    async fn find_by_id(&self, id: UserId) -> Option<User> {
        self.find_by_id_calls.lock().push(id);
        self.rows.lock().get(&id).cloned()
    }

    async fn find_all(&self) -> Vec<User> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().values().cloned().collect()
    }
}

pub struct MockProductStore {
    rows: Mutex<HashMap<ProductId, Product>>,
    next_id: AtomicU64,
    created: Mutex<Vec<ProductCreate>>,
    saved: Mutex<Vec<Product>>,
    find_by_id_calls: Mutex<Vec<ProductId>>,
    find_all_calls: AtomicUsize,
}

impl MockProductStore {
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            rows: Mutex::new(products.into_iter().map(|p| (p.id, p)).collect()),
            next_id: AtomicU64::new(next_id),
            created: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
            find_by_id_calls: Mutex::new(Vec::new()),
            find_all_calls: AtomicUsize::new(0),
        }
    }

    /// Payloads passed to `create`, in call order.
    pub fn created(&self) -> Vec<ProductCreate> {
        self.created.lock().clone()
    }

    /// Products passed to `save`, in call order.
    pub fn saved(&self) -> Vec<Product> {
        self.saved.lock().clone()
    }

    /// Total calls across every store operation.
    pub fn interactions(&self) -> usize {
        self.created.lock().len()
            + self.saved.lock().len()
            + self.find_by_id_calls.lock().len()
            + self.find_all_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductStore for MockProductStore {
    async fn create(&self, payload: ProductCreate) -> Product {
        self.created.lock().push(payload.clone());
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = payload.into_product(id);
        self.rows.lock().insert(id, product.clone());
        product
    }

    async fn find_by_id(&self, id: ProductId) -> Option<Product> {
        self.find_by_id_calls.lock().push(id);
        self.rows.lock().get(&id).cloned()
    }

    async fn save(&self, product: Product) -> Product {
        self.saved.lock().push(product.clone());
        self.rows.lock().insert(product.id, product.clone());
        product
    }

    async fn find_all(&self) -> Vec<Product> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().values().cloned().collect()
    }
}

pub struct MockOrderStore {
    rows: Mutex<HashMap<OrderId, Order>>,
    next_id: AtomicU64,
    saved: Mutex<Vec<Order>>,
    find_by_id_calls: Mutex<Vec<OrderId>>,
    find_all_count: AtomicUsize,
}

impl MockOrderStore {
    pub fn new() -> Self {
        Self::with_orders(Vec::new())
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        let next_id = orders.iter().filter_map(|o| o.id).max().unwrap_or(0) + 1;
        Self {
            rows: Mutex::new(
                orders
                    .into_iter()
                    .filter_map(|o| o.id.map(|id| (id, o)))
                    .collect(),
            ),
            next_id: AtomicU64::new(next_id),
            saved: Mutex::new(Vec::new()),
            find_by_id_calls: Mutex::new(Vec::new()),
            find_all_count: AtomicUsize::new(0),
        }
    }

    /// Orders passed to `save`, in call order, exactly as the caller sent
    /// them (before any identifier assignment).
    pub fn saved(&self) -> Vec<Order> {
        self.saved.lock().clone()
    }

    pub fn find_all_calls(&self) -> usize {
        self.find_all_count.load(Ordering::SeqCst)
    }

    /// Total calls across every store operation.
    pub fn interactions(&self) -> usize {
        self.saved.lock().len()
            + self.find_by_id_calls.lock().len()
            + self.find_all_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderStore for MockOrderStore {
    async fn find_by_id(&self, id: OrderId) -> Option<Order> {
        self.find_by_id_calls.lock().push(id);
        self.rows.lock().get(&id).cloned()
    }

    async fn save(&self, mut order: Order) -> Order {
        self.saved.lock().push(order.clone());
        let id = match order.id {
            Some(id) => id,
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        order.id = Some(id);
        self.rows.lock().insert(id, order.clone());
        order
    }

    async fn find_all(&self) -> Vec<Order> {
        self.find_all_count.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().values().cloned().collect()
    }
}
