use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::domain::{ProductCreate, UserCreate};
use crate::service::{OrderService, ProductService, UserService};
use crate::store::memory::{MemoryOrderStore, MemoryProductStore, MemoryUserStore};

/// The main application system that wires stores into services.
///
/// Responsible for building the persistence layer, injecting it into the
/// services, and seeding demo data. The single composition point used by
/// `main` and by the integration tests.
pub struct OrderSystem {
    pub user_service: UserService,
    pub product_service: ProductService,
    pub order_service: OrderService,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSystem {
    #[instrument(name = "order_system")]
    pub fn new() -> Self {
        info!("Starting order system");

        // 1. Build the persistence layer
        let users = Arc::new(MemoryUserStore::new());
        let products = Arc::new(MemoryProductStore::new());
        let orders = Arc::new(MemoryOrderStore::new());

        // 2. Wire the services (dependency injection)
        let user_service = UserService::new(users.clone());
        let product_service = ProductService::new(products.clone());
        let order_service = OrderService::new(users, products, orders);

        info!("Order system started successfully");

        Self {
            user_service,
            product_service,
            order_service,
        }
    }

    /// Loads one known user and product so a fresh server is immediately
    /// exercisable.
    pub async fn seed_demo(&self) -> anyhow::Result<()> {
        let user = self
            .user_service
            .create(UserCreate {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                email: "jd@yahoo.com".to_string(),
                password: "1234".to_string(),
            })
            .await?;

        let product = self
            .product_service
            .create(ProductCreate {
                name: "Dalek Plunger".to_string(),
                description: "Sucker arm replacement part".to_string(),
                price: Decimal::from(10),
                in_stock: 5,
            })
            .await?;

        info!(
            user_id = user.id,
            product_id = product.id,
            "Demo data seeded"
        );
        Ok(())
    }
}
