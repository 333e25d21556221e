use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument};

use crate::domain::{Order, OrderRequest};
use crate::error::OrderError;
use crate::store::{OrderStore, ProductStore, UserStore};

/// The order workflow.
///
/// An order consumes product inventory: saving one resolves the user and the
/// product, applies the quantity delta against the previous order state, and
/// persists both the adjusted product and the order. On any failure nothing
/// is written.
pub struct OrderService {
    users: Arc<dyn UserStore>,
    products: Arc<dyn ProductStore>,
    orders: Arc<dyn OrderStore>,
    // Serializes the whole resolve-check-write sequence. Concurrent saves
    // against the same product would otherwise race between the stock check
    // and the product write and lose updates.
    save_lock: Mutex<()>,
}

impl OrderService {
    pub fn new(
        users: Arc<dyn UserStore>,
        products: Arc<dyn ProductStore>,
        orders: Arc<dyn OrderStore>,
    ) -> Self {
        Self {
            users,
            products,
            orders,
            save_lock: Mutex::new(()),
        }
    }

    /// Returns all persisted orders exactly as the order store holds them.
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Vec<Order> {
        debug!("Processing list_orders request");

        let orders = self.orders.find_all().await;
        info!(order_count = orders.len(), "Listed orders");
        orders
    }

    /// Creates or updates an order and adjusts the product stock.
    ///
    /// The stock adjustment is relative to the previous order state: a
    /// brand-new order consumes its full quantity, an update consumes only
    /// the difference to the stored quantity. The check happens before any
    /// write, so a rejected request leaves both stores untouched.
    #[instrument(
        fields(
            order_id = ?request.id,
            user_id = %request.user_id,
            product_id = %request.product_id,
            quantity = %request.quantity,
            total = %request.total
        ),
        skip(self, request)
    )]
    pub async fn save(&self, request: OrderRequest) -> Result<Order, OrderError> {
        info!("Processing save_order request");

        if let Err(msg) = request.validate() {
            error!(error = %msg, "Order validation failed");
            return Err(OrderError::InvalidQuantity(request.quantity));
        }

        let _guard = self.save_lock.lock().await;

        // Step 1: Resolve the user
        let user = match self.users.find_by_id(request.user_id).await {
            Some(user) => {
                info!(user_name = %user.first_name, "User resolved");
                user
            }
            None => {
                error!("User not found");
                return Err(OrderError::UserNotFound(request.user_id));
            }
        };

        // Step 2: Resolve the product
        let mut product = match self.products.find_by_id(request.product_id).await {
            Some(product) => {
                info!(product_name = %product.name, in_stock = product.in_stock, "Product resolved");
                product
            }
            None => {
                error!("Product not found");
                return Err(OrderError::ProductNotFound(request.product_id));
            }
        };

        // Step 3: Previous quantity, 0 for a brand-new order
        let previous_quantity = match request.id {
            Some(order_id) => match self.orders.find_by_id(order_id).await {
                Some(previous) => previous.quantity,
                None => {
                    error!("Order not found for update");
                    return Err(OrderError::NotFound(order_id));
                }
            },
            None => 0,
        };

        // Step 4: Stock check, before any write. The math is done in i64:
        // an update that switches products can restore more stock than i32
        // holds.
        let delta = i64::from(request.quantity) - i64::from(previous_quantity);
        let new_stock = i64::from(product.in_stock) - delta;
        if new_stock < 0 {
            let available = product.in_stock.saturating_add(previous_quantity);
            error!(
                requested = request.quantity,
                available, "Insufficient stock"
            );
            return Err(OrderError::InsufficientStock {
                requested: request.quantity,
                available,
            });
        }

        // Step 5: Persist the adjusted product, then the order
        product.in_stock = i32::try_from(new_stock).unwrap_or(i32::MAX);
        let product = self.products.save(product).await;

        let order = Order {
            id: request.id,
            product,
            quantity: request.quantity,
            order_date: request.order_date,
            total: request.total,
            user,
        };
        let order = self.orders.save(order).await;

        info!(
            order_id = ?order.id,
            in_stock = order.product.in_stock,
            "Order saved successfully"
        );
        Ok(order)
    }
}
