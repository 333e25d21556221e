//! Request handlers for the order, user, and product endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};

use crate::domain::{Order, OrderRequest, Product, ProductCreate, User, UserCreate};
use crate::system::OrderSystem;

use super::types::{created, ok, ApiJson, ApiResult};

/// GET /api/health
pub async fn health() -> ApiResult<&'static str> {
    ok("up")
}

/// GET /api/orders
pub async fn list_orders(State(system): State<Arc<OrderSystem>>) -> ApiResult<Vec<Order>> {
    let orders = system.order_service.find_all().await;
    ok(orders)
}

/// POST /api/orders
///
/// Creates a new order when the request carries no id, otherwise updates
/// that order in place. The stock check happens inside the workflow; a
/// rejected request changes nothing.
pub async fn save_order(
    State(system): State<Arc<OrderSystem>>,
    ApiJson(request): ApiJson<OrderRequest>,
) -> ApiResult<Order> {
    let is_new = request.id.is_none();
    let order = system.order_service.save(request).await?;
    if is_new {
        created(order)
    } else {
        ok(order)
    }
}

/// GET /api/users
pub async fn list_users(State(system): State<Arc<OrderSystem>>) -> ApiResult<Vec<User>> {
    ok(system.user_service.list().await)
}

/// POST /api/users
pub async fn create_user(
    State(system): State<Arc<OrderSystem>>,
    ApiJson(payload): ApiJson<UserCreate>,
) -> ApiResult<User> {
    let user = system.user_service.create(payload).await?;
    created(user)
}

/// GET /api/users/{id}
pub async fn get_user(
    State(system): State<Arc<OrderSystem>>,
    Path(id): Path<u64>,
) -> ApiResult<User> {
    let user = system.user_service.get(id).await?;
    ok(user)
}

/// GET /api/products
pub async fn list_products(State(system): State<Arc<OrderSystem>>) -> ApiResult<Vec<Product>> {
    ok(system.product_service.list().await)
}

/// POST /api/products
pub async fn create_product(
    State(system): State<Arc<OrderSystem>>,
    ApiJson(payload): ApiJson<ProductCreate>,
) -> ApiResult<Product> {
    let product = system.product_service.create(payload).await?;
    created(product)
}

/// GET /api/products/{id}
pub async fn get_product(
    State(system): State<Arc<OrderSystem>>,
    Path(id): Path<u64>,
) -> ApiResult<Product> {
    let product = system.product_service.get(id).await?;
    ok(product)
}
