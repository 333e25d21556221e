//! HTTP transport: router assembly over the shared system state.

pub mod handlers;
pub mod types;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::system::OrderSystem;

/// Builds the application router.
pub fn router(system: Arc<OrderSystem>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route(
            "/api/orders",
            get(handlers::list_orders).post(handlers::save_order),
        )
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route("/api/users/{id}", get(handlers::get_user))
        .route(
            "/api/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/api/products/{id}", get(handlers::get_product))
        .with_state(system)
}
