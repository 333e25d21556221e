//! Business services over the entity stores.
//!
//! `OrderService` carries the one real piece of domain logic, the inventory
//! adjustment on order save. The user and product services are thin
//! validate-then-store wrappers backing the CRUD endpoints.

pub mod order_service;
pub mod product_service;
pub mod user_service;

pub use order_service::OrderService;
pub use product_service::ProductService;
pub use user_service::UserService;
