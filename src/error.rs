use thiserror::Error;

use crate::domain::{OrderId, ProductId, UserId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(UserId),
    #[error("User validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Product validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(OrderId),
    #[error("User not found: {0}")]
    UserNotFound(UserId),
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i32),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i32, available: i32 },
}
