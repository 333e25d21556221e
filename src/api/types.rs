//! API response types and error codes
//!
//! - `ApiResponse<T>`: unified response wrapper
//! - `error_codes`: standard error code constants
//! - `ApiError`: transport-level failure carrying status, code, and message

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::{OrderError, ProductError, UserError};

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INSUFFICIENT_STOCK: i32 = 1002;

    // Resource errors (4xxx)
    pub const ORDER_NOT_FOUND: i32 = 4001;
    pub const USER_NOT_FOUND: i32 = 4002;
    pub const PRODUCT_NOT_FOUND: i32 = 4003;
}

/// Transport-level error: HTTP status plus the envelope code and message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            error_codes::INVALID_PARAMETER,
            msg,
        )
    }

    pub fn not_found(code: i32, msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, code, msg)
    }

    pub fn conflict(code: i32, msg: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, code, msg)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(self.code, self.msg);
        (self.status, Json(body)).into_response()
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        let msg = err.to_string();
        match err {
            OrderError::NotFound(_) => Self::not_found(error_codes::ORDER_NOT_FOUND, msg),
            OrderError::UserNotFound(_) => Self::not_found(error_codes::USER_NOT_FOUND, msg),
            OrderError::ProductNotFound(_) => {
                Self::not_found(error_codes::PRODUCT_NOT_FOUND, msg)
            }
            OrderError::InvalidQuantity(_) => Self::bad_request(msg),
            OrderError::InsufficientStock { .. } => {
                Self::conflict(error_codes::INSUFFICIENT_STOCK, msg)
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        let msg = err.to_string();
        match err {
            UserError::NotFound(_) => Self::not_found(error_codes::USER_NOT_FOUND, msg),
            UserError::ValidationError(_) => Self::bad_request(msg),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        let msg = err.to_string();
        match err {
            ProductError::NotFound(_) => Self::not_found(error_codes::PRODUCT_NOT_FOUND, msg),
            ProductError::ValidationError(_) => Self::bad_request(msg),
        }
    }
}

/// `Json` extractor that reports body rejections in the standard envelope.
///
/// axum's own `Json` rejection is a plain-text response; this wrapper maps
/// malformed and field-missing bodies to a 400 with code 1001 instead.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// 200 response with the standard envelope.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

/// 201 response for newly created resources.
pub fn created<T: Serialize>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::success(data))))
}
