use std::sync::Arc;

use tracing::{debug, error, info, instrument};

use crate::domain::{Product, ProductCreate, ProductId};
use crate::error::ProductError;
use crate::store::ProductStore;

/// Service for product catalog management.
///
/// Stock is mutated only by the order workflow; this service covers the
/// catalog CRUD surface.
pub struct ProductService {
    products: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductStore>) -> Self {
        Self { products }
    }

    /// Validates the payload and persists a new product.
    #[instrument(
        fields(product_name = %payload.name, in_stock = payload.in_stock),
        skip(self, payload)
    )]
    pub async fn create(&self, payload: ProductCreate) -> Result<Product, ProductError> {
        debug!("Processing create_product request");

        if let Err(msg) = payload.validate() {
            error!(error = %msg, "Validation failed");
            return Err(ProductError::ValidationError(msg));
        }

        let product = self.products.create(payload).await;
        info!(product_id = product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(fields(product_id = %id), skip(self))]
    pub async fn get(&self, id: ProductId) -> Result<Product, ProductError> {
        debug!("Processing get_product request");

        match self.products.find_by_id(id).await {
            Some(product) => {
                info!(product_name = %product.name, in_stock = product.in_stock, "Product found");
                Ok(product)
            }
            None => {
                debug!("Product not found");
                Err(ProductError::NotFound(id))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Vec<Product> {
        debug!("Processing list_products request");

        let products = self.products.find_all().await;
        info!(product_count = products.len(), "Listed products");
        products
    }
}
