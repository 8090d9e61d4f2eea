use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{Product, ProductPatch};

/// Product repository trait
///
/// Defines the interface for product persistence operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    async fn insert(&self, product: Product) -> ProductResult<Product>;

    /// Apply a hooked patch, returning the updated product
    async fn update(&self, id: Uuid, patch: ProductPatch) -> ProductResult<Option<Product>>;

    /// Delete a product, returning the removed document
    async fn remove(&self, id: Uuid) -> ProductResult<Option<Product>>;
}
