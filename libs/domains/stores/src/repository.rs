use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::{Store, UpdateStore};

/// Persistence interface for stores
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn find_all(&self) -> StoreResult<Vec<Store>>;

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Store>>;

    async fn insert(&self, store: Store) -> StoreResult<Store>;

    /// Apply a partial update, returning the updated store
    async fn update(&self, id: Uuid, update: UpdateStore) -> StoreResult<Option<Store>>;

    /// Delete a store, returning the removed document
    async fn remove(&self, id: Uuid) -> StoreResult<Option<Store>>;

    /// Stores whose `clients` list contains `client_id`
    async fn find_by_client(&self, client_id: Uuid) -> StoreResult<Vec<Store>>;

    /// Stores whose `products` list contains `product_id`
    async fn find_by_product(&self, product_id: Uuid) -> StoreResult<Vec<Store>>;

    /// Overwrite a whole store; `NotFound` if it no longer exists
    async fn save(&self, store: Store) -> StoreResult<()>;
}
