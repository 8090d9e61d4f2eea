//! Store Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{StoreError, StoreResult};
use crate::models::{CreateStore, Store, UpdateStore};
use crate::repository::StoreRepository;

pub struct StoreService<R: StoreRepository> {
    repository: Arc<R>,
}

impl<R: StoreRepository> StoreService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_stores(&self) -> StoreResult<Vec<Store>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_store(&self, id: Uuid) -> StoreResult<Store> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(store_name = %input.name))]
    pub async fn create_store(&self, input: CreateStore) -> StoreResult<Store> {
        input
            .validate()
            .map_err(|e| StoreError::Validation(e.to_string()))?;

        self.repository.insert(Store::new(input)).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_store(&self, id: Uuid, input: UpdateStore) -> StoreResult<Store> {
        input
            .validate()
            .map_err(|e| StoreError::Validation(e.to_string()))?;

        self.repository
            .update(id, input)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    /// Referenced documents are left alone; a store owns none of them.
    #[instrument(skip(self))]
    pub async fn delete_store(&self, id: Uuid) -> StoreResult<Store> {
        let removed = self
            .repository
            .remove(id)
            .await?
            .ok_or(StoreError::NotFound(id))?;

        tracing::info!(store_id = %id, "Deleted store");
        Ok(removed)
    }
}
