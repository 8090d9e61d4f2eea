//! MongoDB implementation of StoreRepository

use async_trait::async_trait;
use database::mongodb::{Database, DocumentCollection, bson::doc};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::{Store, UpdateStore};
use crate::repository::StoreRepository;

pub const COLLECTION: &str = "stores";

#[derive(Clone)]
pub struct MongoStoreRepository {
    collection: DocumentCollection<Store>,
}

impl MongoStoreRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: DocumentCollection::new(db, COLLECTION),
        }
    }

    /// Unique `name`, plus the reference lists searched by cascades.
    pub async fn init_indexes(&self) -> StoreResult<()> {
        self.collection.ensure_unique_index("name").await?;
        self.collection.ensure_index("clients").await?;
        self.collection.ensure_index("products").await?;
        tracing::info!("Store indexes initialized");
        Ok(())
    }
}

#[async_trait]
impl StoreRepository for MongoStoreRepository {
    async fn find_all(&self) -> StoreResult<Vec<Store>> {
        Ok(self.collection.find_all().await?)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Store>> {
        Ok(self.collection.find_by_id(id).await?)
    }

    #[instrument(skip(self, store), fields(store_id = %store.id))]
    async fn insert(&self, store: Store) -> StoreResult<Store> {
        self.collection.insert(&store).await?;
        tracing::info!(store_id = %store.id, "Created store");
        Ok(store)
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: Uuid, update: UpdateStore) -> StoreResult<Option<Store>> {
        Ok(self.collection.find_by_id_and_update(id, &update).await?)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: Uuid) -> StoreResult<Option<Store>> {
        Ok(self.collection.find_by_id_and_remove(id).await?)
    }

    async fn find_by_client(&self, client_id: Uuid) -> StoreResult<Vec<Store>> {
        Ok(self
            .collection
            .find_many(doc! { "clients": client_id.to_string() })
            .await?)
    }

    async fn find_by_product(&self, product_id: Uuid) -> StoreResult<Vec<Store>> {
        Ok(self
            .collection
            .find_many(doc! { "products": product_id.to_string() })
            .await?)
    }

    #[instrument(skip(self, store), fields(store_id = %store.id))]
    async fn save(&self, store: Store) -> StoreResult<()> {
        if self.collection.replace(store.id, &store).await? {
            Ok(())
        } else {
            Err(StoreError::NotFound(store.id))
        }
    }
}
