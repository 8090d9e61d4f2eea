//! MongoDB implementation of FilterRepository

use async_trait::async_trait;
use database::mongodb::{Database, DocumentCollection};
use uuid::Uuid;

use crate::error::FilterResult;
use crate::models::{Filter, FilterPatch};
use crate::repository::FilterRepository;

pub const COLLECTION: &str = "filters";

#[derive(Clone)]
pub struct MongoFilterRepository {
    collection: DocumentCollection<Filter>,
}

impl MongoFilterRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: DocumentCollection::new(db, COLLECTION),
        }
    }

    pub async fn init_indexes(&self) -> FilterResult<()> {
        self.collection.ensure_unique_index("custom_id").await?;
        tracing::info!("Filter indexes initialized");
        Ok(())
    }
}

#[async_trait]
impl FilterRepository for MongoFilterRepository {
    async fn find_all(&self) -> FilterResult<Vec<Filter>> {
        Ok(self.collection.find_all().await?)
    }

    async fn find_by_id(&self, id: Uuid) -> FilterResult<Option<Filter>> {
        Ok(self.collection.find_by_id(id).await?)
    }

    async fn insert(&self, filter: Filter) -> FilterResult<Filter> {
        self.collection.insert(&filter).await?;
        tracing::info!(filter_id = %filter.id, custom_id = %filter.custom_id, "Created filter");
        Ok(filter)
    }

    async fn update(&self, id: Uuid, patch: FilterPatch) -> FilterResult<Option<Filter>> {
        Ok(self.collection.find_by_id_and_update(id, &patch).await?)
    }

    async fn remove(&self, id: Uuid) -> FilterResult<Option<Filter>> {
        Ok(self.collection.find_by_id_and_remove(id).await?)
    }
}
