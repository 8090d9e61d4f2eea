//! MongoDB implementation of HMProductRepository

use async_trait::async_trait;
use database::mongodb::{Database, DocumentCollection};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{HMProductError, HMProductResult};
use crate::models::{HMProduct, UpdateHMProduct};
use crate::repository::HMProductRepository;

pub const COLLECTION: &str = "hm_products";

#[derive(Clone)]
pub struct MongoHMProductRepository {
    collection: DocumentCollection<HMProduct>,
}

impl MongoHMProductRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: DocumentCollection::new(db, COLLECTION),
        }
    }

    pub async fn init_indexes(&self) -> HMProductResult<()> {
        self.collection.ensure_unique_index("name").await?;
        tracing::info!("HMProduct indexes initialized");
        Ok(())
    }
}

#[async_trait]
impl HMProductRepository for MongoHMProductRepository {
    async fn find_all(&self) -> HMProductResult<Vec<HMProduct>> {
        Ok(self.collection.find_all().await?)
    }

    async fn find_by_id(&self, id: Uuid) -> HMProductResult<Option<HMProduct>> {
        Ok(self.collection.find_by_id(id).await?)
    }

    #[instrument(skip(self, product), fields(hm_product_id = %product.id))]
    async fn insert(&self, product: HMProduct) -> HMProductResult<HMProduct> {
        self.collection.insert(&product).await?;
        tracing::info!(hm_product_id = %product.id, "Created handmade product");
        Ok(product)
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: Uuid, update: UpdateHMProduct) -> HMProductResult<Option<HMProduct>> {
        Ok(self.collection.find_by_id_and_update(id, &update).await?)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: Uuid) -> HMProductResult<Option<HMProduct>> {
        Ok(self.collection.find_by_id_and_remove(id).await?)
    }

    #[instrument(skip(self, product), fields(hm_product_id = %product.id))]
    async fn save(&self, product: HMProduct) -> HMProductResult<()> {
        if self.collection.replace(product.id, &product).await? {
            Ok(())
        } else {
            Err(HMProductError::NotFound(product.id))
        }
    }
}
