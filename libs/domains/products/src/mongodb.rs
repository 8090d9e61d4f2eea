//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use database::mongodb::{Database, DocumentCollection};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{Product, ProductPatch};
use crate::repository::ProductRepository;

pub const COLLECTION: &str = "products";

/// MongoDB implementation of the ProductRepository
#[derive(Clone)]
pub struct MongoProductRepository {
    collection: DocumentCollection<Product>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: DocumentCollection::new(db, COLLECTION),
        }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: DocumentCollection::new(db, collection_name),
        }
    }

    pub async fn init_indexes(&self) -> ProductResult<()> {
        self.collection.ensure_unique_index("slug").await?;
        tracing::info!("Product indexes initialized");
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.collection.find_all().await?)
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        Ok(self.collection.find_by_id(id).await?)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id, slug = %product.slug))]
    async fn insert(&self, product: Product) -> ProductResult<Product> {
        self.collection.insert(&product).await?;
        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: Uuid, patch: ProductPatch) -> ProductResult<Option<Product>> {
        Ok(self.collection.find_by_id_and_update(id, &patch).await?)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: Uuid) -> ProductResult<Option<Product>> {
        Ok(self.collection.find_by_id_and_remove(id).await?)
    }
}
