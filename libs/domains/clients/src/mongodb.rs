//! MongoDB implementation of ClientRepository

use async_trait::async_trait;
use database::mongodb::{Database, DocumentCollection, bson::doc};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ClientError, ClientResult};
use crate::models::{Client, ClientPatch};
use crate::repository::ClientRepository;

pub const COLLECTION: &str = "clients";

#[derive(Clone)]
pub struct MongoClientRepository {
    collection: DocumentCollection<Client>,
}

impl MongoClientRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: DocumentCollection::new(db, COLLECTION),
        }
    }

    pub async fn init_indexes(&self) -> ClientResult<()> {
        self.collection.ensure_unique_index("email").await?;
        self.collection.ensure_index("wishlist").await?;
        tracing::info!("Client indexes initialized");
        Ok(())
    }
}

#[async_trait]
impl ClientRepository for MongoClientRepository {
    async fn find_all(&self) -> ClientResult<Vec<Client>> {
        Ok(self.collection.find_all().await?)
    }

    async fn find_by_id(&self, id: Uuid) -> ClientResult<Option<Client>> {
        Ok(self.collection.find_by_id(id).await?)
    }

    #[instrument(skip(self, client), fields(client_id = %client.id))]
    async fn insert(&self, client: Client) -> ClientResult<Client> {
        self.collection.insert(&client).await?;
        tracing::info!(client_id = %client.id, "Created client");
        Ok(client)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: Uuid, patch: ClientPatch) -> ClientResult<Option<Client>> {
        Ok(self.collection.find_by_id_and_update(id, &patch).await?)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: Uuid) -> ClientResult<Option<Client>> {
        Ok(self.collection.find_by_id_and_remove(id).await?)
    }

    async fn find_by_wishlist_product(&self, product_id: Uuid) -> ClientResult<Vec<Client>> {
        Ok(self
            .collection
            .find_many(doc! { "wishlist": product_id.to_string() })
            .await?)
    }

    #[instrument(skip(self, client), fields(client_id = %client.id))]
    async fn save(&self, client: Client) -> ClientResult<()> {
        if self.collection.replace(client.id, &client).await? {
            Ok(())
        } else {
            Err(ClientError::NotFound(client.id))
        }
    }
}
