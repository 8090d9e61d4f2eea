use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ClientResult;
use crate::models::{Client, ClientPatch};

/// Persistence interface for clients
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find_all(&self) -> ClientResult<Vec<Client>>;

    async fn find_by_id(&self, id: Uuid) -> ClientResult<Option<Client>>;

    async fn insert(&self, client: Client) -> ClientResult<Client>;

    /// Apply a hooked patch, returning the updated client
    async fn update(&self, id: Uuid, patch: ClientPatch) -> ClientResult<Option<Client>>;

    /// Delete a client, returning the removed document
    async fn remove(&self, id: Uuid) -> ClientResult<Option<Client>>;

    /// Clients whose wishlist contains `product_id`
    async fn find_by_wishlist_product(&self, product_id: Uuid) -> ClientResult<Vec<Client>>;

    /// Overwrite a whole client; `NotFound` if it no longer exists
    async fn save(&self, client: Client) -> ClientResult<()>;
}
