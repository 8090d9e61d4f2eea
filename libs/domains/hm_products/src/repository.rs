use async_trait::async_trait;
use uuid::Uuid;

use crate::error::HMProductResult;
use crate::models::{HMProduct, UpdateHMProduct};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HMProductRepository: Send + Sync {
    async fn find_all(&self) -> HMProductResult<Vec<HMProduct>>;

    async fn find_by_id(&self, id: Uuid) -> HMProductResult<Option<HMProduct>>;

    async fn insert(&self, product: HMProduct) -> HMProductResult<HMProduct>;

    async fn update(&self, id: Uuid, update: UpdateHMProduct) -> HMProductResult<Option<HMProduct>>;

    async fn remove(&self, id: Uuid) -> HMProductResult<Option<HMProduct>>;

    /// Overwrite the whole document after a material or model edit
    async fn save(&self, product: HMProduct) -> HMProductResult<()>;
}
