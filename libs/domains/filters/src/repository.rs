use async_trait::async_trait;
use uuid::Uuid;

use crate::error::FilterResult;
use crate::models::{Filter, FilterPatch};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilterRepository: Send + Sync {
    async fn find_all(&self) -> FilterResult<Vec<Filter>>;

    async fn find_by_id(&self, id: Uuid) -> FilterResult<Option<Filter>>;

    async fn insert(&self, filter: Filter) -> FilterResult<Filter>;

    async fn update(&self, id: Uuid, patch: FilterPatch) -> FilterResult<Option<Filter>>;

    async fn remove(&self, id: Uuid) -> FilterResult<Option<Filter>>;
}
