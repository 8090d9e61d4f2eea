use chrono::Utc;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{FilterError, FilterResult};
use crate::models::{CreateFilter, Filter, FilterPatch, UpdateFilter};
use crate::repository::FilterRepository;

pub struct FilterService<R: FilterRepository> {
    repository: Arc<R>,
}

impl<R: FilterRepository> FilterService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_filters(&self) -> FilterResult<Vec<Filter>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_filter(&self, id: Uuid) -> FilterResult<Filter> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(FilterError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(custom_id = %input.custom_id))]
    pub async fn create_filter(&self, input: CreateFilter) -> FilterResult<Filter> {
        self.repository.insert(Filter::new(input, Utc::now())).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_filter(&self, id: Uuid, input: UpdateFilter) -> FilterResult<Filter> {
        self.repository
            .update(id, FilterPatch::new(input, Utc::now()))
            .await?
            .ok_or(FilterError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_filter(&self, id: Uuid) -> FilterResult<Filter> {
        self.repository
            .remove(id)
            .await?
            .ok_or(FilterError::NotFound(id))
    }
}
