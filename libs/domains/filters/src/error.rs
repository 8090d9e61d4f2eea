use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::DocumentStoreError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Filter with id: {0}, not found")]
    NotFound(Uuid),

    #[error("Duplicated Custom")]
    DuplicateCustom,

    #[error("Database error: {0}")]
    Database(String),
}

pub type FilterResult<T> = Result<T, FilterError>;

impl From<FilterError> for AppError {
    fn from(err: FilterError) -> Self {
        match err {
            FilterError::NotFound(_) => AppError::NotFound(err.to_string()),
            FilterError::DuplicateCustom => AppError::Conflict(err.to_string()),
            FilterError::Database(msg) => AppError::DocumentStore(msg),
        }
    }
}

impl IntoResponse for FilterError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<DocumentStoreError> for FilterError {
    fn from(err: DocumentStoreError) -> Self {
        if err.is_duplicate_key() {
            FilterError::DuplicateCustom
        } else {
            FilterError::Database(err.to_string())
        }
    }
}
