use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::DocumentStoreError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store with id: {0}, not found")]
    NotFound(Uuid),

    #[error("Duplicated Name")]
    DuplicateName,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::NotFound(err.to_string()),
            StoreError::DuplicateName => AppError::Conflict(err.to_string()),
            StoreError::Validation(msg) => AppError::Validation(msg),
            StoreError::Database(msg) => AppError::DocumentStore(msg),
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<DocumentStoreError> for StoreError {
    fn from(err: DocumentStoreError) -> Self {
        if err.is_duplicate_key() {
            StoreError::DuplicateName
        } else {
            StoreError::Database(err.to_string())
        }
    }
}
