use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::DocumentStoreError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum HMProductError {
    #[error("HMProduct with id: {0}, not found")]
    NotFound(Uuid),

    /// A material or model id that is not in the product
    #[error("Value with id: {value_id}, not found for HMProduct with id: {product_id}")]
    ValueNotFound { value_id: Uuid, product_id: Uuid },

    #[error("Duplicated Name")]
    DuplicateName,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type HMProductResult<T> = Result<T, HMProductError>;

impl From<HMProductError> for AppError {
    fn from(err: HMProductError) -> Self {
        match err {
            HMProductError::NotFound(_) | HMProductError::ValueNotFound { .. } => {
                AppError::NotFound(err.to_string())
            }
            HMProductError::DuplicateName => AppError::Conflict(err.to_string()),
            HMProductError::Validation(msg) => AppError::Validation(msg),
            HMProductError::Database(msg) => AppError::DocumentStore(msg),
        }
    }
}

impl IntoResponse for HMProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<DocumentStoreError> for HMProductError {
    fn from(err: DocumentStoreError) -> Self {
        if err.is_duplicate_key() {
            HMProductError::DuplicateName
        } else {
            HMProductError::Database(err.to_string())
        }
    }
}
