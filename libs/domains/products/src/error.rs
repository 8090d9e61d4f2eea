use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::DocumentStoreError;
use domain_clients::ClientError;
use domain_stores::StoreError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product with id: {0}, not found")]
    NotFound(Uuid),

    #[error("Duplicated Slug")]
    DuplicateSlug,

    #[error("{0}")]
    Validation(String),

    /// A client write made during a cascade failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A store write made during a cascade failed
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(err.to_string()),
            ProductError::DuplicateSlug => AppError::Conflict(err.to_string()),
            ProductError::Validation(msg) => AppError::Validation(msg),
            ProductError::Client(inner) => inner.into(),
            ProductError::Store(inner) => inner.into(),
            ProductError::Database(msg) => AppError::DocumentStore(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<DocumentStoreError> for ProductError {
    fn from(err: DocumentStoreError) -> Self {
        if err.is_duplicate_key() {
            ProductError::DuplicateSlug
        } else {
            ProductError::Database(err.to_string())
        }
    }
}
