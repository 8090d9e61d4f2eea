use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::DocumentStoreError;
use domain_stores::StoreError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Client with id: {0}, not found")]
    NotFound(Uuid),

    #[error("Duplicated Email")]
    DuplicateEmail,

    #[error("{0}")]
    Validation(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    /// A store write made during a cascade failed
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(_) => AppError::NotFound(err.to_string()),
            ClientError::DuplicateEmail => AppError::Conflict(err.to_string()),
            ClientError::Validation(msg) => AppError::Validation(msg),
            ClientError::PasswordHash(msg) => AppError::InternalServerError(msg),
            ClientError::Store(inner) => inner.into(),
            ClientError::Database(msg) => AppError::DocumentStore(msg),
        }
    }
}

impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<DocumentStoreError> for ClientError {
    fn from(err: DocumentStoreError) -> Self {
        if err.is_duplicate_key() {
            ClientError::DuplicateEmail
        } else {
            ClientError::Database(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_store_failure_keeps_its_own_status() {
        let err = ClientError::from(StoreError::NotFound(Uuid::nil()));
        assert_eq!(AppError::from(err).status(), StatusCode::NOT_FOUND);

        let err = ClientError::from(StoreError::Database("down".to_string()));
        assert_eq!(AppError::from(err).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_missing_password_is_forbidden() {
        let err = ClientError::Validation("Password Required".to_string());
        assert_eq!(err.to_string(), "Password Required");
        assert_eq!(AppError::from(err).status(), StatusCode::FORBIDDEN);
    }
}
