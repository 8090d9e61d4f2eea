use mongodb::error::{ErrorKind, WriteFailure};

/// MongoDB server error code for a unique index violation
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Failure while establishing the client
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Failure of a single collection operation
#[derive(Debug, thiserror::Error)]
pub enum DocumentStoreError {
    #[error("MongoDB error: {0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),

    #[error("Failed to decode document: {0}")]
    Decode(#[from] mongodb::bson::de::Error),
}

impl DocumentStoreError {
    /// True when the server rejected a write because of a unique index.
    pub fn is_duplicate_key(&self) -> bool {
        let Self::Driver(err) = self else {
            return false;
        };

        match err.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
            ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
            _ => false,
        }
    }
}

pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;
