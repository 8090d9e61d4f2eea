//! MongoDB connector, readiness probe and typed collection access.

mod collection;
mod config;
mod connector;
mod error;
mod health;

pub use collection::{DocumentCollection, id_filter};
pub use config::MongoConfig;
pub use connector::{connect, connect_with_retry};
pub use error::{DocumentStoreError, DocumentStoreResult, MongoError};
pub use health::{HealthStatus, check_health};

// Re-export driver types so domain crates don't need their own mongodb dependency
pub use mongodb::{Client, Database, bson};
