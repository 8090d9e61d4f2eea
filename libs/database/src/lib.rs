//! Document store plumbing for the back-office services.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, health probe and [`mongodb::DocumentCollection`]
//! - `config` - `core_config::FromEnv` for [`mongodb::MongoConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, DocumentCollection, MongoConfig};
//! use database::common::RetryConfig;
//!
//! let config = MongoConfig::new("mongodb://localhost:27017", "backoffice");
//! let client = mongodb::connect_with_retry(&config, RetryConfig::default()).await?;
//! let stores: DocumentCollection<Store> = DocumentCollection::new(&client.database(&config.database), "stores");
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{RetryConfig, retry_with_backoff};
