//! Stores Domain
//!
//! A store groups references to the catalog, its clients and bookings.
//! It never owns the referenced documents: deleting a store leaves them
//! untouched, and deleting a client or product removes its id from every
//! store through the cascade helpers on [`Store`].
//!
//! ```text
//! Handlers → StoreService → StoreRepository → DocumentCollection<Store>
//! ```
//!
//! ```rust,no_run
//! use domain_stores::{handlers, MongoStoreRepository, StoreService};
//!
//! # async fn example(db: &database::mongodb::Database) -> Result<(), Box<dyn std::error::Error>> {
//! let repository = MongoStoreRepository::new(db);
//! repository.init_indexes().await?;
//! let router = handlers::router(StoreService::new(repository));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{StoreError, StoreResult};
pub use handlers::ApiDoc;
pub use models::{CalendarConfig, CreateStore, Store, UpdateStore};
pub use mongodb::MongoStoreRepository;
pub use repository::StoreRepository;
#[cfg(any(test, feature = "mock"))]
pub use repository::MockStoreRepository;
pub use service::StoreService;
