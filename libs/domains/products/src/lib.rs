//! Products Domain
//!
//! Catalog products. A product is either described (a description plus
//! custom field values) or handmade (a reference to a handmade product),
//! never both.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← hooks, delete cascade into clients and stores
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + MongoDB implementation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! `slug` is derived from `name` on every write and can never be supplied
//! by a caller.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_clients::MongoClientRepository;
//! use domain_products::{handlers, MongoProductRepository, ProductService};
//! use domain_stores::MongoStoreRepository;
//!
//! # async fn example(db: &database::mongodb::Database) -> Result<(), Box<dyn std::error::Error>> {
//! let service = ProductService::new(
//!     MongoProductRepository::new(db),
//!     MongoClientRepository::new(db),
//!     MongoStoreRepository::new(db),
//! );
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod hooks;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;
pub mod slug;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, CustomValue, Image, Product, ProductPatch, UpdateProduct};
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
pub use slug::slugify;
