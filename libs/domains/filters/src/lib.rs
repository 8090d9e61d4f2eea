//! Filters Domain
//!
//! A filter exposes one store custom field as a catalog filter. There is at
//! most one filter per custom field.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{FilterError, FilterResult};
pub use handlers::ApiDoc;
pub use models::{CreateFilter, Filter, FilterPatch, UpdateFilter};
pub use mongodb::MongoFilterRepository;
pub use repository::FilterRepository;
pub use service::FilterService;
