//! Handmade Products Domain
//!
//! A handmade product is offered in materials, and each material in models.
//! Materials and models live inside the product document, carry their own
//! ids and are edited through nested routes:
//!
//! ```text
//! /hm_products/{id}/materials/{material_id}/models/{model_id}
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{HMProductError, HMProductResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateHMProduct, CreateMaterial, CreateModel, HMProduct, Material, Model, UpdateHMProduct,
    UpdateMaterial, UpdateModel,
};
pub use mongodb::MongoHMProductRepository;
pub use repository::HMProductRepository;
pub use service::HMProductService;
