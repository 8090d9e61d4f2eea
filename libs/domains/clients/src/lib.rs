//! Clients Domain
//!
//! Client accounts with embedded addresses and references to orders,
//! reservations and wishlisted products.
//!
//! Passwords never reach the database or the API in plain text: the
//! [`hooks`] run before every create and update and replace a supplied
//! password by an argon2 hash and its salt. Responses are built from
//! [`ClientResponse`], which carries neither.
//!
//! Deleting a client first removes its id from every store that lists it.
//! The store saves run concurrently and any failure aborts the delete.

pub mod error;
pub mod handlers;
pub mod hooks;
pub mod models;
pub mod mongodb;
pub mod password;
pub mod repository;
pub mod service;

pub use error::{ClientError, ClientResult};
pub use handlers::ApiDoc;
pub use models::{Address, Client, ClientPatch, ClientResponse, CreateClient, UpdateClient};
pub use mongodb::MongoClientRepository;
pub use password::{HashedPassword, hash_password, verify_password};
#[cfg(any(test, feature = "mock"))]
pub use repository::MockClientRepository;
pub use repository::ClientRepository;
pub use service::ClientService;
