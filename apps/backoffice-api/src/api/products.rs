//! Products API routes
//!
//! Deleting a product cascades into client wishlists and store catalogs.

use axum::Router;
use domain_products::{ProductService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let service = ProductService::new(
        state.products.clone(),
        state.clients.clone(),
        state.stores.clone(),
    );
    handlers::router(service)
}
