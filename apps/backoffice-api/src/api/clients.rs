//! Clients API routes
//!
//! The client service also writes stores when a client is deleted.

use axum::Router;
use domain_clients::{ClientService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let service = ClientService::new(state.clients.clone(), state.stores.clone());
    handlers::router(service)
}
