use axum::Router;
use domain_stores::{StoreService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    handlers::router(StoreService::new(state.stores.clone()))
}
