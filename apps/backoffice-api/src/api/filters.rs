use axum::Router;
use domain_filters::{FilterService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    handlers::router(FilterService::new(state.filters.clone()))
}
