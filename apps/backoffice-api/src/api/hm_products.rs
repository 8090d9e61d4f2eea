use axum::Router;
use domain_hm_products::{HMProductService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    handlers::router(HMProductService::new(state.hm_products.clone()))
}
