//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Back-office API",
        version = "0.1.0",
        description = "Back-office REST API for clients, products, stores, handmade products and filters"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/clients", api = domain_clients::ApiDoc),
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/stores", api = domain_stores::ApiDoc),
        (path = "/api/hm_products", api = domain_hm_products::ApiDoc),
        (path = "/api/filters", api = domain_filters::ApiDoc)
    )
)]
pub struct ApiDoc;
