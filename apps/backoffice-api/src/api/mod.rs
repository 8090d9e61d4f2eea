//! API routes
//!
//! Every router here is nested under `/api` by `axum_helpers::create_router`.

pub mod clients;
pub mod filters;
pub mod health;
pub mod hm_products;
pub mod products;
pub mod stores;

use axum::Router;

use crate::state::AppState;

pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/clients", clients::router(state))
        .nest("/products", products::router(state))
        .nest("/stores", stores::router(state))
        .nest("/hm_products", hm_products::router(state))
        .nest("/filters", filters::router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::{create_cors_layer, create_router};
    use core_config::{app_info, server::ServerConfig};
    use database::mongodb::{Client, MongoConfig};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::time::Duration;
    use tower::ServiceExt;

    // The driver connects lazily, so no request below reaches a server.
    async fn app() -> Router {
        let mongodb = MongoConfig::new("mongodb://localhost:27017", "backoffice_test");
        let client = Client::with_uri_str(&mongodb.url).await.unwrap();
        let db = client.database(&mongodb.database);
        let config = Config {
            app: app_info!(),
            mongodb,
            server: ServerConfig::default(),
            environment: Environment::Development,
            shutdown_timeout: Duration::from_secs(1),
        };
        let state = AppState::new(config, client, db);
        create_router::<ApiDoc>(routes(&state), create_cors_layer(vec![]))
    }

    async fn call(method: &str, uri: &str) -> (StatusCode, Value) {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_openapi_lists_every_resource() {
        let (status, doc) = call("GET", "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);

        let paths = doc["paths"].as_object().unwrap();
        for path in [
            "/api/clients",
            "/api/products/{id}",
            "/api/stores",
            "/api/hm_products/{id}/materials/{material_id}/models/{model_id}",
            "/api/filters/{id}",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[tokio::test]
    async fn test_malformed_id_is_404_on_every_resource() {
        for resource in ["clients", "products", "stores", "hm_products", "filters"] {
            let (status, body) = call("GET", &format!("/api/{resource}/abc")).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{resource}");
            assert_eq!(body["message"], "Cast to id failed for value \"abc\"");
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = call("GET", "/api/orders").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_wrong_verb_is_405() {
        let (status, _) = call("PATCH", "/api/stores").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
