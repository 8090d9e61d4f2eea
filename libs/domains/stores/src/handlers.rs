//! HTTP handlers for Stores API

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestJsonResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
        ValidationErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::StoreResult;
use crate::models::{CalendarConfig, CreateStore, Store, UpdateStore};
use crate::repository::StoreRepository;
use crate::service::StoreService;

#[derive(OpenApi)]
#[openapi(
    paths(list_stores, create_store, get_store, update_store, delete_store),
    components(
        schemas(Store, CreateStore, UpdateStore, CalendarConfig),
        responses(
            NotFoundResponse,
            ValidationErrorResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Stores", description = "Store management endpoints")
    )
)]
pub struct ApiDoc;

pub fn router<R: StoreRepository + 'static>(service: StoreService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_stores).post(create_store))
        .route(
            "/{id}",
            get(get_store).put(update_store).delete(delete_store),
        )
        .with_state(shared_service)
}

/// List all stores
#[utoipa::path(
    get,
    path = "",
    tag = "Stores",
    responses(
        (status = 200, description = "List of stores", body = Vec<Store>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_stores<R: StoreRepository>(
    State(service): State<Arc<StoreService<R>>>,
) -> StoreResult<Json<Vec<Store>>> {
    Ok(Json(service.list_stores().await?))
}

/// Create a store
#[utoipa::path(
    post,
    path = "",
    tag = "Stores",
    request_body = CreateStore,
    responses(
        (status = 200, description = "Store created", body = Store),
        (status = 400, response = BadRequestJsonResponse),
        (status = 403, response = ValidationErrorResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_store<R: StoreRepository>(
    State(service): State<Arc<StoreService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateStore>,
) -> StoreResult<Json<Store>> {
    Ok(Json(service.create_store(input).await?))
}

/// Get a store by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Stores",
    params(
        ("id" = Uuid, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Store found", body = Store),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_store<R: StoreRepository>(
    State(service): State<Arc<StoreService<R>>>,
    UuidPath(id): UuidPath,
) -> StoreResult<Json<Store>> {
    Ok(Json(service.get_store(id).await?))
}

/// Update a store; only supplied fields change
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Stores",
    params(
        ("id" = Uuid, Path, description = "Store ID")
    ),
    request_body = UpdateStore,
    responses(
        (status = 200, description = "Store updated", body = Store),
        (status = 400, response = BadRequestJsonResponse),
        (status = 403, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_store<R: StoreRepository>(
    State(service): State<Arc<StoreService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateStore>,
) -> StoreResult<Json<Store>> {
    Ok(Json(service.update_store(id, input).await?))
}

/// Delete a store
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Stores",
    params(
        ("id" = Uuid, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "The removed store", body = Store),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_store<R: StoreRepository>(
    State(service): State<Arc<StoreService<R>>>,
    UuidPath(id): UuidPath,
) -> StoreResult<Json<Store>> {
    Ok(Json(service.delete_store(id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::repository::MockStoreRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use uuid::Uuid;

    async fn json_body(body: Body) -> Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_store_returns_200() {
        let mut mock_repo = MockStoreRepository::new();
        mock_repo.expect_insert().returning(Ok);
        let app = router(StoreService::new(mock_repo));

        let response = app
            .oneshot(post("/", json!({ "name": "The Store Baby" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["name"], "The Store Baby");
        assert!(body["_id"].is_string());
    }

    #[tokio::test]
    async fn test_duplicate_name_is_conflict() {
        let mut mock_repo = MockStoreRepository::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(StoreError::DuplicateName));
        let app = router(StoreService::new(mock_repo));

        let response = app
            .oneshot(post("/", json!({ "name": "Taken" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(json_body(response.into_body()).await["message"], "Duplicated Name");
    }

    #[tokio::test]
    async fn test_missing_name_is_forbidden() {
        let app = router(StoreService::new(MockStoreRepository::new()));

        let response = app.oneshot(post("/", json!({}))).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_get_with_malformed_id_is_404() {
        let app = router(StoreService::new(MockStoreRepository::new()));

        let response = app
            .oneshot(Request::builder().uri("/not-an-id").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_store() {
        let id = Uuid::now_v7();
        let mut mock_repo = MockStoreRepository::new();
        mock_repo.expect_remove().returning(|id| {
            let mut store = Store::new(
                serde_json::from_value(json!({ "name": "Gone" })).unwrap(),
            );
            store.id = id;
            Ok(Some(store))
        });
        let app = router(StoreService::new(mock_repo));

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response.into_body()).await["_id"], id.to_string());
    }
}
