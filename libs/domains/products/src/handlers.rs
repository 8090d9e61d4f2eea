//! HTTP handlers for Products API

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestJsonResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
        ValidationErrorResponse,
    },
};
use domain_clients::ClientRepository;
use domain_stores::StoreRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{CreateProduct, CustomValue, Image, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, get_product, update_product, delete_product),
    components(
        schemas(Product, CreateProduct, UpdateProduct, Image, CustomValue),
        responses(
            NotFoundResponse,
            ValidationErrorResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

type SharedService<R, C, S> = Arc<ProductService<R, C, S>>;

/// Create the products router with all HTTP endpoints
pub fn router<R, C, S>(service: ProductService<R, C, S>) -> Router
where
    R: ProductRepository + 'static,
    C: ClientRepository + 'static,
    S: StoreRepository + 'static,
{
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(Arc::new(service))
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository, C: ClientRepository, S: StoreRepository>(
    State(service): State<SharedService<R, C, S>>,
) -> ProductResult<Json<Vec<Product>>> {
    Ok(Json(service.list_products().await?))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 400, response = BadRequestJsonResponse),
        (status = 403, response = ValidationErrorResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository, C: ClientRepository, S: StoreRepository>(
    State(service): State<SharedService<R, C, S>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<Json<Product>> {
    Ok(Json(service.create_product(input).await?))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository, C: ClientRepository, S: StoreRepository>(
    State(service): State<SharedService<R, C, S>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<Product>> {
    Ok(Json(service.get_product(id).await?))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = BadRequestJsonResponse),
        (status = 403, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository, C: ClientRepository, S: StoreRepository>(
    State(service): State<SharedService<R, C, S>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<Product>> {
    Ok(Json(service.update_product(id, input).await?))
}

/// Delete a product and every reference to it
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "The removed product", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository, C: ClientRepository, S: StoreRepository>(
    State(service): State<SharedService<R, C, S>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<Product>> {
    Ok(Json(service.delete_product(id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use domain_clients::MockClientRepository;
    use domain_stores::{MockStoreRepository, StoreError};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use uuid::Uuid;

    fn app(repo: MockProductRepository, stores: MockStoreRepository) -> Router {
        router(ProductService::new(repo, MockClientRepository::new(), stores))
    }

    async fn json_body(body: Body) -> Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn send(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_with_slug_is_403() {
        let response = app(MockProductRepository::new(), MockStoreRepository::new())
            .oneshot(send(
                "POST",
                "/",
                json!({ "name": "Ring", "stock": 5, "slug": "should-be-ignored" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(json_body(response.into_body()).await["message"], "Slug is read-only");
    }

    #[tokio::test]
    async fn test_create_returns_slugged_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_insert().returning(Ok);

        let response = app(repo, MockStoreRepository::new())
            .oneshot(send(
                "POST",
                "/",
                json!({ "name": "Some product", "stock": 20, "description": "desc" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response.into_body()).await["slug"], "some-product");
    }

    #[tokio::test]
    async fn test_stock_of_wrong_type_is_403() {
        let response = app(MockProductRepository::new(), MockStoreRepository::new())
            .oneshot(send("POST", "/", json!({ "name": "Ring", "stock": "many" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_failed_cascade_is_500_and_product_survives() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().returning(|id| {
            let now = chrono::Utc::now();
            Ok(Some(Product {
                id,
                name: "Ring".to_string(),
                slug: "ring".to_string(),
                stock: 1,
                description: Some("d".to_string()),
                images: vec![],
                customs: vec![],
                handmade_id: None,
                created_at: now,
                updated_at: now,
            }))
        });
        repo.expect_remove().never();

        let mut stores = MockStoreRepository::new();
        stores.expect_find_by_product().returning(|id| {
            let mut store = domain_stores::Store::new(
                serde_json::from_value(json!({ "name": "s" })).unwrap(),
            );
            store.products = vec![id];
            Ok(vec![store])
        });
        stores
            .expect_save()
            .returning(|_| Err(StoreError::Database("boom".to_string())));

        let mut clients = MockClientRepository::new();
        clients
            .expect_find_by_wishlist_product()
            .returning(|_| Ok(vec![]));

        let response = router(ProductService::new(repo, clients, stores))
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/{}", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
