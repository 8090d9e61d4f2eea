//! HTTP handlers for Handmade Products API

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post, put},
};
use axum_helpers::{
    UuidPath, UuidPathPair, UuidPathTriple, ValidatedJson,
    errors::responses::{
        BadRequestJsonResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
        ValidationErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::HMProductResult;
use crate::models::{
    CreateHMProduct, CreateMaterial, CreateModel, HMProduct, Material, Model, UpdateHMProduct,
    UpdateMaterial, UpdateModel,
};
use crate::repository::HMProductRepository;
use crate::service::HMProductService;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_hm_products,
        create_hm_product,
        get_hm_product,
        update_hm_product,
        delete_hm_product,
        add_material,
        update_material,
        remove_material,
        add_model,
        update_model,
        remove_model,
    ),
    components(
        schemas(
            HMProduct, Material, Model,
            CreateHMProduct, UpdateHMProduct,
            CreateMaterial, UpdateMaterial,
            CreateModel, UpdateModel
        ),
        responses(
            NotFoundResponse,
            ValidationErrorResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "HMProducts", description = "Handmade products with their materials and models")
    )
)]
pub struct ApiDoc;

type SharedService<R> = Arc<HMProductService<R>>;

pub fn router<R: HMProductRepository + 'static>(service: HMProductService<R>) -> Router {
    Router::new()
        .route("/", get(list_hm_products).post(create_hm_product))
        .route(
            "/{id}",
            get(get_hm_product)
                .put(update_hm_product)
                .delete(delete_hm_product),
        )
        .route("/{id}/materials", post(add_material))
        .route(
            "/{id}/materials/{material_id}",
            put(update_material).delete(remove_material),
        )
        .route("/{id}/materials/{material_id}/models", post(add_model))
        .route(
            "/{id}/materials/{material_id}/models/{model_id}",
            put(update_model).delete(remove_model),
        )
        .with_state(Arc::new(service))
}

/// List all handmade products
#[utoipa::path(
    get,
    path = "",
    tag = "HMProducts",
    responses(
        (status = 200, description = "List of handmade products", body = Vec<HMProduct>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_hm_products<R: HMProductRepository>(
    State(service): State<SharedService<R>>,
) -> HMProductResult<Json<Vec<HMProduct>>> {
    Ok(Json(service.list().await?))
}

/// Create a handmade product
#[utoipa::path(
    post,
    path = "",
    tag = "HMProducts",
    request_body = CreateHMProduct,
    responses(
        (status = 200, description = "Handmade product created", body = HMProduct),
        (status = 400, response = BadRequestJsonResponse),
        (status = 403, response = ValidationErrorResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_hm_product<R: HMProductRepository>(
    State(service): State<SharedService<R>>,
    ValidatedJson(input): ValidatedJson<CreateHMProduct>,
) -> HMProductResult<Json<HMProduct>> {
    Ok(Json(service.create(input).await?))
}

/// Get a handmade product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "HMProducts",
    params(("id" = Uuid, Path, description = "HMProduct ID")),
    responses(
        (status = 200, description = "Handmade product found", body = HMProduct),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_hm_product<R: HMProductRepository>(
    State(service): State<SharedService<R>>,
    UuidPath(id): UuidPath,
) -> HMProductResult<Json<HMProduct>> {
    Ok(Json(service.get(id).await?))
}

/// Rename a handmade product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "HMProducts",
    params(("id" = Uuid, Path, description = "HMProduct ID")),
    request_body = UpdateHMProduct,
    responses(
        (status = 200, description = "Handmade product updated", body = HMProduct),
        (status = 400, response = BadRequestJsonResponse),
        (status = 403, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_hm_product<R: HMProductRepository>(
    State(service): State<SharedService<R>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateHMProduct>,
) -> HMProductResult<Json<HMProduct>> {
    Ok(Json(service.update(id, input).await?))
}

/// Delete a handmade product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "HMProducts",
    params(("id" = Uuid, Path, description = "HMProduct ID")),
    responses(
        (status = 200, description = "The removed handmade product", body = HMProduct),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_hm_product<R: HMProductRepository>(
    State(service): State<SharedService<R>>,
    UuidPath(id): UuidPath,
) -> HMProductResult<Json<HMProduct>> {
    Ok(Json(service.delete(id).await?))
}

/// Add a material
#[utoipa::path(
    post,
    path = "/{id}/materials",
    tag = "HMProducts",
    params(("id" = Uuid, Path, description = "HMProduct ID")),
    request_body = CreateMaterial,
    responses(
        (status = 200, description = "Product with the new material", body = HMProduct),
        (status = 400, response = BadRequestJsonResponse),
        (status = 403, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_material<R: HMProductRepository>(
    State(service): State<SharedService<R>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<CreateMaterial>,
) -> HMProductResult<Json<HMProduct>> {
    Ok(Json(service.add_material(id, input).await?))
}

/// Update a material
#[utoipa::path(
    put,
    path = "/{id}/materials/{material_id}",
    tag = "HMProducts",
    params(
        ("id" = Uuid, Path, description = "HMProduct ID"),
        ("material_id" = Uuid, Path, description = "Material ID")
    ),
    request_body = UpdateMaterial,
    responses(
        (status = 200, description = "Product with the updated material", body = HMProduct),
        (status = 400, response = BadRequestJsonResponse),
        (status = 403, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_material<R: HMProductRepository>(
    State(service): State<SharedService<R>>,
    UuidPathPair(id, material_id): UuidPathPair,
    ValidatedJson(input): ValidatedJson<UpdateMaterial>,
) -> HMProductResult<Json<HMProduct>> {
    Ok(Json(service.update_material(id, material_id, input).await?))
}

/// Remove a material and its models
#[utoipa::path(
    delete,
    path = "/{id}/materials/{material_id}",
    tag = "HMProducts",
    params(
        ("id" = Uuid, Path, description = "HMProduct ID"),
        ("material_id" = Uuid, Path, description = "Material ID")
    ),
    responses(
        (status = 200, description = "Product without the material", body = HMProduct),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_material<R: HMProductRepository>(
    State(service): State<SharedService<R>>,
    UuidPathPair(id, material_id): UuidPathPair,
) -> HMProductResult<Json<HMProduct>> {
    Ok(Json(service.remove_material(id, material_id).await?))
}

/// Add a model to a material
#[utoipa::path(
    post,
    path = "/{id}/materials/{material_id}/models",
    tag = "HMProducts",
    params(
        ("id" = Uuid, Path, description = "HMProduct ID"),
        ("material_id" = Uuid, Path, description = "Material ID")
    ),
    request_body = CreateModel,
    responses(
        (status = 200, description = "Product with the new model", body = HMProduct),
        (status = 400, response = BadRequestJsonResponse),
        (status = 403, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_model<R: HMProductRepository>(
    State(service): State<SharedService<R>>,
    UuidPathPair(id, material_id): UuidPathPair,
    ValidatedJson(input): ValidatedJson<CreateModel>,
) -> HMProductResult<Json<HMProduct>> {
    Ok(Json(service.add_model(id, material_id, input).await?))
}

/// Update a model
#[utoipa::path(
    put,
    path = "/{id}/materials/{material_id}/models/{model_id}",
    tag = "HMProducts",
    params(
        ("id" = Uuid, Path, description = "HMProduct ID"),
        ("material_id" = Uuid, Path, description = "Material ID"),
        ("model_id" = Uuid, Path, description = "Model ID")
    ),
    request_body = UpdateModel,
    responses(
        (status = 200, description = "Product with the updated model", body = HMProduct),
        (status = 400, response = BadRequestJsonResponse),
        (status = 403, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_model<R: HMProductRepository>(
    State(service): State<SharedService<R>>,
    UuidPathTriple(id, material_id, model_id): UuidPathTriple,
    ValidatedJson(input): ValidatedJson<UpdateModel>,
) -> HMProductResult<Json<HMProduct>> {
    Ok(Json(
        service
            .update_model(id, material_id, model_id, input)
            .await?,
    ))
}

/// Remove a model
#[utoipa::path(
    delete,
    path = "/{id}/materials/{material_id}/models/{model_id}",
    tag = "HMProducts",
    params(
        ("id" = Uuid, Path, description = "HMProduct ID"),
        ("material_id" = Uuid, Path, description = "Material ID"),
        ("model_id" = Uuid, Path, description = "Model ID")
    ),
    responses(
        (status = 200, description = "Product without the model", body = HMProduct),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_model<R: HMProductRepository>(
    State(service): State<SharedService<R>>,
    UuidPathTriple(id, material_id, model_id): UuidPathTriple,
) -> HMProductResult<Json<HMProduct>> {
    Ok(Json(service.remove_model(id, material_id, model_id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockHMProductRepository;
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

    fn bracelet() -> HMProduct {
        HMProduct::new(
            serde_json::from_value(json!({
                "name": "Bracelet",
                "materials": [{
                    "material_name": "24K Gold",
                    "material_price": 999.99,
                    "models": [{ "model_name": "Thin", "model_price": 10.0 }]
                }]
            }))
            .unwrap(),
        )
    }

    fn repo_with(product: HMProduct) -> MockHMProductRepository {
        let mut repo = MockHMProductRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(product.clone())));
        repo
    }

    #[tokio::test]
    async fn test_update_model_returns_parent() {
        let product = bracelet();
        let (id, material_id, model_id) = (
            product.id,
            product.materials[0].id,
            product.materials[0].models[0].id,
        );
        let mut repo = repo_with(product);
        repo.expect_save().returning(|_| Ok(()));

        let response = router(HMProductService::new(repo))
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/{id}/materials/{material_id}/models/{model_id}"))
                    .header("content-type", "application/json")
                    .body(Body::from(json!({ "model_price": 12.5 }).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["materials"][0]["models"][0]["model_price"], 12.5);
        assert_eq!(body["materials"][0]["models"][0]["model_name"], "Thin");
    }

    #[tokio::test]
    async fn test_unknown_material_message_names_both_ids() {
        let product = bracelet();
        let id = product.id;
        let missing = Uuid::now_v7();
        let mut repo = repo_with(product);
        repo.expect_save().never();

        let response = router(HMProductService::new(repo))
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/{id}/materials/{missing}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response.into_body()).await["message"],
            format!("Value with id: {missing}, not found for HMProduct with id: {id}")
        );
    }

    #[tokio::test]
    async fn test_malformed_material_id_is_404() {
        let response = router(HMProductService::new(MockHMProductRepository::new()))
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/{}/materials/nope", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
