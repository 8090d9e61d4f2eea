//! HTTP handlers for Filters API

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

use crate::error::FilterResult;
use crate::models::{CreateFilter, Filter, UpdateFilter};
use crate::repository::FilterRepository;
use crate::service::FilterService;

#[derive(OpenApi)]
#[openapi(
    paths(list_filters, create_filter, get_filter, update_filter, delete_filter),
    components(
        schemas(Filter, CreateFilter, UpdateFilter),
        responses(
            NotFoundResponse,
            ValidationErrorResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Filters", description = "Catalog filters over store custom fields")
    )
)]
pub struct ApiDoc;

pub fn router<R: FilterRepository + 'static>(service: FilterService<R>) -> Router {
    Router::new()
        .route("/", get(list_filters).post(create_filter))
        .route(
            "/{id}",
            get(get_filter).put(update_filter).delete(delete_filter),
        )
        .with_state(Arc::new(service))
}

#[utoipa::path(
    get,
    path = "",
    tag = "Filters",
    responses(
        (status = 200, description = "List of filters", body = Vec<Filter>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_filters<R: FilterRepository>(
    State(service): State<Arc<FilterService<R>>>,
) -> FilterResult<Json<Vec<Filter>>> {
    Ok(Json(service.list_filters().await?))
}

#[utoipa::path(
    post,
    path = "",
    tag = "Filters",
    request_body = CreateFilter,
    responses(
        (status = 200, description = "Filter created", body = Filter),
        (status = 400, response = BadRequestJsonResponse),
        (status = 403, response = ValidationErrorResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_filter<R: FilterRepository>(
    State(service): State<Arc<FilterService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateFilter>,
) -> FilterResult<Json<Filter>> {
    Ok(Json(service.create_filter(input).await?))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Filters",
    params(("id" = Uuid, Path, description = "Filter ID")),
    responses(
        (status = 200, description = "Filter found", body = Filter),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_filter<R: FilterRepository>(
    State(service): State<Arc<FilterService<R>>>,
    UuidPath(id): UuidPath,
) -> FilterResult<Json<Filter>> {
    Ok(Json(service.get_filter(id).await?))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Filters",
    params(("id" = Uuid, Path, description = "Filter ID")),
    request_body = UpdateFilter,
    responses(
        (status = 200, description = "Filter updated", body = Filter),
        (status = 400, response = BadRequestJsonResponse),
        (status = 403, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_filter<R: FilterRepository>(
    State(service): State<Arc<FilterService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateFilter>,
) -> FilterResult<Json<Filter>> {
    Ok(Json(service.update_filter(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Filters",
    params(("id" = Uuid, Path, description = "Filter ID")),
    responses(
        (status = 200, description = "The removed filter", body = Filter),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_filter<R: FilterRepository>(
    State(service): State<Arc<FilterService<R>>>,
    UuidPath(id): UuidPath,
) -> FilterResult<Json<Filter>> {
    Ok(Json(service.delete_filter(id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use crate::repository::MockFilterRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    fn post(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_duplicate_custom_is_409() {
        let mut repo = MockFilterRepository::new();
        repo.expect_insert()
            .returning(|_| Err(FilterError::DuplicateCustom));

        let response = router(FilterService::new(repo))
            .oneshot(post(json!({ "custom_id": uuid::Uuid::now_v7() }).to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_custom_id_that_is_not_an_id_is_rejected() {
        let response = router(FilterService::new(MockFilterRepository::new()))
            .oneshot(post(json!({ "custom_id": "somewrongid" }).to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
