//! HTTP handlers for Clients API

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestJsonResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
        ValidationErrorResponse,
    },
};
use domain_stores::StoreRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ClientResult;
use crate::models::{Address, ClientResponse, CreateClient, UpdateClient};
use crate::repository::ClientRepository;
use crate::service::ClientService;

#[derive(OpenApi)]
#[openapi(
    paths(list_clients, create_client, get_client, update_client, delete_client),
    components(
        schemas(ClientResponse, CreateClient, UpdateClient, Address),
        responses(
            NotFoundResponse,
            ValidationErrorResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Clients", description = "Client accounts. Passwords are write-only.")
    )
)]
pub struct ApiDoc;

type SharedService<R, S> = Arc<ClientService<R, S>>;

pub fn router<R, S>(service: ClientService<R, S>) -> Router
where
    R: ClientRepository + 'static,
    S: StoreRepository + 'static,
{
    Router::new()
        .route("/", get(list_clients).post(create_client))
        .route(
            "/{id}",
            get(get_client).put(update_client).delete(delete_client),
        )
        .with_state(Arc::new(service))
}

/// List all clients
#[utoipa::path(
    get,
    path = "",
    tag = "Clients",
    responses(
        (status = 200, description = "List of clients", body = Vec<ClientResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_clients<R: ClientRepository, S: StoreRepository>(
    State(service): State<SharedService<R, S>>,
) -> ClientResult<Json<Vec<ClientResponse>>> {
    Ok(Json(service.list_clients().await?))
}

/// Create a client
#[utoipa::path(
    post,
    path = "",
    tag = "Clients",
    request_body = CreateClient,
    responses(
        (status = 200, description = "Client created", body = ClientResponse),
        (status = 400, response = BadRequestJsonResponse),
        (status = 403, response = ValidationErrorResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_client<R: ClientRepository, S: StoreRepository>(
    State(service): State<SharedService<R, S>>,
    ValidatedJson(input): ValidatedJson<CreateClient>,
) -> ClientResult<Json<ClientResponse>> {
    Ok(Json(service.create_client(input).await?))
}

/// Get a client by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Clients",
    params(
        ("id" = Uuid, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client found", body = ClientResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_client<R: ClientRepository, S: StoreRepository>(
    State(service): State<SharedService<R, S>>,
    UuidPath(id): UuidPath,
) -> ClientResult<Json<ClientResponse>> {
    Ok(Json(service.get_client(id).await?))
}

/// Update a client
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Clients",
    params(
        ("id" = Uuid, Path, description = "Client ID")
    ),
    request_body = UpdateClient,
    responses(
        (status = 200, description = "Client updated", body = ClientResponse),
        (status = 400, response = BadRequestJsonResponse),
        (status = 403, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_client<R: ClientRepository, S: StoreRepository>(
    State(service): State<SharedService<R, S>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateClient>,
) -> ClientResult<Json<ClientResponse>> {
    Ok(Json(service.update_client(id, input).await?))
}

/// Delete a client and remove it from every store
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Clients",
    params(
        ("id" = Uuid, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "The removed client", body = ClientResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_client<R: ClientRepository, S: StoreRepository>(
    State(service): State<SharedService<R, S>>,
    UuidPath(id): UuidPath,
) -> ClientResult<Json<ClientResponse>> {
    Ok(Json(service.delete_client(id).await?))
}
