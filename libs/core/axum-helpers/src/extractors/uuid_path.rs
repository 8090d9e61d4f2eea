//! Id path parameter extractors.
//!
//! A segment that is not a UUID is rejected as [`AppError::InvalidId`], which
//! renders as 404: a malformed id can never name an existing document.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

fn parse(raw: &str) -> Result<Uuid, Response> {
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidId(raw.to_string()).into_response())
}

/// Single `{id}` path parameter.
///
/// ```ignore
/// async fn get_store(UuidPath(id): UuidPath) -> String {
///     format!("Store ID: {}", id)
/// }
///
/// let app = Router::new().route("/stores/{id}", get(get_store));
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        Ok(UuidPath(parse(&raw)?))
    }
}

/// Parent and child ids, e.g. `/hm_products/{id}/materials/{material_id}`.
pub struct UuidPathPair(pub Uuid, pub Uuid);

impl<S> FromRequestParts<S> for UuidPathPair
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((first, second)) = Path::<(String, String)>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        Ok(UuidPathPair(parse(&first)?, parse(&second)?))
    }
}

/// Three nested ids, e.g. `/hm_products/{id}/materials/{material_id}/models/{model_id}`.
pub struct UuidPathTriple(pub Uuid, pub Uuid, pub Uuid);

impl<S> FromRequestParts<S> for UuidPathTriple
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((first, second, third)) =
            Path::<(String, String, String)>::from_request_parts(parts, state)
                .await
                .map_err(|e| e.into_response())?;

        Ok(UuidPathTriple(
            parse(&first)?,
            parse(&second)?,
            parse(&third)?,
        ))
    }
}
