//! JSON body extractor that also runs `validator` rules.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// `Json<T>` followed by `T::validate()`.
///
/// Rejections go through [`AppError`]: malformed JSON is 400, a body that is
/// valid JSON but doesn't fit `T` (missing required field, wrong type) or that
/// fails a validator rule is 403.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateStore {
///     #[validate(length(min = 1))]
///     name: String,
/// }
///
/// async fn create_store(ValidatedJson(payload): ValidatedJson<CreateStore>) -> String {
///     payload.name
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
