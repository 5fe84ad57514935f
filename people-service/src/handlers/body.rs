use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use service_core::error::AppError;

use crate::handlers::people::PERSON_NOT_FOUND;

pub const INCORRECT_BODY: &str = "Incorrect body";

/// JSON request body decoded without looking at `Content-Type`.
///
/// Any read or decode failure becomes a 400 `Incorrect body`, so handlers
/// taking this extractor never run on a malformed payload.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Failed to read request body");
            AppError::BadRequest(INCORRECT_BODY.to_string())
        })?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            AppError::BadRequest(INCORRECT_BODY.to_string())
        })
    }
}

/// The `:name` path segment, percent-decoded.
///
/// A segment that does not decode to UTF-8 cannot name any stored person, so
/// it is answered as a 404 `person not found` in the usual JSON envelope.
#[derive(Debug, Clone)]
pub struct NamePath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for NamePath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(name) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected name path segment");
                AppError::NotFound(PERSON_NOT_FOUND.to_string())
            })?;

        Ok(NamePath(name))
    }
}
