//! Person CRUD handlers.
//!
//! Each handler performs exactly one store call. Store failures are logged
//! here and surface as a bare 500 `Database error`.

use axum::{
    extract::{OriginalUri, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use service_core::error::AppError;
use service_core::response::json_response;

use crate::handlers::body::{JsonBody, NamePath};
use crate::models::Person;
use crate::services::{record_store_error, ReplaceOutcome};
use crate::startup::AppState;

pub const PERSON_NOT_FOUND: &str = "person not found";

/// `GET /people`
pub async fn list_people(State(state): State<AppState>) -> Result<Response, AppError> {
    let people = state
        .store
        .find_all()
        .await
        .map_err(|e| store_failure("find_all", "Failed to get all persons", e))?;

    pretty_json(&people, StatusCode::OK)
}

/// `POST /people`
pub async fn create_person(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(person): JsonBody<Person>,
) -> Result<Response, AppError> {
    state
        .store
        .insert(&person)
        .await
        .map_err(|e| store_failure("insert", "Failed to insert person", e))?;

    tracing::info!(name = %person.name, "Person created");

    let location = location_for(uri.path(), &person.name);
    let location = HeaderValue::from_str(&location)
        .map_err(|e| AppError::InternalError(anyhow::Error::new(e)))?;

    Ok((
        StatusCode::CREATED,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/json")),
            (header::LOCATION, location),
        ],
    )
        .into_response())
}

/// `GET /people/:name`
pub async fn get_person(
    State(state): State<AppState>,
    NamePath(name): NamePath,
) -> Result<Response, AppError> {
    let person = state
        .store
        .find_by_name(&name)
        .await
        .map_err(|e| store_failure("find_by_name", "Failed to find person", e))?
        .ok_or_else(|| AppError::NotFound(PERSON_NOT_FOUND.to_string()))?;

    pretty_json(&person, StatusCode::OK)
}

/// `PUT /people/:name`: full replace of the record currently named `name`.
pub async fn update_person(
    State(state): State<AppState>,
    NamePath(name): NamePath,
    JsonBody(person): JsonBody<Person>,
) -> Result<StatusCode, AppError> {
    let outcome = state
        .store
        .replace_by_name(&name, &person)
        .await
        .map_err(|e| store_failure("replace_by_name", "Failed to update person", e))?;

    match outcome {
        ReplaceOutcome::Replaced => {
            tracing::info!(name = %name, new_name = %person.name, "Person replaced");
            Ok(StatusCode::NO_CONTENT)
        }
        ReplaceOutcome::NotMatched => Err(AppError::NotFound(PERSON_NOT_FOUND.to_string())),
    }
}

/// `Location` for a created person: the request path plus the name as one
/// percent-encoded segment.
pub fn location_for(request_path: &str, name: &str) -> String {
    format!(
        "{}/{}",
        request_path.trim_end_matches('/'),
        urlencoding::encode(name)
    )
}

fn pretty_json<T: Serialize + ?Sized>(value: &T, status: StatusCode) -> Result<Response, AppError> {
    let body = serde_json::to_vec_pretty(value).map_err(|e| {
        tracing::error!(error = %e, "Failed to encode response body");
        AppError::from(e)
    })?;
    Ok(json_response(body, status))
}

fn store_failure(operation: &'static str, context: &str, err: AppError) -> AppError {
    tracing::error!(operation, error = %err, "{}", context);
    record_store_error(operation);

    match err {
        AppError::DatabaseError(e) => AppError::DatabaseError(e),
        other => AppError::DatabaseError(anyhow::Error::new(other)),
    }
}
