//! Power read and update endpoints.

use crate::api::ApiError;
use crate::AppState;
use axum::{
    extract::{Extension, Path},
    response::Json,
};
use herodex_registry::{get_power, list_powers, update_power_description, Power};
use serde::Deserialize;
use std::sync::Arc;

/// Minimum length for a power description, in characters.
const MIN_DESCRIPTION_LEN: usize = 20;

/// Request body for `PATCH /powers/{id}`.
///
/// `description` stays a raw JSON value so a non-string shows up as a
/// validation error in the response body rather than a body-deserialization
/// rejection. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct UpdatePowerRequest {
    #[serde(default)]
    pub description: Option<serde_json::Value>,
}

/// Checks that a description value is a string of at least
/// [`MIN_DESCRIPTION_LEN`] characters.
///
/// Returns the validated string, or the list of violations.
fn validate_description(value: &serde_json::Value) -> Result<&str, Vec<String>> {
    match value.as_str() {
        Some(s) if s.chars().count() >= MIN_DESCRIPTION_LEN => Ok(s),
        _ => Err(vec![format!(
            "description must be a string of at least {MIN_DESCRIPTION_LEN} characters"
        )]),
    }
}

/// Handler for `GET /powers`.
pub async fn list_powers_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<Power>>, ApiError> {
    let powers = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(ApiError::pool)?;
        list_powers(&conn).map_err(ApiError::from)
    })
    .await
    .map_err(ApiError::join)??;

    Ok(Json(powers))
}

/// Handler for `GET /powers/{id}`.
pub async fn get_power_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Power>, ApiError> {
    let power = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(ApiError::pool)?;
        get_power(&conn, id).map_err(ApiError::from)
    })
    .await
    .map_err(ApiError::join)??;

    Ok(Json(power))
}

/// Handler for `PATCH /powers/{id}`.
///
/// A missing power is reported before any validation runs; validation runs
/// before any write, so a rejected request leaves the store unchanged.
pub async fn update_power_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePowerRequest>,
) -> Result<Json<Power>, ApiError> {
    let power = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(ApiError::pool)?;

        let power = get_power(&conn, id).map_err(ApiError::from)?;

        let Some(value) = payload.description else {
            // Nothing to update; other fields are ignored.
            return Ok(power);
        };
        let description = validate_description(&value).map_err(ApiError::Validation)?;

        update_power_description(&conn, id, description).map_err(ApiError::from)
    })
    .await
    .map_err(ApiError::join)??;

    Ok(Json(power))
}
