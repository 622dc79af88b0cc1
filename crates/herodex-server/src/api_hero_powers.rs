//! Hero-power creation endpoint.

use crate::api::ApiError;
use crate::AppState;
use axum::{extract::Extension, http::StatusCode, response::Json};
use herodex_registry::{
    create_hero_power, find_hero, find_power, CreateHeroPowerParams, HeroPowerWithRelations,
    RegistryError,
};
use herodex_types::Strength;
use std::sync::Arc;

/// Request body for `POST /hero_powers`.
///
/// Every field is optional in the schema: a missing or ill-typed field is a
/// validation failure reported in the `errors` array, not a body rejection.
#[derive(Debug, serde::Deserialize)]
pub struct CreateHeroPowerRequest {
    #[serde(default)]
    pub strength: Option<serde_json::Value>,
    #[serde(default)]
    pub hero_id: Option<i64>,
    #[serde(default)]
    pub power_id: Option<i64>,
}

/// Handler for `POST /hero_powers`.
///
/// All applicable violations accumulate before the response: an invalid
/// strength, a dangling `hero_id`, and a dangling `power_id` each contribute
/// their own message. Nothing is persisted unless every check passes.
pub async fn create_hero_power_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<CreateHeroPowerRequest>,
) -> Result<(StatusCode, Json<HeroPowerWithRelations>), ApiError> {
    let created = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(ApiError::pool)?;
        let mut errors = Vec::new();

        let strength = payload
            .strength
            .as_ref()
            .and_then(|v| v.as_str())
            .and_then(Strength::from_label);
        if strength.is_none() {
            errors.push("strength must be one of 'Strong', 'Weak', 'Average'".to_string());
        }

        let hero_exists = match payload.hero_id {
            Some(id) => find_hero(&conn, id).map_err(ApiError::from)?.is_some(),
            None => false,
        };
        if !hero_exists {
            errors.push("Hero not found.".to_string());
        }

        let power_exists = match payload.power_id {
            Some(id) => find_power(&conn, id).map_err(ApiError::from)?.is_some(),
            None => false,
        };
        if !power_exists {
            errors.push("Power not found.".to_string());
        }

        match (payload.hero_id, payload.power_id, strength) {
            (Some(hero_id), Some(power_id), Some(strength)) if errors.is_empty() => {
                create_hero_power(
                    &conn,
                    &CreateHeroPowerParams {
                        strength,
                        hero_id,
                        power_id,
                    },
                )
                .map_err(|e| match e {
                    // The existence checks above make these unlikely, but the
                    // row can vanish between check and insert.
                    RegistryError::HeroNotFound(_) => {
                        ApiError::Validation(vec!["Hero not found.".to_string()])
                    }
                    RegistryError::PowerNotFound(_) => {
                        ApiError::Validation(vec!["Power not found.".to_string()])
                    }
                    other => ApiError::from(other),
                })
            }
            _ => Err(ApiError::Validation(errors)),
        }
    })
    .await
    .map_err(ApiError::join)??;

    Ok((StatusCode::CREATED, Json(created)))
}
