//! Hero read endpoints.

use crate::api::ApiError;
use crate::AppState;
use axum::{
    extract::{Extension, Path},
    response::Json,
};
use herodex_registry::{get_hero, list_heroes, list_hero_powers_for_hero, Hero, HeroPowerWithPower};
use serde::Serialize;
use std::sync::Arc;

/// Response body for `GET /heroes/{id}`: the hero with its power links,
/// each carrying the related power.
#[derive(Debug, Serialize)]
pub struct HeroDetailResponse {
    pub id: i64,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerWithPower>,
}

/// Handler for `GET /heroes`.
pub async fn list_heroes_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<Hero>>, ApiError> {
    let heroes = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(ApiError::pool)?;
        list_heroes(&conn).map_err(ApiError::from)
    })
    .await
    .map_err(ApiError::join)??;

    Ok(Json(heroes))
}

/// Handler for `GET /heroes/{id}`.
pub async fn get_hero_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<HeroDetailResponse>, ApiError> {
    let (hero, hero_powers) = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(ApiError::pool)?;
        let hero = get_hero(&conn, id).map_err(ApiError::from)?;
        let hero_powers = list_hero_powers_for_hero(&conn, id).map_err(ApiError::from)?;
        Ok::<_, ApiError>((hero, hero_powers))
    })
    .await
    .map_err(ApiError::join)??;

    Ok(Json(HeroDetailResponse {
        id: hero.id,
        name: hero.name,
        super_name: hero.super_name,
        hero_powers,
    }))
}
