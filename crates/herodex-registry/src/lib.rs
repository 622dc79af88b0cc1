//! Hero, power, and hero-power records for the Herodex API.
//!
//! Implements the relational model behind the HTTP surface: heroes, powers,
//! and the join records linking them with a strength rating. All functions
//! here are synchronous and operate on a borrowed `rusqlite::Connection`;
//! callers own pooling and blocking-task placement.

use thiserror::Error;

mod hero_powers;
mod heroes;
mod powers;

pub use hero_powers::{
    create_hero_power, list_hero_powers_for_hero, CreateHeroPowerParams, HeroPowerWithPower,
    HeroPowerWithRelations,
};
pub use heroes::{find_hero, get_hero, list_heroes, Hero};
pub use powers::{find_power, get_power, list_powers, update_power_description, Power};

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("hero not found: {0}")]
    HeroNotFound(i64),
    #[error("power not found: {0}")]
    PowerNotFound(i64),
}
