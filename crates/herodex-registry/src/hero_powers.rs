//! Hero-power join records.

use crate::heroes::{get_hero, Hero};
use crate::powers::{get_power, Power};
use crate::RegistryError;
use herodex_types::Strength;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

/// A hero-power record with its related power embedded, as returned inside
/// a hero detail response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeroPowerWithPower {
    pub id: i64,
    pub strength: Strength,
    pub hero_id: i64,
    pub power_id: i64,
    /// The linked power.
    pub power: Power,
}

/// A hero-power record with both related entities embedded, as returned
/// from creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeroPowerWithRelations {
    pub id: i64,
    pub strength: Strength,
    pub hero_id: i64,
    pub power_id: i64,
    /// The linked hero.
    pub hero: Hero,
    /// The linked power.
    pub power: Power,
}

/// Parameters for creating a new hero-power link.
#[derive(Debug, Clone, Copy)]
pub struct CreateHeroPowerParams {
    pub strength: Strength,
    pub hero_id: i64,
    pub power_id: i64,
}

fn strength_from_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Strength> {
    let label: String = row.get(idx)?;
    Strength::from_label(&label).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            format!("unknown strength label: {label}").into(),
        )
    })
}

/// Lists the hero-power records for one hero, each with its power embedded,
/// ordered by ID.
pub fn list_hero_powers_for_hero(
    conn: &Connection,
    hero_id: i64,
) -> Result<Vec<HeroPowerWithPower>, RegistryError> {
    let mut stmt = conn.prepare(
        "SELECT hp.id, hp.strength, hp.hero_id, hp.power_id, p.id, p.description
         FROM hero_powers hp
         JOIN powers p ON p.id = hp.power_id
         WHERE hp.hero_id = ?1
         ORDER BY hp.id ASC",
    )?;

    let rows = stmt.query_map([hero_id], |row| {
        Ok(HeroPowerWithPower {
            id: row.get(0)?,
            strength: strength_from_column(row, 1)?,
            hero_id: row.get(2)?,
            power_id: row.get(3)?,
            power: Power {
                id: row.get(4)?,
                description: row.get(5)?,
            },
        })
    })?;

    let mut hero_powers = Vec::new();
    for row in rows {
        hero_powers.push(row?);
    }
    Ok(hero_powers)
}

/// Creates a new hero-power link and returns it with both related entities
/// embedded.
///
/// Returns `RegistryError::HeroNotFound` / `RegistryError::PowerNotFound`
/// if either referenced entity does not exist; nothing is inserted in that
/// case.
pub fn create_hero_power(
    conn: &Connection,
    params: &CreateHeroPowerParams,
) -> Result<HeroPowerWithRelations, RegistryError> {
    let hero = get_hero(conn, params.hero_id)?;
    let power = get_power(conn, params.power_id)?;

    conn.execute(
        "INSERT INTO hero_powers (strength, hero_id, power_id) VALUES (?1, ?2, ?3)",
        params![params.strength.as_str(), params.hero_id, params.power_id],
    )?;

    Ok(HeroPowerWithRelations {
        id: conn.last_insert_rowid(),
        strength: params.strength,
        hero_id: params.hero_id,
        power_id: params.power_id,
        hero,
        power,
    })
}
