//! Hero records.

use crate::RegistryError;
use rusqlite::{Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

/// A hero: a character with a civilian name and a super-hero alias.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    /// Database ID.
    pub id: i64,
    /// Civilian name.
    pub name: String,
    /// Super-hero alias.
    pub super_name: String,
}

fn map_row_to_hero(row: &Row<'_>) -> rusqlite::Result<Hero> {
    Ok(Hero {
        id: row.get(0)?,
        name: row.get(1)?,
        super_name: row.get(2)?,
    })
}

/// Lists all heroes, ordered by ID.
pub fn list_heroes(conn: &Connection) -> Result<Vec<Hero>, RegistryError> {
    let mut stmt = conn.prepare("SELECT id, name, super_name FROM heroes ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row_to_hero)?;
    let mut heroes = Vec::new();
    for row in rows {
        heroes.push(row?);
    }
    Ok(heroes)
}

/// Retrieves a hero by ID, or `None` if no such hero exists.
pub fn find_hero(conn: &Connection, id: i64) -> Result<Option<Hero>, RegistryError> {
    Ok(conn
        .query_row(
            "SELECT id, name, super_name FROM heroes WHERE id = ?1",
            [id],
            map_row_to_hero,
        )
        .optional()?)
}

/// Retrieves a hero by ID.
///
/// Returns `RegistryError::HeroNotFound` if no such hero exists.
pub fn get_hero(conn: &Connection, id: i64) -> Result<Hero, RegistryError> {
    find_hero(conn, id)?.ok_or(RegistryError::HeroNotFound(id))
}
