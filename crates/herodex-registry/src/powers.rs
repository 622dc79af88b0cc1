//! Power records.

use crate::RegistryError;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

/// A power: an ability with a textual description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Power {
    /// Database ID.
    pub id: i64,
    /// Textual description of the ability. At least 20 characters.
    pub description: String,
}

fn map_row_to_power(row: &Row<'_>) -> rusqlite::Result<Power> {
    Ok(Power {
        id: row.get(0)?,
        description: row.get(1)?,
    })
}

/// Lists all powers, ordered by ID.
pub fn list_powers(conn: &Connection) -> Result<Vec<Power>, RegistryError> {
    let mut stmt = conn.prepare("SELECT id, description FROM powers ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row_to_power)?;
    let mut powers = Vec::new();
    for row in rows {
        powers.push(row?);
    }
    Ok(powers)
}

/// Retrieves a power by ID, or `None` if no such power exists.
pub fn find_power(conn: &Connection, id: i64) -> Result<Option<Power>, RegistryError> {
    Ok(conn
        .query_row(
            "SELECT id, description FROM powers WHERE id = ?1",
            [id],
            map_row_to_power,
        )
        .optional()?)
}

/// Retrieves a power by ID.
///
/// Returns `RegistryError::PowerNotFound` if no such power exists.
pub fn get_power(conn: &Connection, id: i64) -> Result<Power, RegistryError> {
    find_power(conn, id)?.ok_or(RegistryError::PowerNotFound(id))
}

/// Updates a power's description and returns the updated record.
///
/// Callers validate the description before calling; this function only
/// persists it. Returns `RegistryError::PowerNotFound` if no such power
/// exists.
pub fn update_power_description(
    conn: &Connection,
    id: i64,
    description: &str,
) -> Result<Power, RegistryError> {
    let updated = conn.execute(
        "UPDATE powers SET description = ?1 WHERE id = ?2",
        params![description, id],
    )?;
    if updated == 0 {
        return Err(RegistryError::PowerNotFound(id));
    }
    get_power(conn, id)
}
