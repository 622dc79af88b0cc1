//! Shared types for the Herodex API.
//!
//! This crate provides the domain types used across all Herodex crates.
//! No crate in the workspace depends on anything *except* `herodex-types`
//! for cross-cutting type definitions, which keeps the dependency graph
//! clean and prevents circular dependencies.

use serde::{Deserialize, Serialize};

/// Proficiency rating of a hero with a particular power.
///
/// Stored in the database as its string label and serialized the same way
/// over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strength {
    /// The hero wields this power strongly.
    Strong,
    /// The hero barely commands this power.
    Weak,
    /// The hero commands this power with average proficiency.
    Average,
}

impl Strength {
    /// Returns the string label for this strength.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
            Self::Average => "Average",
        }
    }

    /// Attempts to convert a string label to a `Strength`.
    ///
    /// Returns `None` if the label does not correspond to a known rating.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Strong" => Some(Self::Strong),
            "Weak" => Some(Self::Weak),
            "Average" => Some(Self::Average),
            _ => None,
        }
    }
}
