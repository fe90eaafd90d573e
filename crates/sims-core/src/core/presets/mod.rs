//! # Presets Module
//!
//! Controlled vocabularies that constrain the department, major and score-name
//! values a student record may take.
//!
//! ## Overview
//!
//! Each vocabulary is a [`set::UniqueNameSet`]: an insertion-ordered set of distinct,
//! non-blank names. The three sets are grouped in a [`catalog::PresetCatalog`] and
//! addressed by [`PresetKind`]. Presets are consulted only when a record is written;
//! clearing a set never touches records that already use one of its names.
//!
//! ## Usage
//!
//! ```ignore
//! use sims::core::presets::{PresetKind, catalog::PresetCatalog};
//!
//! let mut catalog = PresetCatalog::load("presets.toml".as_ref())?;
//! catalog.get_mut(PresetKind::Major).add("Software Engineering")?;
//! assert!(catalog.majors().contains("Software Engineering"));
//! ```

pub mod catalog;
pub mod set;

use std::collections::TryReserveError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetKind {
    Department,
    Major,
    ScoreName,
}

impl PresetKind {
    pub const ALL: [PresetKind; 3] = [
        PresetKind::Department,
        PresetKind::Major,
        PresetKind::ScoreName,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PresetKind::Department => "department",
            PresetKind::Major => "major",
            PresetKind::ScoreName => "score name",
        }
    }
}

impl fmt::Display for PresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Invalid preset kind string")]
pub struct ParsePresetKindError;

impl FromStr for PresetKind {
    type Err = ParsePresetKindError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "department" | "departments" => Ok(PresetKind::Department),
            "major" | "majors" => Ok(PresetKind::Major),
            "score-name" | "score-names" | "score name" => Ok(PresetKind::ScoreName),
            _ => Err(ParsePresetKindError),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PresetError {
    #[error("The {kind} '{name}' already exists")]
    Duplicate { kind: PresetKind, name: String },

    #[error("A {kind} name cannot be blank")]
    Blank { kind: PresetKind },

    #[error("Failed to grow the {kind} list: {source}")]
    Allocation {
        kind: PresetKind,
        source: TryReserveError,
    },
}
