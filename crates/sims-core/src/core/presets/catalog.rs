use super::set::UniqueNameSet;
use super::{PresetError, PresetKind};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Initial preset vocabularies, as found in a preset seed file or a config section.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PresetSeed {
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub majors: Vec<String>,
    #[serde(default)]
    pub score_names: Vec<String>,
}

impl PresetSeed {
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty() && self.majors.is_empty() && self.score_names.is_empty()
    }

    pub fn names_mut(&mut self, kind: PresetKind) -> &mut Vec<String> {
        match kind {
            PresetKind::Department => &mut self.departments,
            PresetKind::Major => &mut self.majors,
            PresetKind::ScoreName => &mut self.score_names,
        }
    }

    fn entries(&self) -> impl Iterator<Item = (PresetKind, &str)> {
        let departments = self
            .departments
            .iter()
            .map(|n| (PresetKind::Department, n.as_str()));
        let majors = self.majors.iter().map(|n| (PresetKind::Major, n.as_str()));
        let score_names = self
            .score_names
            .iter()
            .map(|n| (PresetKind::ScoreName, n.as_str()));
        departments.chain(majors).chain(score_names)
    }
}

/// The three preset vocabularies that constrain student records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetCatalog {
    departments: UniqueNameSet,
    majors: UniqueNameSet,
    score_names: UniqueNameSet,
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PresetCatalog {
    pub fn new() -> Self {
        Self {
            departments: UniqueNameSet::new(PresetKind::Department),
            majors: UniqueNameSet::new(PresetKind::Major),
            score_names: UniqueNameSet::new(PresetKind::ScoreName),
        }
    }

    pub fn load(path: &Path) -> Result<Self, PresetLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| PresetLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let seed: PresetSeed = toml::from_str(&content).map_err(|e| PresetLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(Self::from_seed(&seed)?)
    }

    pub fn from_seed(seed: &PresetSeed) -> Result<Self, PresetError> {
        let mut catalog = Self::new();
        catalog.extend_from_seed(seed)?;
        Ok(catalog)
    }

    /// Adds every entry of `seed`. Stops at the first rejected entry; entries added
    /// before it are kept.
    pub fn extend_from_seed(&mut self, seed: &PresetSeed) -> Result<(), PresetError> {
        for (kind, name) in seed.entries() {
            self.get_mut(kind).add(name)?;
        }
        Ok(())
    }

    pub fn get(&self, kind: PresetKind) -> &UniqueNameSet {
        match kind {
            PresetKind::Department => &self.departments,
            PresetKind::Major => &self.majors,
            PresetKind::ScoreName => &self.score_names,
        }
    }

    pub fn get_mut(&mut self, kind: PresetKind) -> &mut UniqueNameSet {
        match kind {
            PresetKind::Department => &mut self.departments,
            PresetKind::Major => &mut self.majors,
            PresetKind::ScoreName => &mut self.score_names,
        }
    }

    pub fn departments(&self) -> &UniqueNameSet {
        &self.departments
    }

    pub fn majors(&self) -> &UniqueNameSet {
        &self.majors
    }

    pub fn score_names(&self) -> &UniqueNameSet {
        &self.score_names
    }

    /// The first of department/major that has no entries, if any.
    pub fn missing_record_preset(&self) -> Option<PresetKind> {
        if self.departments.is_empty() {
            Some(PresetKind::Department)
        } else if self.majors.is_empty() {
            Some(PresetKind::Major)
        } else {
            None
        }
    }

    /// `true` when both department and major presets exist, the precondition for adding records.
    pub fn has_record_presets(&self) -> bool {
        self.missing_record_preset().is_none()
    }
}

#[derive(Debug, Error)]
pub enum PresetLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Preset(#[from] PresetError),
}
