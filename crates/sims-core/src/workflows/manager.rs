use crate::core::models::scores::LabelledScore;
use crate::core::models::student::{FieldUpdate, Gender, StudentCandidate, StudentRecord};
use crate::core::presets::catalog::PresetCatalog;
use crate::core::presets::set::UniqueNameSet;
use crate::core::presets::PresetKind;
use crate::engine::config::RegistryConfig;
use crate::engine::error::RegistryError;
use crate::engine::registry::{Commit, StudentRegistry};
use serde::Serialize;

/// A read-only view of one record, ready for rendering.
///
/// Scores are paired with the score-name preset at the same position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSnapshot<'a> {
    pub name: &'a str,
    pub gender: Gender,
    pub identifier: &'a str,
    pub class_label: &'a str,
    pub department: &'a str,
    pub major: &'a str,
    pub scores: Vec<LabelledScore<'a>>,
    pub total: f64,
}

/// The registry and its preset catalog, owned together.
///
/// This is the single entry point a presentation layer drives. It is constructed once
/// and passed by `&mut` reference; it holds no global state and performs no locking.
#[derive(Debug, Clone)]
pub struct StudentManager {
    registry: StudentRegistry,
    presets: PresetCatalog,
}

impl StudentManager {
    pub fn new(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let registry = StudentRegistry::new(config.capacity)?;
        let presets = PresetCatalog::from_seed(&config.presets)?;
        Ok(Self { registry, presets })
    }

    pub fn registry(&self) -> &StudentRegistry {
        &self.registry
    }

    pub fn presets(&self) -> &PresetCatalog {
        &self.presets
    }

    pub fn preset_list(&self, kind: PresetKind) -> &UniqueNameSet {
        self.presets.get(kind)
    }

    pub fn add_preset(&mut self, kind: PresetKind, name: &str) -> Result<(), RegistryError> {
        Ok(self.presets.get_mut(kind).add(name)?)
    }

    /// Removes every preset of `kind`. Records already using those names keep them.
    pub fn clear_presets(&mut self, kind: PresetKind) -> usize {
        self.presets.get_mut(kind).clear_all()
    }

    pub fn add_student(&mut self, candidate: &StudentCandidate) -> Result<Commit, RegistryError> {
        self.registry.add_student(candidate, &self.presets)
    }

    pub fn find_by_id(&self, id: &str) -> Result<(usize, &StudentRecord), RegistryError> {
        self.registry.find_by_id(id)
    }

    pub fn find_by_name(&self, name: &str) -> Result<(usize, &StudentRecord), RegistryError> {
        self.registry.find_by_name(name)
    }

    /// Looks a record up by identifier, then by name when `fallback_name` is given.
    pub fn locate(
        &self,
        id: &str,
        fallback_name: Option<&str>,
    ) -> Result<(usize, &StudentRecord), RegistryError> {
        match (self.registry.find_by_id(id), fallback_name) {
            (Ok(found), _) => Ok(found),
            (Err(_), Some(name)) => self.registry.find_by_name(name),
            (Err(e), None) => Err(e),
        }
    }

    pub fn modify(&mut self, index: usize, update: FieldUpdate) -> Result<Commit, RegistryError> {
        self.registry.modify(index, update, &self.presets)
    }

    pub fn delete(&mut self, index: usize) -> Result<StudentRecord, RegistryError> {
        self.registry.delete(index)
    }

    pub fn list_all(&self) -> &[StudentRecord] {
        self.registry.list_all()
    }

    /// Records with exactly the given major.
    ///
    /// Fails with [`RegistryError::PresetsMissing`] when no major preset is configured,
    /// which is distinct from a configured major that simply has no students.
    pub fn list_by_major<'a>(&'a self, major: &'a str) -> Result<Vec<&'a StudentRecord>, RegistryError> {
        if self.presets.majors().is_empty() {
            return Err(RegistryError::PresetsMissing {
                kind: PresetKind::Major,
            });
        }
        Ok(self.registry.list_by_major(major).collect())
    }

    pub fn snapshot<'a>(&'a self, record: &'a StudentRecord) -> StudentSnapshot<'a> {
        StudentSnapshot {
            name: record.name(),
            gender: record.gender(),
            identifier: record.identifier(),
            class_label: record.class_label(),
            department: record.department(),
            major: record.major(),
            scores: record.scores().labelled(self.presets.score_names().list()),
            total: record.total(),
        }
    }
}
