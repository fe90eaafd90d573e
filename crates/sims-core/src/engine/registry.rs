use super::error::RegistryError;
use crate::core::models::scores::ScoreList;
use crate::core::models::student::{
    FieldUpdate, StudentCandidate, StudentField, StudentRecord,
};
use crate::core::presets::catalog::PresetCatalog;
use crate::core::presets::PresetKind;
use crate::core::validation::{
    self, CLASS_LABEL_MAX_LEN, IDENTIFIER_MAX_LEN, IDENTIFIER_MIN_LEN, NAME_MAX_LEN,
};

/// Outcome of a successful write to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    /// Storage index of the written record.
    pub index: usize,
    /// Whether the score list was empty and received the zero default.
    pub default_score_applied: bool,
}

/// A bounded, gap-free sequence of student records.
///
/// Records keep insertion order; deleting one shifts every later record one slot
/// toward the front. Identifiers are unique across the registry at all times.
///
/// The registry performs no internal synchronization. Mutating operations take
/// `&mut self`; callers that share a registry across threads must provide their own
/// exclusion.
#[derive(Debug, Clone)]
pub struct StudentRegistry {
    records: Vec<StudentRecord>,
    capacity: usize,
}

impl StudentRegistry {
    /// Creates an empty registry holding at most `capacity` records.
    ///
    /// Storage for every slot is reserved up front, so a capacity the process cannot
    /// satisfy is reported here as [`RegistryError::AllocationFailed`].
    pub fn new(capacity: usize) -> Result<Self, RegistryError> {
        let mut records = Vec::new();
        records.try_reserve_exact(capacity).map_err(|e| {
            RegistryError::AllocationFailed(format!("registry of {capacity} records ({e})"))
        })?;
        Ok(Self { records, capacity })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&StudentRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter()
    }

    /// Validates `candidate` and appends it as a new record.
    ///
    /// # Errors
    ///
    /// Checked in this order, with no mutation on any failure:
    ///
    /// - [`RegistryError::PresetsMissing`] if department or major presets are empty.
    /// - [`RegistryError::CapacityExceeded`] if the registry is full.
    /// - [`RegistryError::ValidationFailed`] for a malformed identifier.
    /// - [`RegistryError::DuplicateIdentifier`] if the identifier is already in use.
    /// - [`RegistryError::ValidationFailed`] for a malformed name, gender or class, or a
    ///   department/major missing from the presets.
    /// - [`RegistryError::OutOfRange`] for a score outside `[0, 100]`.
    pub fn add_student(
        &mut self,
        candidate: &StudentCandidate,
        presets: &PresetCatalog,
    ) -> Result<Commit, RegistryError> {
        if let Some(kind) = presets.missing_record_preset() {
            return Err(RegistryError::PresetsMissing { kind });
        }
        if self.is_full() {
            return Err(RegistryError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        check_identifier(&candidate.identifier)?;
        if self.position_by_id(&candidate.identifier).is_some() {
            return Err(RegistryError::DuplicateIdentifier(
                candidate.identifier.clone(),
            ));
        }
        check_name(&candidate.name)?;
        let gender = validation::parse_gender(&candidate.gender).ok_or_else(|| {
            RegistryError::invalid(
                StudentField::Gender,
                format!("'{}' is not an accepted gender token", candidate.gender.trim()),
            )
        })?;
        check_class_label(&candidate.class_label)?;
        check_preset(presets, PresetKind::Department, &candidate.department)?;
        check_preset(presets, PresetKind::Major, &candidate.major)?;

        let mut scores = ScoreList::from_values(&candidate.scores)?;
        let default_score_applied = scores.finalize();

        self.records.try_reserve(1).map_err(|e| {
            RegistryError::AllocationFailed(format!("student records ({e})"))
        })?;
        self.records.push(StudentRecord {
            name: candidate.name.clone(),
            gender,
            identifier: candidate.identifier.clone(),
            class_label: candidate.class_label.clone(),
            department: candidate.department.clone(),
            major: candidate.major.clone(),
            scores,
        });

        Ok(Commit {
            index: self.records.len() - 1,
            default_score_applied,
        })
    }

    /// Exact identifier lookup.
    pub fn find_by_id(&self, id: &str) -> Result<(usize, &StudentRecord), RegistryError> {
        if validation::is_blank(id) {
            return Err(RegistryError::NotFound("empty identifier".to_string()));
        }
        self.position_by_id(id)
            .map(|idx| (idx, &self.records[idx]))
            .ok_or_else(|| RegistryError::NotFound(format!("identifier '{id}'")))
    }

    /// Name lookup: an exact match wins; otherwise the first record, in storage order,
    /// whose name contains `name`.
    pub fn find_by_name(&self, name: &str) -> Result<(usize, &StudentRecord), RegistryError> {
        if validation::is_blank(name) {
            return Err(RegistryError::NotFound("empty name".to_string()));
        }
        self.records
            .iter()
            .position(|r| r.name == name)
            .or_else(|| self.records.iter().position(|r| r.name.contains(name)))
            .map(|idx| (idx, &self.records[idx]))
            .ok_or_else(|| RegistryError::NotFound(format!("name '{name}'")))
    }

    /// Replaces one field of the record at `index` after re-validating the new value.
    ///
    /// Department and major are checked against the current presets. A score update
    /// replaces the whole list and then applies the zero-default policy.
    pub fn modify(
        &mut self,
        index: usize,
        update: FieldUpdate,
        presets: &PresetCatalog,
    ) -> Result<Commit, RegistryError> {
        let record = self
            .records
            .get_mut(index)
            .ok_or_else(|| RegistryError::NotFound(format!("index {index}")))?;

        let mut default_score_applied = false;
        match update {
            FieldUpdate::Name(name) => {
                check_name(&name)?;
                record.name = name;
            }
            FieldUpdate::Gender(token) => {
                record.gender = validation::parse_gender(&token).ok_or_else(|| {
                    RegistryError::invalid(
                        StudentField::Gender,
                        format!("'{}' is not an accepted gender token", token.trim()),
                    )
                })?;
            }
            FieldUpdate::ClassLabel(label) => {
                check_class_label(&label)?;
                record.class_label = label;
            }
            FieldUpdate::Department(department) => {
                check_preset(presets, PresetKind::Department, &department)?;
                record.department = department;
            }
            FieldUpdate::Major(major) => {
                check_preset(presets, PresetKind::Major, &major)?;
                record.major = major;
            }
            FieldUpdate::Scores(values) => {
                record.scores.replace_all(&values)?;
                default_score_applied = record.scores.finalize();
            }
        }

        Ok(Commit {
            index,
            default_score_applied,
        })
    }

    /// Removes the record at `index`, shifting later records down by one.
    pub fn delete(&mut self, index: usize) -> Result<StudentRecord, RegistryError> {
        if index >= self.records.len() {
            return Err(RegistryError::NotFound(format!("index {index}")));
        }
        Ok(self.records.remove(index))
    }

    pub fn list_all(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Records whose major equals `major` exactly, in storage order.
    pub fn list_by_major<'a>(
        &'a self,
        major: &'a str,
    ) -> impl Iterator<Item = &'a StudentRecord> + 'a {
        self.records.iter().filter(move |r| r.major == major)
    }

    fn position_by_id(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.identifier == id)
    }
}

fn check_name(name: &str) -> Result<(), RegistryError> {
    if validation::is_valid_name(name) {
        Ok(())
    } else {
        Err(RegistryError::invalid(
            StudentField::Name,
            format!("must be 1-{NAME_MAX_LEN} characters and not blank"),
        ))
    }
}

fn check_identifier(id: &str) -> Result<(), RegistryError> {
    if validation::is_valid_identifier(id) {
        Ok(())
    } else {
        Err(RegistryError::invalid(
            StudentField::Identifier,
            format!("must be {IDENTIFIER_MIN_LEN}-{IDENTIFIER_MAX_LEN} ASCII letters or digits"),
        ))
    }
}

fn check_class_label(label: &str) -> Result<(), RegistryError> {
    if validation::is_valid_class_label(label) {
        Ok(())
    } else {
        Err(RegistryError::invalid(
            StudentField::ClassLabel,
            format!("must be at most {CLASS_LABEL_MAX_LEN} characters and not blank"),
        ))
    }
}

fn check_preset(
    presets: &PresetCatalog,
    kind: PresetKind,
    value: &str,
) -> Result<(), RegistryError> {
    if presets.get(kind).contains(value) {
        return Ok(());
    }
    let field = match kind {
        PresetKind::Department => StudentField::Department,
        PresetKind::Major => StudentField::Major,
        PresetKind::ScoreName => StudentField::Scores,
    };
    Err(RegistryError::invalid(
        field,
        format!("'{value}' is not a configured {kind}"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::student::Gender;

    fn presets() -> PresetCatalog {
        let mut catalog = PresetCatalog::new();
        catalog.get_mut(PresetKind::Department).add("CS").unwrap();
        catalog.get_mut(PresetKind::Department).add("EE").unwrap();
        catalog.get_mut(PresetKind::Major).add("SE").unwrap();
        catalog.get_mut(PresetKind::Major).add("AI").unwrap();
        catalog
    }

    fn candidate(name: &str, id: &str) -> StudentCandidate {
        StudentCandidate {
            name: name.to_string(),
            gender: "M".to_string(),
            identifier: id.to_string(),
            class_label: "C1".to_string(),
            department: "CS".to_string(),
            major: "SE".to_string(),
            scores: vec![90.0, 80.0],
        }
    }

    fn registry_with(names_and_ids: &[(&str, &str)]) -> (StudentRegistry, PresetCatalog) {
        let catalog = presets();
        let mut registry = StudentRegistry::new(10).unwrap();
        for (name, id) in names_and_ids {
            registry.add_student(&candidate(name, id), &catalog).unwrap();
        }
        (registry, catalog)
    }

    mod adding {
        use super::*;

        #[test]
        fn add_then_find_by_id_returns_equivalent_record() {
            let (mut registry, catalog) = registry_with(&[]);
            let commit = registry
                .add_student(&candidate("Tom", "A001"), &catalog)
                .unwrap();
            assert_eq!(commit.index, 0);
            assert!(!commit.default_score_applied);

            let (idx, record) = registry.find_by_id("A001").unwrap();
            assert_eq!(idx, 0);
            assert_eq!(record.name(), "Tom");
            assert_eq!(record.gender(), Gender::Male);
            assert_eq!(record.class_label(), "C1");
            assert_eq!(record.department(), "CS");
            assert_eq!(record.major(), "SE");
            assert_eq!(record.scores().as_slice(), &[90.0, 80.0]);
            assert_eq!(record.total(), 170.0);
        }

        #[test]
        fn duplicate_identifier_is_rejected_regardless_of_other_fields() {
            let (mut registry, catalog) = registry_with(&[("Tom", "A001")]);
            let mut other = candidate("Jerry", "A001");
            other.gender = "female".to_string();
            other.department = "EE".to_string();
            other.major = "AI".to_string();
            other.scores = vec![];

            let err = registry.add_student(&other, &catalog).unwrap_err();
            assert_eq!(err, RegistryError::DuplicateIdentifier("A001".to_string()));
            assert_eq!(registry.len(), 1);
        }

        #[test]
        fn missing_presets_block_adding() {
            let mut registry = StudentRegistry::new(5).unwrap();
            let mut catalog = PresetCatalog::new();
            let err = registry
                .add_student(&candidate("Tom", "A001"), &catalog)
                .unwrap_err();
            assert_eq!(
                err,
                RegistryError::PresetsMissing {
                    kind: PresetKind::Department
                }
            );

            catalog.get_mut(PresetKind::Department).add("CS").unwrap();
            let err = registry
                .add_student(&candidate("Tom", "A001"), &catalog)
                .unwrap_err();
            assert_eq!(
                err,
                RegistryError::PresetsMissing {
                    kind: PresetKind::Major
                }
            );
            assert!(registry.is_empty());
        }

        #[test]
        fn capacity_is_a_hard_ceiling() {
            let catalog = presets();
            let mut registry = StudentRegistry::new(1).unwrap();
            registry
                .add_student(&candidate("Tom", "A001"), &catalog)
                .unwrap();
            assert!(registry.is_full());
            let err = registry
                .add_student(&candidate("Ann", "A002"), &catalog)
                .unwrap_err();
            assert_eq!(err, RegistryError::CapacityExceeded { capacity: 1 });
            assert_eq!(registry.len(), 1);
        }

        #[test]
        fn invalid_fields_are_reported_by_field() {
            let (mut registry, catalog) = registry_with(&[]);
            let cases = [
                (
                    StudentCandidate {
                        name: " ".into(),
                        ..candidate("x", "A001")
                    },
                    StudentField::Name,
                ),
                (
                    StudentCandidate {
                        gender: "X".into(),
                        ..candidate("Tom", "A001")
                    },
                    StudentField::Gender,
                ),
                (candidate("Tom", "A-1"), StudentField::Identifier),
                (
                    StudentCandidate {
                        class_label: "c".repeat(21),
                        ..candidate("Tom", "A001")
                    },
                    StudentField::ClassLabel,
                ),
                (
                    StudentCandidate {
                        department: "Physics".into(),
                        ..candidate("Tom", "A001")
                    },
                    StudentField::Department,
                ),
                (
                    StudentCandidate {
                        major: "SE ".into(),
                        ..candidate("Tom", "A001")
                    },
                    StudentField::Major,
                ),
            ];
            for (bad, expected_field) in cases {
                match registry.add_student(&bad, &catalog) {
                    Err(RegistryError::ValidationFailed { field, .. }) => {
                        assert_eq!(field, expected_field)
                    }
                    other => panic!("expected validation failure, got {other:?}"),
                }
            }
            assert!(registry.is_empty());
        }

        #[test]
        fn out_of_range_score_rejects_whole_candidate() {
            let (mut registry, catalog) = registry_with(&[]);
            let bad = StudentCandidate {
                scores: vec![90.0, 100.5],
                ..candidate("Tom", "A001")
            };
            assert_eq!(
                registry.add_student(&bad, &catalog),
                Err(RegistryError::OutOfRange(100.5))
            );
            assert!(registry.is_empty());
        }

        #[test]
        fn empty_scores_receive_zero_default() {
            let (mut registry, catalog) = registry_with(&[]);
            let commit = registry
                .add_student(
                    &StudentCandidate {
                        scores: vec![],
                        ..candidate("Tom", "A001")
                    },
                    &catalog,
                )
                .unwrap();
            assert!(commit.default_score_applied);
            let record = registry.get(0).unwrap();
            assert_eq!(record.scores().as_slice(), &[0.0]);
            assert_eq!(record.total(), 0.0);
        }

        #[test]
        fn gender_tokens_are_normalized() {
            let (mut registry, catalog) = registry_with(&[]);
            let female = StudentCandidate {
                gender: "女".into(),
                ..candidate("Mei", "B001")
            };
            registry.add_student(&female, &catalog).unwrap();
            assert_eq!(registry.get(0).unwrap().gender(), Gender::Female);
        }
    }

    mod lookup {
        use super::*;

        #[test]
        fn find_by_name_prefers_exact_match() {
            let (registry, _) = registry_with(&[("Alicia", "A001"), ("Alice", "A002")]);
            let (idx, record) = registry.find_by_name("Alice").unwrap();
            assert_eq!(idx, 1);
            assert_eq!(record.name(), "Alice");
        }

        #[test]
        fn find_by_name_falls_back_to_first_substring_match() {
            let (registry, _) = registry_with(&[("Alicia", "A001"), ("Alice", "A002")]);
            let (idx, record) = registry.find_by_name("lic").unwrap();
            assert_eq!(idx, 0);
            assert_eq!(record.name(), "Alicia");
        }

        #[test]
        fn find_by_name_reports_not_found() {
            let (registry, _) = registry_with(&[("Alice", "A001")]);
            assert!(matches!(
                registry.find_by_name("Bob"),
                Err(RegistryError::NotFound(_))
            ));
            assert!(matches!(
                registry.find_by_name("  "),
                Err(RegistryError::NotFound(_))
            ));
        }

        #[test]
        fn find_by_id_is_exact_only() {
            let (registry, _) = registry_with(&[("Alice", "A0011")]);
            assert!(registry.find_by_id("A001").is_err());
            assert!(registry.find_by_id("a0011").is_err());
            assert!(registry.find_by_id("A0011").is_ok());
            assert!(registry.find_by_id("").is_err());
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn delete_compacts_and_preserves_order() {
            let (mut registry, _) = registry_with(&[
                ("A", "S001"),
                ("B", "S002"),
                ("C", "S003"),
                ("D", "S004"),
            ]);
            let removed = registry.delete(1).unwrap();
            assert_eq!(removed.identifier(), "S002");
            assert_eq!(registry.len(), 3);
            let ids: Vec<_> = registry.iter().map(|r| r.identifier()).collect();
            assert_eq!(ids, ["S001", "S003", "S004"]);
        }

        #[test]
        fn delete_out_of_range_is_not_found() {
            let (mut registry, _) = registry_with(&[("A", "S001")]);
            assert!(matches!(registry.delete(1), Err(RegistryError::NotFound(_))));
            assert_eq!(registry.len(), 1);
        }

        #[test]
        fn deleted_identifier_can_be_reused() {
            let (mut registry, catalog) = registry_with(&[("A", "S001")]);
            registry.delete(0).unwrap();
            registry
                .add_student(&candidate("B", "S001"), &catalog)
                .unwrap();
            assert_eq!(registry.find_by_id("S001").unwrap().1.name(), "B");
        }

        #[test]
        fn modify_revalidates_new_values() {
            let (mut registry, catalog) = registry_with(&[("Tom", "A001")]);
            assert!(
                registry
                    .modify(0, FieldUpdate::Name("".into()), &catalog)
                    .is_err()
            );
            assert!(
                registry
                    .modify(0, FieldUpdate::Gender("x".into()), &catalog)
                    .is_err()
            );
            assert!(
                registry
                    .modify(0, FieldUpdate::Major("Physics".into()), &catalog)
                    .is_err()
            );
            let record = registry.get(0).unwrap();
            assert_eq!(record.name(), "Tom");
            assert_eq!(record.major(), "SE");

            registry
                .modify(0, FieldUpdate::Name("Thomas".into()), &catalog)
                .unwrap();
            registry
                .modify(0, FieldUpdate::Gender("0".into()), &catalog)
                .unwrap();
            registry
                .modify(0, FieldUpdate::ClassLabel("C2".into()), &catalog)
                .unwrap();
            registry
                .modify(0, FieldUpdate::Department("EE".into()), &catalog)
                .unwrap();
            registry
                .modify(0, FieldUpdate::Major("AI".into()), &catalog)
                .unwrap();
            let record = registry.get(0).unwrap();
            assert_eq!(record.name(), "Thomas");
            assert_eq!(record.gender(), Gender::Female);
            assert_eq!(record.class_label(), "C2");
            assert_eq!(record.department(), "EE");
            assert_eq!(record.major(), "AI");
        }

        #[test]
        fn modify_scores_is_full_replacement() {
            let (mut registry, catalog) = registry_with(&[("Tom", "A001")]);
            let commit = registry
                .modify(0, FieldUpdate::Scores(vec![60.0]), &catalog)
                .unwrap();
            assert!(!commit.default_score_applied);
            assert_eq!(registry.get(0).unwrap().scores().as_slice(), &[60.0]);
            assert_eq!(registry.get(0).unwrap().total(), 60.0);

            let commit = registry
                .modify(0, FieldUpdate::Scores(vec![]), &catalog)
                .unwrap();
            assert!(commit.default_score_applied);
            assert_eq!(registry.get(0).unwrap().scores().as_slice(), &[0.0]);
        }

        #[test]
        fn modify_scores_keeps_previous_list_on_invalid_value() {
            let (mut registry, catalog) = registry_with(&[("Tom", "A001")]);
            let err = registry
                .modify(0, FieldUpdate::Scores(vec![50.0, -3.0]), &catalog)
                .unwrap_err();
            assert_eq!(err, RegistryError::OutOfRange(-3.0));
            assert_eq!(registry.get(0).unwrap().scores().as_slice(), &[90.0, 80.0]);
        }

        #[test]
        fn modify_checks_live_presets() {
            let (mut registry, mut catalog) = registry_with(&[("Tom", "A001")]);
            catalog.get_mut(PresetKind::Department).clear_all();
            catalog.get_mut(PresetKind::Department).add("Math").unwrap();

            assert!(
                registry
                    .modify(0, FieldUpdate::Department("CS".into()), &catalog)
                    .is_err()
            );
            registry
                .modify(0, FieldUpdate::Department("Math".into()), &catalog)
                .unwrap();
            assert_eq!(registry.get(0).unwrap().department(), "Math");
        }

        #[test]
        fn modify_unknown_index_is_not_found() {
            let (mut registry, catalog) = registry_with(&[]);
            assert!(matches!(
                registry.modify(0, FieldUpdate::Name("Tom".into()), &catalog),
                Err(RegistryError::NotFound(_))
            ));
        }
    }

    mod listing {
        use super::*;

        #[test]
        fn clearing_presets_keeps_existing_records_intact() {
            let (mut registry, mut catalog) = registry_with(&[("Tom", "A001")]);
            catalog.get_mut(PresetKind::Major).clear_all();
            assert_eq!(registry.get(0).unwrap().major(), "SE");
            assert_eq!(registry.list_by_major("SE").count(), 1);
            assert_eq!(
                registry.add_student(&candidate("Ann", "A002"), &catalog),
                Err(RegistryError::PresetsMissing {
                    kind: PresetKind::Major
                })
            );
        }

        #[test]
        fn list_by_major_filters_exactly_in_storage_order() {
            let catalog = presets();
            let mut registry = StudentRegistry::new(10).unwrap();
            for (name, id, major) in [("A", "S001", "SE"), ("B", "S002", "AI"), ("C", "S003", "SE")] {
                let c = StudentCandidate {
                    major: major.into(),
                    ..candidate(name, id)
                };
                registry.add_student(&c, &catalog).unwrap();
            }
            let se: Vec<_> = registry.list_by_major("SE").map(|r| r.name()).collect();
            assert_eq!(se, ["A", "C"]);
            assert_eq!(registry.list_by_major("se").count(), 0);
            assert_eq!(registry.list_all().len(), 3);
        }
    }
}
