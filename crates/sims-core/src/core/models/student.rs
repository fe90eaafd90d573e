use super::scores::ScoreList;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names a field of a [`StudentRecord`] in validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentField {
    Name,
    Gender,
    Identifier,
    ClassLabel,
    Department,
    Major,
    Scores,
}

impl StudentField {
    pub fn as_str(self) -> &'static str {
        match self {
            StudentField::Name => "name",
            StudentField::Gender => "gender",
            StudentField::Identifier => "identifier",
            StudentField::ClassLabel => "class",
            StudentField::Department => "department",
            StudentField::Major => "major",
            StudentField::Scores => "scores",
        }
    }
}

impl fmt::Display for StudentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, unvalidated input for a new record.
///
/// `gender` holds the token as typed; it is normalized when the record is created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentCandidate {
    pub name: String,
    pub gender: String,
    pub identifier: String,
    pub class_label: String,
    pub department: String,
    pub major: String,
    pub scores: Vec<f64>,
}

/// A single-field replacement applied by
/// [`StudentRegistry::modify`](crate::engine::registry::StudentRegistry::modify).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    Gender(String),
    ClassLabel(String),
    Department(String),
    Major(String),
    /// Full replacement of the score list, never an incremental patch.
    Scores(Vec<f64>),
}

impl FieldUpdate {
    pub fn field(&self) -> StudentField {
        match self {
            FieldUpdate::Name(_) => StudentField::Name,
            FieldUpdate::Gender(_) => StudentField::Gender,
            FieldUpdate::ClassLabel(_) => StudentField::ClassLabel,
            FieldUpdate::Department(_) => StudentField::Department,
            FieldUpdate::Major(_) => StudentField::Major,
            FieldUpdate::Scores(_) => StudentField::Scores,
        }
    }
}

/// A validated student record. Only the registry constructs and mutates these.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub(crate) name: String,
    pub(crate) gender: Gender,
    pub(crate) identifier: String,
    pub(crate) class_label: String,
    pub(crate) department: String,
    pub(crate) major: String,
    pub(crate) scores: ScoreList,
}

impl StudentRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn class_label(&self) -> &str {
        &self.class_label
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn scores(&self) -> &ScoreList {
        &self.scores
    }

    /// Sum of the record's scores.
    pub fn total(&self) -> f64 {
        self.scores.total()
    }
}
