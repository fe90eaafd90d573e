use crate::core::models::scores::ScoreError;
use crate::core::models::student::StudentField;
use crate::core::presets::{PresetError, PresetKind};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Invalid {field}: {reason}")]
    ValidationFailed {
        field: StudentField,
        reason: String,
    },

    #[error("A student with identifier '{0}' already exists")]
    DuplicateIdentifier(String),

    #[error("The {kind} '{name}' already exists")]
    DuplicateEntry { kind: PresetKind, name: String },

    #[error("No {kind} presets are configured")]
    PresetsMissing { kind: PresetKind },

    #[error("Registry is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("Score {0} is outside the allowed range [0, 100]")]
    OutOfRange(f64),

    #[error("Allocation failed while growing {0}")]
    AllocationFailed(String),
}

impl RegistryError {
    pub(crate) fn invalid(field: StudentField, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field,
            reason: reason.into(),
        }
    }
}

impl From<ScoreError> for RegistryError {
    fn from(e: ScoreError) -> Self {
        match e {
            ScoreError::OutOfRange(value) => Self::OutOfRange(value),
            ScoreError::Allocation(source) => {
                Self::AllocationFailed(format!("score list ({source})"))
            }
        }
    }
}

impl From<PresetError> for RegistryError {
    fn from(e: PresetError) -> Self {
        match e {
            PresetError::Duplicate { kind, name } => Self::DuplicateEntry { kind, name },
            PresetError::Blank { kind } => Self::ValidationFailed {
                field: match kind {
                    PresetKind::Department => StudentField::Department,
                    PresetKind::Major => StudentField::Major,
                    PresetKind::ScoreName => StudentField::Scores,
                },
                reason: format!("{kind} name cannot be blank"),
            },
            PresetError::Allocation { kind, source } => {
                Self::AllocationFailed(format!("{kind} presets ({source})"))
            }
        }
    }
}
