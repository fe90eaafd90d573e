//! # Core Models Module
//!
//! Data structures describing one student: the [`student::StudentRecord`] with its
//! fixed-shape fields and the exclusively owned [`scores::ScoreList`].
//!
//! Records are only built and mutated through
//! [`StudentRegistry`](crate::engine::registry::StudentRegistry), which validates every
//! field first. A [`student::StudentCandidate`] carries raw input into the registry and a
//! [`student::FieldUpdate`] carries a single-field edit.

pub mod scores;
pub mod student;
