//! # Core Module
//!
//! Stateless building blocks of the student registry.
//!
//! ## Architecture
//!
//! - **Validation** ([`validation`]) - Pure predicates for names, identifiers, class labels,
//!   gender tokens and scores
//! - **Student Representation** ([`models`]) - Student records and their score lists
//! - **Controlled Vocabularies** ([`presets`]) - Department, major and score-name presets
//!
//! Nothing in this module holds long-lived state on its own; the
//! [`engine`](crate::engine) owns the collections built from these types.

pub mod models;
pub mod presets;
pub mod validation;
