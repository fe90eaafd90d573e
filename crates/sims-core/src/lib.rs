//! # SIMS Core Library
//!
//! An in-memory registry of student records whose department, major and score names are
//! constrained by editable preset vocabularies.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Pure validators, the student record and its score list,
//!   and the preset vocabularies.
//!
//! - **[`engine`]: The Logic Core.** The bounded `StudentRegistry`, its configuration, and
//!   the typed `RegistryError` every operation returns on failure.
//!
//! - **[`workflows`]: The Public API.** `StudentManager`, which owns the registry and the
//!   presets together and is what a terminal or other front end drives.
//!
//! ## Concurrency
//!
//! Everything is single-threaded and synchronous. No type here synchronizes internally;
//! operations must not be invoked concurrently on the same value without external locking.
//!
//! ```ignore
//! use sims::core::models::student::StudentCandidate;
//! use sims::core::presets::PresetKind;
//! use sims::engine::config::RegistryConfig;
//! use sims::workflows::manager::StudentManager;
//!
//! let mut manager = StudentManager::new(&RegistryConfig::default())?;
//! manager.add_preset(PresetKind::Department, "CS")?;
//! manager.add_preset(PresetKind::Major, "SE")?;
//! manager.add_student(&StudentCandidate {
//!     name: "Tom".into(),
//!     gender: "M".into(),
//!     identifier: "A001".into(),
//!     class_label: "C1".into(),
//!     department: "CS".into(),
//!     major: "SE".into(),
//!     scores: vec![90.0, 80.0],
//! })?;
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
