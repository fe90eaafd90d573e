//! # Workflows Module
//!
//! High-level entry points for a presentation layer.
//!
//! [`manager::StudentManager`] owns the registry together with the preset catalog and
//! exposes every record and preset operation behind one value, along with
//! [`manager::StudentSnapshot`] for rendering a record with its labelled scores.

pub mod manager;
