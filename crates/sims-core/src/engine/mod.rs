//! # Engine Module
//!
//! The stateful layer of the library: the bounded [`registry::StudentRegistry`] that owns
//! every record, its [`config::RegistryConfig`], and the unified
//! [`error::RegistryError`] returned by every operation.
//!
//! ## Guarantees
//!
//! - **All-or-nothing writes** - a failed add or modify leaves the registry untouched
//! - **Write-time preset checks** - departments and majors are validated against the
//!   presets current at the time of the write, never retroactively
//! - **Gap-free storage** - deletion shifts later records forward, preserving order
//! - **Fixed capacity** - the registry never grows past its configured ceiling

pub mod config;
pub mod error;
pub mod registry;
