#![deny(missing_docs)]
//! Reconciles a declared serverless function configuration against the
//! remote platform through the four lifecycle verbs (create, read, update,
//! delete), following the hexagonal architecture pattern.
//!
//! The host orchestration engine owns identity bookkeeping, per-resource
//! serialization and retry policy; this crate owns the field-by-field
//! translation between declared and observed state.

pub mod archive;
pub mod domain;
pub mod outbound;
