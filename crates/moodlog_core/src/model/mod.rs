//! Domain model for mood journaling.
//!
//! # Responsibility
//! - Define the records owned by the mood-entry store.
//! - Provide the fixed built-in mood and activity catalogs.
//!
//! # Invariants
//! - A committed entry is identified by its `date` timestamp.
//! - Built-in catalogs are fixed and always precede custom additions.

pub mod activity;
pub mod entry;
pub mod mood;
