//! Key-value slot storage contracts and implementations.
//!
//! # Responsibility
//! - Define the string-valued slot contract used by the persistence bridge.
//! - Isolate SQLite details from the store and bridge.
//!
//! # Invariants
//! - Slot values are opaque text; encoding is the bridge's concern.
//! - Reads of unknown keys return `None`, never an error.

pub mod memory_repo;
pub mod slot_repo;
