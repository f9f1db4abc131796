//! Core use-case services.
//!
//! # Responsibility
//! - Own the mood-entry store and its single-writer state.
//! - Mirror store collections to slot storage through the persistence bridge.
//! - Emit fire-and-forget notices for successful user actions.

pub mod mood_store;
pub mod notify;
pub mod persistence;
