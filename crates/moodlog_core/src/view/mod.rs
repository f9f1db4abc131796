//! View models derived from store snapshots.
//!
//! # Responsibility
//! - Compute day groupings, calendar grids and navigation cursors.
//! - Translate picker/tagger interactions into store operations.
//!
//! # Invariants
//! - Derived data is recomputed from the latest snapshot, never cached in
//!   the store.
//! - Day boundaries are taken in the caller-supplied time zone.

pub mod activity_tagger;
pub mod calendar;
pub mod days;
pub mod mood_picker;
pub mod recent;
