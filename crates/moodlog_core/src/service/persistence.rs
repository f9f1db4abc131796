//! Persistence bridge between the store and slot storage.
//!
//! # Responsibility
//! - Seed store state from three JSON slots exactly once at startup.
//! - Write a collection back to its slot whenever it changes.
//!
//! # Invariants
//! - Absent, unreadable or malformed slots load as empty collections.
//! - Load never fails; write failures are reported to the caller, which logs
//!   and keeps its in-memory state.

use crate::model::entry::MoodEntry;
use crate::model::mood::MoodDefinition;
use crate::repo::slot_repo::{RepoError, SlotRepository};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot holding the JSON array of committed entries.
pub const MOOD_ENTRIES_KEY: &str = "moodEntries";
/// Slot holding the JSON array of custom mood definitions.
pub const CUSTOM_MOODS_KEY: &str = "customMoods";
/// Slot holding the JSON array of custom activity tags.
pub const ACTIVITIES_KEY: &str = "activities";

pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(Debug)]
pub enum BridgeError {
    Repo(RepoError),
    Encode {
        key: &'static str,
        source: serde_json::Error,
    },
    Decode {
        key: &'static str,
        source: serde_json::Error,
    },
}

impl Display for BridgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Encode { key, source } => write!(f, "failed to encode slot `{key}`: {source}"),
            Self::Decode { key, source } => write!(f, "malformed slot `{key}`: {source}"),
        }
    }
}

impl Error for BridgeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Encode { source, .. } | Self::Decode { source, .. } => Some(source),
        }
    }
}

impl From<RepoError> for BridgeError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Collections restored from storage at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedState {
    pub entries: Vec<MoodEntry>,
    pub custom_moods: Vec<MoodDefinition>,
    pub activities: Vec<String>,
}

/// Mirrors store collections to JSON text slots.
pub struct PersistenceBridge<R: SlotRepository> {
    repo: R,
}

impl<R: SlotRepository> PersistenceBridge<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Reads all three slots, defaulting each one independently.
    pub fn load(&self) -> PersistedState {
        let state = PersistedState {
            entries: self.load_or_default(MOOD_ENTRIES_KEY),
            custom_moods: self.load_or_default(CUSTOM_MOODS_KEY),
            activities: self.load_or_default(ACTIVITIES_KEY),
        };
        info!(
            "event=state_load module=bridge status=ok entries={} custom_moods={} activities={}",
            state.entries.len(),
            state.custom_moods.len(),
            state.activities.len()
        );
        state
    }

    pub fn save_entries(&self, entries: &[MoodEntry]) -> BridgeResult<()> {
        self.write_json(MOOD_ENTRIES_KEY, entries)
    }

    pub fn save_custom_moods(&self, moods: &[MoodDefinition]) -> BridgeResult<()> {
        self.write_json(CUSTOM_MOODS_KEY, moods)
    }

    pub fn save_activities(&self, activities: &[String]) -> BridgeResult<()> {
        self.write_json(ACTIVITIES_KEY, activities)
    }

    fn load_or_default<T: DeserializeOwned>(&self, key: &'static str) -> Vec<T> {
        match self.read_json::<Vec<T>>(key) {
            Ok(Some(values)) => values,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(
                    "event=slot_read module=bridge status=fallback key={key} error={err}"
                );
                Vec::new()
            }
        }
    }

    fn read_json<T: DeserializeOwned>(&self, key: &'static str) -> BridgeResult<Option<T>> {
        let Some(raw) = self.repo.read_slot(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| BridgeError::Decode { key, source })
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &'static str, value: &T) -> BridgeResult<()> {
        let encoded =
            serde_json::to_string(value).map_err(|source| BridgeError::Encode { key, source })?;
        self.repo.write_slot(key, &encoded)?;
        Ok(())
    }
}
