//! Mood entry, draft and patch models.
//!
//! # Responsibility
//! - Define the committed `MoodEntry` record and its persisted JSON shape.
//! - Define the transient `MoodDraft` and the update forms applied to it.
//!
//! # Invariants
//! - `date` is the identity of a committed entry and is never patched.
//! - A draft becomes an entry only when it carries a mood.

use crate::model::activity::{dedup_activities, toggle_activity};
use crate::model::mood::MoodDefinition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// Timestamp used as entry identity and sort key.
pub type EntryDate = DateTime<Utc>;

/// Committed mood entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// ISO-8601 timestamp taken when the mood was picked.
    pub date: EntryDate,
    pub mood: MoodDefinition,
    /// Ordered set of activity labels.
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub note: String,
}

/// Entry under construction.
///
/// Shaped like `MoodEntry`, but `mood` may be absent when a caller clears it
/// through a function-valued update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodDraft {
    pub date: EntryDate,
    pub mood: Option<MoodDefinition>,
    pub activities: Vec<String>,
    pub note: String,
}

impl MoodDraft {
    /// Creates a fresh draft with no activities and an empty note.
    pub fn new(mood: MoodDefinition, date: EntryDate) -> Self {
        Self {
            date,
            mood: Some(mood),
            activities: Vec::new(),
            note: String::new(),
        }
    }

    /// Returns a copy with `label` toggled in or out of the activity set.
    pub fn with_toggled_activity(&self, label: &str) -> Self {
        Self {
            activities: toggle_activity(&self.activities, label),
            ..self.clone()
        }
    }

    /// Returns a copy with the note replaced.
    pub fn with_note(&self, note: impl Into<String>) -> Self {
        Self {
            note: note.into(),
            ..self.clone()
        }
    }

    /// Converts to a committed entry, or `None` when no mood is set.
    pub fn to_entry(&self) -> Option<MoodEntry> {
        self.mood.as_ref().map(|mood| MoodEntry {
            date: self.date,
            mood: mood.clone(),
            activities: self.activities.clone(),
            note: self.note.clone(),
        })
    }
}

/// Field-wise merge applied to a draft; `None` leaves the field unchanged.
///
/// Activity lists are reduced to a set on apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPatch {
    pub date: Option<EntryDate>,
    pub mood: Option<MoodDefinition>,
    pub activities: Option<Vec<String>>,
    pub note: Option<String>,
}

impl DraftPatch {
    /// Patch that only replaces the note.
    pub fn note(note: impl Into<String>) -> Self {
        Self {
            note: Some(note.into()),
            ..Self::default()
        }
    }

    /// Patch that only replaces the activity set.
    pub fn activities(activities: Vec<String>) -> Self {
        Self {
            activities: Some(activities),
            ..Self::default()
        }
    }

    pub fn apply_to(self, draft: &mut MoodDraft) {
        if let Some(date) = self.date {
            draft.date = date;
        }
        if let Some(mood) = self.mood {
            draft.mood = Some(mood);
        }
        if let Some(activities) = self.activities {
            draft.activities = dedup_activities(activities);
        }
        if let Some(note) = self.note {
            draft.note = note;
        }
    }
}

/// Update form accepted by `MoodStore::update_draft`.
pub enum DraftUpdate {
    /// Merge the set fields into the current draft.
    Merge(DraftPatch),
    /// Replace the draft with a value computed from the latest draft.
    Apply(Box<dyn FnOnce(&MoodDraft) -> MoodDraft>),
}

impl DraftUpdate {
    /// Wraps an updater closure that reads the latest draft.
    pub fn apply(updater: impl FnOnce(&MoodDraft) -> MoodDraft + 'static) -> Self {
        Self::Apply(Box::new(updater))
    }

    /// Atomic toggle of one activity label.
    pub fn toggle_activity(label: impl Into<String>) -> Self {
        let label = label.into();
        Self::apply(move |draft| draft.with_toggled_activity(&label))
    }
}

impl From<DraftPatch> for DraftUpdate {
    fn from(value: DraftPatch) -> Self {
        Self::Merge(value)
    }
}

impl Debug for DraftUpdate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge(patch) => f.debug_tuple("Merge").field(patch).finish(),
            Self::Apply(_) => f.write_str("Apply(<fn>)"),
        }
    }
}

/// Field-wise merge applied to a committed entry, keyed by its date.
///
/// Activity lists are reduced to a set on apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub mood: Option<MoodDefinition>,
    pub activities: Option<Vec<String>>,
    pub note: Option<String>,
}

impl EntryPatch {
    pub fn note(note: impl Into<String>) -> Self {
        Self {
            note: Some(note.into()),
            ..Self::default()
        }
    }

    pub fn activities(activities: Vec<String>) -> Self {
        Self {
            activities: Some(activities),
            ..Self::default()
        }
    }

    pub fn apply_to(self, entry: &mut MoodEntry) {
        if let Some(mood) = self.mood {
            entry.mood = mood;
        }
        if let Some(activities) = self.activities {
            entry.activities = dedup_activities(activities);
        }
        if let Some(note) = self.note {
            entry.note = note;
        }
    }
}
