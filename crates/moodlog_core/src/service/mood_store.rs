//! Mood-entry store.
//!
//! # Responsibility
//! - Own committed entries, the draft, custom moods and custom activity tags.
//! - Apply every mutation synchronously and mirror the changed collection to
//!   storage before returning.
//!
//! # Invariants
//! - `date` is unique among committed entries.
//! - Activity tags (builtin ++ custom) never contain duplicates.
//! - Precondition failures are no-ops reported as `false`, never errors.
//! - Persistence failures are logged and do not roll back in-memory state.

use crate::model::activity::{builtin_activities, is_builtin_activity};
use crate::model::entry::{DraftUpdate, EntryDate, EntryPatch, MoodDraft, MoodEntry};
use crate::model::mood::{builtin_moods, MoodDefinition};
use crate::repo::slot_repo::{RepoResult, SlotRepository, SqliteSlotRepository};
use crate::service::notify::{LogNotifier, Notice, Notifier};
use crate::service::persistence::{BridgeResult, PersistenceBridge};
use crate::StoreConfig;
use chrono::Utc;
use log::{debug, error, info, warn};

/// Borrowed, read-only view of the store used by view models.
#[derive(Debug, Clone)]
pub struct StoreSnapshot<'a> {
    pub entries: &'a [MoodEntry],
    pub draft: Option<&'a MoodDraft>,
    pub moods: Vec<MoodDefinition>,
    pub activity_tags: Vec<String>,
}

/// Single-writer store for mood journaling state.
pub struct MoodStore<R: SlotRepository> {
    bridge: PersistenceBridge<R>,
    notifier: Box<dyn Notifier>,
    entries: Vec<MoodEntry>,
    custom_moods: Vec<MoodDefinition>,
    custom_activities: Vec<String>,
    draft: Option<MoodDraft>,
}

impl MoodStore<SqliteSlotRepository> {
    /// Opens the SQLite slot file named by `config` and loads its state.
    pub fn open(config: &StoreConfig) -> RepoResult<Self> {
        let repo = SqliteSlotRepository::open(&config.db_path)?;
        Ok(Self::new(repo))
    }
}

impl<R: SlotRepository> MoodStore<R> {
    /// Creates a store seeded from `repo`, logging notices.
    pub fn new(repo: R) -> Self {
        Self::with_notifier(repo, LogNotifier)
    }

    /// Creates a store seeded from `repo` with a custom notice sink.
    pub fn with_notifier(repo: R, notifier: impl Notifier + 'static) -> Self {
        let bridge = PersistenceBridge::new(repo);
        let state = bridge.load();
        Self {
            bridge,
            notifier: Box::new(notifier),
            entries: state.entries,
            custom_moods: state.custom_moods,
            custom_activities: state.activities,
            draft: None,
        }
    }

    /// Committed entries in submission order.
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// Most recently submitted entry.
    pub fn latest_entry(&self) -> Option<&MoodEntry> {
        self.entries.last()
    }

    pub fn draft(&self) -> Option<&MoodDraft> {
        self.draft.as_ref()
    }

    pub fn custom_moods(&self) -> &[MoodDefinition] {
        &self.custom_moods
    }

    pub fn custom_activity_tags(&self) -> &[String] {
        &self.custom_activities
    }

    /// Built-in tags followed by custom tags.
    pub fn activity_tags(&self) -> Vec<String> {
        let mut tags = builtin_activities();
        tags.extend(self.custom_activities.iter().cloned());
        tags
    }

    /// Built-in moods followed by custom moods, each in insertion order.
    pub fn list_moods(&self) -> Vec<MoodDefinition> {
        let mut moods = builtin_moods();
        moods.extend(self.custom_moods.iter().cloned());
        moods
    }

    pub fn snapshot(&self) -> StoreSnapshot<'_> {
        StoreSnapshot {
            entries: &self.entries,
            draft: self.draft.as_ref(),
            moods: self.list_moods(),
            activity_tags: self.activity_tags(),
        }
    }

    /// Appends a custom mood. Duplicate labels are accepted.
    pub fn add_custom_mood(&mut self, mood: MoodDefinition) {
        self.custom_moods.push(mood);
        info!(
            "event=custom_mood_add module=store status=ok custom_moods={}",
            self.custom_moods.len()
        );
        let result = self.bridge.save_custom_moods(&self.custom_moods);
        log_write("customMoods", result);
    }

    /// Appends a custom activity tag.
    ///
    /// Returns `false` when `label` is empty or already present among built-in
    /// and custom tags (case-sensitive).
    pub fn add_activity_tag(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if label.is_empty()
            || is_builtin_activity(&label)
            || self.custom_activities.contains(&label)
        {
            debug!(
                "event=activity_add module=store status=skipped label_len={}",
                label.len()
            );
            return false;
        }

        self.custom_activities.push(label);
        info!(
            "event=activity_add module=store status=ok custom_activities={}",
            self.custom_activities.len()
        );
        let result = self.bridge.save_activities(&self.custom_activities);
        log_write("activities", result);
        true
    }

    /// Starts a new draft stamped with the current time.
    pub fn start_draft(&mut self, mood: MoodDefinition) {
        self.start_draft_at(mood, Utc::now());
    }

    /// Starts a new draft stamped with `date`, replacing any unsaved draft.
    pub fn start_draft_at(&mut self, mood: MoodDefinition, date: EntryDate) {
        if self.draft.is_some() {
            debug!("event=draft_start module=store status=replaced");
        }
        self.draft = Some(MoodDraft::new(mood, date));
    }

    /// Applies `update` to the current draft.
    ///
    /// Returns `false` without calling the updater when there is no draft.
    pub fn update_draft(&mut self, update: impl Into<DraftUpdate>) -> bool {
        let Some(current) = self.draft.as_mut() else {
            debug!("event=draft_update module=store status=skipped reason=no_draft");
            return false;
        };

        match update.into() {
            DraftUpdate::Merge(patch) => patch.apply_to(current),
            DraftUpdate::Apply(updater) => {
                let next = updater(&*current);
                *current = next;
            }
        }
        true
    }

    /// Clears the draft without committing it.
    pub fn discard_draft(&mut self) -> bool {
        self.draft.take().is_some()
    }

    /// Commits the draft as a new entry.
    ///
    /// Returns `false` and leaves state untouched when there is no draft, the
    /// draft has no mood, or an entry with the same timestamp already exists.
    pub fn submit_draft(&mut self) -> bool {
        let Some(entry) = self.draft.as_ref().and_then(MoodDraft::to_entry) else {
            debug!("event=draft_submit module=store status=skipped reason=no_mood");
            return false;
        };

        if self.find_entry(&entry.date).is_some() {
            warn!(
                "event=draft_submit module=store status=skipped reason=duplicate_date date={}",
                entry.date.to_rfc3339()
            );
            return false;
        }

        info!(
            "event=draft_submit module=store status=ok activities={} has_note={}",
            entry.activities.len(),
            !entry.note.is_empty()
        );
        self.entries.push(entry);
        self.draft = None;
        self.persist_entries();
        self.notifier.notify(Notice::MoodAdded);
        true
    }

    /// Merges `patch` into the committed entry stamped `date`.
    pub fn update_entry(&mut self, date: &EntryDate, patch: EntryPatch) -> bool {
        let Some(index) = self.find_entry(date) else {
            debug!(
                "event=entry_update module=store status=skipped reason=not_found date={}",
                date.to_rfc3339()
            );
            return false;
        };

        patch.apply_to(&mut self.entries[index]);
        self.persist_entries();
        true
    }

    /// Removes the committed entry stamped `date`.
    pub fn remove_entry(&mut self, date: &EntryDate) -> bool {
        let Some(index) = self.find_entry(date) else {
            debug!(
                "event=entry_remove module=store status=skipped reason=not_found date={}",
                date.to_rfc3339()
            );
            return false;
        };

        self.entries.remove(index);
        info!(
            "event=entry_remove module=store status=ok date={}",
            date.to_rfc3339()
        );
        self.persist_entries();
        self.notifier.notify(Notice::EntryRemoved);
        true
    }

    fn find_entry(&self, date: &EntryDate) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.date == date)
    }

    fn persist_entries(&self) {
        let result = self.bridge.save_entries(&self.entries);
        log_write("moodEntries", result);
    }
}

fn log_write(key: &str, result: BridgeResult<()>) {
    if let Err(err) = result {
        error!("event=slot_write module=store status=error key={key} error={err}");
    }
}
