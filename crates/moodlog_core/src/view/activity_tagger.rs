//! Activity tagging of the most recent committed entry.
//!
//! The tagger edits the latest entry in place through `update_entry`; there
//! is no separate edit mode. Without any entry, selections stay local.

use crate::model::activity::toggle_activity;
use crate::model::entry::EntryPatch;
use crate::repo::slot_repo::SlotRepository;
use crate::service::mood_store::MoodStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityTagger {
    selected: Vec<String>,
}

impl ActivityTagger {
    /// Creates a tagger mirroring the latest entry's activities.
    pub fn new<R: SlotRepository>(store: &MoodStore<R>) -> Self {
        let mut tagger = Self::default();
        tagger.sync_from_latest(store);
        tagger
    }

    /// Built-in then custom tags offered as toggles.
    pub fn all_activities<R: SlotRepository>(store: &MoodStore<R>) -> Vec<String> {
        store.activity_tags()
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.iter().any(|selected| selected == label)
    }

    /// Re-reads the selection after the latest entry changed.
    pub fn sync_from_latest<R: SlotRepository>(&mut self, store: &MoodStore<R>) {
        if let Some(latest) = store.latest_entry() {
            self.selected = latest.activities.clone();
        }
    }

    /// Flips `label` and writes the selection to the latest entry.
    pub fn toggle<R: SlotRepository>(&mut self, store: &mut MoodStore<R>, label: &str) {
        self.selected = toggle_activity(&self.selected, label);
        self.write_latest(store);
    }

    /// Adds a custom tag and selects it unless it is already selected.
    ///
    /// Returns `false` when the store rejected the tag (empty or duplicate);
    /// the selection is then left untouched.
    pub fn add_custom<R: SlotRepository>(&mut self, store: &mut MoodStore<R>, label: &str) -> bool {
        if !store.add_activity_tag(label) {
            return false;
        }
        if !self.is_selected(label) {
            self.selected.push(label.to_string());
        }
        self.write_latest(store);
        true
    }

    fn write_latest<R: SlotRepository>(&self, store: &mut MoodStore<R>) {
        let Some(date) = store.latest_entry().map(|entry| entry.date) else {
            return;
        };
        store.update_entry(&date, EntryPatch::activities(self.selected.clone()));
    }
}
