//! Mood picker interactions: choose a mood, write a note, log it.

use crate::model::entry::DraftUpdate;
use crate::model::mood::MoodDefinition;
use crate::repo::slot_repo::SlotRepository;
use crate::service::mood_store::MoodStore;

/// Transient picker state. The note text mirrors the draft's note so the
/// input box can be cleared after a successful submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodPicker {
    note: String,
}

impl MoodPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moods offered by the picker, built-ins first.
    pub fn moods<R: SlotRepository>(store: &MoodStore<R>) -> Vec<MoodDefinition> {
        store.list_moods()
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Starts a fresh draft for `mood`.
    ///
    /// The note box is cleared along with the draft note, so the box never
    /// shows text the new draft does not carry.
    pub fn select<R: SlotRepository>(&mut self, store: &mut MoodStore<R>, mood: MoodDefinition) {
        self.note.clear();
        store.start_draft(mood);
    }

    /// Whether `mood` is the draft's current mood.
    pub fn is_selected<R: SlotRepository>(store: &MoodStore<R>, mood: &MoodDefinition) -> bool {
        store
            .draft()
            .and_then(|draft| draft.mood.as_ref())
            .is_some_and(|selected| selected == mood)
    }

    /// Updates the note box and the draft note in one step.
    pub fn set_note<R: SlotRepository>(&mut self, store: &mut MoodStore<R>, note: impl Into<String>) {
        self.note = note.into();
        let note = self.note.clone();
        store.update_draft(DraftUpdate::apply(move |draft| draft.with_note(note)));
    }

    /// Logs the draft. Clears the note box only on success.
    pub fn submit<R: SlotRepository>(&mut self, store: &mut MoodStore<R>) -> bool {
        let submitted = store.submit_draft();
        if submitted {
            self.note.clear();
        }
        submitted
    }
}
