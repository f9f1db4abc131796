//! Core domain logic for moodlog.
//! This crate owns the mood-entry store and everything it persists.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use config::StoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::activity::{builtin_activities, toggle_activity, BUILTIN_ACTIVITIES};
pub use model::entry::{DraftPatch, DraftUpdate, EntryDate, EntryPatch, MoodDraft, MoodEntry};
pub use model::mood::{builtin_mood, builtin_moods, MoodDefinition, MoodValidationError};
pub use repo::memory_repo::MemorySlotRepository;
pub use repo::slot_repo::{RepoError, RepoResult, SlotRepository, SqliteSlotRepository};
pub use service::mood_store::{MoodStore, StoreSnapshot};
pub use service::notify::{LogNotifier, Notice, Notifier, RecordingNotifier};
pub use service::persistence::{
    BridgeError, PersistedState, PersistenceBridge, ACTIVITIES_KEY, CUSTOM_MOODS_KEY,
    MOOD_ENTRIES_KEY,
};
pub use view::activity_tagger::ActivityTagger;
pub use view::calendar::{CalendarDay, DaySummary, MoodCalendar};
pub use view::days::{entry_for_day, group_by_day, sorted_days_desc};
pub use view::mood_picker::MoodPicker;
pub use view::recent::{RecentEntries, RecentItem};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
