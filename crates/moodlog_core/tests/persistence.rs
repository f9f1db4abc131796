use chrono::{TimeZone, Utc};
use moodlog_core::{
    builtin_mood, DraftPatch, EntryPatch, MemorySlotRepository, MoodDefinition, MoodEntry,
    MoodStore, RepoError, RepoResult, SlotRepository, SqliteSlotRepository, StoreConfig,
    ACTIVITIES_KEY, CUSTOM_MOODS_KEY, MOOD_ENTRIES_KEY,
};

struct ReadOnlyRepository;

impl SlotRepository for ReadOnlyRepository {
    fn read_slot(&self, _key: &str) -> RepoResult<Option<String>> {
        Ok(None)
    }

    fn write_slot(&self, key: &str, _value: &str) -> RepoResult<()> {
        Err(RepoError::InvalidKey(key.to_string()))
    }
}

#[test]
fn entries_round_trip_through_json() {
    let entries = vec![
        MoodEntry {
            date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            mood: builtin_mood("Sad").unwrap(),
            activities: vec!["Work".to_string(), "Reading".to_string()],
            note: "rough day".to_string(),
        },
        MoodEntry {
            date: Utc::now(),
            mood: MoodDefinition::new("Tired", "😴", "#777").unwrap(),
            activities: Vec::new(),
            note: String::new(),
        },
    ];

    let text = serde_json::to_string(&entries).unwrap();
    let decoded: Vec<MoodEntry> = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, entries);
}

#[test]
fn every_mutation_writes_its_slot() {
    let repo = MemorySlotRepository::new();
    let mut store = MoodStore::new(repo.clone());
    assert!(repo.is_empty());

    store.add_activity_tag("Yoga");
    assert_eq!(
        repo.read_slot(ACTIVITIES_KEY).unwrap().as_deref(),
        Some(r#"["Yoga"]"#)
    );

    store.add_custom_mood(MoodDefinition::new("Tired", "😴", "#777777").unwrap());
    assert!(repo
        .read_slot(CUSTOM_MOODS_KEY)
        .unwrap()
        .unwrap()
        .contains("Tired"));

    store.start_draft(builtin_mood("Happy").unwrap());
    store.update_draft(DraftPatch::note("draft only"));
    assert!(repo.read_slot(MOOD_ENTRIES_KEY).unwrap().is_none());

    store.submit_draft();
    let raw = repo.read_slot(MOOD_ENTRIES_KEY).unwrap().unwrap();
    let persisted: Vec<MoodEntry> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, store.entries());
}

#[test]
fn rejected_tag_does_not_rewrite_slot() {
    let repo = MemorySlotRepository::new();
    let mut store = MoodStore::new(repo.clone());
    store.add_activity_tag("Work");
    assert!(repo.read_slot(ACTIVITIES_KEY).unwrap().is_none());
}

#[test]
fn store_reloads_state_from_sqlite_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        db_path: dir.path().join("moodlog.sqlite3"),
        ..StoreConfig::default()
    };
    let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    {
        let mut store = MoodStore::open(&config).unwrap();
        store.add_activity_tag("Yoga");
        store.add_custom_mood(MoodDefinition::new("Tired", "😴", "#777777").unwrap());
        store.start_draft_at(builtin_mood("Sad").unwrap(), date);
        store.submit_draft();
        store.update_entry(&date, EntryPatch::note("rough day"));
    }

    let reopened = MoodStore::open(&config).unwrap();
    assert_eq!(reopened.entries().len(), 1);
    assert_eq!(reopened.entries()[0].note, "rough day");
    assert_eq!(reopened.custom_activity_tags(), &["Yoga".to_string()]);
    assert_eq!(reopened.custom_moods()[0].label, "Tired");
    assert!(reopened.draft().is_none());
}

#[test]
fn malformed_sqlite_slot_loads_as_empty() {
    let repo = SqliteSlotRepository::open_in_memory().unwrap();
    repo.write_slot(MOOD_ENTRIES_KEY, "[{\"date\": 12}]").unwrap();
    repo.write_slot(ACTIVITIES_KEY, r#"["Yoga","Baking"]"#).unwrap();

    let store = MoodStore::new(repo);
    assert!(store.entries().is_empty());
    assert_eq!(store.custom_activity_tags().len(), 2);
}

#[test]
fn browser_exported_slots_are_readable() {
    let repo = MemorySlotRepository::with_slots([(
        MOOD_ENTRIES_KEY,
        r##"[{"mood":{"label":"Happy","emoji":"😄","color":"#FFD700"},"date":"2024-09-14T18:22:05.512Z","activities":["Gaming"],"note":""}]"##,
    )]);
    let store = MoodStore::new(repo);
    assert_eq!(store.entries().len(), 1);
    assert_eq!(store.entries()[0].activities, vec!["Gaming".to_string()]);
}

#[test]
fn write_failures_keep_in_memory_state() {
    let mut store = MoodStore::new(ReadOnlyRepository);
    assert!(store.add_activity_tag("Yoga"));
    store.start_draft(builtin_mood("Calm").unwrap());
    assert!(store.submit_draft());

    assert_eq!(store.entries().len(), 1);
    assert_eq!(store.custom_activity_tags(), &["Yoga".to_string()]);
}
