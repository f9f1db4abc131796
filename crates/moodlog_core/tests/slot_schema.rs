use moodlog_core::db::{open_db, open_db_in_memory, DbError, SLOT_SCHEMA_VERSION};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_slots_table() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), SLOT_SCHEMA_VERSION);
    assert_table_exists(&conn, "slots");
}

#[test]
fn opening_same_file_twice_keeps_slots() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moodlog.sqlite3");

    let first = open_db(&path).unwrap();
    first
        .execute(
            "INSERT INTO slots (key, value) VALUES ('activities', '[]');",
            [],
        )
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(schema_version(&second), SLOT_SCHEMA_VERSION);
    let count: i64 = second
        .query_row("SELECT COUNT(*) FROM slots;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn slot_file_from_newer_build_is_refused_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 42;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert!(err.to_string().contains("future.sqlite3"));
    match err {
        DbError::SlotSchemaTooNew {
            location,
            found,
            supported,
        } => {
            assert_eq!(location, path.display().to_string());
            assert_eq!(found, 42);
            assert_eq!(supported, SLOT_SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
