//! Connection bootstrap for the slot file.
//!
//! # Invariants
//! - Returned connections carry the current slot schema.
//! - Every open attempt emits one `db_open` start event and one outcome event.

use super::schema::ensure_slot_schema;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const MEMORY_LOCATION: &str = ":memory:";

/// Opens the slot file at `path`, creating it and its table when missing.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    open_with("file", &path.display().to_string(), || Connection::open(path))
}

/// Opens a throwaway in-memory slot database.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_with("memory", MEMORY_LOCATION, Connection::open_in_memory)
}

fn open_with(
    mode: &'static str,
    location: &str,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let outcome = connect()
        .map_err(DbError::from)
        .map_err(|err| ("db_open_failed", err))
        .and_then(|mut conn| match prepare_connection(&mut conn, location) {
            Ok(()) => Ok(conn),
            Err(err) => Err(("db_schema_failed", err)),
        });

    match outcome {
        Ok(conn) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err((code, err)) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code={code} error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

fn prepare_connection(conn: &mut Connection, location: &str) -> DbResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    ensure_slot_schema(conn, location)
}
