//! Slot table layout and version check.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// Layout version written to `PRAGMA user_version`.
pub const SLOT_SCHEMA_VERSION: u32 = 1;

const SLOTS_V1_SQL: &str = include_str!("sql/slots_v1.sql");

/// Creates the `slots` table on a fresh file and rejects newer layouts.
///
/// `location` names the file (or `:memory:`) in errors and log events.
pub(super) fn ensure_slot_schema(conn: &mut Connection, location: &str) -> DbResult<()> {
    let found = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;

    if found > SLOT_SCHEMA_VERSION {
        return Err(DbError::SlotSchemaTooNew {
            location: location.to_string(),
            found,
            supported: SLOT_SCHEMA_VERSION,
        });
    }
    if found == SLOT_SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(SLOTS_V1_SQL)?;
    tx.pragma_update(None, "user_version", SLOT_SCHEMA_VERSION)?;
    tx.commit()?;
    info!(
        "event=slot_schema module=db status=created from_version={found} to_version={SLOT_SCHEMA_VERSION}"
    );
    Ok(())
}
