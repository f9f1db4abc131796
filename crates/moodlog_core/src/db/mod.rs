//! SQLite bootstrap for the key-value slot file.
//!
//! The slot file holds a single `slots` table; its layout version lives in
//! `PRAGMA user_version` and a file written by a newer build is refused.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
mod schema;

pub use open::{open_db, open_db_in_memory};
pub use schema::SLOT_SCHEMA_VERSION;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The slot file at `location` was written by a newer schema.
    SlotSchemaTooNew {
        location: String,
        found: u32,
        supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "slot storage error: {err}"),
            Self::SlotSchemaTooNew {
                location,
                found,
                supported,
            } => write!(
                f,
                "refusing slot file `{location}`: schema version {found}, this build reads up to {supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SlotSchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
