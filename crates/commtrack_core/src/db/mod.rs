//! Backing store for tracker snapshots.
//!
//! The tracker keeps two JSON records (companies + communications, and the
//! method catalog) in a single `kv_store` table. This module only hands out
//! ready-to-use connections; record encoding lives in `repo::state_repo`.
//!
//! # Invariants
//! - A connection returned by `open_db*` already carries the latest
//!   `kv_store` schema (`PRAGMA user_version` == `migrations::latest_version`).
//! - A database written by a newer binary is refused, never downgraded.
//! - The parent directory of a file database is created on first open.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure to obtain a usable tracker database.
#[derive(Debug)]
pub enum DbError {
    /// The directory meant to hold the database file could not be created.
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    Sqlite(rusqlite::Error),
    /// The file was migrated by a newer `commtrack`.
    UnsupportedSchemaVersion { db_version: u32, latest_supported: u32 },
}

impl DbError {
    /// Short stable tag used in `db_open` log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::CreateDir { .. } => "db_dir_unavailable",
            Self::Sqlite(_) => "db_sqlite_error",
            Self::UnsupportedSchemaVersion { .. } => "db_schema_too_new",
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateDir { path, source } => write!(
                f,
                "cannot create tracker database directory {}: {source}",
                path.display()
            ),
            Self::Sqlite(err) => write!(f, "tracker database error: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "tracker database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
