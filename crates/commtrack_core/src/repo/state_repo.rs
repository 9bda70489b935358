//! Tracker state repository.
//!
//! # Responsibility
//! - Persist the tracker snapshot and the method catalog under two
//!   independent keys.
//! - Encode values as `{"state": ..., "version": N}` JSON envelopes.
//!
//! # Invariants
//! - Saves replace the whole value for a key (last write wins).
//! - Loads tolerate absent keys and return defaults.

use crate::db::DbError;
use crate::store::entity_store::TrackerSnapshot;
use crate::store::method_catalog::MethodsSnapshot;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_STATE_KEY: &str = "communication-tracker-storage";
pub const DEFAULT_METHODS_KEY: &str = "communication-methods-storage";
const ENVELOPE_VERSION: u32 = 0;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialization(serde_json::Error),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "failed to encode tracker state: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted tracker data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage key names for the two persisted records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub state_key: String,
    pub methods_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            state_key: DEFAULT_STATE_KEY.to_string(),
            methods_key: DEFAULT_METHODS_KEY.to_string(),
        }
    }
}

/// Persistence contract used as the store's side-effect hook.
pub trait StateRepository {
    fn load_tracker_state(&self) -> RepoResult<TrackerSnapshot>;
    fn save_tracker_state(&self, snapshot: &TrackerSnapshot) -> RepoResult<()>;
    fn load_methods(&self) -> RepoResult<MethodsSnapshot>;
    fn save_methods(&self, snapshot: &MethodsSnapshot) -> RepoResult<()>;
}

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    state: T,
    #[serde(default)]
    version: u32,
}

fn encode<T: Serialize>(state: &T) -> RepoResult<String> {
    serde_json::to_string(&Envelope {
        state,
        version: ENVELOPE_VERSION,
    })
    .map_err(RepoError::Serialization)
}

fn decode<T: DeserializeOwned + Default>(key: &str, raw: Option<String>) -> RepoResult<T> {
    let Some(raw) = raw else {
        return Ok(T::default());
    };
    serde_json::from_str::<Envelope<T>>(&raw)
        .map(|envelope| envelope.state)
        .map_err(|err| RepoError::InvalidData(format!("key `{key}`: {err}")))
}

/// SQLite-backed key/value repository.
pub struct SqliteStateRepository<'conn> {
    conn: &'conn Connection,
    keys: StorageKeys,
}

impl<'conn> SqliteStateRepository<'conn> {
    /// Uses the default storage keys on a migrated connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_keys(conn, StorageKeys::default())
    }

    pub fn with_keys(conn: &'conn Connection, keys: StorageKeys) -> Self {
        Self { conn, keys }
    }

    fn read(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}

impl StateRepository for SqliteStateRepository<'_> {
    fn load_tracker_state(&self) -> RepoResult<TrackerSnapshot> {
        decode(&self.keys.state_key, self.read(&self.keys.state_key)?)
    }

    fn save_tracker_state(&self, snapshot: &TrackerSnapshot) -> RepoResult<()> {
        self.write(&self.keys.state_key, &encode(snapshot)?)
    }

    fn load_methods(&self) -> RepoResult<MethodsSnapshot> {
        decode(&self.keys.methods_key, self.read(&self.keys.methods_key)?)
    }

    fn save_methods(&self, snapshot: &MethodsSnapshot) -> RepoResult<()> {
        self.write(&self.keys.methods_key, &encode(snapshot)?)
    }
}

/// Process-local repository holding encoded envelopes in memory.
///
/// Shares the JSON envelope codec with the SQLite implementation.
#[derive(Debug, Default)]
pub struct MemoryStateRepository {
    keys: StorageKeys,
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value for `key`, as written by the last save.
    pub fn raw_value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Seeds a raw value, e.g. to simulate pre-existing or corrupt state.
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.borrow_mut().insert(key.into(), value.into());
    }
}

impl StateRepository for MemoryStateRepository {
    fn load_tracker_state(&self) -> RepoResult<TrackerSnapshot> {
        decode(&self.keys.state_key, self.raw_value(&self.keys.state_key))
    }

    fn save_tracker_state(&self, snapshot: &TrackerSnapshot) -> RepoResult<()> {
        self.insert_raw(self.keys.state_key.clone(), encode(snapshot)?);
        Ok(())
    }

    fn load_methods(&self) -> RepoResult<MethodsSnapshot> {
        decode(&self.keys.methods_key, self.raw_value(&self.keys.methods_key))
    }

    fn save_methods(&self, snapshot: &MethodsSnapshot) -> RepoResult<()> {
        self.insert_raw(self.keys.methods_key.clone(), encode(snapshot)?);
        Ok(())
    }
}
