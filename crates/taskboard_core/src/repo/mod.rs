//! Repository contracts and key-value-backed implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep snapshot (de)serialization details out of service orchestration.
//!
//! # Invariants
//! - Each repository caches its collection in memory, loaded once at
//!   construction; every mutation persists the full collection snapshot
//!   synchronously before returning.
//! - Unknown-id update/delete is a silent no-op (`Ok(false)`), never an
//!   error. Only storage transport and corrupt snapshots are errors.

use crate::db::{DbError, StateStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod project_repo;
pub mod task_repo;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snapshot persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A stored snapshot could not be parsed, or a collection could not
    /// be serialized. Surfaces corrupt storage at load time instead of
    /// masking it.
    Snapshot {
        key: &'static str,
        source: serde_json::Error,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Snapshot { key, source } => {
                write!(f, "invalid snapshot under key `{key}`: {source}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Snapshot { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Loads a collection snapshot from `key`. An absent key is an empty
/// collection; a present but unparsable value is an error.
pub(crate) fn load_collection<T: DeserializeOwned>(
    store: &impl StateStore,
    key: &'static str,
) -> RepoResult<Vec<T>> {
    match store.read(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|source| RepoError::Snapshot { key, source }),
        None => Ok(Vec::new()),
    }
}

/// Serializes `items` and replaces the snapshot under `key`.
pub(crate) fn persist_collection<T: Serialize>(
    store: &impl StateStore,
    key: &'static str,
    items: &[T],
) -> RepoResult<()> {
    let raw =
        serde_json::to_string(items).map_err(|source| RepoError::Snapshot { key, source })?;
    store.write(key, &raw)?;
    Ok(())
}
