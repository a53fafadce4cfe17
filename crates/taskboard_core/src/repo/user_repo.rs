//! User and session repository.
//!
//! # Responsibility
//! - Persist registered accounts under the `users` key.
//! - Persist the active session under the `currentUser` key.
//!
//! # Invariants
//! - The `users` snapshot keeps plaintext passwords; the `currentUser`
//!   snapshot never contains one.
//! - Users are append-only: no update or delete operations exist.

use crate::db::kv::keys;
use crate::db::StateStore;
use crate::model::user::{Session, User};
use crate::repo::{load_collection, persist_collection, RepoError, RepoResult};

/// Repository interface for account and session persistence.
pub trait UserRepository {
    /// All registered users in registration order.
    fn users(&self) -> &[User];
    /// Finds a user by exact email match.
    fn find_by_email(&self, email: &str) -> Option<&User>;
    /// Finds a user matching both email and password exactly.
    fn find_by_credentials(&self, email: &str, password: &str) -> Option<&User>;
    /// Appends a user and persists the full user list.
    fn insert_user(&mut self, user: User) -> RepoResult<()>;
    /// Reads the persisted session, if any.
    fn load_session(&self) -> RepoResult<Option<Session>>;
    /// Persists the session, replacing any previous one.
    fn save_session(&self, session: &Session) -> RepoResult<()>;
    /// Removes the persisted session. No-op when absent.
    fn clear_session(&self) -> RepoResult<()>;
}

/// Key-value-backed user repository with an in-memory cache.
pub struct KvUserRepository<'s, S: StateStore> {
    store: &'s S,
    users: Vec<User>,
}

impl<'s, S: StateStore> KvUserRepository<'s, S> {
    /// Loads the `users` snapshot into memory.
    ///
    /// # Errors
    /// - Corrupt snapshot content fails construction instead of being
    ///   silently replaced.
    pub fn try_new(store: &'s S) -> RepoResult<Self> {
        let users = load_collection(store, keys::USERS)?;
        Ok(Self { store, users })
    }
}

impl<S: StateStore> UserRepository for KvUserRepository<'_, S> {
    fn users(&self) -> &[User] {
        &self.users
    }

    fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    fn find_by_credentials(&self, email: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|user| user.email == email && user.password == password)
    }

    fn insert_user(&mut self, user: User) -> RepoResult<()> {
        self.users.push(user);
        persist_collection(self.store, keys::USERS, &self.users)
    }

    fn load_session(&self) -> RepoResult<Option<Session>> {
        match self.store.read(keys::CURRENT_USER)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| RepoError::Snapshot {
                    key: keys::CURRENT_USER,
                    source,
                }),
            None => Ok(None),
        }
    }

    fn save_session(&self, session: &Session) -> RepoResult<()> {
        let raw = serde_json::to_string(session).map_err(|source| RepoError::Snapshot {
            key: keys::CURRENT_USER,
            source,
        })?;
        self.store.write(keys::CURRENT_USER, &raw)?;
        Ok(())
    }

    fn clear_session(&self) -> RepoResult<()> {
        self.store.remove(keys::CURRENT_USER)?;
        Ok(())
    }
}
