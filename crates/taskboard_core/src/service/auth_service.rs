//! Identity use-case service.
//!
//! # Responsibility
//! - Provide register/login/logout/session-restore entry points.
//! - Own the in-memory session for the running process.
//!
//! # Invariants
//! - `register` and `login` report failure as `Ok(false)`, never as an
//!   error; errors are reserved for storage faults.
//! - The session handed to consumers never carries a password.
//! - Credentials are compared in plaintext against stored records.
//!   Hardening is out of scope: stored credentials must keep working.

use log::info;

use crate::model::user::{PublicUser, Session, User};
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoResult;

/// Identity service facade over a user repository.
pub struct AuthService<R: UserRepository> {
    repo: R,
    session: Option<Session>,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a service with no active session. Call
    /// `restore_session` once at startup to pick up a persisted one.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            session: None,
        }
    }

    /// Registers a new account and signs it in.
    ///
    /// Returns `Ok(false)` when the email is already registered; the
    /// existing record is left unchanged. On success the user list and
    /// the new session are persisted.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> RepoResult<bool> {
        let email = email.into();
        if self.repo.find_by_email(&email).is_some() {
            info!("event=register module=auth status=failed reason=duplicate_email");
            return Ok(false);
        }

        let user = User::new(name, email, password);
        let session = user.to_session();
        self.repo.insert_user(user)?;
        self.repo.save_session(&session)?;
        info!(
            "event=register module=auth status=ok user_id={}",
            session.id
        );
        self.session = Some(session);
        Ok(true)
    }

    /// Signs in with exact-match credentials.
    ///
    /// Returns `Ok(false)` when no stored user matches both email and
    /// password. On success the session is persisted.
    pub fn login(&mut self, email: &str, password: &str) -> RepoResult<bool> {
        let Some(user) = self.repo.find_by_credentials(email, password) else {
            info!("event=login module=auth status=failed reason=bad_credentials");
            return Ok(false);
        };

        let session = user.to_session();
        self.repo.save_session(&session)?;
        info!("event=login module=auth status=ok user_id={}", session.id);
        self.session = Some(session);
        Ok(true)
    }

    /// Clears the session unconditionally, in memory and in storage.
    pub fn logout(&mut self) -> RepoResult<()> {
        self.repo.clear_session()?;
        self.session = None;
        info!("event=logout module=auth status=ok");
        Ok(())
    }

    /// Reinstates a persisted session without credential re-validation
    /// (trust-on-first-load). Absence of a saved session leaves the
    /// session empty; a corrupt saved session is a startup fault.
    pub fn restore_session(&mut self) -> RepoResult<()> {
        self.session = self.repo.load_session()?;
        match &self.session {
            Some(session) => info!(
                "event=session_restore module=auth status=ok user_id={}",
                session.id
            ),
            None => info!("event=session_restore module=auth status=ok user_id=none"),
        }
        Ok(())
    }

    /// The currently authenticated identity, if any.
    pub fn current_user(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// All registered users with passwords stripped, for assignee
    /// pickers and task cards.
    pub fn directory(&self) -> Vec<PublicUser> {
        self.repo.users().iter().map(User::to_public).collect()
    }
}
