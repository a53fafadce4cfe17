//! Core data layer for the taskboard project/task tracker.
//! This crate is the single source of truth for business invariants:
//! referential integrity between users, projects and tasks, cascade
//! deletes, and ownership-based project visibility.

pub mod db;
pub mod forms;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_store, open_store_in_memory, SqliteStateStore, StateStore};
pub use forms::{
    parse_tags, validate_project_form, validate_sign_up_form, validate_task_form, FieldErrors,
    ProjectForm, SignUpForm, TaskForm,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId, ProjectPatch};
pub use model::task::{Task, TaskDraft, TaskId, TaskPatch, TaskStatus};
pub use model::user::{PublicUser, Session, User, UserId};
pub use repo::project_repo::{KvProjectRepository, ProjectRepository};
pub use repo::task_repo::{KvTaskRepository, TaskRepository};
pub use repo::user_repo::{KvUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::auth_service::AuthService;
pub use service::board_service::BoardService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
