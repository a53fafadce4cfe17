//! Project repository.
//!
//! # Responsibility
//! - Persist projects under the `projects` key in insertion order.
//!
//! # Invariants
//! - The cached collection and the persisted snapshot are updated in
//!   one synchronous step per mutation.
//! - Deleting here removes only the project row; task cascade is
//!   orchestrated by the board service.

use crate::db::kv::keys;
use crate::db::StateStore;
use crate::model::project::{Project, ProjectId, ProjectPatch};
use crate::model::user::UserId;
use crate::repo::{load_collection, persist_collection, RepoResult};

/// Repository interface for project CRUD.
pub trait ProjectRepository {
    /// All projects across all users, in insertion order.
    fn projects(&self) -> &[Project];
    /// Finds one project by id.
    fn get(&self, id: ProjectId) -> Option<&Project>;
    /// Projects owned by `user_id`, in insertion order.
    fn owned_by(&self, user_id: UserId) -> Vec<Project>;
    /// Appends a project and persists the collection.
    fn insert(&mut self, project: Project) -> RepoResult<()>;
    /// Merges patch fields into the matching project. Returns `false`
    /// without persisting when the id is unknown.
    fn update(&mut self, id: ProjectId, patch: &ProjectPatch) -> RepoResult<bool>;
    /// Removes the matching project. Returns `false` without persisting
    /// when the id is unknown.
    fn delete(&mut self, id: ProjectId) -> RepoResult<bool>;
}

/// Key-value-backed project repository with an in-memory cache.
#[derive(Debug)]
pub struct KvProjectRepository<'s, S: StateStore> {
    store: &'s S,
    projects: Vec<Project>,
}

impl<'s, S: StateStore> KvProjectRepository<'s, S> {
    /// Loads the `projects` snapshot into memory.
    pub fn try_new(store: &'s S) -> RepoResult<Self> {
        let projects = load_collection(store, keys::PROJECTS)?;
        Ok(Self { store, projects })
    }

    fn persist(&self) -> RepoResult<()> {
        persist_collection(self.store, keys::PROJECTS, &self.projects)
    }
}

impl<S: StateStore> ProjectRepository for KvProjectRepository<'_, S> {
    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    fn owned_by(&self, user_id: UserId) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|project| project.user_id == user_id)
            .cloned()
            .collect()
    }

    fn insert(&mut self, project: Project) -> RepoResult<()> {
        self.projects.push(project);
        self.persist()
    }

    fn update(&mut self, id: ProjectId, patch: &ProjectPatch) -> RepoResult<bool> {
        let Some(project) = self.projects.iter_mut().find(|project| project.id == id) else {
            return Ok(false);
        };
        patch.apply(project);
        self.persist()?;
        Ok(true)
    }

    fn delete(&mut self, id: ProjectId) -> RepoResult<bool> {
        let before = self.projects.len();
        self.projects.retain(|project| project.id != id);
        if self.projects.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }
}
