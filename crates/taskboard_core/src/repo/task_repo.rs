//! Task repository.
//!
//! # Responsibility
//! - Persist tasks under the `tasks` key in insertion order.
//!
//! # Invariants
//! - `delete_by_project` persists at most once, even when it removes
//!   several tasks.
//! - Tasks are not filtered by the owning project's user here or
//!   anywhere else; project-level visibility applies to projects only.

use crate::db::kv::keys;
use crate::db::StateStore;
use crate::model::project::ProjectId;
use crate::model::task::{Task, TaskId, TaskPatch};
use crate::repo::{load_collection, persist_collection, RepoResult};

/// Repository interface for task CRUD.
pub trait TaskRepository {
    /// All tasks across all projects, in insertion order.
    fn tasks(&self) -> &[Task];
    /// Tasks belonging to `project_id`, in insertion order.
    fn by_project(&self, project_id: ProjectId) -> Vec<Task>;
    /// Appends a task and persists the collection.
    fn insert(&mut self, task: Task) -> RepoResult<()>;
    /// Merges patch fields into the matching task. Returns `false`
    /// without persisting when the id is unknown.
    fn update(&mut self, id: TaskId, patch: &TaskPatch) -> RepoResult<bool>;
    /// Removes the matching task. Returns `false` without persisting
    /// when the id is unknown.
    fn delete(&mut self, id: TaskId) -> RepoResult<bool>;
    /// Removes every task referencing `project_id` and returns how many
    /// were removed. Persists only when something was removed.
    fn delete_by_project(&mut self, project_id: ProjectId) -> RepoResult<usize>;
}

/// Key-value-backed task repository with an in-memory cache.
pub struct KvTaskRepository<'s, S: StateStore> {
    store: &'s S,
    tasks: Vec<Task>,
}

impl<'s, S: StateStore> KvTaskRepository<'s, S> {
    /// Loads the `tasks` snapshot into memory.
    pub fn try_new(store: &'s S) -> RepoResult<Self> {
        let tasks = load_collection(store, keys::TASKS)?;
        Ok(Self { store, tasks })
    }

    fn persist(&self) -> RepoResult<()> {
        persist_collection(self.store, keys::TASKS, &self.tasks)
    }
}

impl<S: StateStore> TaskRepository for KvTaskRepository<'_, S> {
    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn by_project(&self, project_id: ProjectId) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.project_id == project_id)
            .cloned()
            .collect()
    }

    fn insert(&mut self, task: Task) -> RepoResult<()> {
        self.tasks.push(task);
        self.persist()
    }

    fn update(&mut self, id: TaskId, patch: &TaskPatch) -> RepoResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        patch.apply(task);
        self.persist()?;
        Ok(true)
    }

    fn delete(&mut self, id: TaskId) -> RepoResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn delete_by_project(&mut self, project_id: ProjectId) -> RepoResult<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.project_id != project_id);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.persist()?;
        }
        Ok(removed)
    }
}
