//! Project/task board use-case service.
//!
//! # Responsibility
//! - Provide CRUD entry points for projects and tasks.
//! - Orchestrate the project→task cascade delete across repositories.
//! - Apply ownership filtering when listing projects.
//!
//! # Invariants
//! - Unknown-id mutations return `Ok(false)` and leave storage untouched.
//! - Project listings are pre-filtered to the active session's user;
//!   task listings are not filtered by project ownership.
//! - Cascade delete leaves no task referencing the removed project.

use log::info;

use crate::model::project::{Project, ProjectId, ProjectPatch};
use crate::model::task::{Task, TaskDraft, TaskId, TaskPatch, TaskStatus};
use crate::model::user::Session;
use crate::repo::project_repo::ProjectRepository;
use crate::repo::task_repo::TaskRepository;
use crate::repo::RepoResult;

/// Board service facade over the project and task repositories.
pub struct BoardService<P: ProjectRepository, T: TaskRepository> {
    projects: P,
    tasks: T,
}

impl<P: ProjectRepository, T: TaskRepository> BoardService<P, T> {
    /// Creates a service over the provided repository implementations.
    pub fn new(projects: P, tasks: T) -> Self {
        Self { projects, tasks }
    }

    /// Creates a project owned by the active session's user.
    ///
    /// Without an active session this is a no-op returning `Ok(None)`.
    pub fn create_project(
        &mut self,
        session: Option<&Session>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> RepoResult<Option<ProjectId>> {
        let Some(session) = session else {
            info!("event=project_create module=board status=skipped reason=no_session");
            return Ok(None);
        };

        let project = Project::new(name, description, session.id);
        let id = project.id;
        self.projects.insert(project)?;
        info!("event=project_create module=board status=ok project_id={id}");
        Ok(Some(id))
    }

    /// Merges patch fields into the matching project.
    pub fn update_project(&mut self, id: ProjectId, patch: &ProjectPatch) -> RepoResult<bool> {
        let changed = self.projects.update(id, patch)?;
        info!(
            "event=project_update module=board status={} project_id={id}",
            if changed { "ok" } else { "skipped" }
        );
        Ok(changed)
    }

    /// Removes a project and every task referencing it.
    ///
    /// The cascade runs even when the project id itself is unknown, so
    /// tasks left dangling by an earlier fault are still cleaned up.
    pub fn delete_project(&mut self, id: ProjectId) -> RepoResult<bool> {
        let removed = self.projects.delete(id)?;
        let cascaded = self.tasks.delete_by_project(id)?;
        info!(
            "event=project_delete module=board status={} project_id={id} cascaded_tasks={cascaded}",
            if removed { "ok" } else { "skipped" }
        );
        Ok(removed)
    }

    /// Creates a task from caller-supplied fields.
    pub fn create_task(&mut self, draft: TaskDraft) -> RepoResult<TaskId> {
        let task = Task::from_draft(draft);
        let id = task.id;
        let project_id = task.project_id;
        self.tasks.insert(task)?;
        info!("event=task_create module=board status=ok task_id={id} project_id={project_id}");
        Ok(id)
    }

    /// Merges patch fields into the matching task. A status-only patch
    /// is the drag-and-drop move between board columns.
    pub fn update_task(&mut self, id: TaskId, patch: &TaskPatch) -> RepoResult<bool> {
        let changed = self.tasks.update(id, patch)?;
        info!(
            "event=task_update module=board status={} task_id={id}",
            if changed { "ok" } else { "skipped" }
        );
        Ok(changed)
    }

    /// Removes the matching task. Deleting twice is a no-op the second
    /// time.
    pub fn delete_task(&mut self, id: TaskId) -> RepoResult<bool> {
        let removed = self.tasks.delete(id)?;
        info!(
            "event=task_delete module=board status={} task_id={id}",
            if removed { "ok" } else { "skipped" }
        );
        Ok(removed)
    }

    /// Projects owned by the active session's user, in insertion order.
    /// Empty when no session is active.
    pub fn projects(&self, session: Option<&Session>) -> Vec<Project> {
        match session {
            Some(session) => self.projects.owned_by(session.id),
            None => Vec::new(),
        }
    }

    /// Finds one project by id, regardless of owner.
    pub fn project_by_id(&self, id: ProjectId) -> Option<Project> {
        self.projects.get(id).cloned()
    }

    /// Tasks belonging to `project_id`, in insertion order.
    pub fn tasks_by_project(&self, project_id: ProjectId) -> Vec<Task> {
        self.tasks.by_project(project_id)
    }

    /// All tasks across all projects, regardless of the owning
    /// project's user.
    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    /// Tasks grouped into the four board columns in stable column
    /// order, optionally filtered to one project.
    pub fn board(&self, project: Option<ProjectId>) -> Vec<(TaskStatus, Vec<Task>)> {
        TaskStatus::ALL
            .into_iter()
            .map(|status| {
                let column = self
                    .tasks
                    .tasks()
                    .iter()
                    .filter(|task| task.status == status)
                    .filter(|task| project.map_or(true, |id| task.project_id == id))
                    .cloned()
                    .collect();
                (status, column)
            })
            .collect()
    }
}
