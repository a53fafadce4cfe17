//! Task record, status enum and partial-update patch.
//!
//! # Invariants
//! - `status` is restricted to the four board columns; any status may
//!   move to any other status.
//! - `project_id` and `assigned_user_id` are weak references.
//! - `due_date` is a `YYYY-MM-DD` string, empty when unset.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::project::ProjectId;
use crate::model::user::UserId;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Board column a task currently sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Not yet picked up.
    Backlog,
    /// Being discussed before work starts.
    Discussion,
    /// Work in progress.
    Progress,
    /// Completed.
    Done,
}

impl TaskStatus {
    /// All statuses in stable board order (left to right).
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Backlog,
        TaskStatus::Discussion,
        TaskStatus::Progress,
        TaskStatus::Done,
    ];

    /// Wire value, as stored in task snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Backlog => "backlog",
            TaskStatus::Discussion => "discussion",
            TaskStatus::Progress => "progress",
            TaskStatus::Done => "done",
        }
    }

    /// Column heading shown on the board.
    pub fn title(self) -> &'static str {
        match self {
            TaskStatus::Backlog => "Backlog",
            TaskStatus::Discussion => "In Discussion",
            TaskStatus::Progress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Parses a wire value back into a status.
    pub fn parse(value: &str) -> Option<TaskStatus> {
        match value {
            "backlog" => Some(TaskStatus::Backlog),
            "discussion" => Some(TaskStatus::Discussion),
            "progress" => Some(TaskStatus::Progress),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Backlog
    }
}

/// Task as persisted under the `tasks` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    /// Board/project the task belongs to. Weak reference.
    pub project_id: ProjectId,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub tags: Vec<String>,
    /// `YYYY-MM-DD`, or empty when no due date was set.
    pub due_date: String,
    /// Assignee. Weak reference.
    pub assigned_user_id: UserId,
    pub created_at: String,
}

/// Caller-supplied fields for creating a task. ID and creation
/// timestamp are generated by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub project_id: ProjectId,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub tags: Vec<String>,
    pub due_date: String,
    pub assigned_user_id: UserId,
}

impl Task {
    /// Materializes a draft into a stored task with a generated ID and
    /// a creation timestamp taken now.
    pub fn from_draft(draft: TaskDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id: draft.project_id,
            name: draft.name,
            description: draft.description,
            status: draft.status,
            tags: draft.tags,
            due_date: draft.due_date,
            assigned_user_id: draft.assigned_user_id,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Partial-field update for a task. `None` fields are left untouched.
///
/// A status-only patch is the drag-and-drop path between board columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub project_id: Option<ProjectId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub tags: Option<Vec<String>>,
    pub due_date: Option<String>,
    pub assigned_user_id: Option<UserId>,
}

impl TaskPatch {
    /// Merges the set fields into `task`, leaving the rest unchanged.
    pub fn apply(&self, task: &mut Task) {
        if let Some(project_id) = self.project_id {
            task.project_id = project_id;
        }
        if let Some(name) = &self.name {
            task.name = name.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(tags) = &self.tags {
            task.tags = tags.clone();
        }
        if let Some(due_date) = &self.due_date {
            task.due_date = due_date.clone();
        }
        if let Some(assigned_user_id) = self.assigned_user_id {
            task.assigned_user_id = assigned_user_id;
        }
    }

    /// Convenience constructor for the drag-and-drop status move.
    pub fn status_only(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
