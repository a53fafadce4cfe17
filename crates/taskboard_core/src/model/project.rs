//! Project record and partial-update patch.
//!
//! # Invariants
//! - `user_id` is a weak reference: it relates the project to its owner
//!   for visibility filtering, but nothing prevents a dangling value.
//! - `created_at` is an RFC 3339 timestamp fixed at creation.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::user::UserId;

/// Stable identifier for a project.
pub type ProjectId = Uuid;

/// Project as persisted under the `projects` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    /// Owning user. Visibility filtering only, never enforced.
    pub user_id: UserId,
    pub created_at: String,
}

impl Project {
    /// Creates a project owned by `user_id` with a generated ID and a
    /// creation timestamp taken now.
    pub fn new(name: impl Into<String>, description: impl Into<String>, user_id: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            user_id,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Partial-field update for a project. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ProjectPatch {
    /// Merges the set fields into `project`, leaving the rest unchanged.
    pub fn apply(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.name = name.clone();
        }
        if let Some(description) = &self.description {
            project.description = description.clone();
        }
    }
}
