/// Project entity served by the read endpoint
///
/// Field names double as JSON keys and as column names of the `project` table.

use serde::{Deserialize, Serialize};

/// A project record
///
/// Timestamps are epoch seconds. `id` uniqueness is owned by the backing store
/// (map key or primary key), never checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Opaque unique identifier (e.g., "1")
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Reference to the flow stages attached to this project
    pub flow_stages_id: String,
    /// Creation time in epoch seconds
    pub created_at: u64,
    /// Actor that created the project
    pub created_by: String,
    /// Last update time in epoch seconds
    pub updated_at: u64,
}

impl Project {
    /// Create a project stamped with the current time
    ///
    /// Reference fields start empty; set them with the `with_*` helpers.
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp().max(0) as u64;
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            flow_stages_id: String::new(),
            created_at: now,
            created_by: String::new(),
            updated_at: now,
        }
    }

    pub fn with_flow_stages(mut self, flow_stages_id: impl Into<String>) -> Self {
        self.flow_stages_id = flow_stages_id.into();
        self
    }

    pub fn with_creator(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = created_by.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_project_has_matching_timestamps() {
        let project = Project::new("1", "test", "test");

        assert_eq!(project.id, "1");
        assert_eq!(project.created_at, project.updated_at);
        assert!(project.created_at > 0);
        assert!(project.flow_stages_id.is_empty());
    }

    #[test]
    fn serializes_with_column_names() {
        let project = Project::new("7", "alpha", "first")
            .with_flow_stages("fs-1")
            .with_creator("user-9");

        let value = serde_json::to_value(&project).unwrap();

        assert_eq!(value["id"], "7");
        assert_eq!(value["flow_stages_id"], "fs-1");
        assert_eq!(value["created_by"], "user-9");
        assert!(value["created_at"].is_u64());
        assert!(value["updated_at"].is_u64());
    }
}
