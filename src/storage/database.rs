/// SQL-backed project storage
///
/// Reads one row from the `project` table per lookup. The table itself is
/// owned by an external migration tool; columns match [`Project`] field names
/// and both timestamps are BIGINT epoch seconds.

use super::{ProjectRepository, StorageError};
use crate::project::Project;
use async_trait::async_trait;
use sqlx::any::AnyRow;
use sqlx::AnyPool;
use sqlx::Row;

const SELECT_PROJECT: &str = "SELECT * FROM project WHERE id = $1";

/// Project repository over a pooled database connection
#[derive(Debug, Clone)]
pub struct DatabaseProjectRepository {
    pool: AnyPool,
}

impl DatabaseProjectRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}

#[async_trait]
impl ProjectRepository for DatabaseProjectRepository {
    async fn get(&self, id: &str) -> Result<Project, StorageError> {
        let result = sqlx::query(SELECT_PROJECT)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .and_then(|row| project_from_row(&row));

        match result {
            Ok(project) => Ok(project),
            Err(sqlx::Error::RowNotFound) => {
                tracing::debug!("No project row for id {}", id);
                Err(StorageError::NotFound)
            }
            Err(e) => {
                tracing::error!("Failed to load project {}: {}", id, e);
                Err(StorageError::Unknown)
            }
        }
    }
}

fn project_from_row(row: &AnyRow) -> Result<Project, sqlx::Error> {
    Ok(Project {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        flow_stages_id: row.try_get("flow_stages_id")?,
        created_at: epoch_seconds(row, "created_at")?,
        created_by: row.try_get("created_by")?,
        updated_at: epoch_seconds(row, "updated_at")?,
    })
}

fn epoch_seconds(row: &AnyRow, column: &str) -> Result<u64, sqlx::Error> {
    let raw: i64 = row.try_get(column)?;
    u64::try_from(raw).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}
