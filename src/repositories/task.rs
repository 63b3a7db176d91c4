//! Task repository for database operations.

use anyhow::Result;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::entities::task;

/// Repository for task-related database operations.
pub struct TaskRepository;

impl TaskRepository {
    /// Get all mirrored tasks for a user.
    ///
    /// No ordering is guaranteed by the store; ordering is a view-state
    /// concern.
    pub async fn get_for_user<C>(conn: &C, email: &str) -> Result<Vec<task::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(task::Entity::find()
            .filter(task::Column::Email.eq(email))
            .all(conn)
            .await?)
    }

    /// Get a single task by its reconciliation identity.
    pub async fn get_by_uuid<C>(conn: &C, uuid: &str) -> Result<Option<task::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(task::Entity::find_by_id(uuid).one(conn).await?)
    }

    /// Replace every row belonging to `email` with the given set.
    ///
    /// Must run inside a transaction: readers on other connections observe
    /// either the old set or the new set, never the deleted-but-not-yet-
    /// reinserted state.
    pub async fn replace_for_user<C>(
        conn: &C,
        email: &str,
        tasks: Vec<task::ActiveModel>,
    ) -> Result<()>
    where
        C: ConnectionTrait,
    {
        task::Entity::delete_many()
            .filter(task::Column::Email.eq(email))
            .exec(conn)
            .await?;

        if !tasks.is_empty() {
            task::Entity::insert_many(tasks).exec(conn).await?;
        }

        Ok(())
    }
}
