use anyhow::{Context, Result};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait,
    Schema,
};
use std::path::Path;

use crate::entities::{preference, task};

/// Connection manager for the local mirror database.
///
/// Holds a single SeaORM connection; all SQL goes through the repository
/// layer, which is generic over [`ConnectionTrait`] so operations compose
/// into transactions.
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open (or create) a mirror database at the given URL.
    pub async fn new(database_url: &str) -> Result<Self> {
        let mut options = ConnectOptions::new(database_url.to_string());
        options.max_connections(4).min_connections(1);
        // Every pooled connection to ":memory:" opens its own empty
        // database; an in-memory mirror must stay on one connection.
        if database_url.contains(":memory:") {
            options.max_connections(1);
        }

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to open mirror database: {database_url}"))?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// In-memory mirror, used by tests and ephemeral sessions.
    pub async fn new_in_memory() -> Result<Self> {
        Self::new("sqlite::memory:").await
    }

    /// Mirror database file at a specific path, created if absent.
    pub async fn open_file(path: &Path) -> Result<Self> {
        Self::new(&format!("sqlite://{}?mode=rwc", path.display())).await
    }

    /// Mirror database under the platform data directory.
    pub async fn open_default() -> Result<Self> {
        let dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
            .join("ccsync");
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        Self::open_file(&dir.join("mirror.sqlite")).await
    }

    /// Create tables from the entity models if they do not exist yet.
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut tasks = schema.create_table_from_entity(task::Entity);
        tasks.if_not_exists();
        self.conn.execute(backend.build(&tasks)).await?;

        let mut preferences = schema.create_table_from_entity(preference::Entity);
        preferences.if_not_exists();
        self.conn.execute(backend.build(&preferences)).await?;

        Ok(())
    }

    /// Check if the mirror holds any task rows.
    pub async fn has_data(&self) -> Result<bool> {
        let count = task::Entity::find().count(&self.conn).await?;
        Ok(count > 0)
    }

    /// Clear all mirrored tasks and preferences.
    pub async fn clear_all_data(&self) -> Result<()> {
        task::Entity::delete_many().exec(&self.conn).await?;
        preference::Entity::delete_many().exec(&self.conn).await?;
        Ok(())
    }
}
