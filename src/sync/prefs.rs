//! Per-user persisted preferences.
//!
//! Values live in the mirror database under hashed keys (see
//! [`crate::utils::keys`]): last-sync timestamp, tasks-per-page, and the
//! pinned-task uuid set.

use anyhow::Result;
use std::collections::HashSet;

use super::SyncService;
use crate::constants::{DEFAULT_TASKS_PER_PAGE, PINNED_TASKS_KEY, TASKS_PER_PAGE_KEY};
use crate::repositories::PreferenceRepository;
use crate::utils::{datetime, keys};

impl SyncService {
    /// The user's preferred page size, falling back to the default.
    pub async fn tasks_per_page(&self) -> Result<usize> {
        let storage = self.storage.lock().await;
        let key = keys::hash_key(TASKS_PER_PAGE_KEY, &self.email);
        Ok(PreferenceRepository::get(&storage.conn, &key)
            .await?
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TASKS_PER_PAGE))
    }

    /// Persist the user's preferred page size.
    pub async fn set_tasks_per_page(&self, tasks_per_page: usize) -> Result<()> {
        if tasks_per_page == 0 {
            anyhow::bail!("tasks_per_page must be at least 1");
        }
        let storage = self.storage.lock().await;
        let key = keys::hash_key(TASKS_PER_PAGE_KEY, &self.email);
        PreferenceRepository::set(&storage.conn, &key, &tasks_per_page.to_string()).await
    }

    /// The user's pinned task uuids.
    pub async fn pinned_tasks(&self) -> Result<HashSet<String>> {
        let storage = self.storage.lock().await;
        let key = keys::hash_key(PINNED_TASKS_KEY, &self.email);
        let stored = PreferenceRepository::get(&storage.conn, &key).await?;
        Ok(stored
            .and_then(|v| serde_json::from_str::<Vec<String>>(&v).ok())
            .map(|uuids| uuids.into_iter().collect())
            .unwrap_or_default())
    }

    pub async fn is_task_pinned(&self, task_uuid: &str) -> Result<bool> {
        Ok(self.pinned_tasks().await?.contains(task_uuid))
    }

    /// Toggle a task's pinned state, returning the new state.
    pub async fn toggle_pinned_task(&self, task_uuid: &str) -> Result<bool> {
        let mut pinned = self.pinned_tasks().await?;
        let now_pinned = if pinned.remove(task_uuid) {
            false
        } else {
            pinned.insert(task_uuid.to_string());
            true
        };

        let mut uuids: Vec<String> = pinned.into_iter().collect();
        uuids.sort();

        let storage = self.storage.lock().await;
        let key = keys::hash_key(PINNED_TASKS_KEY, &self.email);
        PreferenceRepository::set(&storage.conn, &key, &serde_json::to_string(&uuids)?).await?;

        Ok(now_pinned)
    }

    /// Wall-clock time of the last successful sync, in epoch millis.
    pub fn last_sync_millis(&self) -> Option<i64> {
        self.last_sync.lock().ok().and_then(|guard| *guard)
    }

    /// Human-readable elapsed time since the last successful sync.
    pub fn time_since_last_sync(&self) -> String {
        datetime::format_time_since(self.last_sync_millis(), datetime::now_millis())
    }
}
