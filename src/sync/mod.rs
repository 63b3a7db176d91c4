//! Synchronization service module.
//!
//! This module provides the [`SyncService`] struct which reconciles the
//! local mirror with the remote CCSync backend. A sync cycle fetches the
//! authoritative task set, replaces the user's mirror rows inside one
//! transaction, republishes the derived project/tag indexes, records the
//! last-sync timestamp, and clears any transient unsynced markers.
//!
//! The service is the primary data access layer for a consuming UI:
//! - Fast local reads from the mirror
//! - Single-flight full sync against the remote backend
//! - Fire-and-forget per-field edit operations
//! - Per-user persisted preferences (page size, pinned tasks, last sync)

pub mod auto;
pub mod prefs;
pub mod tasks;

pub use auto::AutoSync;
pub use tasks::tag_updates;

use anyhow::Result;
use log::{error, info};
use sea_orm::{ActiveValue, TransactionTrait};
use std::collections::{BTreeSet, HashSet};
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::Mutex;

use crate::backend::{Backend, RemoteTask};
use crate::constants::LAST_SYNC_KEY;
use crate::entities::task;
use crate::repositories::{PreferenceRepository, TaskRepository};
use crate::storage::LocalStorage;
use crate::utils::{datetime, keys};

/// Represents the outcome of a synchronization attempt.
#[derive(Debug, Clone)]
pub enum SyncStatus {
    /// No sync has been attempted yet
    Idle,
    /// A sync cycle was already running; this call was dropped
    InProgress,
    /// The sync cycle completed and the mirror is authoritative
    Success,
    /// The sync cycle failed; the mirror was left untouched
    Error {
        /// Human-readable error message describing what went wrong
        message: String,
    },
}

/// Derived index sets republished after every successful sync.
#[derive(Debug, Clone, Default)]
struct TaskIndexes {
    projects: Vec<String>,
    tags: Vec<String>,
}

/// Service that reconciles the local mirror with the remote backend.
///
/// At most one sync cycle runs at a time per service: a `sync()` call
/// arriving while one is in flight is dropped (it returns
/// [`SyncStatus::InProgress`]), never queued. Edit operations do not take
/// the sync guard and interleave freely with a running cycle; their
/// effects reach the mirror on the next full sync, and the affected uuids
/// carry a transient "unsynced" marker until then.
#[derive(Clone)]
pub struct SyncService {
    backend: Arc<dyn Backend>,
    email: String,
    storage: Arc<Mutex<LocalStorage>>,
    sync_in_progress: Arc<Mutex<bool>>,
    indexes: Arc<StdMutex<TaskIndexes>>,
    unsynced: Arc<StdMutex<HashSet<String>>>,
    last_sync: Arc<StdMutex<Option<i64>>>,
}

impl SyncService {
    /// Creates a new `SyncService` for one user against one backend.
    ///
    /// Warms the last-sync cache and the project/tag indexes from whatever
    /// the mirror already holds, so a consumer has data to render before
    /// the first cycle completes.
    pub async fn new(
        backend: Arc<dyn Backend>,
        storage: Arc<Mutex<LocalStorage>>,
        email: &str,
    ) -> Result<Self> {
        let service = Self {
            backend,
            email: email.to_string(),
            storage,
            sync_in_progress: Arc::new(Mutex::new(false)),
            indexes: Arc::new(StdMutex::new(TaskIndexes::default())),
            unsynced: Arc::new(StdMutex::new(HashSet::new())),
            last_sync: Arc::new(StdMutex::new(None)),
        };

        let persisted_last_sync = {
            let storage = service.storage.lock().await;
            let key = keys::hash_key(LAST_SYNC_KEY, email);
            PreferenceRepository::get(&storage.conn, &key).await?
        };
        if let Some(millis) = persisted_last_sync.and_then(|v| v.parse::<i64>().ok()) {
            if let Ok(mut guard) = service.last_sync.lock() {
                *guard = Some(millis);
            }
        }

        let mirrored = service.get_tasks().await?;
        service.publish_indexes(&mirrored);

        Ok(service)
    }

    /// The user this service syncs for.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Shared handle to the underlying mirror storage.
    pub fn storage_handle(&self) -> Arc<Mutex<LocalStorage>> {
        self.storage.clone()
    }

    /// Checks if a synchronization cycle is currently in progress.
    pub async fn is_syncing(&self) -> bool {
        *self.sync_in_progress.lock().await
    }

    /// Performs a full synchronization with the remote backend.
    ///
    /// Single-flight: if a cycle is already running this returns
    /// [`SyncStatus::InProgress`] without touching the network or the
    /// store. Any fetch or storage failure aborts the cycle with the
    /// mirror, indexes, and last-sync timestamp untouched; there is no
    /// automatic retry.
    pub async fn sync(&self) -> Result<SyncStatus> {
        {
            let mut guard = self.sync_in_progress.lock().await;
            if *guard {
                info!("Sync already in progress, dropping this call");
                return Ok(SyncStatus::InProgress);
            }
            *guard = true;
        }

        let result = self.perform_sync().await;

        {
            let mut guard = self.sync_in_progress.lock().await;
            *guard = false;
        }

        result
    }

    /// Internal sync implementation
    async fn perform_sync(&self) -> Result<SyncStatus> {
        info!("Starting task sync");

        let remote_tasks = match self.backend.fetch_tasks().await {
            Ok(tasks) => {
                info!("Fetched {} tasks from backend", tasks.len());
                tasks
            }
            Err(e) => {
                error!("Failed to fetch tasks: {e}");
                return Ok(SyncStatus::Error {
                    message: format!("Failed to fetch tasks: {e}"),
                });
            }
        };

        let now_millis = datetime::now_millis();
        let refreshed = {
            let storage = self.storage.lock().await;

            if let Err(e) = self.store_tasks(&storage, &remote_tasks, now_millis).await {
                error!("Failed to store tasks: {e}");
                return Ok(SyncStatus::Error {
                    message: format!("Failed to store tasks: {e}"),
                });
            }

            // Re-read the mirror so indexes are derived from what was
            // actually committed.
            TaskRepository::get_for_user(&storage.conn, &self.email).await?
        };

        self.publish_indexes(&refreshed);

        if let Ok(mut guard) = self.last_sync.lock() {
            *guard = Some(now_millis);
        }

        // The mirror is authoritative again; pending-edit markers are
        // stale by definition.
        if let Ok(mut unsynced) = self.unsynced.lock() {
            unsynced.clear();
        }

        info!("Mirror replaced with {} tasks", refreshed.len());
        Ok(SyncStatus::Success)
    }

    /// Replace the user's mirror rows and persist the last-sync timestamp
    /// in one transaction, so a failure leaves both untouched.
    async fn store_tasks(
        &self,
        storage: &LocalStorage,
        tasks: &[RemoteTask],
        now_millis: i64,
    ) -> Result<()> {
        let txn = storage.conn.begin().await?;

        let models = tasks
            .iter()
            .map(|task| Self::to_active_model(&self.email, task))
            .collect();
        TaskRepository::replace_for_user(&txn, &self.email, models).await?;

        let key = keys::hash_key(LAST_SYNC_KEY, &self.email);
        PreferenceRepository::set(&txn, &key, &now_millis.to_string()).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Mirror rows always carry the active user, regardless of what the
    /// backend put in the record's own email field.
    fn to_active_model(email: &str, task: &RemoteTask) -> task::ActiveModel {
        task::ActiveModel {
            uuid: ActiveValue::Set(task.uuid.clone()),
            email: ActiveValue::Set(email.to_string()),
            ordinal: ActiveValue::Set(task.id),
            description: ActiveValue::Set(task.description.clone()),
            project: ActiveValue::Set(task.project.clone()),
            priority: ActiveValue::Set(task.priority.clone()),
            status: ActiveValue::Set(task.status.clone()),
            tags: ActiveValue::Set(encode_list(&task.tags)),
            due: ActiveValue::Set(task.due.clone()),
            start: ActiveValue::Set(task.start.clone()),
            end: ActiveValue::Set(task.end.clone()),
            entry: ActiveValue::Set(task.entry.clone()),
            wait: ActiveValue::Set(task.wait.clone()),
            modified: ActiveValue::Set(task.modified.clone()),
            depends: ActiveValue::Set(encode_list(&task.depends)),
            recur: ActiveValue::Set(task.recur.clone()),
            rtype: ActiveValue::Set(task.rtype.clone()),
            annotations: ActiveValue::Set(
                serde_json::to_string(&task.annotations).unwrap_or_else(|_| "[]".to_string()),
            ),
            urgency: ActiveValue::Set(task.urgency),
        }
    }

    /// Recompute the unique-projects and unique-tags index sets.
    fn publish_indexes(&self, tasks: &[task::Model]) {
        let mut projects = BTreeSet::new();
        let mut tags = BTreeSet::new();

        for task in tasks {
            if let Some(project) = &task.project {
                if !project.is_empty() {
                    projects.insert(project.clone());
                }
            }
            for tag in task.tag_list() {
                if !tag.is_empty() {
                    tags.insert(tag);
                }
            }
        }

        if let Ok(mut indexes) = self.indexes.lock() {
            indexes.projects = projects.into_iter().collect();
            indexes.tags = tags.into_iter().collect();
        }
    }

    /// Unique non-empty project names across the mirrored set, sorted.
    pub fn unique_projects(&self) -> Vec<String> {
        self.indexes
            .lock()
            .map(|ix| ix.projects.clone())
            .unwrap_or_default()
    }

    /// Unique non-empty tags across the mirrored set, sorted.
    pub fn unique_tags(&self) -> Vec<String> {
        self.indexes
            .lock()
            .map(|ix| ix.tags.clone())
            .unwrap_or_default()
    }

    /// Retrieves all mirrored tasks for this user from local storage.
    pub async fn get_tasks(&self) -> Result<Vec<task::Model>> {
        let storage = self.storage.lock().await;
        TaskRepository::get_for_user(&storage.conn, &self.email).await
    }

    /// Get a single task by uuid from local storage (fast)
    pub async fn get_task(&self, uuid: &str) -> Result<Option<task::Model>> {
        let storage = self.storage.lock().await;
        TaskRepository::get_by_uuid(&storage.conn, uuid).await
    }
}

fn encode_list(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}
