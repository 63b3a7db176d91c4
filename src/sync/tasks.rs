//! Fire-and-forget task mutations.
//!
//! Each operation validates its input, calls the remote backend, and marks
//! the affected uuid "unsynced". None of them write the mirror: per-field
//! edits become locally visible on the next full sync, and none of them
//! take the sync guard, so they interleave freely with a running cycle.

use anyhow::Result;
use log::info;

use super::SyncService;
use crate::backend::{AddTaskArgs, EditTaskArgs, ModifyTaskArgs};
use crate::utils::datetime;

impl SyncService {
    /// Submit a new task to the backend.
    ///
    /// The task is created remotely only; it materializes in the mirror
    /// on the next sync cycle.
    pub async fn add_task(&self, args: AddTaskArgs) -> Result<()> {
        validate_date("due", args.due.as_deref())?;
        validate_date("start", args.start.as_deref())?;
        validate_date("entry", args.entry.as_deref())?;
        validate_date("wait", args.wait.as_deref())?;
        validate_date("end", args.end.as_deref())?;

        self.backend
            .add_task(args)
            .await
            .map_err(|e| anyhow::anyhow!("Backend error: {}", e))?;

        info!("Task submitted; mirror updates on next sync");
        Ok(())
    }

    /// Edit a task's full record (description, tags, project, dates,
    /// depends, recur, annotations).
    pub async fn edit_task(&self, task_uuid: &str, args: EditTaskArgs) -> Result<()> {
        validate_uuid(task_uuid)?;
        validate_date("due", args.due.as_deref())?;
        validate_date("start", args.start.as_deref())?;
        validate_date("entry", args.entry.as_deref())?;
        validate_date("wait", args.wait.as_deref())?;
        validate_date("end", args.end.as_deref())?;

        self.backend
            .edit_task(task_uuid, args)
            .await
            .map_err(|e| anyhow::anyhow!("Backend error: {}", e))?;

        self.mark_unsynced(task_uuid);
        Ok(())
    }

    /// Modify a task's field group (description, project, priority,
    /// status, due, tags).
    pub async fn modify_task(&self, task_uuid: &str, args: ModifyTaskArgs) -> Result<()> {
        validate_uuid(task_uuid)?;
        validate_date("due", args.due.as_deref())?;

        self.backend
            .modify_task(task_uuid, args)
            .await
            .map_err(|e| anyhow::anyhow!("Backend error: {}", e))?;

        self.mark_unsynced(task_uuid);
        Ok(())
    }

    /// Mark a task completed on the backend.
    pub async fn complete_task(&self, task_uuid: &str) -> Result<()> {
        validate_uuid(task_uuid)?;
        self.backend
            .complete_task(task_uuid)
            .await
            .map_err(|e| anyhow::anyhow!("Backend error: {}", e))?;

        self.mark_unsynced(task_uuid);
        Ok(())
    }

    /// Mark a task deleted on the backend.
    pub async fn delete_task(&self, task_uuid: &str) -> Result<()> {
        validate_uuid(task_uuid)?;
        self.backend
            .delete_task(task_uuid)
            .await
            .map_err(|e| anyhow::anyhow!("Backend error: {}", e))?;

        self.mark_unsynced(task_uuid);
        Ok(())
    }

    /// Mark several tasks completed in one backend call.
    pub async fn complete_tasks(&self, task_uuids: &[String]) -> Result<()> {
        for uuid in task_uuids {
            validate_uuid(uuid)?;
        }
        self.backend
            .complete_tasks(task_uuids)
            .await
            .map_err(|e| anyhow::anyhow!("Backend error: {}", e))?;

        for uuid in task_uuids {
            self.mark_unsynced(uuid);
        }
        Ok(())
    }

    /// Mark several tasks deleted in one backend call.
    pub async fn delete_tasks(&self, task_uuids: &[String]) -> Result<()> {
        for uuid in task_uuids {
            validate_uuid(uuid)?;
        }
        self.backend
            .delete_tasks(task_uuids)
            .await
            .map_err(|e| anyhow::anyhow!("Backend error: {}", e))?;

        for uuid in task_uuids {
            self.mark_unsynced(uuid);
        }
        Ok(())
    }

    /// Flag a uuid as having a local edit not yet confirmed by a sync.
    /// Transient: held in memory only, cleared by the next successful
    /// cycle.
    pub fn mark_unsynced(&self, task_uuid: &str) {
        if let Ok(mut unsynced) = self.unsynced.lock() {
            unsynced.insert(task_uuid.to_string());
        }
    }

    /// Whether a uuid carries an unconfirmed local edit.
    pub fn is_unsynced(&self, task_uuid: &str) -> bool {
        self.unsynced
            .lock()
            .map(|set| set.contains(task_uuid))
            .unwrap_or(false)
    }

    /// Snapshot of all uuids with unconfirmed local edits.
    pub fn unsynced_tasks(&self) -> Vec<String> {
        self.unsynced
            .lock()
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Encode a tag edit for the backend: kept tags verbatim, removed tags as
/// `-name` entries.
pub fn tag_updates(current: &[String], edited: &[String]) -> Vec<String> {
    let mut updates: Vec<String> = edited
        .iter()
        .filter(|tag| !tag.trim().is_empty())
        .cloned()
        .collect();

    updates.extend(
        current
            .iter()
            .filter(|tag| !edited.contains(tag))
            .map(|tag| format!("-{tag}")),
    );

    updates
}

/// Dates are validated at the edit boundary; malformed input is rejected
/// locally and never sent to the backend.
fn validate_date(field: &str, value: Option<&str>) -> Result<()> {
    if let Some(value) = value {
        if !value.is_empty() && !datetime::is_valid_iso_date(value) {
            anyhow::bail!("Invalid {field} date '{value}'. Please use the YYYY-MM-DD format.");
        }
    }
    Ok(())
}

fn validate_uuid(value: &str) -> Result<()> {
    uuid::Uuid::parse_str(value)
        .map(|_| ())
        .map_err(|_| anyhow::anyhow!("Invalid task uuid: {value}"))
}
