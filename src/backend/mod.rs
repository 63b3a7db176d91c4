//! Backend abstraction layer.
//!
//! This module defines the interface the sync engine uses to talk to a
//! remote task service, along with the wire-level task representation and
//! common error handling. The production implementation is
//! [`ccsync::CcsyncBackend`]; tests substitute their own.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod ccsync;

pub use ccsync::CcsyncBackend;

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend rejected request: {0}")]
    Api(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Credential triple identifying and authorizing a user's task namespace.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    #[serde(rename = "encryptionSecret")]
    pub encryption_secret: String,
    #[serde(rename = "UUID")]
    pub uuid: String,
}

/// A task annotation: a timestamped free-text note.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub entry: String,
    pub description: String,
}

/// Task record as the backend serves it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteTask {
    pub id: i64,
    pub uuid: String,
    pub description: String,
    pub project: Option<String>,
    pub priority: Option<String>,
    pub status: String,
    pub tags: Vec<String>,
    pub due: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub entry: Option<String>,
    pub wait: Option<String>,
    pub modified: Option<String>,
    pub depends: Vec<String>,
    pub recur: Option<String>,
    pub rtype: Option<String>,
    pub annotations: Vec<Annotation>,
    pub urgency: f64,
    pub email: String,
}

/// Arguments for creating a new task.
#[derive(Clone, Debug, Default)]
pub struct AddTaskArgs {
    pub description: String,
    pub project: Option<String>,
    pub priority: Option<String>,
    pub due: Option<String>,
    pub start: Option<String>,
    pub entry: Option<String>,
    pub wait: Option<String>,
    pub end: Option<String>,
    pub recur: Option<String>,
    pub tags: Vec<String>,
    pub depends: Vec<String>,
    pub annotations: Vec<Annotation>,
}

/// Arguments for the full-record edit operation.
///
/// Tag removal is encoded in `tags` as `-name` entries alongside the kept
/// set; [`crate::sync::tag_updates`] builds that encoding.
#[derive(Clone, Debug, Default)]
pub struct EditTaskArgs {
    pub description: String,
    pub tags: Vec<String>,
    pub project: Option<String>,
    pub start: Option<String>,
    pub entry: Option<String>,
    pub wait: Option<String>,
    pub end: Option<String>,
    pub due: Option<String>,
    pub recur: Option<String>,
    pub depends: Vec<String>,
    pub annotations: Vec<Annotation>,
}

/// Arguments for the field-group modify operation.
#[derive(Clone, Debug, Default)]
pub struct ModifyTaskArgs {
    pub description: String,
    pub project: Option<String>,
    pub priority: Option<String>,
    pub status: String,
    pub due: Option<String>,
    pub tags: Vec<String>,
}

/// Remote task service the sync engine reconciles against.
///
/// All mutation calls are fire-and-forget from the mirror's point of view:
/// their effects become visible locally on the next full sync.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetch the authoritative task set for the credentialed user.
    async fn fetch_tasks(&self) -> Result<Vec<RemoteTask>, BackendError>;

    async fn add_task(&self, args: AddTaskArgs) -> Result<(), BackendError>;
    async fn edit_task(&self, task_uuid: &str, args: EditTaskArgs) -> Result<(), BackendError>;
    async fn modify_task(&self, task_uuid: &str, args: ModifyTaskArgs)
        -> Result<(), BackendError>;
    async fn complete_task(&self, task_uuid: &str) -> Result<(), BackendError>;
    async fn delete_task(&self, task_uuid: &str) -> Result<(), BackendError>;
    async fn complete_tasks(&self, task_uuids: &[String]) -> Result<(), BackendError>;
    async fn delete_tasks(&self, task_uuids: &[String]) -> Result<(), BackendError>;
}
