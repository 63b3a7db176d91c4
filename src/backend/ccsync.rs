//! CCSync backend implementation
//!
//! HTTP client for the CCSync task service. The fetch endpoint identifies
//! the user through credential headers; every mutation endpoint is a JSON
//! POST carrying the credential triple plus the changed fields and a
//! `taskuuid`/`taskuuids` selector.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;

use super::{
    AddTaskArgs, Annotation, Backend, BackendError, Credentials, EditTaskArgs, ModifyTaskArgs,
    RemoteTask,
};

/// HTTP client for a CCSync task backend.
pub struct CcsyncBackend {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

#[derive(Serialize)]
struct AddTaskRequest {
    #[serde(flatten)]
    credentials: Credentials,
    description: String,
    project: String,
    priority: String,
    entry: String,
    wait: String,
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    due: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recur: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    depends: Vec<String>,
    annotations: Vec<Annotation>,
}

#[derive(Serialize)]
struct EditTaskRequest {
    #[serde(flatten)]
    credentials: Credentials,
    #[serde(rename = "taskUUID")]
    task_uuid: String,
    description: String,
    tags: Vec<String>,
    project: String,
    start: String,
    entry: String,
    wait: String,
    end: String,
    depends: Vec<String>,
    due: String,
    recur: String,
    annotations: Vec<Annotation>,
}

#[derive(Serialize)]
struct ModifyTaskRequest {
    #[serde(flatten)]
    credentials: Credentials,
    taskuuid: String,
    description: String,
    project: String,
    priority: String,
    status: String,
    due: String,
    tags: Vec<String>,
}

#[derive(Serialize)]
struct SelectTaskRequest {
    #[serde(flatten)]
    credentials: Credentials,
    taskuuid: String,
}

#[derive(Serialize)]
struct SelectTasksRequest {
    #[serde(flatten)]
    credentials: Credentials,
    taskuuids: Vec<String>,
}

impl CcsyncBackend {
    pub fn new(base_url: &str, credentials: Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Map a non-success response to the error taxonomy, surfacing the
    /// response body as the message.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            status.to_string()
        } else {
            body
        };
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(BackendError::Auth(message)),
            _ => Err(BackendError::Api(message)),
        }
    }

    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<(), BackendError> {
        let response = self
            .http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        Self::check_status(response).await?;
        Ok(())
    }
}

#[async_trait]
impl Backend for CcsyncBackend {
    async fn fetch_tasks(&self) -> Result<Vec<RemoteTask>, BackendError> {
        let response = self
            .http
            .get(self.endpoint("tasks"))
            .header("Content-Type", "application/json")
            .header("X-User-Email", &self.credentials.email)
            .header("X-Encryption-Secret", &self.credentials.encryption_secret)
            .header("X-User-UUID", &self.credentials.uuid)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let response = Self::check_status(response).await?;
        response
            .json::<Vec<RemoteTask>>()
            .await
            .map_err(|e| BackendError::InvalidData(e.to_string()))
    }

    async fn add_task(&self, args: AddTaskArgs) -> Result<(), BackendError> {
        // Annotations without a description carry no information; drop
        // them before sending.
        let annotations = args
            .annotations
            .into_iter()
            .filter(|a| !a.description.trim().is_empty())
            .collect();

        let request = AddTaskRequest {
            credentials: self.credentials.clone(),
            description: args.description,
            project: args.project.unwrap_or_default(),
            priority: args.priority.unwrap_or_default(),
            entry: args.entry.unwrap_or_default(),
            wait: args.wait.unwrap_or_default(),
            tags: args.tags,
            due: args.due.filter(|d| !d.is_empty()),
            start: args.start.filter(|s| !s.is_empty()),
            end: args.end.filter(|e| !e.is_empty()),
            recur: args.recur.filter(|r| !r.is_empty()),
            depends: args.depends,
            annotations,
        };
        self.post("add-task", &request).await
    }

    async fn edit_task(&self, task_uuid: &str, args: EditTaskArgs) -> Result<(), BackendError> {
        let request = EditTaskRequest {
            credentials: self.credentials.clone(),
            task_uuid: task_uuid.to_string(),
            description: args.description,
            tags: args.tags,
            project: args.project.unwrap_or_default(),
            start: args.start.unwrap_or_default(),
            entry: args.entry.unwrap_or_default(),
            wait: args.wait.unwrap_or_default(),
            end: args.end.unwrap_or_default(),
            depends: args.depends,
            due: args.due.unwrap_or_default(),
            recur: args.recur.unwrap_or_default(),
            annotations: args.annotations,
        };
        self.post("edit-task", &request).await
    }

    async fn modify_task(
        &self,
        task_uuid: &str,
        args: ModifyTaskArgs,
    ) -> Result<(), BackendError> {
        let request = ModifyTaskRequest {
            credentials: self.credentials.clone(),
            taskuuid: task_uuid.to_string(),
            description: args.description,
            project: args.project.unwrap_or_default(),
            priority: args.priority.unwrap_or_default(),
            status: args.status,
            due: args.due.unwrap_or_default(),
            tags: args.tags,
        };
        self.post("modify-task", &request).await
    }

    async fn complete_task(&self, task_uuid: &str) -> Result<(), BackendError> {
        let request = SelectTaskRequest {
            credentials: self.credentials.clone(),
            taskuuid: task_uuid.to_string(),
        };
        self.post("complete-task", &request).await
    }

    async fn delete_task(&self, task_uuid: &str) -> Result<(), BackendError> {
        let request = SelectTaskRequest {
            credentials: self.credentials.clone(),
            taskuuid: task_uuid.to_string(),
        };
        self.post("delete-task", &request).await
    }

    async fn complete_tasks(&self, task_uuids: &[String]) -> Result<(), BackendError> {
        let request = SelectTasksRequest {
            credentials: self.credentials.clone(),
            taskuuids: task_uuids.to_vec(),
        };
        self.post("complete-tasks", &request).await
    }

    async fn delete_tasks(&self, task_uuids: &[String]) -> Result<(), BackendError> {
        let request = SelectTasksRequest {
            credentials: self.credentials.clone(),
            taskuuids: task_uuids.to_vec(),
        };
        self.post("delete-tasks", &request).await
    }
}
