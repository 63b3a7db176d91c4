#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;
use tokio::sync::Mutex;

use ccsync::backend::{
    AddTaskArgs, Backend, BackendError, EditTaskArgs, ModifyTaskArgs, RemoteTask,
};
use ccsync::entities::task;
use ccsync::storage::LocalStorage;
use ccsync::sync::SyncService;

pub const TEST_EMAIL: &str = "user@example.com";

/// In-memory stand-in for the remote CCSync backend, instrumented to
/// observe fetch concurrency.
pub struct MockBackend {
    pub tasks: StdMutex<Vec<RemoteTask>>,
    pub fail_fetch: AtomicBool,
    pub fetch_delay: Duration,
    pub fetch_calls: AtomicUsize,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl MockBackend {
    pub fn new(tasks: Vec<RemoteTask>) -> Arc<Self> {
        Self::with_delay(tasks, Duration::ZERO)
    }

    pub fn with_delay(tasks: Vec<RemoteTask>, fetch_delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            tasks: StdMutex::new(tasks),
            fail_fetch: AtomicBool::new(false),
            fetch_delay,
            fetch_calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        })
    }

    pub fn set_tasks(&self, tasks: Vec<RemoteTask>) {
        *self.tasks.lock().unwrap() = tasks;
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn fetch_tasks(&self) -> Result<Vec<RemoteTask>, BackendError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(BackendError::Network("connection refused".to_string()));
        }
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn add_task(&self, _args: AddTaskArgs) -> Result<(), BackendError> {
        Ok(())
    }

    async fn edit_task(&self, _uuid: &str, _args: EditTaskArgs) -> Result<(), BackendError> {
        Ok(())
    }

    async fn modify_task(&self, _uuid: &str, _args: ModifyTaskArgs) -> Result<(), BackendError> {
        Ok(())
    }

    async fn complete_task(&self, _uuid: &str) -> Result<(), BackendError> {
        Ok(())
    }

    async fn delete_task(&self, _uuid: &str) -> Result<(), BackendError> {
        Ok(())
    }

    async fn complete_tasks(&self, _uuids: &[String]) -> Result<(), BackendError> {
        Ok(())
    }

    async fn delete_tasks(&self, _uuids: &[String]) -> Result<(), BackendError> {
        Ok(())
    }
}

/// Minimal pending remote task.
pub fn remote_task(uuid: &str, id: i64, description: &str) -> RemoteTask {
    RemoteTask {
        uuid: uuid.to_string(),
        id,
        description: description.to_string(),
        status: "pending".to_string(),
        ..Default::default()
    }
}

/// Service over an in-memory mirror and a mock backend.
pub async fn service_with(tasks: Vec<RemoteTask>) -> (SyncService, Arc<MockBackend>) {
    service_with_delay(tasks, Duration::ZERO).await
}

pub async fn service_with_delay(
    tasks: Vec<RemoteTask>,
    fetch_delay: Duration,
) -> (SyncService, Arc<MockBackend>) {
    let storage = Arc::new(Mutex::new(LocalStorage::new_in_memory().await.unwrap()));
    let backend = MockBackend::with_delay(tasks, fetch_delay);
    let service = SyncService::new(backend.clone(), storage, TEST_EMAIL)
        .await
        .unwrap();
    (service, backend)
}

/// Mirrored task row for direct repository tests and view-state tests.
pub fn task_model(
    uuid: &str,
    id: i64,
    description: &str,
    status: &str,
    project: Option<&str>,
    tags: &[&str],
    due: Option<&str>,
) -> task::Model {
    let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
    task::Model {
        uuid: uuid.to_string(),
        email: TEST_EMAIL.to_string(),
        ordinal: id,
        description: description.to_string(),
        project: project.map(|p| p.to_string()),
        priority: None,
        status: status.to_string(),
        tags: serde_json::to_string(&tags).unwrap(),
        due: due.map(|d| d.to_string()),
        start: None,
        end: None,
        entry: None,
        wait: None,
        modified: None,
        depends: "[]".to_string(),
        recur: None,
        rtype: None,
        annotations: "[]".to_string(),
        urgency: 0.0,
    }
}
