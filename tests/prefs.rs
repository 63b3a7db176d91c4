mod common;

use ccsync::constants::DEFAULT_TASKS_PER_PAGE;
use common::service_with;

#[tokio::test]
async fn tasks_per_page_defaults_then_persists() {
    let (service, _backend) = service_with(Vec::new()).await;

    assert_eq!(service.tasks_per_page().await.unwrap(), DEFAULT_TASKS_PER_PAGE);

    service.set_tasks_per_page(25).await.unwrap();
    assert_eq!(service.tasks_per_page().await.unwrap(), 25);

    assert!(service.set_tasks_per_page(0).await.is_err());
    assert_eq!(service.tasks_per_page().await.unwrap(), 25);
}

#[tokio::test]
async fn pin_toggling_flips_state_each_call() {
    let (service, _backend) = service_with(Vec::new()).await;
    let uuid = "uuid-1";

    assert!(!service.is_task_pinned(uuid).await.unwrap());

    assert!(service.toggle_pinned_task(uuid).await.unwrap());
    assert!(service.is_task_pinned(uuid).await.unwrap());

    assert!(!service.toggle_pinned_task(uuid).await.unwrap());
    assert!(!service.is_task_pinned(uuid).await.unwrap());
}

#[tokio::test]
async fn pinned_set_accumulates_across_uuids() {
    let (service, _backend) = service_with(Vec::new()).await;

    service.toggle_pinned_task("uuid-1").await.unwrap();
    service.toggle_pinned_task("uuid-2").await.unwrap();
    service.toggle_pinned_task("uuid-3").await.unwrap();
    service.toggle_pinned_task("uuid-2").await.unwrap();

    let pinned = service.pinned_tasks().await.unwrap();
    assert_eq!(pinned.len(), 2);
    assert!(pinned.contains("uuid-1"));
    assert!(pinned.contains("uuid-3"));
    assert!(!pinned.contains("uuid-2"));
}

#[tokio::test]
async fn preferences_are_scoped_per_user() {
    let (service, backend) = service_with(Vec::new()).await;
    service.set_tasks_per_page(50).await.unwrap();
    service.toggle_pinned_task("uuid-1").await.unwrap();

    // A second user over the same storage sees neither the page size nor
    // the pinned set: keys are hashed per email.
    let other = ccsync::sync::SyncService::new(
        backend,
        service.storage_handle(),
        "other@example.com",
    )
    .await
    .unwrap();

    assert_eq!(other.tasks_per_page().await.unwrap(), DEFAULT_TASKS_PER_PAGE);
    assert!(other.pinned_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn last_sync_display_before_any_sync() {
    let (service, _backend) = service_with(Vec::new()).await;
    assert_eq!(service.last_sync_millis(), None);
    assert_eq!(service.time_since_last_sync(), "Not synced yet");
}
