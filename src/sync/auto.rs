//! Periodic sync trigger.
//!
//! Invokes [`SyncService::sync`] on a fixed cadence. Ticks that land while
//! a cycle is still running are absorbed by the service's single-flight
//! guard, so overlapping schedules never produce duplicate fetches.

use log::{info, warn};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::{SyncService, SyncStatus};
use crate::config::SyncConfig;

/// Owns the background timer task driving periodic syncs.
///
/// Stopping (or dropping) cancels the pending timer; starting again
/// replaces any previous schedule, so interval changes never leave two
/// timers running.
pub struct AutoSync {
    service: SyncService,
    handle: Option<JoinHandle<()>>,
}

impl AutoSync {
    pub fn new(service: SyncService) -> Self {
        Self {
            service,
            handle: None,
        }
    }

    /// Start or stop the timer to match the configuration.
    pub fn apply(&mut self, config: &SyncConfig) {
        if config.auto_sync_enabled && config.auto_sync_interval_ms > 0 {
            self.start(Duration::from_millis(config.auto_sync_interval_ms));
        } else {
            self.stop();
        }
    }

    /// (Re)start the periodic schedule with the given interval.
    pub fn start(&mut self, interval: Duration) {
        self.stop();

        let service = self.service.clone();
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // An interval's first tick completes immediately; the first
            // scheduled sync belongs one full interval out.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                // Each cycle runs in its own task: cancelling the timer
                // never cuts a sync off mid-flight, and an in-flight
                // cycle releases the single-flight guard normally.
                let service = service.clone();
                tokio::spawn(async move {
                    match service.sync().await {
                        Ok(SyncStatus::InProgress) => {
                            info!("Auto-sync: previous cycle still running, skipping this tick");
                        }
                        Ok(SyncStatus::Error { message }) => {
                            warn!("Auto-sync failed: {message}");
                        }
                        Ok(_) => {}
                        Err(e) => warn!("Auto-sync failed: {e}"),
                    }
                });
            }
        }));
    }

    /// Cancel the pending timer, if any.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for AutoSync {
    fn drop(&mut self) {
        self.stop();
    }
}
