//! Application constants and default values.

/// Default backend URL when none is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/";

/// Default number of tasks shown per page
pub const DEFAULT_TASKS_PER_PAGE: usize = 10;

/// Number of page links shown in the pagination window
pub const PAGE_WINDOW: usize = 3;

/// Minimum Jaro-Winkler similarity for a fuzzy search match.
/// Tuned to tolerate minor typos without matching unrelated terms.
pub const SEARCH_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Default auto-sync interval in milliseconds (5 minutes)
pub const DEFAULT_AUTO_SYNC_INTERVAL_MS: u64 = 300_000;

/// Upper bound for the auto-sync interval (24 hours)
pub const MAX_AUTO_SYNC_INTERVAL_MS: u64 = 86_400_000;

/// Logical names for per-user persisted values. Stored under a one-way
/// hash of `(name, email)` so client storage never carries the raw email.
pub const LAST_SYNC_KEY: &str = "lastSyncTime";
pub const TASKS_PER_PAGE_KEY: &str = "tasksPerPage";
pub const PINNED_TASKS_KEY: &str = "pinnedTasks";

/// Message printed after generating a default configuration file
pub const CONFIG_GENERATED: &str = "Generated default configuration";
