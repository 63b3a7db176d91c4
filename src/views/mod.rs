//! View-state derivation.
//!
//! Everything a task list UI renders is a pure function of the mirror's
//! current contents and the user's chosen filters: filtered and ordered
//! task collections, pagination windows, and per-project/per-tag
//! completion statistics. Nothing here touches storage or the network.

pub mod filter;
pub mod pagination;
pub mod stats;

pub use filter::{SortOrder, StatusFilter, TaskFilter};
pub use stats::CompletionStats;
