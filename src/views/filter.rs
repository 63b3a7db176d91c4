//! Task filtering and ordering.

use chrono::NaiveDate;
use std::collections::HashSet;
use strsim::jaro_winkler;

use crate::constants::SEARCH_SIMILARITY_THRESHOLD;
use crate::entities::task;

/// Status selection, including the synthetic `overdue` status: a pending
/// task whose due date falls strictly before the start of today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusFilter {
    Pending,
    Completed,
    Deleted,
    Overdue,
}

impl StatusFilter {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            "deleted" => Some(Self::Deleted),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }

    pub fn matches(&self, task: &task::Model, today: NaiveDate) -> bool {
        match self {
            Self::Overdue => task.is_overdue(today),
            Self::Pending => task.status == "pending",
            Self::Completed => task.status == "completed",
            Self::Deleted => task.status == "deleted",
        }
    }
}

/// Sort direction for the user-selectable sort stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// User-chosen filter state. A task must pass every non-empty criterion;
/// an empty selection means "no filter" for that dimension.
#[derive(Clone, Debug, Default)]
pub struct TaskFilter {
    pub projects: Vec<String>,
    pub statuses: Vec<StatusFilter>,
    pub tags: Vec<String>,
    pub search: String,
}

impl TaskFilter {
    /// Apply the filter to a task collection.
    pub fn apply(&self, tasks: &[task::Model], today: NaiveDate) -> Vec<task::Model> {
        tasks
            .iter()
            .filter(|task| self.matches(task, today))
            .cloned()
            .collect()
    }

    fn matches(&self, task: &task::Model, today: NaiveDate) -> bool {
        if !self.projects.is_empty() {
            match &task.project {
                Some(project) if self.projects.contains(project) => {}
                _ => return false,
            }
        }

        if !self.statuses.is_empty()
            && !self.statuses.iter().any(|status| status.matches(task, today))
        {
            return false;
        }

        if !self.tags.is_empty() {
            let task_tags = task.tag_list();
            if !task_tags.iter().any(|tag| self.tags.contains(tag)) {
                return false;
            }
        }

        let query = self.search.trim();
        if !query.is_empty() && !matches_search(task, query) {
            return false;
        }

        true
    }
}

/// Free-text match over description, project, and tags. Case-insensitive
/// substring match, with a Jaro-Winkler fallback per word so minor typos
/// still hit.
fn matches_search(task: &task::Model, query: &str) -> bool {
    let query = query.to_lowercase();

    let mut haystacks = vec![task.description.to_lowercase()];
    if let Some(project) = &task.project {
        haystacks.push(project.to_lowercase());
    }
    haystacks.extend(task.tag_list().iter().map(|tag| tag.to_lowercase()));

    haystacks
        .iter()
        .any(|haystack| fuzzy_contains(haystack, &query))
}

fn fuzzy_contains(haystack: &str, query: &str) -> bool {
    if haystack.contains(query) {
        return true;
    }
    haystack
        .split_whitespace()
        .any(|word| jaro_winkler(word, query) >= SEARCH_SIMILARITY_THRESHOLD)
}

/// Sort by the locally meaningful ordinal id.
pub fn sort_by_id(tasks: &mut [task::Model], order: SortOrder) {
    match order {
        SortOrder::Ascending => tasks.sort_by(|a, b| a.ordinal.cmp(&b.ordinal)),
        SortOrder::Descending => tasks.sort_by(|a, b| b.ordinal.cmp(&a.ordinal)),
    }
}

/// Sort lexicographically by status.
pub fn sort_by_status(tasks: &mut [task::Model], order: SortOrder) {
    match order {
        SortOrder::Ascending => tasks.sort_by(|a, b| a.status.cmp(&b.status)),
        SortOrder::Descending => tasks.sort_by(|a, b| b.status.cmp(&a.status)),
    }
}

/// Surface pinned tasks first and overdue pending tasks next, keeping the
/// prior sort stage's order within each group (stable sort).
pub fn promote_pinned_and_overdue(
    tasks: &mut [task::Model],
    pinned: &HashSet<String>,
    today: NaiveDate,
) {
    tasks.sort_by_key(|task| {
        if pinned.contains(&task.uuid) {
            0u8
        } else if task.is_overdue(today) {
            1
        } else {
            2
        }
    });
}

/// Resolve a dependency uuid against the loaded set.
///
/// Dependencies are weak references; a referent that is not loaded (for
/// example, filtered out or never fetched) renders as an unknown
/// dependency rather than an error.
pub fn dependency_label(dep_uuid: &str, tasks: &[task::Model]) -> String {
    tasks
        .iter()
        .find(|task| task.uuid == dep_uuid)
        .map(|task| task.description.clone())
        .unwrap_or_else(|| "unknown dependency".to_string())
}
