//! Completion statistics for report views.
//!
//! Computed over the full unfiltered task set. Tasks with an empty or
//! missing project (or tag) value are excluded from the corresponding
//! breakdown.

use std::collections::BTreeMap;

use crate::entities::task;

/// Completion ratio for one project or tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompletionStats {
    pub completed: usize,
    pub total: usize,
    /// `completed / total`, rounded to the nearest integer percentage.
    pub percentage: u32,
}

/// Per-project completion ratios.
pub fn project_stats(tasks: &[task::Model]) -> BTreeMap<String, CompletionStats> {
    let mut counts: BTreeMap<String, (usize, usize)> = BTreeMap::new();

    for task in tasks {
        let Some(project) = task.project.as_deref().filter(|p| !p.is_empty()) else {
            continue;
        };
        let entry = counts.entry(project.to_string()).or_default();
        entry.1 += 1;
        if task.status == "completed" {
            entry.0 += 1;
        }
    }

    finalize(counts)
}

/// Per-tag completion ratios. A task counts once for each of its tags.
pub fn tag_stats(tasks: &[task::Model]) -> BTreeMap<String, CompletionStats> {
    let mut counts: BTreeMap<String, (usize, usize)> = BTreeMap::new();

    for task in tasks {
        for tag in task.tag_list() {
            if tag.is_empty() {
                continue;
            }
            let entry = counts.entry(tag).or_default();
            entry.1 += 1;
            if task.status == "completed" {
                entry.0 += 1;
            }
        }
    }

    finalize(counts)
}

fn finalize(counts: BTreeMap<String, (usize, usize)>) -> BTreeMap<String, CompletionStats> {
    counts
        .into_iter()
        .map(|(name, (completed, total))| {
            (
                name,
                CompletionStats {
                    completed,
                    total,
                    percentage: percentage(completed, total),
                },
            )
        })
        .collect()
}

fn percentage(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}
