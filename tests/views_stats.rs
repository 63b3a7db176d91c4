mod common;

use ccsync::views::stats::{project_stats, tag_stats};
use common::task_model;

#[test]
fn project_stats_count_and_round() {
    let tasks = vec![
        task_model("uuid-1", 1, "One", "completed", Some("P"), &[], None),
        task_model("uuid-2", 2, "Two", "pending", Some("P"), &[], None),
        task_model("uuid-3", 3, "Three", "pending", Some("P"), &[], None),
    ];
    let stats = project_stats(&tasks);

    let p = stats.get("P").unwrap();
    assert_eq!(p.completed, 1);
    assert_eq!(p.total, 3);
    assert_eq!(p.percentage, 33);
}

#[test]
fn tasks_without_a_project_are_excluded() {
    let tasks = vec![
        task_model("uuid-1", 1, "One", "completed", Some("P"), &[], None),
        task_model("uuid-2", 2, "Two", "pending", None, &[], None),
        task_model("uuid-3", 3, "Three", "pending", Some(""), &[], None),
    ];
    let stats = project_stats(&tasks);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats.get("P").unwrap().total, 1);
}

#[test]
fn percentage_rounds_to_nearest_integer() {
    let tasks = vec![
        task_model("uuid-1", 1, "One", "completed", Some("P"), &[], None),
        task_model("uuid-2", 2, "Two", "completed", Some("P"), &[], None),
        task_model("uuid-3", 3, "Three", "pending", Some("P"), &[], None),
    ];
    // 2/3 = 66.67 rounds to 67.
    assert_eq!(project_stats(&tasks).get("P").unwrap().percentage, 67);

    let all_done = vec![task_model("uuid-4", 4, "Four", "completed", Some("Q"), &[], None)];
    assert_eq!(project_stats(&all_done).get("Q").unwrap().percentage, 100);
}

#[test]
fn tag_stats_count_a_task_once_per_tag() {
    let tasks = vec![
        task_model("uuid-1", 1, "One", "completed", None, &["a", "b"], None),
        task_model("uuid-2", 2, "Two", "pending", None, &["a"], None),
        task_model("uuid-3", 3, "Three", "pending", None, &[], None),
    ];
    let stats = tag_stats(&tasks);
    assert_eq!(stats.len(), 2);

    let a = stats.get("a").unwrap();
    assert_eq!((a.completed, a.total, a.percentage), (1, 2, 50));

    let b = stats.get("b").unwrap();
    assert_eq!((b.completed, b.total, b.percentage), (1, 1, 100));
}

#[test]
fn stats_are_computed_over_the_full_set() {
    // Deleted tasks still count toward totals; filtering is a separate
    // view concern.
    let tasks = vec![
        task_model("uuid-1", 1, "One", "deleted", Some("P"), &[], None),
        task_model("uuid-2", 2, "Two", "completed", Some("P"), &[], None),
    ];
    let p = project_stats(&tasks);
    let p = p.get("P").unwrap();
    assert_eq!((p.completed, p.total, p.percentage), (1, 2, 50));
}
