use ccsync::views::pagination::{displayed_pages, page_slice, total_pages};

#[test]
fn total_pages_rounds_up_and_never_hits_zero() {
    assert_eq!(total_pages(0, 10), 1);
    assert_eq!(total_pages(1, 10), 1);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
    assert_eq!(total_pages(25, 10), 3);
    assert_eq!(total_pages(5, 0), 1);
}

#[test]
fn few_pages_show_all() {
    assert_eq!(displayed_pages(1, 1), vec![1]);
    assert_eq!(displayed_pages(2, 1), vec![1, 2]);
    assert_eq!(displayed_pages(3, 2), vec![1, 2, 3]);
}

#[test]
fn window_clamps_at_the_edges() {
    assert_eq!(displayed_pages(10, 1), vec![1, 2, 3]);
    assert_eq!(displayed_pages(10, 10), vec![8, 9, 10]);
}

#[test]
fn window_centers_on_interior_pages() {
    assert_eq!(displayed_pages(10, 2), vec![1, 2, 3]);
    assert_eq!(displayed_pages(10, 5), vec![4, 5, 6]);
    assert_eq!(displayed_pages(10, 9), vec![8, 9, 10]);
}

#[test]
fn window_is_always_consecutive_in_bounds_and_contains_current() {
    for total in 1..=12usize {
        for current in 1..=total {
            let pages = displayed_pages(total, current);
            assert_eq!(pages.len(), total.min(3));
            assert!(pages.windows(2).all(|w| w[1] == w[0] + 1), "consecutive");
            assert!(pages.iter().all(|&p| p >= 1 && p <= total), "in bounds");
            assert!(pages.contains(&current), "contains current page");
        }
    }
}

#[test]
fn page_slice_partitions_the_collection() {
    let items: Vec<u32> = (0..25).collect();

    assert_eq!(page_slice(&items, 1, 10), (0..10).collect::<Vec<u32>>());
    assert_eq!(page_slice(&items, 2, 10), (10..20).collect::<Vec<u32>>());
    assert_eq!(page_slice(&items, 3, 10), (20..25).collect::<Vec<u32>>());
    assert!(page_slice(&items, 4, 10).is_empty());
    assert!(page_slice(&items, 1, 0).is_empty());

    // A zero page is treated as the first.
    assert_eq!(page_slice(&items, 0, 10), (0..10).collect::<Vec<u32>>());
}
