//! Pagination math.

use crate::constants::PAGE_WINDOW;

/// Number of pages needed for `item_count` items; never less than one.
pub fn total_pages(item_count: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 1;
    }
    item_count.div_ceil(items_per_page).max(1)
}

/// Page numbers to display: a window of up to [`PAGE_WINDOW`] consecutive
/// pages centered on the current page, clamped at both ends.
pub fn displayed_pages(total_pages: usize, current_page: usize) -> Vec<usize> {
    if total_pages <= PAGE_WINDOW {
        (1..=total_pages).collect()
    } else if current_page <= 1 {
        vec![1, 2, 3]
    } else if current_page >= total_pages {
        vec![total_pages - 2, total_pages - 1, total_pages]
    } else {
        vec![current_page - 1, current_page, current_page + 1]
    }
}

/// The slice of items belonging to `current_page` (1-based).
pub fn page_slice<T>(items: &[T], current_page: usize, items_per_page: usize) -> &[T] {
    if items_per_page == 0 {
        return &[];
    }
    let page = current_page.max(1);
    let start = (page - 1) * items_per_page;
    if start >= items.len() {
        return &[];
    }
    let end = (start + items_per_page).min(items.len());
    &items[start..end]
}
