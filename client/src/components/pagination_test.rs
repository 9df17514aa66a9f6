use super::*;

use PageItem::{Ellipsis, Page};

fn pagination(current_page: u32, total_pages: u32) -> PaginationResponse {
    PaginationResponse { current_page, total_pages, total_items: 0, items_per_page: 10 }
}

// =============================================================
// Clamping
// =============================================================

#[test]
fn zero_total_pages_is_treated_as_one() {
    assert_eq!(clamp_pages(&pagination(1, 0)), (1, 1));
}

#[test]
fn current_page_is_clamped_into_range() {
    assert_eq!(clamp_pages(&pagination(0, 4)), (1, 4));
    assert_eq!(clamp_pages(&pagination(9, 4)), (4, 4));
    assert_eq!(clamp_pages(&pagination(3, 4)), (3, 4));
}

// =============================================================
// Page window
// =============================================================

#[test]
fn small_page_counts_list_every_page() {
    assert_eq!(page_items(1, 1), vec![Page(1)]);
    assert_eq!(page_items(1, 2), vec![Page(1), Page(2)]);
    assert_eq!(page_items(2, 3), vec![Page(1), Page(2), Page(3)]);
    assert_eq!(page_items(1, 5), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
}

#[test]
fn middle_page_has_ellipsis_on_both_sides() {
    assert_eq!(
        page_items(5, 10),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
    );
}

#[test]
fn start_of_long_range_has_trailing_ellipsis_only() {
    assert_eq!(
        page_items(1, 10),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
    );
}

#[test]
fn end_of_long_range_has_leading_ellipsis_only() {
    assert_eq!(
        page_items(10, 10),
        vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
    );
}

#[test]
fn single_page_gap_is_filled_instead_of_ellipsis() {
    assert_eq!(
        page_items(4, 7),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
    );
}

#[test]
fn out_of_range_current_is_clamped() {
    assert_eq!(page_items(0, 3), page_items(1, 3));
    assert_eq!(page_items(50, 10), page_items(10, 10));
}
