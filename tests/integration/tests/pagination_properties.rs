//! Pagination property-based tests
//!
//! Invariants of page counts, page windows, navigation and item ranges over
//! arbitrary inputs.

use bootstrap_paginator::prelude::*;
use bootstrap_paginator_integration_tests::{numbered, paginator_with_width};
use proptest::prelude::*;

/// Inputs small enough to cover both fitting and sliding windows
fn window_inputs() -> impl Strategy<Value = (usize, usize, usize, usize)> {
	(0usize..5_000, 0usize..50, 0usize..600, 3usize..25)
}

proptest! {
	/// Verifies the page count is the ceiling of items over page size.
	#[test]
	fn prop_num_pages_is_ceiling(total in 0usize..100_000, per_page in 0usize..1_000) {
		let paginator = Paginator::new(total, per_page, 1, "");
		let expected = if per_page == 0 { 0 } else { total.div_ceil(per_page) };
		prop_assert_eq!(paginator.num_pages(), expected);
	}

	/// Verifies the first and last pages stay visible and the window holds at
	/// most `max_pages_to_show` page numbers with at most two ellipses.
	#[test]
	fn prop_window_bounds((total, per_page, current, width) in window_inputs()) {
		let paginator = paginator_with_width(total, per_page, current, width);
		let num_pages = paginator.num_pages();
		let pages = paginator.pages();
		let numbers = numbered(&pages);

		if num_pages <= 1 {
			prop_assert!(pages.is_empty());
		} else {
			prop_assert_eq!(numbers.first().copied(), Some(1));
			prop_assert_eq!(numbers.last().copied(), Some(num_pages));
			prop_assert!(numbers.len() <= width);
			prop_assert!(pages.iter().filter(|entry| entry.is_ellipsis()).count() <= 2);
		}
	}

	/// Verifies page numbers are strictly increasing and ellipses only stand
	/// for real gaps.
	#[test]
	fn prop_window_is_ordered((total, per_page, current, width) in window_inputs()) {
		let paginator = paginator_with_width(total, per_page, current, width);
		let pages = paginator.pages();

		let mut previous: Option<usize> = None;
		let mut gap_pending = false;
		for entry in &pages {
			match entry.number.page() {
				Some(number) => {
					if let Some(last) = previous {
						prop_assert!(number > last);
						prop_assert_eq!(gap_pending, number > last + 1);
					}
					previous = Some(number);
					gap_pending = false;
				}
				None => {
					prop_assert!(!gap_pending);
					prop_assert!(entry.url.is_none());
					gap_pending = true;
				}
			}
		}
	}

	/// Verifies exactly one entry is current when the current page is in range,
	/// and none otherwise.
	#[test]
	fn prop_single_current_entry((total, per_page, current, width) in window_inputs()) {
		let paginator = paginator_with_width(total, per_page, current, width);
		let num_pages = paginator.num_pages();
		let current_entries: Vec<PageEntry> = paginator
			.pages()
			.into_iter()
			.filter(|entry| entry.is_current)
			.collect();

		if num_pages > 1 && (1..=num_pages).contains(&current) {
			prop_assert_eq!(current_entries.len(), 1);
			prop_assert_eq!(current_entries[0].number, PageNumber::Page(current));
		} else {
			prop_assert!(current_entries.is_empty());
		}
	}

	/// Verifies next/previous pages exist exactly when the bounds allow.
	#[test]
	fn prop_navigation_bounds((total, per_page, current, _width) in window_inputs()) {
		let paginator = Paginator::new(total, per_page, current, "/p/(:num)");
		let num_pages = paginator.num_pages();

		prop_assert_eq!(paginator.next_page().is_none(), current >= num_pages);
		prop_assert_eq!(paginator.prev_page().is_none(), current <= 1);
		prop_assert_eq!(paginator.next_url().is_some(), paginator.next_page().is_some());
		prop_assert_eq!(paginator.prev_url().is_some(), paginator.prev_page().is_some());
	}

	/// Verifies the item range stays within the available items.
	#[test]
	fn prop_item_range_within_total((total, per_page, current, _width) in window_inputs()) {
		let paginator = Paginator::new(total, per_page, current, "");

		match paginator.current_page_first_item() {
			Some(first) => {
				let last = paginator.current_page_last_item().unwrap();
				prop_assert!(first >= 1);
				prop_assert!(first <= total);
				prop_assert!(last <= total);
				if per_page > 0 {
					prop_assert!(last >= first);
					prop_assert!(last - first < per_page);
				}
			}
			None => prop_assert_eq!(paginator.current_page_last_item(), None),
		}
	}

	/// Verifies the rendered control is empty exactly when there is no window.
	#[test]
	fn prop_html_empty_without_window((total, per_page, current, width) in window_inputs()) {
		let paginator = paginator_with_width(total, per_page, current, width);
		let html = paginator.to_html();

		prop_assert_eq!(html.is_empty(), paginator.num_pages() <= 1);
		if !html.is_empty() {
			prop_assert!(html.starts_with(r#"<ul class="pagination">"#));
			prop_assert!(html.ends_with("</ul>"));
		}
	}
}
