//! Integration test utilities for bootstrap-paginator
//!
//! Shared helpers used by the scenario and property tests.

use bootstrap_paginator::{PageEntry, Paginator};

/// Renders the visible page list compactly, e.g. `"1 ... 24 [25] 26 ... 50"`
///
/// The current page is wrapped in brackets.
pub fn layout(paginator: &Paginator) -> String {
	paginator
		.pages()
		.iter()
		.map(|entry| {
			if entry.is_current {
				format!("[{}]", entry.number)
			} else {
				entry.number.to_string()
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}

/// Returns the entries that are navigable pages
pub fn numbered(entries: &[PageEntry]) -> Vec<usize> {
	entries.iter().filter_map(|entry| entry.number.page()).collect()
}

/// Creates a paginator with a custom window width
///
/// # Panics
///
/// Panics if `max_pages_to_show` is below 3.
pub fn paginator_with_width(
	total_items: usize,
	items_per_page: usize,
	current_page: usize,
	max_pages_to_show: usize,
) -> Paginator {
	let mut paginator = Paginator::new(total_items, items_per_page, current_page, "/p/(:num)");
	paginator
		.set_max_pages_to_show(max_pages_to_show)
		.expect("window width of at least 3");
	paginator
}
