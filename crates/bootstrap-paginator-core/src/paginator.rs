//! Pagination state and derived queries

use crate::NUM_PLACEHOLDER;
use crate::entry::{PageEntry, PageNumber};
use crate::error::{Result, validate_max_pages_to_show};
use crate::settings::{
	DEFAULT_MAX_PAGES_TO_SHOW, DEFAULT_NEXT_TEXT, DEFAULT_PREVIOUS_TEXT, PaginatorSettings,
};
use crate::window::PageWindow;

/// Pagination state for a list of items split across pages
///
/// A `Paginator` holds the total item count, page size, current page and a URL
/// pattern, and derives everything a pagination control needs from them. The
/// number of pages is recomputed whenever the item count or page size change.
///
/// The current page is not validated: out-of-range pages yield empty item
/// ranges and no current entry rather than errors.
///
/// # Examples
///
/// ```
/// use bootstrap_paginator_core::Paginator;
///
/// let paginator = Paginator::new(95, 10, 5, "/p/(:num)");
/// assert_eq!(paginator.num_pages(), 10);
/// assert_eq!(paginator.next_url().as_deref(), Some("/p/6"));
/// assert_eq!(paginator.current_page_first_item(), Some(41));
/// assert_eq!(paginator.current_page_last_item(), Some(50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
	total_items: usize,
	items_per_page: usize,
	current_page: usize,
	url_pattern: String,
	max_pages_to_show: usize,
	previous_text: String,
	next_text: String,
	num_pages: usize,
}

impl Paginator {
	/// Creates a paginator
	///
	/// # Arguments
	///
	/// * `total_items` - Total number of items
	/// * `items_per_page` - Number of items per page, 0 disables pagination
	/// * `current_page` - Current page number (1-indexed)
	/// * `url_pattern` - Page URL with `(:num)` as the page number placeholder,
	///   e.g. `/foo/page/(:num)`
	pub fn new(
		total_items: usize,
		items_per_page: usize,
		current_page: usize,
		url_pattern: impl Into<String>,
	) -> Self {
		let mut paginator = Self {
			total_items,
			items_per_page,
			current_page,
			url_pattern: url_pattern.into(),
			max_pages_to_show: DEFAULT_MAX_PAGES_TO_SHOW,
			previous_text: DEFAULT_PREVIOUS_TEXT.to_string(),
			next_text: DEFAULT_NEXT_TEXT.to_string(),
			num_pages: 0,
		};
		paginator.update_num_pages();
		paginator
	}

	/// Creates a paginator over a collection, counting its items
	///
	/// # Examples
	///
	/// ```
	/// use bootstrap_paginator_core::Paginator;
	///
	/// let posts: Vec<u32> = (1..=42).collect();
	/// let paginator = Paginator::paginate(&posts, 10, 1, "/posts?page=(:num)");
	/// assert_eq!(paginator.total_items(), 42);
	/// assert_eq!(paginator.num_pages(), 5);
	/// ```
	pub fn paginate<T>(
		items: &[T],
		items_per_page: usize,
		current_page: usize,
		url_pattern: impl Into<String>,
	) -> Self {
		Self::new(items.len(), items_per_page, current_page, url_pattern)
	}

	/// Applies display settings to a new paginator
	///
	/// # Errors
	///
	/// Returns [`PaginatorError::Configuration`](crate::PaginatorError::Configuration)
	/// when the settings are invalid.
	pub fn with_settings(mut self, settings: &PaginatorSettings) -> Result<Self> {
		self.apply_settings(settings)?;
		Ok(self)
	}

	/// Applies display settings
	///
	/// Settings are validated first; on error the paginator is left unchanged.
	///
	/// # Errors
	///
	/// Returns [`PaginatorError::Configuration`](crate::PaginatorError::Configuration)
	/// when the settings are invalid.
	pub fn apply_settings(&mut self, settings: &PaginatorSettings) -> Result<()> {
		settings.validate()?;
		self.max_pages_to_show = settings.max_pages_to_show;
		self.previous_text = settings.previous_text.clone();
		self.next_text = settings.next_text.clone();
		tracing::debug!(
			max_pages_to_show = self.max_pages_to_show,
			"Applied paginator settings"
		);
		Ok(())
	}

	/// Returns the current display settings
	pub fn settings(&self) -> PaginatorSettings {
		PaginatorSettings {
			max_pages_to_show: self.max_pages_to_show,
			previous_text: self.previous_text.clone(),
			next_text: self.next_text.clone(),
		}
	}

	fn update_num_pages(&mut self) {
		self.num_pages = if self.items_per_page == 0 {
			0
		} else {
			self.total_items.div_ceil(self.items_per_page)
		};
	}

	/// Returns the total number of items
	pub fn total_items(&self) -> usize {
		self.total_items
	}

	/// Sets the total number of items and recomputes the page count
	pub fn set_total_items(&mut self, total_items: usize) {
		self.total_items = total_items;
		self.update_num_pages();
	}

	/// Returns the number of items per page
	pub fn items_per_page(&self) -> usize {
		self.items_per_page
	}

	/// Sets the number of items per page and recomputes the page count
	pub fn set_items_per_page(&mut self, items_per_page: usize) {
		self.items_per_page = items_per_page;
		self.update_num_pages();
	}

	/// Returns the current page number
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Sets the current page number
	pub fn set_current_page(&mut self, current_page: usize) {
		self.current_page = current_page;
	}

	/// Returns the URL pattern
	pub fn url_pattern(&self) -> &str {
		&self.url_pattern
	}

	/// Sets the URL pattern
	pub fn set_url_pattern(&mut self, url_pattern: impl Into<String>) {
		self.url_pattern = url_pattern.into();
	}

	/// Returns the maximum number of page numbers in the window
	pub fn max_pages_to_show(&self) -> usize {
		self.max_pages_to_show
	}

	/// Sets the maximum number of page numbers in the window
	///
	/// # Errors
	///
	/// Returns [`PaginatorError::Configuration`](crate::PaginatorError::Configuration)
	/// if `max_pages_to_show` is less than 3. The previous value is kept.
	///
	/// # Examples
	///
	/// ```
	/// use bootstrap_paginator_core::Paginator;
	///
	/// let mut paginator = Paginator::new(100, 10, 1, "");
	/// assert!(paginator.set_max_pages_to_show(2).is_err());
	/// assert_eq!(paginator.max_pages_to_show(), 10);
	/// ```
	pub fn set_max_pages_to_show(&mut self, max_pages_to_show: usize) -> Result<()> {
		validate_max_pages_to_show(max_pages_to_show)?;
		self.max_pages_to_show = max_pages_to_show;
		Ok(())
	}

	/// Returns the label of the previous-page link
	pub fn previous_text(&self) -> &str {
		&self.previous_text
	}

	/// Sets the label of the previous-page link
	pub fn set_previous_text(&mut self, text: impl Into<String>) -> &mut Self {
		self.previous_text = text.into();
		self
	}

	/// Returns the label of the next-page link
	pub fn next_text(&self) -> &str {
		&self.next_text
	}

	/// Sets the label of the next-page link
	pub fn set_next_text(&mut self, text: impl Into<String>) -> &mut Self {
		self.next_text = text.into();
		self
	}

	/// Returns the total number of pages
	pub fn num_pages(&self) -> usize {
		self.num_pages
	}

	/// Builds the URL of a page by substituting the page number for every
	/// `(:num)` placeholder in the URL pattern
	///
	/// No escaping is performed.
	pub fn page_url(&self, page_num: usize) -> String {
		self.url_pattern.replace(NUM_PLACEHOLDER, &page_num.to_string())
	}

	/// Returns the next page number, if there is one
	pub fn next_page(&self) -> Option<usize> {
		(self.current_page < self.num_pages).then(|| self.current_page + 1)
	}

	/// Returns the previous page number, if there is one
	///
	/// Only the lower bound is checked: a current page past the last page still
	/// has a previous page.
	pub fn prev_page(&self) -> Option<usize> {
		(self.current_page > 1).then(|| self.current_page - 1)
	}

	/// Returns true if there is a next page
	pub fn has_next(&self) -> bool {
		self.next_page().is_some()
	}

	/// Returns true if there is a previous page
	pub fn has_previous(&self) -> bool {
		self.prev_page().is_some()
	}

	/// Returns the URL of the next page, if there is one
	pub fn next_url(&self) -> Option<String> {
		self.next_page().map(|page| self.page_url(page))
	}

	/// Returns the URL of the previous page, if there is one
	pub fn prev_url(&self) -> Option<String> {
		self.prev_page().map(|page| self.page_url(page))
	}

	/// Returns the 1-based index of the first item on the current page
	///
	/// Returns `None` when the current page lies beyond the available items.
	pub fn current_page_first_item(&self) -> Option<usize> {
		let first = self
			.current_page
			.checked_sub(1)?
			.checked_mul(self.items_per_page)?
			.checked_add(1)?;

		if first > self.total_items {
			return None;
		}

		Some(first)
	}

	/// Returns the 1-based index of the last item on the current page
	///
	/// Never exceeds the total number of items.
	pub fn current_page_last_item(&self) -> Option<usize> {
		let first = self.current_page_first_item()?;
		let last = match self.items_per_page.checked_sub(1) {
			Some(rest) => first.saturating_add(rest).min(self.total_items),
			// Zero items per page: the range is empty and ends before it starts
			None => first - 1,
		};
		Some(last)
	}

	/// Returns the page window for the current state
	pub fn window(&self) -> PageWindow {
		PageWindow::from_validated(self.num_pages, self.current_page, self.max_pages_to_show)
	}

	/// Returns the page entries to display
	///
	/// See [`PageWindow::slots`] for the layout rules. Page entries carry their
	/// URL; ellipsis entries carry none.
	///
	/// # Examples
	///
	/// ```
	/// use bootstrap_paginator_core::Paginator;
	///
	/// let paginator = Paginator::new(30, 10, 2, "/p/(:num)");
	/// let pages = paginator.pages();
	/// assert_eq!(pages.len(), 3);
	/// assert!(pages[1].is_current);
	/// assert_eq!(pages[1].url.as_deref(), Some("/p/2"));
	/// ```
	pub fn pages(&self) -> Vec<PageEntry> {
		self.window()
			.slots()
			.into_iter()
			.map(|slot| match slot {
				PageNumber::Page(number) => {
					PageEntry::page(number, self.page_url(number), number == self.current_page)
				}
				PageNumber::Ellipsis => PageEntry::ellipsis(),
			})
			.collect()
	}
}
