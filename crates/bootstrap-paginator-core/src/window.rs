//! Sliding page window computation
//!
//! A page window is the sequence of page numbers shown in a pagination
//! control. When there are more pages than fit, the window slides around the
//! current page while page 1 and the last page stay visible, and skipped
//! ranges are replaced by an ellipsis:
//!
//! ```text
//! 1 ... 22 23 24 [25] 26 27 28 29 ... 50
//! ```

use crate::entry::PageNumber;
use crate::error::{Result, validate_max_pages_to_show};

/// Inputs of a page window computation
///
/// # Examples
///
/// ```
/// use bootstrap_paginator_core::{PageNumber, PageWindow};
///
/// let window = PageWindow::new(50, 25, 5)?;
/// assert_eq!(
///     window.slots(),
///     vec![
///         PageNumber::Page(1),
///         PageNumber::Ellipsis,
///         PageNumber::Page(24),
///         PageNumber::Page(25),
///         PageNumber::Page(26),
///         PageNumber::Ellipsis,
///         PageNumber::Page(50),
///     ]
/// );
/// # Ok::<(), bootstrap_paginator_core::PaginatorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
	num_pages: usize,
	current_page: usize,
	max_pages_to_show: usize,
}

impl PageWindow {
	/// Creates a new window description
	///
	/// # Errors
	///
	/// Returns [`PaginatorError::Configuration`](crate::PaginatorError::Configuration)
	/// if `max_pages_to_show` is less than [`MIN_PAGES_TO_SHOW`](crate::MIN_PAGES_TO_SHOW).
	pub fn new(num_pages: usize, current_page: usize, max_pages_to_show: usize) -> Result<Self> {
		validate_max_pages_to_show(max_pages_to_show)?;
		Ok(Self::from_validated(num_pages, current_page, max_pages_to_show))
	}

	/// Caller guarantees `max_pages_to_show >= MIN_PAGES_TO_SHOW`
	pub(crate) fn from_validated(
		num_pages: usize,
		current_page: usize,
		max_pages_to_show: usize,
	) -> Self {
		Self {
			num_pages,
			current_page,
			max_pages_to_show,
		}
	}

	/// Total number of pages
	pub fn num_pages(&self) -> usize {
		self.num_pages
	}

	/// Current page number, possibly out of range
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Maximum number of page numbers in the window, at least 3
	pub fn max_pages_to_show(&self) -> usize {
		self.max_pages_to_show
	}

	/// Number of pages shown on each side of the current page when the
	/// window slides
	///
	/// Three slots are reserved for the first, current and last page.
	pub fn num_adjacents(&self) -> usize {
		self.max_pages_to_show.saturating_sub(3) / 2
	}

	/// Returns true if every page fits in the window without ellipses
	pub fn fits(&self) -> bool {
		self.num_pages <= self.max_pages_to_show
	}

	/// Returns the inclusive range of pages in the sliding middle section
	///
	/// Only meaningful when the window does not [`fit`](Self::fits). The range
	/// never contains page 1 or the last page, and is empty when the current
	/// page sits at the very end of a narrow window.
	pub fn sliding_range(&self) -> (usize, usize) {
		let num_adjacents = self.num_adjacents();

		let start = if self.current_page.saturating_add(num_adjacents) > self.num_pages {
			// Anchor to the end so the window stays full
			self.num_pages.saturating_add(2).saturating_sub(self.max_pages_to_show)
		} else {
			self.current_page.saturating_sub(num_adjacents)
		};
		let start = start.max(2);

		let end = start
			.saturating_add(self.max_pages_to_show.saturating_sub(3))
			.min(self.num_pages.saturating_sub(1));

		(start, end)
	}

	/// Computes the sequence of page numbers and ellipses to display
	///
	/// Returns an empty list when there is at most one page.
	pub fn slots(&self) -> Vec<PageNumber> {
		if self.num_pages <= 1 {
			return Vec::new();
		}

		if self.fits() {
			return (1..=self.num_pages).map(PageNumber::Page).collect();
		}

		let (start, end) = self.sliding_range();
		tracing::trace!(
			num_pages = self.num_pages,
			current_page = self.current_page,
			max_pages_to_show = self.max_pages_to_show,
			sliding_start = start,
			sliding_end = end,
			"Computed sliding page window"
		);

		let mut slots = Vec::with_capacity(slot_capacity(start, end));
		slots.push(PageNumber::Page(1));
		if start > 2 {
			slots.push(PageNumber::Ellipsis);
		}
		slots.extend((start..=end).map(PageNumber::Page));
		if end < self.num_pages - 1 {
			slots.push(PageNumber::Ellipsis);
		}
		slots.push(PageNumber::Page(self.num_pages));

		slots
	}
}

/// Slots needed for a sliding range: the range itself, both ends and two
/// ellipses
fn slot_capacity(start: usize, end: usize) -> usize {
	end.saturating_sub(start).saturating_add(5)
}
