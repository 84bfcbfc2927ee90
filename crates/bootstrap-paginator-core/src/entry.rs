//! Entries of a computed page window

use serde::{Serialize, Serializer};
use std::fmt;

/// Text shown in place of a skipped range of pages
pub const ELLIPSIS: &str = "...";

/// The label of a single slot in a page window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageNumber {
	/// A navigable page (1-indexed)
	Page(usize),
	/// A gap between two non-adjacent pages
	Ellipsis,
}

impl PageNumber {
	/// Returns the page number, or `None` for an ellipsis
	pub fn page(&self) -> Option<usize> {
		match self {
			PageNumber::Page(number) => Some(*number),
			PageNumber::Ellipsis => None,
		}
	}

	/// Returns true if this slot is an ellipsis
	pub fn is_ellipsis(&self) -> bool {
		matches!(self, PageNumber::Ellipsis)
	}
}

impl fmt::Display for PageNumber {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PageNumber::Page(number) => write!(f, "{}", number),
			PageNumber::Ellipsis => f.write_str(ELLIPSIS),
		}
	}
}

impl Serialize for PageNumber {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			PageNumber::Page(number) => serializer.serialize_u64(*number as u64),
			PageNumber::Ellipsis => serializer.serialize_str(ELLIPSIS),
		}
	}
}

/// A single entry of the visible page list
///
/// Entries are produced by [`Paginator::pages`](crate::Paginator::pages).
/// Page entries carry the URL built from the paginator's URL pattern; ellipsis
/// entries never have a URL and are never current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageEntry {
	/// Page number or ellipsis marker
	pub number: PageNumber,
	/// URL of the page, absent for ellipsis entries
	pub url: Option<String>,
	/// Whether this entry is the current page
	pub is_current: bool,
}

impl PageEntry {
	/// Creates an entry for a navigable page
	pub fn page(number: usize, url: impl Into<String>, is_current: bool) -> Self {
		Self {
			number: PageNumber::Page(number),
			url: Some(url.into()),
			is_current,
		}
	}

	/// Creates an ellipsis entry
	pub fn ellipsis() -> Self {
		Self {
			number: PageNumber::Ellipsis,
			url: None,
			is_current: false,
		}
	}

	/// Returns true if this entry is an ellipsis
	pub fn is_ellipsis(&self) -> bool {
		self.number.is_ellipsis()
	}
}
