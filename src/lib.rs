//! # Bootstrap Paginator
//!
//! Pagination controls for lists of items split across pages.
//!
//! A [`Paginator`] computes the number of pages, the window of page numbers to
//! display around the current page (with ellipses for skipped ranges),
//! previous/next navigation and the item range of the current page. The `html`
//! feature renders that window as a Bootstrap `pagination` list.
//!
//! ## Feature Flags
//!
//! - `html` (default) - HTML rendering via `bootstrap-paginator-html`
//!
//! ## Quick Example
//!
//! ```rust
//! use bootstrap_paginator::prelude::*;
//!
//! let articles: Vec<&str> = vec!["intro"; 95];
//! let paginator = Paginator::paginate(&articles, 10, 5, "/articles/page/(:num)");
//!
//! assert_eq!(paginator.num_pages(), 10);
//! assert_eq!(paginator.pages().len(), 10);
//! assert_eq!(paginator.next_url().as_deref(), Some("/articles/page/6"));
//!
//! # #[cfg(feature = "html")]
//! assert!(paginator.to_html().starts_with(r#"<ul class="pagination">"#));
//! ```

#[cfg(feature = "html")]
pub mod html;

// Re-export core types
pub use bootstrap_paginator_core::{
	ELLIPSIS, MIN_PAGES_TO_SHOW, NUM_PLACEHOLDER, PageEntry, PageNumber, PageWindow, Paginator,
	PaginatorError, PaginatorSettings, Result,
};

// Re-export settings defaults
pub use bootstrap_paginator_core::settings::{
	DEFAULT_MAX_PAGES_TO_SHOW, DEFAULT_NEXT_TEXT, DEFAULT_PREVIOUS_TEXT,
};

// Re-export rendering
#[cfg(feature = "html")]
pub use bootstrap_paginator_html::{HtmlDisplay, RenderHtml, render_html};

/// Commonly used types
pub mod prelude {
	pub use crate::{PageEntry, PageNumber, Paginator, PaginatorError, PaginatorSettings};

	#[cfg(feature = "html")]
	pub use crate::RenderHtml;
}
