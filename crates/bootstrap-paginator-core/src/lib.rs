//! # Bootstrap Paginator Core
//!
//! Pagination metadata for a bounded list of items split across pages.
//!
//! Given a total item count, page size, current page and URL pattern, a
//! [`Paginator`] derives:
//!
//! - the number of pages
//! - the visible page window, with ellipses for skipped ranges
//! - previous/next page numbers and URLs
//! - the range of item indices shown on the current page
//!
//! Rendering the window as HTML lives in `bootstrap-paginator-html`.
//!
//! ## Example
//!
//! ```rust
//! use bootstrap_paginator_core::{PageNumber, Paginator};
//!
//! let mut paginator = Paginator::new(500, 10, 25, "/articles?page=(:num)");
//! paginator.set_max_pages_to_show(5)?;
//!
//! let labels: Vec<String> = paginator
//!     .pages()
//!     .iter()
//!     .map(|entry| entry.number.to_string())
//!     .collect();
//! assert_eq!(labels, ["1", "...", "24", "25", "26", "...", "50"]);
//! assert_eq!(paginator.prev_url().as_deref(), Some("/articles?page=24"));
//! # Ok::<(), bootstrap_paginator_core::PaginatorError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod entry;
pub mod error;
pub mod paginator;
pub mod settings;
pub mod window;

/// Placeholder replaced by the page number in URL patterns
pub const NUM_PLACEHOLDER: &str = "(:num)";

/// Smallest usable window: first page, current page and last page
pub const MIN_PAGES_TO_SHOW: usize = 3;

// Re-exports for convenience
pub use entry::{ELLIPSIS, PageEntry, PageNumber};
pub use error::{PaginatorError, Result};
pub use paginator::Paginator;
pub use settings::PaginatorSettings;
pub use window::PageWindow;
