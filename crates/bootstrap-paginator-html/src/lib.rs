//! # Bootstrap Paginator HTML
//!
//! Renders a [`Paginator`] as a Bootstrap-compatible pagination control.
//!
//! The markup is a `<ul class="pagination">` list. Each page is a `<li>` with an
//! anchor, the current page's item carries `class="active"`, and ellipses are
//! disabled `<span>`s. Previous and next links are the first and last items when
//! those pages exist:
//!
//! ```html
//! <ul class="pagination">
//!   <li><a href="/p/24">&laquo; Previous</a></li>
//!   <li><a href="/p/1">1</a></li>
//!   <li class="disabled"><span>...</span></li>
//!   <li class="active"><a href="/p/25">25</a></li>
//!   ...
//!   <li><a href="/p/26">Next &raquo;</a></li>
//! </ul>
//! ```
//!
//! The output is produced on a single line. URLs and labels are inserted as
//! given, without escaping.
//!
//! ## Example
//!
//! ```rust
//! use bootstrap_paginator_core::Paginator;
//! use bootstrap_paginator_html::RenderHtml;
//!
//! let paginator = Paginator::new(30, 10, 1, "/p/(:num)");
//! assert_eq!(
//!     paginator.to_html(),
//!     concat!(
//!         r#"<ul class="pagination">"#,
//!         r#"<li class="active"><a href="/p/1">1</a></li>"#,
//!         r#"<li><a href="/p/2">2</a></li>"#,
//!         r#"<li><a href="/p/3">3</a></li>"#,
//!         r#"<li><a href="/p/2">Next &raquo;</a></li>"#,
//!         "</ul>",
//!     )
//! );
//! ```

#![warn(missing_docs)]

use bootstrap_paginator_core::{PageEntry, Paginator};
use std::fmt;

/// Renders the pagination control for a paginator
///
/// Returns an empty string when there is at most one page.
pub fn render_html(paginator: &Paginator) -> String {
	if paginator.num_pages() <= 1 {
		return String::new();
	}

	let pages = paginator.pages();
	let mut html = String::new();

	html.push_str("<ul class=\"pagination\">");

	if let Some(url) = paginator.prev_url() {
		html.push_str(&format!(
			"<li><a href=\"{}\">&laquo; {}</a></li>",
			url,
			paginator.previous_text()
		));
	}

	for entry in &pages {
		push_entry(&mut html, entry);
	}

	if let Some(url) = paginator.next_url() {
		html.push_str(&format!(
			"<li><a href=\"{}\">{} &raquo;</a></li>",
			url,
			paginator.next_text()
		));
	}

	html.push_str("</ul>");

	tracing::trace!(
		num_pages = paginator.num_pages(),
		entries = pages.len(),
		"Rendered pagination control"
	);

	html
}

fn push_entry(html: &mut String, entry: &PageEntry) {
	match &entry.url {
		Some(url) => {
			let class = if entry.is_current { " class=\"active\"" } else { "" };
			html.push_str(&format!(
				"<li{}><a href=\"{}\">{}</a></li>",
				class, url, entry.number
			));
		}
		None => {
			html.push_str(&format!(
				"<li class=\"disabled\"><span>{}</span></li>",
				entry.number
			));
		}
	}
}

/// Displays a paginator as its HTML pagination control
///
/// Obtained from [`RenderHtml::html`]; formatting it yields the same markup as
/// [`render_html`].
#[derive(Debug, Clone, Copy)]
pub struct HtmlDisplay<'a> {
	paginator: &'a Paginator,
}

impl fmt::Display for HtmlDisplay<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&render_html(self.paginator))
	}
}

/// HTML rendering for paginators
pub trait RenderHtml {
	/// Renders the pagination control as a string
	fn to_html(&self) -> String;

	/// Returns a [`Display`](fmt::Display) adapter rendering the control
	fn html(&self) -> HtmlDisplay<'_>;
}

impl RenderHtml for Paginator {
	fn to_html(&self) -> String {
		render_html(self)
	}

	fn html(&self) -> HtmlDisplay<'_> {
		HtmlDisplay { paginator: self }
	}
}
