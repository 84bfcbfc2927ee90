//! Paginator display settings
//!
//! Settings cover how a paginator is displayed: the window width and the labels
//! of the navigation links. They can be built in code or loaded from a TOML
//! table:
//!
//! ```toml
//! max_pages_to_show = 7
//! previous_text = "Newer"
//! next_text = "Older"
//! ```
//!
//! Missing keys fall back to the defaults used by [`Paginator::new`](crate::Paginator::new).

use crate::error::{Result, validate_max_pages_to_show};
use serde::{Deserialize, Serialize};

/// Default maximum number of page numbers in the window
pub const DEFAULT_MAX_PAGES_TO_SHOW: usize = 10;

/// Default label of the previous-page link
pub const DEFAULT_PREVIOUS_TEXT: &str = "Previous";

/// Default label of the next-page link
pub const DEFAULT_NEXT_TEXT: &str = "Next";

fn default_max_pages_to_show() -> usize {
	DEFAULT_MAX_PAGES_TO_SHOW
}

fn default_previous_text() -> String {
	DEFAULT_PREVIOUS_TEXT.to_string()
}

fn default_next_text() -> String {
	DEFAULT_NEXT_TEXT.to_string()
}

/// Display settings shared by paginators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatorSettings {
	/// Maximum number of page numbers in the window (at least 3)
	#[serde(default = "default_max_pages_to_show")]
	pub max_pages_to_show: usize,

	/// Label of the previous-page link
	#[serde(default = "default_previous_text")]
	pub previous_text: String,

	/// Label of the next-page link
	#[serde(default = "default_next_text")]
	pub next_text: String,
}

impl Default for PaginatorSettings {
	fn default() -> Self {
		Self {
			max_pages_to_show: DEFAULT_MAX_PAGES_TO_SHOW,
			previous_text: default_previous_text(),
			next_text: default_next_text(),
		}
	}
}

impl PaginatorSettings {
	/// Creates settings with default values
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the maximum number of page numbers in the window
	///
	/// The value is checked by [`validate`](Self::validate).
	pub fn max_pages_to_show(mut self, max_pages_to_show: usize) -> Self {
		self.max_pages_to_show = max_pages_to_show;
		self
	}

	/// Sets the previous-page label
	pub fn previous_text(mut self, text: impl Into<String>) -> Self {
		self.previous_text = text.into();
		self
	}

	/// Sets the next-page label
	pub fn next_text(mut self, text: impl Into<String>) -> Self {
		self.next_text = text.into();
		self
	}

	/// Parses and validates settings from a TOML document
	///
	/// # Errors
	///
	/// Returns [`PaginatorError::Settings`](crate::PaginatorError::Settings) for
	/// malformed TOML, or [`PaginatorError::Configuration`](crate::PaginatorError::Configuration)
	/// when `max_pages_to_show` is below 3.
	///
	/// # Examples
	///
	/// ```
	/// use bootstrap_paginator_core::PaginatorSettings;
	///
	/// let settings = PaginatorSettings::from_toml_str("max_pages_to_show = 7").unwrap();
	/// assert_eq!(settings.max_pages_to_show, 7);
	/// assert_eq!(settings.previous_text, "Previous");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		tracing::debug!(
			max_pages_to_show = settings.max_pages_to_show,
			"Loaded paginator settings"
		);
		Ok(settings)
	}

	/// Validates the settings
	///
	/// # Errors
	///
	/// Returns [`PaginatorError::Configuration`](crate::PaginatorError::Configuration)
	/// when `max_pages_to_show` is below 3.
	pub fn validate(&self) -> Result<()> {
		validate_max_pages_to_show(self.max_pages_to_show)
	}
}
