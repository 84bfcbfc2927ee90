//! Error types for paginator configuration

use thiserror::Error;

/// Errors that can occur while configuring a [`Paginator`](crate::Paginator)
#[derive(Debug, Error)]
pub enum PaginatorError {
	/// A configuration value was rejected
	///
	/// Raised when `max_pages_to_show` is below [`MIN_PAGES_TO_SHOW`](crate::MIN_PAGES_TO_SHOW)
	#[error("Configuration error: {0}")]
	Configuration(String),

	/// Paginator settings could not be parsed
	#[error("Invalid paginator settings: {0}")]
	Settings(#[from] toml::de::Error),
}

/// Result type for paginator operations
pub type Result<T> = std::result::Result<T, PaginatorError>;

/// Checks that a page window can hold the first, current and last page
///
/// # Errors
///
/// Returns [`PaginatorError::Configuration`] if `max_pages_to_show` is less than
/// [`MIN_PAGES_TO_SHOW`](crate::MIN_PAGES_TO_SHOW).
pub fn validate_max_pages_to_show(max_pages_to_show: usize) -> Result<()> {
	if max_pages_to_show < crate::MIN_PAGES_TO_SHOW {
		tracing::warn!(
			requested = max_pages_to_show,
			minimum = crate::MIN_PAGES_TO_SHOW,
			"Rejected max_pages_to_show below minimum"
		);
		return Err(PaginatorError::Configuration(format!(
			"max_pages_to_show cannot be less than {}, got {}",
			crate::MIN_PAGES_TO_SHOW,
			max_pages_to_show
		)));
	}
	Ok(())
}
