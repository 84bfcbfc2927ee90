//! HTML rendering of pagination controls
//!
//! This module provides access to bootstrap-paginator-html, which renders a
//! [`Paginator`](crate::Paginator) as a Bootstrap `pagination` list.
//!
//! ## Example
//!
//! ```rust
//! use bootstrap_paginator::Paginator;
//! use bootstrap_paginator::html::RenderHtml;
//!
//! let paginator = Paginator::new(0, 10, 1, "/p/(:num)");
//! assert_eq!(paginator.to_html(), "");
//! ```

pub use bootstrap_paginator_html::*;
