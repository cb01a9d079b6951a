//! # homedeck-core - Core Domain Types
//!
//! Foundation crate for homedeck. Provides the catalog document model,
//! substring search, address rewriting, error handling, and the logging
//! bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, url, tracing).
//!
//! ## Public API
//!
//! ### Catalog (`catalog`)
//! - [`Catalog`] - Root document: an ordered sequence of tabs
//! - [`Tab`] - One server/host grouping with its services
//! - [`Service`] - One addressable endpoint
//! - [`TabIcon`] - Closed display-category set with a generic fallback
//! - [`Tooltip`] - Descriptive tab metadata
//!
//! ### Search (`search`)
//! - [`search()`] - Case-insensitive substring search across all tabs
//! - [`SearchHit`] - A matching service plus its tab
//!
//! ### Address rewriting (`hosts`)
//! - [`rewrite_localhost()`] - Swap a literal `localhost` host component
//! - [`rewrite_catalog_hosts()`] - Apply the rewrite to a whole catalog
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use homedeck_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod hosts;
pub mod logging;
pub mod search;

/// Prelude for common imports used throughout all homedeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{Catalog, Service, Tab, TabIcon, Tooltip};
pub use error::{Error, Result, ResultExt};
pub use hosts::{rewrite_catalog_hosts, rewrite_localhost};
pub use search::{search, SearchHit};
