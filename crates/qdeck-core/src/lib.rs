//! # qdeck-core - Core Domain Types
//!
//! Foundation crate for qdeck. Provides the record and chapter domain types,
//! dataset loading, markup escaping, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, tokio, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`Record`] - One question/answer unit with optional code sample and footer
//! - [`Chapter`], [`ChapterSet`] - Named buckets of records by inclusive id range
//! - [`Dataset`] - The loaded, immutable record collection
//!
//! ### Markup (`markup`)
//! - [`escape_html()`] - Escape the five HTML-sensitive characters
//! - [`question_number()`] - Zero-padded question number formatting
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use qdeck_core::prelude::*;
//! ```

pub mod chapter;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod markup;
pub mod record;

/// Prelude for common imports used throughout all qdeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use chapter::{Chapter, ChapterSet};
pub use dataset::Dataset;
pub use error::{Error, Result, ResultExt};
pub use markup::{escape_html, question_number};
pub use record::{Record, RecordId};
