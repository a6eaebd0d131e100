//! The record domain type
//!
//! A record is one question/answer unit of the deck. Records are immutable
//! once loaded and are owned by the application state for the process
//! lifetime.

use serde::{Deserialize, Serialize};

/// Identifier of a record. Unique within a dataset; doubles as the
/// sort/lookup key and drives chapter bucketing.
pub type RecordId = u32;

/// One question/answer unit with optional code sample and footer.
///
/// The deserialization is deliberately permissive: there is no schema
/// validation layer, and a malformed entry with missing text fields renders
/// as empty strings in the corresponding UI slots.
///
/// Trust boundary: `answer` and `footer` hold pre-formatted markup and are
/// rendered verbatim; only `code` is escaped when rendered as markup. See
/// [`crate::markup::escape_html`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier, also the chapter bucketing key
    pub id: RecordId,

    /// Question title
    #[serde(default)]
    pub question: String,

    /// Subtitle / alternate phrasing
    #[serde(default)]
    pub alt: String,

    /// Main body, trusted pre-formatted markup
    #[serde(default)]
    pub answer: String,

    /// Optional code sample (escaped on markup rendering)
    #[serde(default)]
    pub code: Option<String>,

    /// Optional trailing markup section
    #[serde(default)]
    pub footer: Option<String>,
}

impl Record {
    /// A record with only an id and empty text slots, mainly for tests
    pub fn empty(id: RecordId) -> Self {
        Self {
            id,
            question: String::new(),
            alt: String::new(),
            answer: String::new(),
            code: None,
            footer: None,
        }
    }
}
