//! Markup helpers: HTML escaping and question-number formatting

use crate::record::RecordId;

/// Escape the five HTML-sensitive characters to their entity equivalents.
///
/// Applied only to `code` content before it is embedded in rendered markup;
/// `answer` and `footer` are trusted pre-formatted markup and must be
/// emitted verbatim. Not idempotent: a second pass turns `&amp;` into
/// `&amp;amp;`, so callers apply it exactly once.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Zero-padded question number for breadcrumbs and sidebar entries ("05")
pub fn question_number(id: RecordId) -> String {
    format!("{:02}", id)
}
