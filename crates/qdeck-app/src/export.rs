//! Deterministic, offline HTML renderer
//!
//! Renders a selected record as a standalone master-detail HTML page:
//! grouped sidebar nav plus the record's detail pane. No I/O, no RNG, no
//! external assets -- same model, identical bytes.
//!
//! Trust boundary: `answer` and `footer` are emitted verbatim as
//! pre-formatted markup; only `code` content passes through
//! [`escape_html`]. The code element carries a `language-java` class so an
//! external highlighter can attach; highlighting itself is not this
//! renderer's concern.

use qdeck_core::chapter::ChapterSet;
use qdeck_core::dataset::Dataset;
use qdeck_core::markup::escape_html;
use qdeck_core::record::{Record, RecordId};

use crate::detail::DetailView;
use crate::sidebar::{self, SidebarRow};

// Minimal writer with deterministic push order
struct Html {
    buf: String,
}

impl Html {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(8 * 1024),
        }
    }

    fn push(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Render the full standalone page for `record`
pub fn render_page(dataset: &Dataset, chapters: &ChapterSet, record: &Record) -> String {
    let mut w = Html::new();

    w.push("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    w.push("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    w.push("<title>qdeck</title>\n</head>\n<body>\n");

    w.push("<aside id=\"sidebar\">\n<nav id=\"sidebar-list\">\n");
    w.push(&render_nav(dataset, chapters, Some(record.id)));
    w.push("</nav>\n</aside>\n");

    w.push("<main id=\"main-container\">\n<div id=\"content-area\">\n");
    w.push(&render_detail(&DetailView::build(record, chapters)));
    w.push("</div>\n</main>\n");

    w.push("</body>\n</html>\n");
    w.finish()
}

/// Render the grouped navigation list, marking the active entry
pub fn render_nav(dataset: &Dataset, chapters: &ChapterSet, active_id: Option<RecordId>) -> String {
    let mut w = Html::new();

    for row in sidebar::build_rows(dataset, chapters, active_id) {
        match row {
            SidebarRow::ChapterHeader { number, title } => {
                w.push("<div class=\"chapter-header\"><h3>Chapter ");
                w.push(&number.to_string());
                w.push("</h3><div>");
                w.push(&title);
                w.push("</div></div>\n");
            }
            SidebarRow::Entry {
                id,
                label,
                question,
                active,
            } => {
                if active {
                    w.push("<button class=\"entry active\" data-id=\"");
                } else {
                    w.push("<button class=\"entry\" data-id=\"");
                }
                w.push(&id.to_string());
                w.push("\"><span>");
                w.push(&label);
                w.push("</span><span>");
                w.push(&question);
                w.push("</span></button>\n");
            }
        }
    }

    w.finish()
}

/// Render the detail pane markup for a built view-model.
///
/// Optional sections (code block, footer) are included only when present.
pub fn render_detail(view: &DetailView) -> String {
    let mut w = Html::new();

    w.push("<div class=\"breadcrumb\">");
    w.push(&view.breadcrumb);
    w.push("</div>\n<h2>");
    w.push(&view.title);
    w.push("</h2>\n<p class=\"subtitle\">");
    w.push(&view.subtitle);
    w.push("</p>\n<div class=\"answer\">");
    w.push(&view.answer);
    w.push("</div>\n");

    if let Some(code) = &view.code {
        w.push("<pre><code class=\"language-java\">");
        w.push(&escape_html(code));
        w.push("</code></pre>\n");
    }

    if let Some(footer) = &view.footer {
        w.push(footer);
        w.push("\n");
    }

    w.finish()
}
