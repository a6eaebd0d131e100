//! Detail pane view-model
//!
//! Built from a record whenever the selection lands on a present id, and
//! consumed by both the TUI detail widget and the HTML export renderer.

use qdeck_core::chapter::ChapterSet;
use qdeck_core::markup::question_number;
use qdeck_core::record::Record;

/// Everything the detail pane shows for the selected record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// "Chapter 1 / Question 05"
    pub breadcrumb: String,

    /// Question title
    pub title: String,

    /// Subtitle / alternate phrasing
    pub subtitle: String,

    /// Trusted pre-formatted markup, rendered verbatim
    pub answer: String,

    /// Optional code sample; escaped only at the markup rendering boundary
    pub code: Option<String>,

    /// Optional trailing markup, rendered verbatim
    pub footer: Option<String>,
}

impl DetailView {
    /// Build the view-model for `record`.
    ///
    /// A record outside every chapter range gets chapter number 0 in its
    /// breadcrumb, matching the permissive grouping behavior.
    pub fn build(record: &Record, chapters: &ChapterSet) -> Self {
        let chapter_number = chapters
            .chapter_for(record.id)
            .map(|(number, _)| number)
            .unwrap_or(0);

        Self {
            breadcrumb: format!(
                "Chapter {} / Question {}",
                chapter_number,
                question_number(record.id)
            ),
            title: record.question.clone(),
            subtitle: record.alt.clone(),
            answer: record.answer.clone(),
            code: record.code.clone(),
            footer: record.footer.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdeck_core::chapter::{Chapter, ChapterSet};

    fn sample_record() -> Record {
        Record {
            id: 5,
            question: "Q2".to_string(),
            alt: "alt text".to_string(),
            answer: "A2".to_string(),
            code: Some("int x=1;".to_string()),
            footer: None,
        }
    }

    #[test]
    fn test_breadcrumb_uses_chapter_number_and_padded_id() {
        let chapters = ChapterSet::new(vec![Chapter::new("Core", 1, 26, "ch1")]);
        let view = DetailView::build(&sample_record(), &chapters);
        assert_eq!(view.breadcrumb, "Chapter 1 / Question 05");
        assert_eq!(view.title, "Q2");
        assert_eq!(view.subtitle, "alt text");
        assert_eq!(view.code.as_deref(), Some("int x=1;"));
        assert!(view.footer.is_none());
    }

    #[test]
    fn test_uncovered_record_gets_chapter_zero() {
        let chapters = ChapterSet::new(vec![Chapter::new("Core", 1, 26, "ch1")]);
        let mut record = sample_record();
        record.id = 400;
        let view = DetailView::build(&record, &chapters);
        assert_eq!(view.breadcrumb, "Chapter 0 / Question 400");
    }

    #[test]
    fn test_optional_sections_absent_when_missing() {
        let chapters = ChapterSet::default_set();
        let record = Record::empty(3);
        let view = DetailView::build(&record, &chapters);
        assert!(view.code.is_none());
        assert!(view.footer.is_none());
        assert_eq!(view.answer, "");
    }
}
