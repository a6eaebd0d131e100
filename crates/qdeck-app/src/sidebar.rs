//! Sidebar row derivation
//!
//! The sidebar is never patched incrementally: every derivation clears and
//! rebuilds the full row list from the record collection and the static
//! chapter definitions, so repeated derivation with the same inputs yields
//! the same rows.

use qdeck_core::chapter::ChapterSet;
use qdeck_core::dataset::Dataset;
use qdeck_core::markup::question_number;
use qdeck_core::record::RecordId;

/// One row of the navigation list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarRow {
    /// Chapter header ("Chapter 2 — Collections & Generics")
    ChapterHeader {
        /// 1-based chapter number
        number: usize,
        title: String,
    },

    /// Selectable record entry
    Entry {
        id: RecordId,
        /// Zero-padded id label ("05")
        label: String,
        question: String,
        /// Exactly one entry is active, the one matching the active id
        active: bool,
    },
}

/// Build the full sidebar row list.
///
/// Per chapter: one header row, then one entry per record with
/// `min_id <= id <= max_id`, in dataset order. Filtering is independent per
/// chapter -- a record matching no chapter is silently omitted, a record
/// matching several (overlapping ranges) appears once per match.
pub fn build_rows(
    dataset: &Dataset,
    chapters: &ChapterSet,
    active_id: Option<RecordId>,
) -> Vec<SidebarRow> {
    let mut rows = Vec::new();

    for (index, chapter) in chapters.iter().enumerate() {
        rows.push(SidebarRow::ChapterHeader {
            number: index + 1,
            title: chapter.title.clone(),
        });

        for record in chapter.records_in(dataset.records()) {
            rows.push(SidebarRow::Entry {
                id: record.id,
                label: question_number(record.id),
                question: record.question.clone(),
                active: active_id == Some(record.id),
            });
        }
    }

    rows
}
