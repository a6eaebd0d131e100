//! Chapter definitions and id-range bucketing
//!
//! Chapters are static, defined at startup, and never derived from the
//! dataset. They exist only to bucket records for display: each chapter
//! claims an inclusive id range, and sidebar grouping filters records per
//! chapter independently.

use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordId};

/// A named bucket of records defined by an inclusive id range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Display title
    pub title: String,

    /// Inclusive lower bound of the id range
    pub min_id: RecordId,

    /// Inclusive upper bound of the id range
    pub max_id: RecordId,

    /// Stable identifier ("ch1", "ch2", ...)
    pub slug: String,
}

impl Chapter {
    pub fn new(title: impl Into<String>, min_id: RecordId, max_id: RecordId, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            min_id,
            max_id,
            slug: slug.into(),
        }
    }

    /// Inclusive on both ends
    pub fn contains(&self, id: RecordId) -> bool {
        self.min_id <= id && id <= self.max_id
    }

    /// Records belonging to this chapter, in dataset order
    pub fn records_in<'a>(&'a self, records: &'a [Record]) -> impl Iterator<Item = &'a Record> {
        records.iter().filter(|r| self.contains(r.id))
    }
}

/// The ordered chapter list used to group records for display.
///
/// Ranges are assumed non-overlapping and covering all dataset ids; this is
/// not enforced. A record matching no chapter is silently omitted from the
/// grouping, a record matching several would appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterSet {
    chapters: Vec<Chapter>,
}

impl ChapterSet {
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }

    /// The built-in deck chapters
    pub fn default_set() -> Self {
        Self::new(vec![
            Chapter::new("Core Foundations", 1, 26, "ch1"),
            Chapter::new("Collections & Generics", 27, 51, "ch2"),
            Chapter::new("Functional Java", 52, 76, "ch3"),
            Chapter::new("Concurrency", 77, 101, "ch4"),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.iter()
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// First chapter whose range contains `id`, with its 1-based number
    pub fn chapter_for(&self, id: RecordId) -> Option<(usize, &Chapter)> {
        self.chapters
            .iter()
            .enumerate()
            .find(|(_, c)| c.contains(id))
            .map(|(i, c)| (i + 1, c))
    }

    /// Count of records not covered by any chapter (diagnostics only)
    pub fn uncovered(&self, records: &[Record]) -> usize {
        records
            .iter()
            .filter(|r| self.chapter_for(r.id).is_none())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: RecordId) -> Record {
        Record::empty(id)
    }

    #[test]
    fn test_contains_is_inclusive_on_both_ends() {
        let chapter = Chapter::new("Core", 1, 26, "ch1");
        assert!(chapter.contains(1));
        assert!(chapter.contains(26));
        assert!(!chapter.contains(0));
        assert!(!chapter.contains(27));
    }

    #[test]
    fn test_boundary_ids_bucket_into_exactly_one_chapter() {
        let set = ChapterSet::default_set();
        let records = vec![record(26), record(27)];

        let mut homes: Vec<(RecordId, String)> = Vec::new();
        for chapter in set.iter() {
            for r in chapter.records_in(&records) {
                homes.push((r.id, chapter.slug.clone()));
            }
        }

        assert_eq!(
            homes,
            vec![(26, "ch1".to_string()), (27, "ch2".to_string())]
        );
    }

    #[test]
    fn test_chapter_for_returns_one_based_number() {
        let set = ChapterSet::default_set();
        let (number, chapter) = set.chapter_for(52).unwrap();
        assert_eq!(number, 3);
        assert_eq!(chapter.title, "Functional Java");
    }

    #[test]
    fn test_chapter_for_miss() {
        let set = ChapterSet::default_set();
        assert!(set.chapter_for(999).is_none());
    }

    #[test]
    fn test_uncovered_counts_records_outside_all_ranges() {
        let set = ChapterSet::default_set();
        let records = vec![record(1), record(102), record(999)];
        assert_eq!(set.uncovered(&records), 2);
    }

    #[test]
    fn test_records_in_preserves_dataset_order() {
        let chapter = Chapter::new("Core", 1, 26, "ch1");
        let records = vec![record(5), record(2), record(30), record(11)];
        let ids: Vec<RecordId> = chapter.records_in(&records).map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 2, 11]);
    }
}
