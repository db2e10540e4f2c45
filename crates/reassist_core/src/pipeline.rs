//! Sort and filter stages for the articles list.
//!
//! Both stages copy their input; records are never modified, only
//! reordered or dropped.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::{PublicationRecord, SortKey, ViewSelection, YearFilter};

/// Returns a sorted copy of `records`. Ties keep their input order.
pub fn sort_publications(records: &[PublicationRecord], key: &SortKey) -> Vec<PublicationRecord> {
    let mut sorted = records.to_vec();
    match key {
        SortKey::Citations => sorted.sort_by(|a, b| b.citation_count.cmp(&a.citation_count)),
        SortKey::Year => sorted.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::Title => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortKey::Unrecognized(_) => {}
    }
    sorted
}

/// Keeps the records whose year passes `filter`, in their given order.
pub fn filter_publications(
    records: &[PublicationRecord],
    filter: &YearFilter,
) -> Vec<PublicationRecord> {
    records
        .iter()
        .filter(|record| filter.retains(record.year))
        .cloned()
        .collect()
}

/// The list the articles tab shows: sorted first, then filtered.
pub fn display_list(
    records: &[PublicationRecord],
    selection: &ViewSelection,
) -> Vec<PublicationRecord> {
    let sorted = sort_publications(records, &selection.sort_key);
    filter_publications(&sorted, &selection.year_filter)
}

/// Locale-style title ordering, compared level by level.
///
/// Base letters first (case and accents folded, with spaces and punctuation
/// ahead of digits and digits ahead of letters), then accents, then case with
/// lowercase first. Code points break any remaining tie so the order is total.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let (a, b) = (CollationUnits::new(a), CollationUnits::new(b));
    a.base_weights()
        .cmp(&b.base_weights())
        .then_with(|| a.accent_weights().cmp(&b.accent_weights()))
        .then_with(|| a.case_weights().cmp(&b.case_weights()))
        .then_with(|| a.text.cmp(b.text))
}

/// A decomposed base character with the combining marks that follow it.
struct CollationUnit {
    base: char,
    marks: Vec<char>,
}

struct CollationUnits<'a> {
    text: &'a str,
    units: Vec<CollationUnit>,
}

impl<'a> CollationUnits<'a> {
    fn new(text: &'a str) -> Self {
        let mut units: Vec<CollationUnit> = Vec::new();
        for c in text.nfkd() {
            match units.last_mut() {
                Some(unit) if is_combining_mark(c) => unit.marks.push(c),
                _ => units.push(CollationUnit {
                    base: c,
                    marks: Vec::new(),
                }),
            }
        }
        Self { text, units }
    }

    fn base_weights(&self) -> Vec<(u8, char)> {
        self.units
            .iter()
            .flat_map(|unit| unit.base.to_lowercase())
            .map(|c| (char_class(c), c))
            .collect()
    }

    fn accent_weights(&self) -> Vec<&[char]> {
        self.units.iter().map(|unit| unit.marks.as_slice()).collect()
    }

    fn case_weights(&self) -> Vec<u8> {
        self.units
            .iter()
            .map(|unit| u8::from(unit.base.is_uppercase()))
            .collect()
    }
}

/// Spaces, punctuation and symbols sort before digits, digits before letters.
fn char_class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}
