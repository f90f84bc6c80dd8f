//! Stable single-field ordering of records.

use std::borrow::Borrow;
use std::cmp::Ordering;

use feruca::Collator;

use rosterdb_core::types::{SortDirection, SortField, SortSpec, StudentRecord};

/// Sort in place. `slice::sort_by` is stable, and descending order flips the
/// comparator rather than the output, so equal keys keep their prior order
/// in both directions.
pub fn sort<R: Borrow<StudentRecord>>(records: &mut [R], spec: SortSpec) {
    let mut collator = Collator::default();
    records.sort_by(|a, b| compare_with(&mut collator, a.borrow(), b.borrow(), spec));
}

pub fn sorted<R: Borrow<StudentRecord>>(mut records: Vec<R>, spec: SortSpec) -> Vec<R> {
    sort(&mut records, spec);
    records
}

pub fn compare(a: &StudentRecord, b: &StudentRecord, spec: SortSpec) -> Ordering {
    compare_with(&mut Collator::default(), a, b, spec)
}

fn compare_with(collator: &mut Collator, a: &StudentRecord, b: &StudentRecord, spec: SortSpec) -> Ordering {
    let ord = match spec.field {
        SortField::Score => a.score.total_cmp(&b.score),
        SortField::Name => collator.collate(&a.name, &b.name),
    };
    match spec.direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

/// Root-locale (CLDR) ordering of two names: base letters first, then
/// accents, then case with lowercase first.
pub fn collate(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}
