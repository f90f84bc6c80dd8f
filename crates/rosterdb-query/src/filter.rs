use rosterdb_core::types::{QueryRequest, StudentRecord};

use crate::fuzzy::FuzzyMatcher;

/// Records that satisfy every predicate of `request`, in their original order.
pub fn filter<'a>(records: &'a [StudentRecord], request: &QueryRequest) -> Vec<&'a StudentRecord> {
    filter_with(&FuzzyMatcher::default(), records, request)
}

pub fn filter_with<'a>(
    matcher: &FuzzyMatcher,
    records: &'a [StudentRecord],
    request: &QueryRequest,
) -> Vec<&'a StudentRecord> {
    records.iter().filter(|r| accepts(matcher, r, request)).collect()
}

/// Search text matches roll number or name; department and year are exact.
pub fn accepts(matcher: &FuzzyMatcher, record: &StudentRecord, request: &QueryRequest) -> bool {
    let search = &request.search_text;
    let matches_search = search.is_empty()
        || matcher.matches(search, &record.roll_number)
        || matcher.matches(search, &record.name);

    let matches_department = request
        .department_filter()
        .map_or(true, |d| d == record.department);
    let matches_year = request.year.map_or(true, |y| y == record.year);

    matches_search && matches_department && matches_year
}
