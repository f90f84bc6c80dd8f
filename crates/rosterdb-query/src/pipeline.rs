use tracing::debug;

use rosterdb_core::error::{Error, Result};
use rosterdb_core::types::{PageResult, QueryRequest, StudentRecord};

use crate::filter::filter_with;
use crate::fuzzy::{FallbackPolicy, FuzzyMatcher};
use crate::paginate::paginate;
use crate::sort::sort;

/// Filter, then sort, then paginate. The order is fixed: sorting sees only
/// matching records and page N is always the Nth window of the final order.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryPipeline {
    matcher: FuzzyMatcher,
}

impl QueryPipeline {
    pub fn new(matcher: FuzzyMatcher) -> Self { Self { matcher } }

    pub fn with_policy(policy: FallbackPolicy) -> Self { Self::new(FuzzyMatcher::new(policy)) }

    pub fn run(&self, records: &[StudentRecord], request: &QueryRequest) -> Result<PageResult> {
        if request.page_size == 0 {
            return Err(Error::InvalidPageSize(request.page_size));
        }

        let mut matched = filter_with(&self.matcher, records, request);
        let total_matches = matched.len();
        debug!(total = records.len(), matched = total_matches, search = %request.search_text, "filtered records");

        sort(&mut matched, request.sort);

        let page = paginate(&matched, request.page, request.page_size);
        if i64::try_from(page.current_page).map_or(true, |p| p != request.page) {
            debug!(requested = request.page, served = page.current_page, total_pages = page.total_pages, "clamped page");
        }

        Ok(PageResult {
            items: page.items.into_iter().cloned().collect(),
            total_matches,
            total_pages: page.total_pages,
            current_page: page.current_page,
            page_size: request.page_size,
            total_records: records.len(),
        })
    }
}

/// Run one query with the default fuzzy policy.
pub fn run_query(records: &[StudentRecord], request: &QueryRequest) -> Result<PageResult> {
    QueryPipeline::default().run(records, request)
}
