//! Page windows over an ordered result and the pager's page-number strip.

use std::fmt;

/// Pages shown on each side of the current page in [`page_markers`].
pub const PAGE_WINDOW: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
    pub current_page: usize,
}

/// `max(1, ceil(len / page_size))`, so an empty result still has page 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Clamp any requested page number into `1..=total_pages`.
pub fn clamp_page(page: i64, total_pages: usize) -> usize {
    let last = i64::try_from(total_pages.max(1)).unwrap_or(i64::MAX);
    // 1..=last fits in usize
    page.clamp(1, last) as usize
}

/// The `current_page`-th contiguous window of `page_size` records. The last
/// page is shorter when `records.len()` is not a multiple of `page_size`.
pub fn paginate<T: Clone>(records: &[T], page: i64, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(records.len(), page_size);
    let current_page = clamp_page(page, total_pages);

    let start = ((current_page - 1) * page_size).min(records.len());
    let end = start.saturating_add(page_size).min(records.len());

    Page { items: records[start..end].to_vec(), total_pages, current_page }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{}", n),
            PageMarker::Ellipsis => f.write_str("..."),
        }
    }
}

/// Compact page strip: the first page, [`PAGE_WINDOW`] pages either side of
/// `current`, the last page, and an ellipsis wherever pages are skipped.
///
/// Ten pages viewed at page 5 give `1 ... 3 4 5 6 7 ... 10`.
pub fn page_markers(current: usize, total: usize) -> Vec<PageMarker> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let window_start = current.saturating_sub(PAGE_WINDOW).max(2);
    let window_end = (current + PAGE_WINDOW).min(total - 1);

    let mut markers = vec![PageMarker::Page(1)];
    if current > PAGE_WINDOW + 2 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.extend((window_start..=window_end).map(PageMarker::Page));

    if current + PAGE_WINDOW + 1 < total {
        markers.push(PageMarker::Ellipsis);
        markers.push(PageMarker::Page(total));
    } else if total > 1 {
        markers.push(PageMarker::Page(total));
    }
    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageMarker::{Ellipsis, Page as P};

    #[test]
    fn total_pages_never_zero() {
        assert_eq!(total_pages(0, 8), 1);
        assert_eq!(total_pages(8, 8), 1);
        assert_eq!(total_pages(9, 8), 2);
        assert_eq!(total_pages(20, 8), 3);
    }

    #[test]
    fn clamp_handles_extremes() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(-7, 3), 1);
        assert_eq!(clamp_page(i64::MAX, 3), 3);
        assert_eq!(clamp_page(i64::MIN, 1), 1);
        assert_eq!(clamp_page(2, 3), 2);
    }

    #[test]
    fn last_page_is_short() {
        let data: Vec<u32> = (1..=20).collect();
        let page = paginate(&data, 3, 8);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec![17, 18, 19, 20]);
    }

    #[test]
    fn empty_input_serves_empty_first_page() {
        let data: Vec<u32> = Vec::new();
        let page = paginate(&data, 4, 8);
        assert_eq!(page, Page { items: vec![], total_pages: 1, current_page: 1 });
    }

    #[test]
    fn markers_with_gaps_on_both_sides() {
        assert_eq!(page_markers(5, 10), vec![P(1), Ellipsis, P(3), P(4), P(5), P(6), P(7), Ellipsis, P(10)]);
    }

    #[test]
    fn markers_near_edges() {
        assert_eq!(page_markers(1, 1), vec![P(1)]);
        assert_eq!(page_markers(1, 2), vec![P(1), P(2)]);
        assert_eq!(page_markers(1, 10), vec![P(1), P(2), P(3), Ellipsis, P(10)]);
        assert_eq!(page_markers(4, 10), vec![P(1), P(2), P(3), P(4), P(5), P(6), Ellipsis, P(10)]);
        assert_eq!(page_markers(7, 10), vec![P(1), Ellipsis, P(5), P(6), P(7), P(8), P(9), P(10)]);
        assert_eq!(page_markers(10, 10), vec![P(1), Ellipsis, P(8), P(9), P(10)]);
    }

    #[test]
    fn markers_render_as_text() {
        let text: Vec<String> = page_markers(5, 10).iter().map(ToString::to_string).collect();
        assert_eq!(text.join(" "), "1 ... 3 4 5 6 7 ... 10");
    }
}
