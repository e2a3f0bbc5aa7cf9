//! Core pagination arithmetic
//!
//! `Paginator` turns `(total_items, per_page, requested_page)` into the
//! numbers an API handler needs to slice a collection: offset, total pages,
//! previous/next page. The requested page is normalized at construction and
//! every accessor after that is a pure read.

use crate::summary::PageSummary;

/// Pagination state for one request.
///
/// Immutable after construction. The current page is normalized to be inside
/// the bounds of the available pages: a requested page of 0 means "no page
/// specified" and becomes page 1, and a request past the last page becomes
/// the last page.
///
/// # Example
///
/// ```
/// use pagination::Paginator;
///
/// let p = Paginator::new(28, 25, 2);
/// assert_eq!(p.offset(), 25);
/// assert_eq!(p.number_of_pages(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: u32,
    total_items: u64,
    current_page: u32,
}

impl Paginator {
    /// Create a paginator from raw counts and a requested page number.
    ///
    /// Construction never fails. Degenerate inputs are normalized instead:
    /// `requested_page == 0` becomes page 1, a request past the last page is
    /// clamped to the last page, and `per_page == 0` is treated as 1.
    pub fn new(total_items: u64, per_page: u32, requested_page: u32) -> Self {
        let per_page = per_page.max(1);
        let requested_page = requested_page.max(1);
        let total_pages = total_pages(total_items, per_page);

        Self {
            per_page,
            total_items,
            current_page: requested_page.min(total_pages),
        }
    }

    /// The normalized current page, 1-based.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Total number of items across all pages.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Number of items shown per page.
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Zero-based index of the first item on the current page.
    pub fn offset(&self) -> u64 {
        (self.current_page as u64 - 1) * self.per_page as u64
    }

    /// Number of pages needed for `total_items` at `per_page` items each.
    ///
    /// At least 1, even for an empty collection.
    pub fn number_of_pages(&self) -> u32 {
        total_pages(self.total_items, self.per_page)
    }

    /// Page number of the page before the current one.
    ///
    /// Returns 1 when already on the first page, never 0.
    pub fn previous_page(&self) -> u32 {
        if self.current_page <= 1 {
            return 1;
        }

        self.current_page - 1
    }

    /// Page number of the page after the current one.
    ///
    /// Returns the last page when already there.
    pub fn next_page(&self) -> u32 {
        let last = self.number_of_pages();
        if self.current_page >= last {
            return last;
        }

        self.current_page + 1
    }

    /// Whether `page` is the current page. No bounds check on the argument.
    pub fn is_current_page(&self, page: u32) -> bool {
        self.current_page == page
    }

    /// All page numbers, eagerly collected. Eg. `[1, 2, 3, 4, 5]`.
    pub fn pages(&self) -> Vec<u32> {
        (1..=self.number_of_pages()).collect()
    }

    /// Lazy sequence of page numbers from 1 to [`number_of_pages`].
    ///
    /// Useful when building a page list without materializing it. Yields as
    /// both [`Iterator`] and [`futures_util::Stream`], in strictly ascending
    /// order; dropping it early releases everything since values are computed
    /// on demand.
    ///
    /// [`number_of_pages`]: Self::number_of_pages
    pub fn pages_stream(&self) -> PagesStream {
        PagesStream {
            pages: 1..=self.number_of_pages(),
        }
    }

    /// Whether pagination is worth showing, ie. there is more than one page.
    pub fn show(&self) -> bool {
        self.number_of_pages() > 1
    }

    /// Snapshot all derived values into a serializable [`PageSummary`]
    /// with an empty payload.
    pub fn to_summary<T>(&self) -> PageSummary<T> {
        PageSummary {
            per_page: self.per_page(),
            total_items: self.total_items(),
            current_page: self.current_page(),
            offset: self.offset(),
            next_page: self.next_page(),
            previous_page: self.previous_page(),
            total_pages: self.number_of_pages(),
            data: Vec::new(),
        }
    }

    /// Like [`to_summary`], but with the current page of results attached.
    ///
    /// [`to_summary`]: Self::to_summary
    pub fn to_summary_with_data<T>(&self, data: Vec<T>) -> PageSummary<T> {
        PageSummary {
            data,
            ..self.to_summary()
        }
    }
}

fn total_pages(total_items: u64, per_page: u32) -> u32 {
    let pages = ((total_items as f64) / (per_page as f64)).ceil() as u32;
    pages.max(1)
}

/// Lazy iterator over page numbers, returned by [`Paginator::pages_stream`].
///
/// One-shot and finite: yields `1..=number_of_pages()` then stays exhausted.
#[derive(Debug, Clone)]
pub struct PagesStream {
    pages: std::ops::RangeInclusive<u32>,
}

impl Iterator for PagesStream {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.pages.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pages.size_hint()
    }
}

impl ExactSizeIterator for PagesStream {}

impl std::iter::FusedIterator for PagesStream {}

impl futures_util::Stream for PagesStream {
    type Item = u32;

    fn poll_next(
        self: std::pin::Pin<&mut Self>,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<u32>> {
        std::task::Poll::Ready(self.get_mut().next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        Iterator::size_hint(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_page_normalization() {
        let zero = Paginator::new(10, 2, 0);
        assert_eq!(zero.current_page(), 1, "page 0 should mean first page");

        let upper = Paginator::new(10, 2, 7);
        assert_eq!(upper.current_page(), 5, "overflow should clamp to last page");

        let none = Paginator::new(73, 25, 2);
        assert_eq!(none.current_page(), 2, "in-range page should pass through");
    }

    #[test]
    fn test_offset() {
        assert_eq!(Paginator::new(28, 25, 2).offset(), 25);
        assert_eq!(Paginator::new(10, 3, 1).offset(), 0);
        assert_eq!(Paginator::new(10, 3, 4).offset(), 9);
    }

    #[test]
    fn test_number_of_pages() {
        assert_eq!(Paginator::new(28, 25, 2).number_of_pages(), 2);
        assert_eq!(Paginator::new(10, 3, 1).number_of_pages(), 4);
        assert_eq!(Paginator::new(10, 25, 1).number_of_pages(), 1);
    }

    #[test]
    fn test_number_of_pages_empty_collection() {
        let p = Paginator::new(0, 25, 1);
        assert_eq!(p.number_of_pages(), 1);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_zero_per_page_treated_as_one() {
        let p = Paginator::new(10, 0, 3);
        assert_eq!(p.per_page(), 1);
        assert_eq!(p.number_of_pages(), 10);
        assert_eq!(p.current_page(), 3);
        assert_eq!(p.offset(), 2);
    }

    #[test]
    fn test_previous_page() {
        assert_eq!(Paginator::new(28, 25, 2).previous_page(), 1);
        assert_eq!(Paginator::new(10, 3, 1).previous_page(), 1);
        assert_eq!(Paginator::new(101, 25, 5).previous_page(), 4);
    }

    #[test]
    fn test_next_page() {
        assert_eq!(Paginator::new(28, 25, 1).next_page(), 2);
        assert_eq!(Paginator::new(28, 25, 2).next_page(), 2, "last page caps next");
        assert_eq!(Paginator::new(10, 3, 1).next_page(), 2);
        assert_eq!(Paginator::new(101, 25, 3).next_page(), 4);
    }

    #[test]
    fn test_adjacent_pages_stay_in_bounds() {
        for total in [0u64, 1, 10, 28, 73, 101] {
            for per_page in [1u32, 3, 25] {
                for requested in [0u32, 1, 2, 7, 100] {
                    let p = Paginator::new(total, per_page, requested);
                    assert!(p.current_page() >= 1);
                    assert!(p.current_page() <= p.number_of_pages());
                    assert!(p.previous_page() >= 1);
                    assert!(p.next_page() <= p.number_of_pages());
                    assert_eq!(
                        p.offset(),
                        (p.current_page() as u64 - 1) * p.per_page() as u64
                    );
                }
            }
        }
    }

    #[test]
    fn test_is_current_page() {
        let p = Paginator::new(10, 2, 3);
        assert!(p.is_current_page(3));
        assert!(!p.is_current_page(2));
        assert!(!p.is_current_page(99));
    }

    #[test]
    fn test_pages() {
        assert_eq!(Paginator::new(10, 2, 1).pages(), vec![1, 2, 3, 4, 5]);
        assert_eq!(Paginator::new(0, 2, 1).pages(), vec![1]);
    }

    #[test]
    fn test_pages_stream_matches_pages() {
        let p = Paginator::new(10, 2, 1);
        let streamed: Vec<u32> = p.pages_stream().collect();
        assert_eq!(streamed, p.pages());
        assert_eq!(p.pages_stream().len(), p.number_of_pages() as usize);
    }

    #[test]
    fn test_pages_stream_partial_consumption() {
        let p = Paginator::new(100, 10, 1);
        let mut stream = p.pages_stream();
        assert_eq!(stream.next(), Some(1));
        assert_eq!(stream.next(), Some(2));
        assert_eq!(stream.len(), 8);
        // Dropping here must not hang or leak; nothing runs in the background.
        drop(stream);
    }

    #[test]
    fn test_pages_stream_exhaustion_is_fused() {
        let p = Paginator::new(3, 2, 1);
        let mut stream = p.pages_stream();
        assert_eq!(stream.by_ref().count(), 2);
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None);
        assert_eq!(stream.len(), 0);
    }

    #[tokio::test]
    async fn test_pages_stream_as_async_stream() {
        let p = Paginator::new(10, 3, 1);
        let mut stream = p.pages_stream();

        let mut collected = Vec::new();
        while let Some(page) = futures_util::StreamExt::next(&mut stream).await {
            collected.push(page);
        }

        assert_eq!(collected, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_show() {
        assert!(Paginator::new(28, 25, 2).show());
        assert!(!Paginator::new(10, 25, 1).show());
        assert!(!Paginator::new(0, 25, 1).show());
    }
}
