//! Pagination helpers for API requests
//!
//! The backend pages with a 1-based `page_number` and a `page_size` capped at
//! 200. It does not report a total count, so a page shorter than the requested
//! size is the only end-of-data signal.

/// Largest page the backend will serve.
pub const MAX_PAGE_SIZE: usize = 200;

/// Upper bound on records returned to a caller by any listing command.
pub const MAX_RESULTS: usize = 100;

/// Page selector for paged endpoints.
///
/// # Example
/// ```ignore
/// let page = PageRequest::first().page_size(50);
/// let next = page.next();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page_number: usize,
    /// Records per page
    pub page_size: usize,
}

impl PageRequest {
    /// The first page at the maximum size.
    pub fn first() -> Self {
        Self {
            page_number: 1,
            page_size: MAX_PAGE_SIZE,
        }
    }

    /// Set the page size, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// The page after this one, same size.
    pub fn next(&self) -> Self {
        Self {
            page_number: self.page_number + 1,
            page_size: self.page_size,
        }
    }

    /// Whether a page holding `received` records is the last one.
    pub fn is_last(&self, received: usize) -> bool {
        received < self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Clamp a caller-supplied limit to [`MAX_RESULTS`].
pub fn bounded_limit(limit: usize) -> usize {
    limit.min(MAX_RESULTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_defaults() {
        let page = PageRequest::first();
        assert_eq!(page.page_number, 1);
        assert_eq!(page.page_size, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::default(), page);
    }

    #[test]
    fn test_page_size_is_clamped() {
        assert_eq!(PageRequest::first().page_size(5000).page_size, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::first().page_size(0).page_size, 1);
        assert_eq!(PageRequest::first().page_size(50).page_size, 50);
    }

    #[test]
    fn test_next_keeps_size() {
        let page = PageRequest::first().page_size(10).next().next();
        assert_eq!(page.page_number, 3);
        assert_eq!(page.page_size, 10);
    }

    #[test]
    fn test_short_page_is_last() {
        let page = PageRequest::first().page_size(10);
        assert!(page.is_last(9));
        assert!(page.is_last(0));
        assert!(!page.is_last(10));
    }

    #[test]
    fn test_bounded_limit() {
        assert_eq!(bounded_limit(5), 5);
        assert_eq!(bounded_limit(100), 100);
        assert_eq!(bounded_limit(5000), 100);
    }
}
