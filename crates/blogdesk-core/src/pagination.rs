//! Page arithmetic for list endpoints.
//!
//! List endpoints take a 1-based `page` and a `limit`. The window computed
//! here is `skip = (page - 1) * limit`. No clamping happens at this level:
//! a zero or negative page yields a negative skip, and it is up to the
//! store adapter to decide how to send that to the database (see
//! [`PageWindow::offset`] and [`PageWindow::row_limit`]).
//!
//! # Example
//!
//! ```
//! use blogdesk_core::pagination::PageWindow;
//!
//! let window = PageWindow::from_page(Some(2), Some(9), 9);
//! assert_eq!(window.skip, 9);
//! assert_eq!(window.limit, Some(9));
//! ```

use serde::Serialize;

/// The slice of a result set a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Rows to skip. May be negative when the caller passed page < 1.
    pub skip: i64,
    /// Maximum rows to return; `None` means unbounded.
    pub limit: Option<i64>,
}

impl PageWindow {
    /// Everything, from the first row.
    pub const fn unbounded() -> Self {
        Self {
            skip: 0,
            limit: None,
        }
    }

    /// Window for a 1-based page. Missing values fall back to page 1 and
    /// `default_limit`.
    pub fn from_page(page: Option<i64>, limit: Option<i64>, default_limit: i64) -> Self {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(default_limit);
        Self {
            skip: page.saturating_sub(1).saturating_mul(limit),
            limit: Some(limit),
        }
    }

    /// Window for endpoints that only paginate when asked to: a positive
    /// `limit` pages, zero or absent returns everything.
    pub fn optional(page: Option<i64>, limit: Option<i64>) -> Self {
        match limit {
            Some(limit) if limit > 0 => Self::from_page(page, Some(limit), limit),
            _ => Self::unbounded(),
        }
    }

    /// OFFSET to send to the store. Never negative.
    pub fn offset(&self) -> i64 {
        self.skip.max(0)
    }

    /// LIMIT to send to the store. Non-positive limits mean no limit, the
    /// same as a document store's `limit(0)`.
    pub fn row_limit(&self) -> Option<i64> {
        self.limit.filter(|limit| *limit > 0)
    }
}

/// Body of a paginated list response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub docs: Vec<T>,
    #[serde(rename = "totalDocs")]
    pub total_docs: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_page() {
        let window = PageWindow::from_page(Some(2), Some(9), 9);
        assert_eq!(window.skip, 9);
        assert_eq!(window.limit, Some(9));
    }

    #[test]
    fn test_defaults() {
        let window = PageWindow::from_page(None, None, 10);
        assert_eq!(window.skip, 0);
        assert_eq!(window.limit, Some(10));
    }

    #[test]
    fn test_page_zero_is_not_clamped() {
        let window = PageWindow::from_page(Some(0), Some(9), 9);
        assert_eq!(window.skip, -9);
        assert_eq!(window.offset(), 0);
    }

    #[test]
    fn test_non_positive_limit_means_unbounded_rows() {
        let window = PageWindow::from_page(Some(1), Some(0), 9);
        assert_eq!(window.limit, Some(0));
        assert_eq!(window.row_limit(), None);

        let window = PageWindow::from_page(Some(1), Some(-5), 9);
        assert_eq!(window.row_limit(), None);
    }

    #[test]
    fn test_optional_window() {
        assert_eq!(PageWindow::optional(Some(3), None), PageWindow::unbounded());
        assert_eq!(PageWindow::optional(Some(3), Some(0)), PageWindow::unbounded());

        let window = PageWindow::optional(Some(3), Some(5));
        assert_eq!(window.skip, 10);
        assert_eq!(window.row_limit(), Some(5));
    }

    #[test]
    fn test_huge_page_saturates() {
        let window = PageWindow::from_page(Some(i64::MAX), Some(100), 9);
        assert_eq!(window.skip, i64::MAX);
    }

    #[test]
    fn test_paginated_serializes_total_docs() {
        let page = Paginated {
            docs: vec!["a", "b"],
            total_docs: 12,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalDocs"], 12);
        assert_eq!(json["docs"].as_array().unwrap().len(), 2);
    }
}
