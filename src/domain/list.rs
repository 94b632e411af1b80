//! Types shared by every paginated list.

use serde::{Deserialize, Serialize};

/// Records that carry a stable identity used for row navigation.
pub trait Identified {
    fn id(&self) -> i32;
}

/// Single-valued constraint narrowing a list request.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ListFilter {
    #[default]
    All,
    Value(String),
}

impl ListFilter {
    /// Parses a filter control value, treating `"all"` and blanks as no filter.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == "all" {
            ListFilter::All
        } else {
            ListFilter::Value(value.to_string())
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            ListFilter::All => None,
            ListFilter::Value(value) => Some(value),
        }
    }
}

impl From<&str> for ListFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// Page and filter a list is currently showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub filter: ListFilter,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            filter: ListFilter::All,
        }
    }
}

impl ListQuery {
    pub fn new(page: usize, filter: impl Into<ListFilter>) -> Self {
        Self {
            page: page.max(1),
            filter: filter.into(),
        }
    }
}

/// Largest page count a list response may report.
pub const MAX_TOTAL_PAGES: usize = 10_000;

/// Pagination descriptor returned next to every list page.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl PaginationInfo {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            total_count: None,
            limit: None,
        }
    }

    /// Whether the page count is small enough to build controls for.
    pub fn is_within_bounds(&self) -> bool {
        self.total_pages <= MAX_TOTAL_PAGES
    }

    /// Clamps the current page into `1..=max(total_pages, 1)`.
    pub fn normalized(self) -> Self {
        let last = self.total_pages.max(1);
        Self {
            current_page: self.current_page.clamp(1, last),
            ..self
        }
    }
}

/// One page of list items.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_means_no_filter() {
        assert_eq!(ListFilter::parse("all"), ListFilter::All);
        assert_eq!(ListFilter::parse("  "), ListFilter::All);
        assert_eq!(ListFilter::parse("finished").value(), Some("finished"));
    }

    #[test]
    fn normalized_clamps_current_page() {
        assert_eq!(PaginationInfo::new(5, 3).normalized().current_page, 3);
        assert_eq!(PaginationInfo::new(0, 0).normalized().current_page, 1);
        assert_eq!(PaginationInfo::new(2, 4).normalized().current_page, 2);
    }

    #[test]
    fn page_count_is_bounded() {
        assert!(PaginationInfo::new(1, 0).is_within_bounds());
        assert!(PaginationInfo::new(1, MAX_TOTAL_PAGES).is_within_bounds());
        assert!(!PaginationInfo::new(1, usize::MAX).is_within_bounds());
    }

    #[test]
    fn pagination_reads_backend_keys() {
        let info: PaginationInfo = serde_json::from_str(
            r#"{"currentPage": 2, "totalPages": 7, "totalCount": 13, "limit": 2}"#,
        )
        .unwrap();
        assert_eq!(info.current_page, 2);
        assert_eq!(info.total_pages, 7);
        assert_eq!(info.total_count, Some(13));
    }
}
