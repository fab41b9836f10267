//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::error::{DomainError, DomainResult};
use crate::messages::INVALID_PARAMETERS;

/// Pagination query parameters (`?page=0&size=10`), 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct PageRequest {
    /// Requested page, starting at 0
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of records per page (capped at 100)
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PageRequest {
    /// Check the request and cap the size at the maximum.
    ///
    /// A page size of zero can never produce a page and is rejected.
    pub fn normalized(page: u64, size: u64) -> DomainResult<Self> {
        if size == 0 {
            return Err(DomainError::invalid_argument(INVALID_PARAMETERS));
        }

        Ok(Self {
            page,
            size: size.min(MAX_PAGE_SIZE),
        })
    }

    /// Number of records to skip, `None` when it does not fit in a `u64`
    pub fn offset(&self) -> Option<u64> {
        self.page.checked_mul(self.size)
    }

    /// Whether the requested page lies past the last page of `pagination`
    pub fn is_beyond(&self, pagination: &PaginationInfo) -> bool {
        self.page >= pagination.total_pages()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Pagination metadata attached to list envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    total_items: u64,
    total_pages: u64,
    current_page: u64,
}

impl PaginationInfo {
    /// Compute the metadata for `current_page` of a collection of `total_items`.
    pub fn new(total_items: u64, page_size: u64, current_page: u64) -> DomainResult<Self> {
        if page_size == 0 {
            return Err(DomainError::invalid_argument(INVALID_PARAMETERS));
        }

        Ok(Self {
            total_items,
            total_pages: total_items.div_ceil(page_size),
            current_page,
        })
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let info = PaginationInfo::new(21, 10, 2).unwrap();
        assert_eq!(info.total_items(), 21);
        assert_eq!(info.total_pages(), 3);
        assert_eq!(info.current_page(), 2);
    }

    #[test]
    fn test_empty_collection_has_no_pages() {
        let info = PaginationInfo::new(0, 10, 0).unwrap();
        assert_eq!(info.total_pages(), 0);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(matches!(
            PaginationInfo::new(5, 0, 0),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(PageRequest::normalized(0, 0).is_err());
    }

    #[test]
    fn test_page_size_capped() {
        let request = PageRequest::normalized(3, 500).unwrap();
        assert_eq!(request.size, MAX_PAGE_SIZE);
        assert_eq!(request.offset(), Some(300));
    }

    #[test]
    fn test_huge_page_has_no_offset() {
        let request = PageRequest::normalized(u64::MAX / 10, 100).unwrap();
        assert_eq!(request.offset(), None);

        let info = PaginationInfo::new(1, request.size, request.page).unwrap();
        assert!(request.is_beyond(&info));
    }

    #[test]
    fn test_last_page_is_not_beyond() {
        let info = PaginationInfo::new(5, 2, 2).unwrap();
        assert!(!PageRequest::normalized(2, 2).unwrap().is_beyond(&info));
        assert!(PageRequest::normalized(3, 2).unwrap().is_beyond(&info));
    }

    #[test]
    fn test_query_defaults() {
        let request: PageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, PageRequest::default());
    }
}
