//! Paging of ordered listings.

use serde::{Deserialize, Serialize};

/// Page index used when a request leaves it out.
pub const DEFAULT_PAGE_NUMBER: usize = 0;

/// Page size used when a request leaves it out.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Requested page. Absent fields fall back to defaults.
///
/// # Examples
///
/// ```rust
/// use zzroster::PageRequest;
///
/// let request = PageRequest::default();
/// assert_eq!(request.number(), 0);
/// assert_eq!(request.size_or(3), 3);
///
/// let request = PageRequest::new(2, 10);
/// assert_eq!(request.number(), 2);
/// assert_eq!(request.size_or(3), 10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRequest {
    pub page_number: Option<usize>,
    pub page_size: Option<usize>,
}

impl PageRequest {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number: Some(page_number),
            page_size: Some(page_size),
        }
    }

    pub fn number(&self) -> usize {
        self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER)
    }

    pub fn size_or(&self, default_size: usize) -> usize {
        self.page_size.unwrap_or(default_size)
    }
}

/// Slice `[page_number * page_size, page_number * page_size + page_size)`
/// out of `records`, clipped to its length.
///
/// A start past the end yields an empty page.
///
/// # Examples
///
/// ```rust
/// use zzroster::page::page;
///
/// let items: Vec<u32> = (1..=10).collect();
/// assert_eq!(page(items.clone(), 0, 3), vec![1, 2, 3]);
/// assert_eq!(page(items.clone(), 3, 3), vec![10]);
/// assert!(page(items, 10, 3).is_empty());
/// ```
pub fn page<T>(records: Vec<T>, page_number: usize, page_size: usize) -> Vec<T> {
    let from = page_number.saturating_mul(page_size);
    if from >= records.len() {
        return Vec::new();
    }
    records.into_iter().skip(from).take(page_size).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last_pages() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(page(items.clone(), 0, 3), vec![0, 1, 2]);
        assert_eq!(page(items.clone(), 1, 3), vec![3, 4, 5]);
        assert_eq!(page(items, 3, 3), vec![9]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<u32> = (0..10).collect();
        assert!(page(items.clone(), 10, 3).is_empty());
        assert!(page(items, usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn test_zero_page_size_is_empty() {
        let items: Vec<u32> = (0..4).collect();
        assert!(page(items, 0, 0).is_empty());
    }

    #[test]
    fn test_request_defaults() {
        let request = PageRequest {
            page_number: None,
            page_size: Some(5),
        };
        assert_eq!(request.number(), DEFAULT_PAGE_NUMBER);
        assert_eq!(request.size_or(DEFAULT_PAGE_SIZE), 5);
        assert_eq!(PageRequest::default().size_or(DEFAULT_PAGE_SIZE), 3);
    }
}
