//! Stateless page slicing over a fixed result list.

use crate::domain::ValidationError;
use crate::error::OutOfRangeError;

/// Splits a fixed, ordered item list into 1-based pages of a fixed size.
///
/// The paginator only computes slices; walking from page to page
/// (advance-or-quit prompting) is the caller's control flow.
///
/// # Example
///
/// ```
/// use rolodex::pagination::Paginator;
///
/// let pager = Paginator::new(vec![1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(pager.page_count(), 3);
/// assert_eq!(pager.page(3).unwrap(), &[5]);
/// ```
#[derive(Debug)]
pub struct Paginator<T> {
    items: Vec<T>,
    page_size: usize,
}

impl<T> Paginator<T> {
    /// Create a paginator over `items` with the given page size.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPageSize` when `page_size` is zero.
    pub fn new(items: Vec<T>, page_size: usize) -> Result<Self, ValidationError> {
        if page_size == 0 {
            return Err(ValidationError::InvalidPageSize(page_size));
        }
        Ok(Self { items, page_size })
    }

    /// Total number of items across all pages.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of pages: `ceil(len / page_size)`. Zero for an empty list.
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// The slice of items on 1-based page `n`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRangeError` when `n` is 0 or exceeds `page_count`.
    pub fn page(&self, n: usize) -> Result<&[T], OutOfRangeError> {
        let page_count = self.page_count();
        if n < 1 || n > page_count {
            return Err(OutOfRangeError { page: n, page_count });
        }
        let start = (n - 1) * self.page_size;
        let end = (start + self.page_size).min(self.items.len());
        Ok(&self.items[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_page_size_fails() {
        let err = Paginator::new(vec![1, 2, 3], 0).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPageSize(0));
    }

    #[test]
    fn test_page_count_rounds_up() {
        let pager = Paginator::new((0..10).collect::<Vec<_>>(), 3).unwrap();
        assert_eq!(pager.page_count(), 4);
    }

    #[test]
    fn test_exact_division() {
        let pager = Paginator::new((0..9).collect::<Vec<_>>(), 3).unwrap();
        assert_eq!(pager.page_count(), 3);
        assert_eq!(pager.page(3).unwrap(), &[6, 7, 8]);
    }

    #[test]
    fn test_last_page_is_partial() {
        let pager = Paginator::new((0..10).collect::<Vec<_>>(), 3).unwrap();
        assert_eq!(pager.page(1).unwrap(), &[0, 1, 2]);
        assert_eq!(pager.page(4).unwrap(), &[9]);
    }

    #[test]
    fn test_page_out_of_range_fails() {
        let pager = Paginator::new((0..10).collect::<Vec<_>>(), 3).unwrap();

        let err = pager.page(0).unwrap_err();
        assert_eq!(err, OutOfRangeError { page: 0, page_count: 4 });

        let err = pager.page(5).unwrap_err();
        assert_eq!(err, OutOfRangeError { page: 5, page_count: 4 });
    }

    #[test]
    fn test_empty_items() {
        let pager = Paginator::new(Vec::<i32>::new(), 3).unwrap();
        assert_eq!(pager.page_count(), 0);
        assert!(pager.page(1).is_err());
    }

    #[test]
    fn test_page_size_larger_than_items() {
        let pager = Paginator::new(vec!["a", "b"], 10).unwrap();
        assert_eq!(pager.page_count(), 1);
        assert_eq!(pager.page(1).unwrap(), &["a", "b"]);
    }
}
