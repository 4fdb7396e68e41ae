//! Pagination metadata for list results.

use serde::{Deserialize, Serialize};

/// Pagination metadata
///
/// `page` and `limit` echo what the caller asked for, unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: i64,
    pub limit: i64,
    pub total: u64,
    pub total_pages: u64,
}

/// A list result: items plus the metadata describing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> Page<T> {
    /// Wrap `data` with metadata computed over `total` items.
    pub fn new(data: Vec<T>, page: i64, limit: i64, total: u64) -> Self {
        Self {
            data,
            pagination: PageMeta::new(page, limit, total),
        }
    }
}

impl PageMeta {
    /// Compute metadata for `total` items.
    ///
    /// A non-positive limit yields zero pages. This intentionally differs from
    /// a floating-point `ceil(total / limit)`, which would report an
    /// unbounded count for `limit == 0` and a negative one for `limit < 0`.
    pub fn new(page: i64, limit: i64, total: u64) -> Self {
        let total_pages = match u64::try_from(limit) {
            Ok(per_page) if per_page > 0 => total.div_ceil(per_page),
            _ => 0,
        };

        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }

    /// Items per page, if the limit is positive and fits in memory indexing.
    pub fn per_page(&self) -> Option<usize> {
        usize::try_from(self.limit).ok().filter(|l| *l > 0)
    }

    /// Zero-based offset of the first item on this page, if the page is addressable.
    pub fn offset(&self) -> Option<usize> {
        let page = usize::try_from(self.page.checked_sub(1)?).ok()?;
        page.checked_mul(self.per_page()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PageMeta::new(1, 10, 0).total_pages, 0);
        assert_eq!(PageMeta::new(1, 10, 10).total_pages, 1);
        assert_eq!(PageMeta::new(1, 10, 11).total_pages, 2);
        assert_eq!(PageMeta::new(1, 3, 7).total_pages, 3);
    }

    #[test]
    fn non_positive_limit_has_no_pages() {
        assert_eq!(PageMeta::new(1, 0, 5).total_pages, 0);
        assert_eq!(PageMeta::new(1, -4, 5).total_pages, 0);
    }

    #[test]
    fn page_and_limit_are_echoed_unclamped() {
        let meta = PageMeta::new(-3, 500, 2);
        assert_eq!(meta.page, -3);
        assert_eq!(meta.limit, 500);
    }

    #[test]
    fn per_page_requires_positive_limit() {
        assert_eq!(PageMeta::new(1, 25, 0).per_page(), Some(25));
        assert_eq!(PageMeta::new(1, 0, 0).per_page(), None);
        assert_eq!(PageMeta::new(1, -5, 0).per_page(), None);
    }

    #[test]
    fn offset_is_only_defined_for_addressable_pages() {
        assert_eq!(PageMeta::new(1, 10, 0).offset(), Some(0));
        assert_eq!(PageMeta::new(3, 10, 0).offset(), Some(20));
        assert_eq!(PageMeta::new(0, 10, 0).offset(), None);
        assert_eq!(PageMeta::new(2, 0, 0).offset(), None);
    }
}
