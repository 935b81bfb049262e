//! Pagination
//!
//! 1-indexed page arithmetic shared by the post list and the accommodation
//! list endpoints (`?page=N`).

use serde::Serialize;

/// 1 ページあたりの最大件数
pub const MAX_PAGE_SIZE: u32 = 100;

/// ページ指定（1 始まり）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// ページ番号とページサイズから作成
    ///
    /// `page` は 1 未満なら 1、`page_size` は 1..=[`MAX_PAGE_SIZE`] に丸めます。
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// クエリ文字列の `page` 値から作成
    ///
    /// 数値として解釈できない値・0 以下の値は 1 ページ目として扱います。
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::pagination::PageRequest;
    /// assert_eq!(PageRequest::from_query(Some("3"), 9).page(), 3);
    /// assert_eq!(PageRequest::from_query(Some("abc"), 9).page(), 1);
    /// assert_eq!(PageRequest::from_query(None, 9).page(), 1);
    /// ```
    pub fn from_query(page: Option<&str>, page_size: u32) -> Self {
        let page = page
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .map(|p| u32::try_from(p).unwrap_or(u32::MAX))
            .unwrap_or(1);
        Self::new(page, page_size)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// SQL の `OFFSET` 値
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.page_size)
    }

    /// SQL の `LIMIT` 値
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

/// 総件数から総ページ数を計算（`ceil(count / page_size)`）
pub fn total_pages(total_count: i64, page_size: u32) -> u32 {
    if total_count <= 0 || page_size == 0 {
        return 0;
    }
    let size = i64::from(page_size);
    let pages = (total_count + size - 1) / size;
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// ページング済みの結果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total_count: i64,
    pub total_pages: u32,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_count: i64) -> Self {
        Self {
            items,
            page: request.page(),
            page_size: request.page_size(),
            total_count,
            total_pages: total_pages(total_count, request.page_size()),
        }
    }

    /// 要素型を変換（DTO への詰め替え用）
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_zero_based() {
        assert_eq!(PageRequest::new(1, 2).offset(), 0);
        assert_eq!(PageRequest::new(3, 2).offset(), 4);
        assert_eq!(PageRequest::new(3, 2).limit(), 2);
    }

    #[test]
    fn test_page_and_size_are_clamped() {
        let req = PageRequest::new(0, 0);
        assert_eq!(req.page(), 1);
        assert_eq!(req.page_size(), 1);
        assert_eq!(PageRequest::new(1, 5000).page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_from_query_falls_back_to_first_page() {
        assert_eq!(PageRequest::from_query(Some("-2"), 9).page(), 1);
        assert_eq!(PageRequest::from_query(Some("0"), 9).page(), 1);
        assert_eq!(PageRequest::from_query(Some(""), 9).page(), 1);
        assert_eq!(PageRequest::from_query(Some(" 4 "), 9).page(), 4);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 9), 0);
        assert_eq!(total_pages(5, 2), 3);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
    }

    #[test]
    fn test_paginated_map_keeps_counts() {
        let page = Paginated::new(vec![1, 2], PageRequest::new(1, 2), 5).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 5);
    }
}
