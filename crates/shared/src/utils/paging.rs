pub const MAX_PAGE_SIZE: i64 = 100;

/// Offset/limit window for a 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub limit: i64,
    pub offset: i64,
}

impl PageWindow {
    pub fn new(page: i64, page_size: Option<i64>, default_size: i64) -> Self {
        let page = page.max(1);
        let limit = page_size
            .filter(|size| *size > 0)
            .unwrap_or(default_size)
            .min(MAX_PAGE_SIZE);

        Self {
            page,
            limit,
            offset: limit.saturating_mul(page - 1),
        }
    }

    /// Row count to request when probing for a following page.
    pub fn probe_limit(&self) -> i64 {
        self.limit + 1
    }

    /// Trims an over-fetched result back to the page size and reports whether
    /// another page exists.
    pub fn split_next_page<T>(&self, mut rows: Vec<T>) -> (Vec<T>, bool) {
        let limit = self.limit as usize;
        let has_next = rows.len() > limit;
        rows.truncate(limit);
        (rows, has_next)
    }

    pub fn total_pages(&self, total_items: i64) -> i64 {
        if total_items <= 0 {
            0
        } else {
            (total_items + self.limit - 1) / self.limit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        let window = PageWindow::new(1, None, 20);
        assert_eq!(window, PageWindow { page: 1, limit: 20, offset: 0 });
    }

    #[test]
    fn invalid_inputs_fall_back_to_defaults() {
        assert_eq!(PageWindow::new(0, Some(0), 10).offset, 0);
        assert_eq!(PageWindow::new(-3, Some(-5), 10).limit, 10);
        assert_eq!(PageWindow::new(3, Some(5_000), 10).limit, MAX_PAGE_SIZE);
        assert_eq!(PageWindow::new(3, Some(5), 10).offset, 10);
    }

    #[test]
    fn huge_page_numbers_saturate_instead_of_overflowing() {
        let window = PageWindow::new(i64::MAX, Some(10), 10);
        assert_eq!(window.limit, 10);
        assert_eq!(window.offset, i64::MAX);
    }

    #[test]
    fn over_fetch_reports_next_page_only_when_more_rows_exist() {
        let window = PageWindow::new(1, Some(3), 20);
        assert_eq!(window.probe_limit(), 4);

        let (rows, has_next) = window.split_next_page(vec![1, 2, 3, 4]);
        assert_eq!(rows, vec![1, 2, 3]);
        assert!(has_next);

        let (rows, has_next) = window.split_next_page(vec![1, 2, 3]);
        assert_eq!(rows.len(), 3);
        assert!(!has_next);
    }

    #[test]
    fn total_pages_rounds_up() {
        let window = PageWindow::new(1, Some(10), 10);
        assert_eq!(window.total_pages(0), 0);
        assert_eq!(window.total_pages(10), 1);
        assert_eq!(window.total_pages(11), 2);
    }
}
