//! Pagination arithmetic shared by server-driven and local tables.
//! Pages are 1-based, as on the wire.

/// Page sizes offered by the page-size selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 30, 50];

pub const DEFAULT_PAGE_SIZE: usize = 20;

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

/// Clamps a requested page into `1..=pages` (or 1 when there are no pages)
pub fn clamp_page(page: usize, pages: usize) -> usize {
    page.clamp(1, pages.max(1))
}

/// 1-based inclusive range of rows shown on `page`, `None` when empty
pub fn shown_range(page: usize, page_size: usize, total: usize) -> Option<(usize, usize)> {
    if total == 0 || page_size == 0 {
        return None;
    }
    let first = (page.max(1) - 1).saturating_mul(page_size) + 1;
    if first > total {
        return None;
    }
    Some((first, (first + page_size - 1).min(total)))
}

/// Unknown sizes snap back to the default
pub fn normalize_page_size(size: usize) -> usize {
    if PAGE_SIZE_OPTIONS.contains(&size) {
        size
    } else {
        DEFAULT_PAGE_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_shown_range() {
        assert_eq!(shown_range(1, 20, 45), Some((1, 20)));
        assert_eq!(shown_range(3, 20, 45), Some((41, 45)));
        assert_eq!(shown_range(4, 20, 45), None);
        assert_eq!(shown_range(1, 20, 0), None);
    }

    #[test]
    fn test_normalize_page_size() {
        assert_eq!(normalize_page_size(30), 30);
        assert_eq!(normalize_page_size(100), DEFAULT_PAGE_SIZE);
    }
}
