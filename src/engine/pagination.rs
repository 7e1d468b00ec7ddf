// src/engine/pagination.rs

use std::ops::Range;

/// Number of pages needed for `len` items; never less than one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Pulls `page` into `[1, total_pages]`.
pub fn clamp_page(page: i64, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1) as i64) as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    Previous,
    Next,
    To(i64),
}

/// Current position within a result set. `1 <= current_page <= total_pages`
/// holds for every value built through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl PaginationState {
    pub fn new(result_count: usize, page_size: usize, requested_page: i64) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_pages(result_count, page_size);
        Self {
            current_page: clamp_page(requested_page, total_pages),
            page_size,
            total_pages,
        }
    }

    pub fn navigate(self, nav: PageNav) -> Self {
        let current_page = match nav {
            PageNav::Previous if self.current_page > 1 => self.current_page - 1,
            PageNav::Next if self.current_page < self.total_pages => self.current_page + 1,
            PageNav::Previous | PageNav::Next => self.current_page,
            PageNav::To(page) => clamp_page(page, self.total_pages),
        };
        Self {
            current_page,
            ..self
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Index range of the current page within a list of `len` items.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }
}

#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
}

/// Slices `items` to the requested page, clamping out-of-range requests.
pub fn paginate<T>(items: &[T], page_size: usize, current_page: i64) -> Page<'_, T> {
    let state = PaginationState::new(items.len(), page_size, current_page);
    Page {
        items: &items[state.range(items.len())],
        page: state.current_page,
        total_pages: state.total_pages,
    }
}
