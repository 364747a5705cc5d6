//! Pager model for the listing footer.

use document_api::Paginated;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One numbered pager button.
pub struct PageButton {
    /// 1-based page.
    pub page: u32,
    /// Whether this is the current page.
    pub current: bool,
}

impl PageButton {
    /// `aria-current` value; only the current page carries the attribute.
    pub fn aria_current(&self) -> Option<&'static str> {
        self.current.then_some("page")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pager state derived from a listing response.
pub struct PagerModel {
    /// Current 1-based page.
    pub current_page: u32,
    /// Number of pages.
    pub total_pages: u32,
}

impl PagerModel {
    /// Builds the pager for a listing page.
    pub fn from_page<T>(page: &Paginated<T>) -> Self {
        Self {
            current_page: page.current_page.max(1),
            total_pages: page.total_pages,
        }
    }

    /// Previous button disabled on page 1.
    pub fn prev_disabled(&self) -> bool {
        self.current_page <= 1
    }

    /// Next button disabled on the last page or when there are no pages.
    pub fn next_disabled(&self) -> bool {
        self.total_pages == 0 || self.current_page >= self.total_pages
    }

    /// Target of the previous button.
    pub fn prev_page(&self) -> Option<u32> {
        (!self.prev_disabled()).then(|| self.current_page - 1)
    }

    /// Target of the next button.
    pub fn next_page(&self) -> Option<u32> {
        (!self.next_disabled()).then(|| self.current_page + 1)
    }

    /// One button per page.
    pub fn buttons(&self) -> Vec<PageButton> {
        (1..=self.total_pages)
            .map(|page| PageButton {
                page,
                current: page == self.current_page,
            })
            .collect()
    }
}

/// Footer caption (`Show 10 rows per page`).
pub fn rows_per_page_caption(page_size: u32) -> String {
    format!("Show {page_size} rows per page")
}
