//! Reference strings from browsing a page dataset.

use crate::common::config::NAVIGATION_PAGES;
use crate::common::{PageId, Reference};

/// A cursor over a dataset of pages `1..=NAVIGATION_PAGES`.
///
/// The cursor starts on the first page with an empty trace. Each move
/// appends the id of the page moved to. Moving past either end is a
/// no-op and records nothing.
#[derive(Debug, Clone)]
pub struct NavigationTrace {
    len: usize,
    cursor: usize,
    references: Vec<Reference>,
}

impl NavigationTrace {
    pub fn new() -> Self {
        Self::with_len(NAVIGATION_PAGES)
    }

    /// A trace over a dataset of `len` pages (at least one).
    pub fn with_len(len: usize) -> Self {
        Self {
            len: len.max(1),
            cursor: 0,
            references: Vec::new(),
        }
    }

    /// Page under the cursor.
    pub fn current(&self) -> PageId {
        Self::page_at(self.cursor)
    }

    /// Advance one page. Returns the new page, or `None` at the last page.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<PageId> {
        if self.cursor + 1 >= self.len {
            return None;
        }
        self.cursor += 1;
        Some(self.record())
    }

    /// Step back one page. Returns the new page, or `None` at the first page.
    pub fn previous(&mut self) -> Option<PageId> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.record())
    }

    /// Every page moved to, in order.
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    fn record(&mut self) -> PageId {
        let page = self.current();
        self.references.push(Reference::Page(page));
        page
    }

    fn page_at(index: usize) -> PageId {
        // Dataset ids are 1-based; the dataset is far smaller than i64::MAX.
        PageId(index as i64 + 1)
    }
}

impl Default for NavigationTrace {
    fn default() -> Self {
        Self::new()
    }
}
