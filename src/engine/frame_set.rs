//! FrameSet - the bounded, ordered set of resident pages.
//!
//! A [`FrameSet`] holds at most `capacity` distinct pages. Order matters:
//! - FIFO: front = oldest insertion
//! - LRU: front = least recently used
//! - Optimal: insertion order, kept only for display

use std::collections::VecDeque;

use crate::common::{FrameCount, PageId};

/// The pages currently held in the simulated frame pool.
///
/// Frame counts are small, so membership and removal are linear scans
/// over a `VecDeque`. Appends are O(1).
#[derive(Debug, Clone)]
pub struct FrameSet {
    /// Resident pages, front = next FIFO/LRU victim.
    pages: VecDeque<PageId>,

    /// Maximum number of resident pages.
    capacity: FrameCount,
}

impl FrameSet {
    /// Create an empty frame set.
    pub fn new(capacity: FrameCount) -> Self {
        Self {
            pages: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> FrameCount {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// True when inserting another page requires an eviction.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.pages.len() >= self.capacity.get()
    }

    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.pages.contains(&page)
    }

    /// The page at the front (oldest / least recently used).
    #[inline]
    pub fn front(&self) -> Option<PageId> {
        self.pages.front().copied()
    }

    /// Iterate resident pages front to back.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.iter().copied()
    }

    /// Append a page at the back.
    ///
    /// Callers must evict first when the set is full.
    pub fn push_back(&mut self, page: PageId) {
        debug_assert!(!self.is_full(), "push_back on a full frame set");
        debug_assert!(!self.contains(page), "page {} already resident", page);
        self.pages.push_back(page);
    }

    /// Remove a page wherever it sits. Returns false if it was not resident.
    pub fn remove(&mut self, page: PageId) -> bool {
        match self.position(page) {
            Some(idx) => {
                self.pages.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Move a resident page to the back. Returns false if it was not resident.
    pub fn move_to_back(&mut self, page: PageId) -> bool {
        match self.position(page) {
            Some(idx) => {
                if let Some(p) = self.pages.remove(idx) {
                    self.pages.push_back(p);
                }
                true
            }
            None => false,
        }
    }

    /// Copy of the current contents, front to back.
    pub fn snapshot(&self) -> Vec<PageId> {
        self.pages.iter().copied().collect()
    }

    fn position(&self, page: PageId) -> Option<usize> {
        self.pages.iter().position(|&p| p == page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(capacity: i64) -> FrameSet {
        FrameSet::new(FrameCount::new(capacity).unwrap())
    }

    #[test]
    fn test_frame_set_fill() {
        let mut set = frames(2);
        assert!(set.is_empty());

        set.push_back(PageId(1));
        assert!(!set.is_full());
        set.push_back(PageId(2));
        assert!(set.is_full());
        assert_eq!(set.len(), 2);
        assert_eq!(set.front(), Some(PageId(1)));
    }

    #[test]
    fn test_frame_set_remove() {
        let mut set = frames(3);
        set.push_back(PageId(1));
        set.push_back(PageId(2));
        set.push_back(PageId(3));

        assert!(set.remove(PageId(2)));
        assert!(!set.remove(PageId(2)));
        assert_eq!(set.snapshot(), vec![PageId(1), PageId(3)]);
    }

    #[test]
    fn test_frame_set_move_to_back() {
        let mut set = frames(3);
        set.push_back(PageId(1));
        set.push_back(PageId(2));
        set.push_back(PageId(3));

        assert!(set.move_to_back(PageId(1)));
        assert_eq!(set.snapshot(), vec![PageId(2), PageId(3), PageId(1)]);

        assert!(!set.move_to_back(PageId(9)));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut set = frames(2);
        set.push_back(PageId(1));
        let snap = set.snapshot();
        set.push_back(PageId(2));

        assert_eq!(snap, vec![PageId(1)]);
    }
}
