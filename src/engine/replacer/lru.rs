//! LRU (Least-Recently-Used) replacement policy.

use crate::common::PageId;
use crate::engine::replacer::Replacer;
use crate::engine::{FrameSet, Policy};

/// Evicts the page whose last use is oldest.
///
/// Same front-eviction as FIFO, but every hit moves the page to the
/// back, so the frame set stays in recency order.
#[derive(Debug, Default)]
pub struct LruReplacer;

impl LruReplacer {
    pub fn new() -> Self {
        Self
    }
}

impl Replacer for LruReplacer {
    fn policy(&self) -> Policy {
        Policy::Lru
    }

    fn record_hit(&mut self, frames: &mut FrameSet, page: PageId) {
        frames.move_to_back(page);
    }

    fn victim(&mut self, frames: &FrameSet, _position: usize) -> Option<PageId> {
        frames.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{reference_string, FrameCount};
    use crate::engine::simulate;

    fn ids(pages: &[PageId]) -> Vec<i64> {
        pages.iter().map(|p| p.0).collect()
    }

    #[test]
    fn test_lru_hit_moves_to_back() {
        let refs = reference_string(&[1, 2, 3, 1]);
        let result = simulate(&mut LruReplacer::new(), &refs, FrameCount::new(3).unwrap());

        let last = result.steps().last().unwrap();
        assert!(!last.fault);
        assert_eq!(ids(&last.memory), vec![2, 3, 1]);
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let refs = reference_string(&[1, 2, 3, 1, 4]);
        let result = simulate(&mut LruReplacer::new(), &refs, FrameCount::new(3).unwrap());

        let last = result.steps().last().unwrap();
        assert_eq!(last.evicted, Some(PageId(2)));
        assert_eq!(ids(&last.memory), vec![3, 1, 4]);
    }

    #[test]
    fn test_lru_textbook_trace() {
        let refs = reference_string(&[1, 2, 3, 2, 1, 4, 5]);
        let result = simulate(&mut LruReplacer::new(), &refs, FrameCount::new(3).unwrap());

        let memories: Vec<Vec<i64>> = result.steps().iter().map(|s| ids(&s.memory)).collect();
        assert_eq!(
            memories,
            vec![
                vec![1],
                vec![1, 2],
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![3, 2, 1],
                vec![2, 1, 4],
                vec![1, 4, 5],
            ]
        );
        assert_eq!(result.faults(), 5);
        assert_eq!(result.hits(), 2);
    }

    #[test]
    fn test_lru_single_frame() {
        let refs = reference_string(&[7, 7, 8, 7]);
        let result = simulate(&mut LruReplacer::new(), &refs, FrameCount::new(1).unwrap());

        assert_eq!(result.hits(), 1);
        assert_eq!(result.faults(), 3);
        assert_eq!(ids(result.final_memory()), vec![7]);
    }
}
