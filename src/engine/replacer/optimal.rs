//! Optimal (Belady's clairvoyant) replacement policy.
//!
//! On a fault into a full frame set, evict the resident page whose next
//! use lies farthest in the future. Pages never used again are infinitely
//! far and go first.
//!
//! # Tie-break
//! Residents are scanned front to back and the current best is replaced
//! only by a *strictly* farther candidate, so the first resident in frame
//! order wins ties. Only "never used again" can tie, since two distinct
//! pages cannot share a next-use position.
//!
//! # Next-use table
//! Instead of rescanning the remaining suffix at every fault, a single
//! backward pass computes `next_use[i]`: the next position after `i`
//! that references the same page. Combined with the last position each
//! page was referenced at, a resident's next use is one lookup.

use std::collections::HashMap;

use log::trace;

use crate::common::{PageId, Reference};
use crate::engine::replacer::Replacer;
use crate::engine::{FrameSet, Policy};

/// Farthest-next-use eviction over a known reference string.
#[derive(Debug)]
pub struct OptimalReplacer {
    /// `next_use[i]` = next position referencing the page at `i`.
    next_use: Vec<Option<usize>>,

    /// Most recent position at which each page was referenced.
    last_access: HashMap<PageId, usize>,
}

impl OptimalReplacer {
    /// Build the next-use table for `references`.
    ///
    /// The same slice must later be passed to the step driver.
    pub fn new(references: &[Reference]) -> Self {
        let mut next_use = vec![None; references.len()];
        let mut seen: HashMap<PageId, usize> = HashMap::new();

        for (position, reference) in references.iter().enumerate().rev() {
            if let Some(page) = reference.page() {
                next_use[position] = seen.insert(page, position);
            }
        }

        Self {
            next_use,
            last_access: HashMap::new(),
        }
    }

    /// Position of the next reference to `page`, or `None` if it is
    /// never referenced again.
    fn next_use_of(&self, page: PageId) -> Option<usize> {
        self.last_access
            .get(&page)
            .and_then(|&pos| self.next_use.get(pos).copied().flatten())
    }
}

impl Replacer for OptimalReplacer {
    fn policy(&self) -> Policy {
        Policy::Optimal
    }

    fn record_access(&mut self, page: PageId, position: usize) {
        self.last_access.insert(page, position);
    }

    fn victim(&mut self, frames: &FrameSet, position: usize) -> Option<PageId> {
        let mut best: Option<(PageId, usize)> = None;

        for page in frames.iter() {
            let distance = self.next_use_of(page).unwrap_or(usize::MAX);
            if best.map_or(true, |(_, farthest)| distance > farthest) {
                best = Some((page, distance));
            }
        }

        if let Some((page, distance)) = best {
            if distance == usize::MAX {
                trace!("optimal@{}: {} is never used again", position, page);
            } else {
                trace!("optimal@{}: {} next used at {}", position, page, distance);
            }
        }
        best.map(|(page, _)| page)
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

    /// Suffix-scan reference: distance to next use, `usize::MAX` if none.
    fn naive_victim(frames: &FrameSet, references: &[Reference], position: usize) -> Option<PageId> {
        let future = &references[position + 1..];
        frames
            .iter()
            .map(|page| {
                let dist = future
                    .iter()
                    .position(|r| r.page() == Some(page))
                    .unwrap_or(usize::MAX);
                (page, dist)
            })
            .fold(None, |best: Option<(PageId, usize)>, (page, dist)| match best {
                Some((_, d)) if dist <= d => best,
                _ => Some((page, dist)),
            })
            .map(|(page, _)| page)
    }

    #[test]
    fn test_next_use_table() {
        let refs = reference_string(&[1, 2, 1, 3, 2]);
        let replacer = OptimalReplacer::new(&refs);

        assert_eq!(
            replacer.next_use,
            vec![Some(2), Some(4), None, None, None]
        );
    }

    #[test]
    fn test_next_use_table_skips_malformed() {
        let refs = vec![
            Reference::from(1i64),
            Reference::Malformed,
            Reference::from(1i64),
        ];
        let replacer = OptimalReplacer::new(&refs);

        assert_eq!(replacer.next_use, vec![Some(2), None, None]);
    }

    #[test]
    fn test_optimal_evicts_farthest() {
        // At the fault for 4: 1 is next used at 5, 2 at 6, 3 at 4.
        let refs = reference_string(&[1, 2, 3, 4, 3, 1, 2]);
        let result = simulate(
            &mut OptimalReplacer::new(&refs),
            &refs,
            FrameCount::new(3).unwrap(),
        );

        assert_eq!(result.steps()[3].evicted, Some(PageId(2)));
        assert_eq!(ids(&result.steps()[3].memory), vec![1, 3, 4]);
    }

    #[test]
    fn test_optimal_tie_break_first_in_frame_order() {
        let refs = reference_string(&[1, 2, 3, 2, 1, 4, 5]);
        let result = simulate(
            &mut OptimalReplacer::new(&refs),
            &refs,
            FrameCount::new(3).unwrap(),
        );

        // None of 1, 2, 3 recur after the fault for 4: first resident (1) goes.
        assert_eq!(result.steps()[5].evicted, Some(PageId(1)));
        assert_eq!(ids(&result.steps()[5].memory), vec![2, 3, 4]);
        // Suffix empty at the fault for 5: 2 is first.
        assert_eq!(result.steps()[6].evicted, Some(PageId(2)));
        assert_eq!(ids(result.final_memory()), vec![3, 4, 5]);
        assert_eq!(result.faults(), 5);
        assert_eq!(result.hits(), 2);
    }

    #[test]
    fn test_optimal_never_used_beats_far_use() {
        // At the fault for 4: 1 recurs at 6, 2 never, 3 never. 2 is first of the ties.
        let refs = reference_string(&[1, 2, 3, 4, 5, 6, 1]);
        let result = simulate(
            &mut OptimalReplacer::new(&refs),
            &refs,
            FrameCount::new(3).unwrap(),
        );

        assert_eq!(result.steps()[3].evicted, Some(PageId(2)));
    }

    #[test]
    fn test_table_matches_naive_scan() {
        let refs = reference_string(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1]);
        let capacity = FrameCount::new(3).unwrap();
        let mut replacer = OptimalReplacer::new(&refs);
        let mut frames = FrameSet::new(capacity);

        for (position, reference) in refs.iter().enumerate() {
            let page = reference.page().unwrap();
            replacer.record_access(page, position);
            if frames.contains(page) {
                continue;
            }
            if frames.is_full() {
                let fast = replacer.victim(&frames, position);
                let slow = naive_victim(&frames, &refs, position);
                assert_eq!(fast, slow, "diverged at position {}", position);
                frames.remove(fast.unwrap());
            }
            frames.push_back(page);
        }
    }

    #[test]
    fn test_optimal_textbook_fault_count() {
        let refs = reference_string(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1]);
        let result = simulate(
            &mut OptimalReplacer::new(&refs),
            &refs,
            FrameCount::new(3).unwrap(),
        );

        assert_eq!(result.faults(), 9);
    }
}
