//! The step driver shared by every policy.

use log::{debug, trace};

use crate::common::{FrameCount, Reference, Result};
use crate::engine::replacer::Replacer;
use crate::engine::{FrameSet, Policy, SimulationResult, Step};

/// Walk `references` through a frame set of size `capacity`.
///
/// Malformed entries are skipped. For each page:
/// - resident: a hit, the replacer may reorder the frame set
/// - not resident: a fault, evicting the replacer's victim first if full
///
/// Every well-formed reference produces exactly one [`Step`] holding the
/// frame set as it stands after that reference.
pub fn simulate<R: Replacer + ?Sized>(
    replacer: &mut R,
    references: &[Reference],
    capacity: FrameCount,
) -> SimulationResult {
    let policy = replacer.policy();
    let mut frames = FrameSet::new(capacity);
    let mut result = SimulationResult::new(policy, capacity);

    for (position, reference) in references.iter().enumerate() {
        let Some(page) = reference.page() else {
            continue;
        };

        replacer.record_access(page, position);

        if frames.contains(page) {
            replacer.record_hit(&mut frames, page);
            result.record(Step::hit(page, frames.snapshot()));
            continue;
        }

        let evicted = if frames.is_full() {
            // A full set is never empty, so the front fallback always exists.
            let victim = replacer.victim(&frames, position).or_else(|| frames.front());
            if let Some(victim) = victim {
                frames.remove(victim);
                trace!("{}: evict {} for {}", policy, victim, page);
            }
            victim
        } else {
            None
        };

        frames.push_back(page);
        result.record(Step::fault(page, frames.snapshot(), evicted));
    }

    debug!(
        "{} run over {} references with {} frames: {} hits, {} faults",
        policy,
        references.len(),
        capacity,
        result.hits(),
        result.faults()
    );
    result
}

/// Run one policy by name.
///
/// Fails with [`crate::Error::InvalidCapacity`] when `frame_count <= 0`.
///
/// # Example
/// ```
/// use pagesim::{run, Policy};
/// use pagesim::common::reference_string;
///
/// let refs = reference_string(&[1, 2, 3, 2, 1, 4, 5]);
/// let result = run(Policy::Lru, &refs, 3).unwrap();
/// assert_eq!(result.faults(), 5);
/// ```
pub fn run(policy: Policy, references: &[Reference], frame_count: i64) -> Result<SimulationResult> {
    let capacity = FrameCount::new(frame_count)?;
    Ok(policy.simulate(references, capacity))
}

/// Run FIFO over `references`.
pub fn run_fifo(references: &[Reference], frame_count: i64) -> Result<SimulationResult> {
    run(Policy::Fifo, references, frame_count)
}

/// Run LRU over `references`.
pub fn run_lru(references: &[Reference], frame_count: i64) -> Result<SimulationResult> {
    run(Policy::Lru, references, frame_count)
}

/// Run Optimal over `references`.
pub fn run_optimal(references: &[Reference], frame_count: i64) -> Result<SimulationResult> {
    run(Policy::Optimal, references, frame_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{reference_string, Error, PageId};

    #[test]
    fn test_invalid_capacity() {
        let refs = reference_string(&[1, 2, 3]);
        for policy in Policy::ALL {
            assert!(matches!(run(policy, &refs, 0), Err(Error::InvalidCapacity(0))));
            assert!(matches!(run(policy, &refs, -2), Err(Error::InvalidCapacity(-2))));
        }
    }

    #[test]
    fn test_empty_references() {
        for policy in Policy::ALL {
            let result = run(policy, &[], 3).unwrap();
            assert_eq!(result.hits(), 0);
            assert_eq!(result.faults(), 0);
            assert!(result.steps().is_empty());
        }
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let with_junk = vec![
            Reference::from(1i64),
            Reference::Malformed,
            Reference::from(2i64),
            Reference::from(f64::NAN),
            Reference::from(1i64),
        ];
        let clean = reference_string(&[1, 2, 1]);

        for policy in Policy::ALL {
            let a = run(policy, &with_junk, 2).unwrap();
            let b = run(policy, &clean, 2).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.steps().len(), 3);
        }
    }

    #[test]
    fn test_fault_into_non_full_set_evicts_nothing() {
        let refs = reference_string(&[1, 2]);
        let result = run_fifo(&refs, 5).unwrap();

        assert!(result.steps().iter().all(|s| s.fault && s.evicted.is_none()));
        assert_eq!(result.final_memory(), &[PageId(1), PageId(2)]);
    }

    #[test]
    fn test_run_records_policy_and_capacity() {
        let result = run_optimal(&reference_string(&[1]), 4).unwrap();
        assert_eq!(result.policy(), Policy::Optimal);
        assert_eq!(result.frame_count().get(), 4);
    }

    #[test]
    fn test_idempotent() {
        let refs = reference_string(&[4, 1, 4, 2, 9, 1, 3, 4]);
        let first = run_lru(&refs, 2).unwrap();
        let second = run_lru(&refs, 2).unwrap();
        assert_eq!(first, second);
    }
}
