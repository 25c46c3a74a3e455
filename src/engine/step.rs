//! Step records and per-policy simulation results.

use serde::{Deserialize, Serialize};

use crate::common::{FrameCount, PageId};
use crate::engine::Policy;
use crate::stats::Summary;

/// What happened for one well-formed reference.
///
/// `memory` is the frame set *after* the reference was processed,
/// including any eviction, insertion or reordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub page: PageId,
    pub memory: Vec<PageId>,
    pub fault: bool,
    /// Page removed to make room. Only ever set on a fault into a full set.
    pub evicted: Option<PageId>,
}

impl Step {
    pub(crate) fn hit(page: PageId, memory: Vec<PageId>) -> Self {
        Self {
            page,
            memory,
            fault: false,
            evicted: None,
        }
    }

    pub(crate) fn fault(page: PageId, memory: Vec<PageId>, evicted: Option<PageId>) -> Self {
        Self {
            page,
            memory,
            fault: true,
            evicted,
        }
    }
}

/// The outcome of running one policy over one reference string.
///
/// `hits + faults` always equals `steps().len()`, which equals the number
/// of well-formed references in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    policy: Policy,
    frame_count: FrameCount,
    hits: usize,
    faults: usize,
    steps: Vec<Step>,
}

impl SimulationResult {
    pub(crate) fn new(policy: Policy, frame_count: FrameCount) -> Self {
        Self {
            policy,
            frame_count,
            hits: 0,
            faults: 0,
            steps: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, step: Step) {
        if step.fault {
            self.faults += 1;
        } else {
            self.hits += 1;
        }
        self.steps.push(step);
    }

    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    #[inline]
    pub fn frame_count(&self) -> FrameCount {
        self.frame_count
    }

    #[inline]
    pub fn hits(&self) -> usize {
        self.hits
    }

    #[inline]
    pub fn faults(&self) -> usize {
        self.faults
    }

    /// One step per well-formed reference, in input order.
    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Frame contents after the last reference (empty for an empty run).
    pub fn final_memory(&self) -> &[PageId] {
        self.steps.last().map_or(&[], |s| s.memory.as_slice())
    }

    /// Number of steps that evicted a page.
    pub fn evictions(&self) -> usize {
        self.steps.iter().filter(|s| s.evicted.is_some()).count()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            hits: self.hits,
            faults: self.faults,
            evictions: self.evictions(),
        }
    }
}
