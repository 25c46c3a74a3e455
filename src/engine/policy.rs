//! Policy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{Error, FrameCount, Reference};
use crate::engine::replacer::{FifoReplacer, LruReplacer, OptimalReplacer, Replacer};
use crate::engine::{simulate, SimulationResult};

/// The three page-replacement policies.
///
/// Names are stable and lowercase (`fifo`, `lru`, `optimal`); they key
/// comparison output and are accepted case-insensitively by `FromStr`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    Fifo,
    Lru,
    Optimal,
}

impl Policy {
    /// All policies in display order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Lowercase key: `fifo`, `lru` or `optimal`.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "fifo",
            Policy::Lru => "lru",
            Policy::Optimal => "optimal",
        }
    }

    /// Heading used in reports.
    pub fn title(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }

    /// One-paragraph explanation of the eviction rule.
    pub fn description(self) -> &'static str {
        match self {
            Policy::Fifo => {
                "First-In-First-Out evicts the page that has been resident the longest. \
                 Hits do not change the eviction order. Simple, but it can evict heavily \
                 used pages and suffers from Belady's anomaly."
            }
            Policy::Lru => {
                "Least-Recently-Used evicts the page whose last reference is oldest. \
                 Every hit moves the page to the most-recently-used end, so recency \
                 approximates future use."
            }
            Policy::Optimal => {
                "Optimal evicts the page whose next reference is farthest in the future, \
                 preferring pages never referenced again. It needs the whole reference \
                 string in advance and gives the lowest possible fault count."
            }
        }
    }

    /// A fresh replacer for one run over `references`.
    pub fn replacer(self, references: &[Reference]) -> Box<dyn Replacer> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new()),
            Policy::Lru => Box::new(LruReplacer::new()),
            Policy::Optimal => Box::new(OptimalReplacer::new(references)),
        }
    }

    /// Run this policy with an already-validated capacity.
    pub fn simulate(self, references: &[Reference], capacity: FrameCount) -> SimulationResult {
        let mut replacer = self.replacer(references);
        simulate(replacer.as_mut(), references, capacity)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Policy::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPolicy(s.to_string()))
    }
}
