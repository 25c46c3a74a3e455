//! Running all three policies over the same input.

use std::collections::BTreeMap;
use std::thread;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::common::{FrameCount, Reference, Result};
use crate::engine::{Policy, SimulationResult};
use crate::stats::Summary;

/// Results for every policy, keyed by policy name.
///
/// Serializes as `{"fifo": {...}, "lru": {...}, "optimal": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Comparison {
    results: BTreeMap<Policy, SimulationResult>,
}

impl Comparison {
    pub fn get(&self, policy: Policy) -> Option<&SimulationResult> {
        self.results.get(&policy)
    }

    /// Results in fifo, lru, optimal order.
    pub fn iter(&self) -> impl Iterator<Item = (Policy, &SimulationResult)> {
        self.results.iter().map(|(&p, r)| (p, r))
    }

    /// Hit/fault totals per policy, for summary tables and charts.
    ///
    /// Every policy is present; a missing result reads as all zeros.
    pub fn summaries(&self) -> Vec<(Policy, Summary)> {
        Policy::ALL
            .into_iter()
            .map(|p| (p, self.get(p).map(SimulationResult::summary).unwrap_or_default()))
            .collect()
    }

    /// Policy with the fewest faults, first in display order on ties.
    pub fn best(&self) -> Option<Policy> {
        self.iter()
            .min_by_key(|(p, r)| (r.faults(), *p))
            .map(|(p, _)| p)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run FIFO, LRU and Optimal one after another.
///
/// # Example
/// ```
/// use pagesim::{compare, Policy};
/// use pagesim::common::reference_string;
///
/// let refs = reference_string(&[1, 2, 3, 2, 1, 4, 5]);
/// let cmp = compare(&refs, 3).unwrap();
/// assert_eq!(cmp.get(Policy::Fifo).unwrap().hits(), 2);
/// ```
pub fn compare(references: &[Reference], frame_count: i64) -> Result<Comparison> {
    let capacity = FrameCount::new(frame_count)?;
    let results = Policy::ALL
        .into_iter()
        .map(|p| (p, p.simulate(references, capacity)))
        .collect();
    Ok(Comparison { results })
}

/// Run the three policies on separate threads.
///
/// Each thread gets its own copy of the references. The result equals
/// [`compare`] on the same input.
pub fn compare_parallel(references: &[Reference], frame_count: i64) -> Result<Comparison> {
    let capacity = FrameCount::new(frame_count)?;
    let results = Mutex::new(BTreeMap::new());

    thread::scope(|scope| {
        for policy in Policy::ALL {
            let references = references.to_vec();
            let results = &results;
            scope.spawn(move || {
                let result = policy.simulate(&references, capacity);
                results.lock().insert(policy, result);
            });
        }
    });

    Ok(Comparison {
        results: results.into_inner(),
    })
}
