//! Simulation statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hit/fault totals for one policy run.
///
/// This is what summary tables and charts consume. An all-zero summary
/// is a legitimate empty state, not an error.
///
/// # Example
/// ```
/// use pagesim::Summary;
///
/// let summary = Summary { hits: 2, faults: 5, evictions: 2 };
/// println!("{}", summary);
/// assert_eq!(summary.total(), 7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub hits: usize,
    pub faults: usize,
    pub evictions: usize,
}

impl Summary {
    /// Number of well-formed references processed.
    pub fn total(&self) -> usize {
        self.hits + self.faults
    }

    /// Hit ratio (0.0 to 1.0). Zero for an empty run.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Fault ratio (0.0 to 1.0). Zero for an empty run.
    pub fn fault_ratio(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.faults as f64 / total as f64
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Summary {{ hits: {}, faults: {}, evictions: {}, hit_ratio: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.hit_ratio() * 100.0
        )
    }
}
