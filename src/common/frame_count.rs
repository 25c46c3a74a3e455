//! Frame pool capacity.

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};

/// Number of frames in the simulated pool.
///
/// Always at least 1. Callers hand the engine a plain signed integer,
/// so construction goes through [`FrameCount::new`], which rejects zero
/// and negatives with [`Error::InvalidCapacity`].
///
/// # Example
/// ```
/// use pagesim::FrameCount;
///
/// let frames = FrameCount::new(3).unwrap();
/// assert_eq!(frames.get(), 3);
/// assert!(FrameCount::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "usize")]
pub struct FrameCount(NonZeroUsize);

impl FrameCount {
    /// Validate a caller-supplied frame count.
    pub fn new(count: i64) -> Result<Self> {
        usize::try_from(count)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(FrameCount)
            .ok_or(Error::InvalidCapacity(count))
    }

    /// The capacity as a `usize`.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for FrameCount {
    type Error = Error;

    fn try_from(count: i64) -> Result<Self> {
        FrameCount::new(count)
    }
}

impl From<FrameCount> for usize {
    fn from(count: FrameCount) -> usize {
        count.get()
    }
}

impl fmt::Display for FrameCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
