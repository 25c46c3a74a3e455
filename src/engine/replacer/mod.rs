//! Eviction policy implementations (replacers).
//!
//! Currently implements:
//! - [`FifoReplacer`] - evicts the page resident longest
//! - [`LruReplacer`] - evicts the page used least recently
//! - [`OptimalReplacer`] - evicts the page needed farthest in the future
//!
//! The shared step driver in [`crate::engine::simulate`] owns the
//! [`FrameSet`]; a replacer only observes accesses, reorders on hits and
//! names a victim when the set is full.

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use crate::common::PageId;
use crate::engine::{FrameSet, Policy};

/// Hooks the step driver calls while walking a reference string.
///
/// `position` is the index into the raw reference slice, malformed
/// entries included.
pub trait Replacer {
    /// Which policy this replacer implements.
    fn policy(&self) -> Policy;

    /// Called for every well-formed reference, before hit/fault handling.
    fn record_access(&mut self, _page: PageId, _position: usize) {}

    /// Called when `page` is already resident. May reorder `frames`.
    fn record_hit(&mut self, _frames: &mut FrameSet, _page: PageId) {}

    /// Choose a resident page to evict from a full frame set.
    fn victim(&mut self, frames: &FrameSet, position: usize) -> Option<PageId>;
}
