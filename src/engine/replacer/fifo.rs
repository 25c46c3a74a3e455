//! FIFO (First-In-First-Out) replacement policy.

use crate::common::PageId;
use crate::engine::replacer::Replacer;
use crate::engine::{FrameSet, Policy};

/// Evicts pages in the order they were loaded.
///
/// The frame set is already kept in insertion order and hits never
/// reorder it, so the victim is always the front.
#[derive(Debug, Default)]
pub struct FifoReplacer;

impl FifoReplacer {
    pub fn new() -> Self {
        Self
    }
}

impl Replacer for FifoReplacer {
    fn policy(&self) -> Policy {
        Policy::Fifo
    }

    fn victim(&mut self, frames: &FrameSet, _position: usize) -> Option<PageId> {
        frames.front()
    }
}
