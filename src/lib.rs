//! pagesim - Page-replacement simulation with FIFO, LRU and Optimal policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Input (input/)       →      Reports (report/)    │   │
//! │  │   text | random | navigation | grid    summary | steps  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Engine (engine/)                         │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │      Replacers: FIFO | LRU | Optimal            │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │   simulate + FrameSet + Step/SimulationResult + compare │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameCount, Reference, Error, config)
//! - [`engine`] - The replacement engine and eviction policies
//! - [`stats`] - Hit/fault summaries
//! - [`input`] - Reference-string producers
//! - [`report`] - Plain-text tables
//!
//! # Quick Start
//! ```
//! use pagesim::{compare, Policy};
//! use pagesim::input::parse_references;
//!
//! let refs = parse_references("1,2,3,2,1,4,5");
//! let cmp = compare(&refs, 3).unwrap();
//!
//! let lru = cmp.get(Policy::Lru).unwrap();
//! assert_eq!((lru.hits(), lru.faults()), (2, 5));
//! ```

pub mod common;
pub mod engine;
pub mod input;
pub mod report;
pub mod stats;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameCount, PageId, Reference, Result};

pub use engine::{
    compare, compare_parallel, run, run_fifo, run_lru, run_optimal, Comparison, Policy,
    SimulationResult, Step,
};
pub use stats::Summary;
