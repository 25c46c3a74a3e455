//! The replacement simulation engine.
//!
//! Every run is a pure function of `(references, frame_count)`: nothing
//! is cached between calls and results are owned by the caller.
//!
//! # Components
//! - [`FrameSet`] - The bounded, ordered set of resident pages
//! - [`Step`] / [`SimulationResult`] - Per-reference records and totals
//! - [`replacer`] - Eviction policy implementations
//! - [`simulate`] - The step driver shared by all policies
//! - [`Policy`] - Policy selection by name
//! - [`Comparison`] - All three policies over the same input

mod comparison;
mod frame_set;
mod policy;
pub mod replacer;
mod simulator;
mod step;

pub use comparison::{compare, compare_parallel, Comparison};
pub use frame_set::FrameSet;
pub use policy::Policy;
pub use simulator::{run, run_fifo, run_lru, run_optimal, simulate};
pub use step::{SimulationResult, Step};
