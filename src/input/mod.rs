//! Reference-string producers.
//!
//! The engine does not care where a reference string comes from. These
//! are the ways the simulator builds one:
//! - [`parse_references`] - comma-separated text typed by a user
//! - [`random_references`] - uniform random pages
//! - [`NavigationTrace`] - stepping back and forth through a page dataset
//! - [`ColorGrid`] - the page numbers visible through a scrollable viewport

mod grid;
mod navigation;
mod parse;
mod random;

pub use grid::{ColorGrid, PALETTE};
pub use navigation::NavigationTrace;
pub use parse::parse_references;
pub use random::random_references;
