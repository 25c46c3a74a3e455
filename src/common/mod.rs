//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers and input entries (PageId, FrameCount, Reference)

pub mod config;
pub mod error;
mod frame_count;
mod page_id;
mod reference;

pub use error::{Error, Result};
pub use frame_count::FrameCount;
pub use page_id::PageId;
pub use reference::{reference_string, Reference};
