//! Page identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a logical page in a reference string.
///
/// Page numbers carry no range restriction, so this wraps an `i64`
/// rather than an unsigned index. Serializes as a bare integer.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
    }

    #[test]
    fn test_page_id_negative_allowed() {
        let pid = PageId::new(-7);
        assert_eq!(pid.0, -7);
        assert!(pid < PageId::new(0));
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "42");
    }

    #[test]
    fn test_page_id_serializes_as_integer() {
        let json = serde_json::to_string(&PageId::new(5)).unwrap();
        assert_eq!(json, "5");
    }
}
