//! Raw reference-string entries.

use std::fmt;

use crate::common::PageId;

/// One entry of a reference string as the caller supplied it.
///
/// Input comes from forms and generators that can produce junk, so an
/// entry is either a well-formed page or `Malformed`. The engine skips
/// malformed entries entirely: they produce no step and count as
/// neither hit nor fault.
///
/// Not serialized: results carry only the [`PageId`]s of well-formed
/// entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reference {
    Page(PageId),
    Malformed,
}

impl Reference {
    /// The page this entry refers to, if it is well-formed.
    #[inline]
    pub fn page(self) -> Option<PageId> {
        match self {
            Reference::Page(page) => Some(page),
            Reference::Malformed => None,
        }
    }

    #[inline]
    pub fn is_malformed(self) -> bool {
        matches!(self, Reference::Malformed)
    }
}

impl From<PageId> for Reference {
    fn from(page: PageId) -> Self {
        Reference::Page(page)
    }
}

impl From<i64> for Reference {
    fn from(id: i64) -> Self {
        Reference::Page(PageId(id))
    }
}

impl From<i32> for Reference {
    fn from(id: i32) -> Self {
        Reference::Page(PageId(i64::from(id)))
    }
}

impl<T: Into<Reference>> From<Option<T>> for Reference {
    fn from(entry: Option<T>) -> Self {
        entry.map_or(Reference::Malformed, Into::into)
    }
}

impl From<f64> for Reference {
    /// Integral, finite floats become pages; NaN, infinities and
    /// fractional values are malformed.
    fn from(value: f64) -> Self {
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
        if value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value < i64::MAX as f64
        {
            Reference::Page(PageId(value as i64))
        } else {
            Reference::Malformed
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Page(page) => write!(f, "{}", page),
            Reference::Malformed => write!(f, "?"),
        }
    }
}

/// Convert a slice of page numbers into references.
///
/// # Example
/// ```
/// use pagesim::common::reference_string;
///
/// let refs = reference_string(&[1, 2, 3]);
/// assert_eq!(refs.len(), 3);
/// ```
pub fn reference_string<T: Copy + Into<Reference>>(pages: &[T]) -> Vec<Reference> {
    pages.iter().map(|&p| p.into()).collect()
}
