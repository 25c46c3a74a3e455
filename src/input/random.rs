//! Random reference strings.

use rand::Rng;

use crate::common::{Error, PageId, Reference, Result};

/// `len` pages drawn uniformly from `1..=max_page`.
///
/// Fails with [`Error::InvalidInput`] when `max_page` is zero.
///
/// # Example
/// ```
/// use pagesim::input::random_references;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let refs = random_references(10, 5, &mut rng).unwrap();
/// assert_eq!(refs.len(), 10);
/// ```
pub fn random_references<R: Rng + ?Sized>(
    len: usize,
    max_page: u32,
    rng: &mut R,
) -> Result<Vec<Reference>> {
    if max_page == 0 {
        return Err(Error::InvalidInput(
            "max page must be at least 1".to_string(),
        ));
    }

    Ok((0..len)
        .map(|_| Reference::Page(PageId(i64::from(rng.gen_range(1..=max_page)))))
        .collect())
}
