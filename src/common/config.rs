//! Configuration constants for pagesim.

/// Frame count used when the caller does not pick one.
pub const DEFAULT_FRAME_COUNT: usize = 3;

/// Reference string used when the caller does not supply one.
pub const DEFAULT_REFERENCES: &str = "1,2,3,2,1,4,5";

/// Default length of a randomly generated reference string.
pub const DEFAULT_RANDOM_LENGTH: usize = 10;

/// Default highest page number of a randomly generated reference string.
///
/// Pages are drawn from `1..=DEFAULT_MAX_PAGE`.
pub const DEFAULT_MAX_PAGE: u32 = 10;

/// Number of pages in the navigation dataset (ids `1..=NAVIGATION_PAGES`).
pub const NAVIGATION_PAGES: usize = 1000;

/// Side length of the virtual color grid, in cells.
pub const GRID_SIZE: usize = 16;

/// Side length of the visible grid viewport, in cells.
pub const GRID_VIEW_SIZE: usize = 4;

/// Number of fixed colors in the grid palette.
///
/// A cell's page number is its index into the palette, so grid
/// references are always in `0..GRID_PALETTE_SIZE`.
pub const GRID_PALETTE_SIZE: usize = 24;
