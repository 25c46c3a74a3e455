//! Reference strings from a scrollable color grid.
//!
//! A `GRID_SIZE`×`GRID_SIZE` virtual grid of colored cells is seen
//! through a `GRID_VIEW_SIZE`×`GRID_VIEW_SIZE` viewport. Each color maps
//! to a page number (its palette index), and the pages currently in view
//! form the reference string.

use rand::Rng;

use crate::common::config::{GRID_PALETTE_SIZE, GRID_SIZE, GRID_VIEW_SIZE};
use crate::common::{Error, PageId, Reference, Result};

/// Fixed grid colors as RGB. A cell's page number is its index here.
pub const PALETTE: [(u8, u8, u8); GRID_PALETTE_SIZE] = [
    (255, 0, 0),
    (0, 255, 0),
    (0, 0, 255),
    (255, 255, 0),
    (255, 0, 255),
    (0, 255, 255),
    (128, 0, 0),
    (0, 128, 0),
    (0, 0, 128),
    (128, 128, 0),
    (128, 0, 128),
    (0, 128, 128),
    (192, 192, 192),
    (255, 165, 0),
    (255, 192, 203),
    (0, 0, 0),
    (128, 128, 128),
    (255, 215, 0),
    (173, 216, 230),
    (75, 0, 130),
    (240, 230, 140),
    (34, 139, 34),
    (210, 105, 30),
    (245, 222, 179),
];

const MAX_OFFSET: usize = GRID_SIZE - GRID_VIEW_SIZE;

/// The virtual grid plus the viewport position, in cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    /// Palette index per cell, `cells[row][col]`.
    cells: Vec<Vec<usize>>,
    offset_x: usize,
    offset_y: usize,
}

impl ColorGrid {
    /// A grid of uniformly random colors with the viewport at the origin.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let cells = (0..GRID_SIZE)
            .map(|_| {
                (0..GRID_SIZE)
                    .map(|_| rng.gen_range(0..GRID_PALETTE_SIZE))
                    .collect()
            })
            .collect();
        Self {
            cells,
            offset_x: 0,
            offset_y: 0,
        }
    }

    /// Build a grid from explicit palette indices.
    ///
    /// Fails unless `cells` is `GRID_SIZE` rows of `GRID_SIZE` indices,
    /// each below `GRID_PALETTE_SIZE`.
    pub fn from_cells(cells: Vec<Vec<usize>>) -> Result<Self> {
        if cells.len() != GRID_SIZE || cells.iter().any(|row| row.len() != GRID_SIZE) {
            return Err(Error::InvalidInput(format!(
                "grid must be {}x{} cells",
                GRID_SIZE, GRID_SIZE
            )));
        }
        if let Some(&bad) = cells.iter().flatten().find(|&&c| c >= GRID_PALETTE_SIZE) {
            return Err(Error::InvalidInput(format!(
                "color index {} outside palette of {}",
                bad, GRID_PALETTE_SIZE
            )));
        }
        Ok(Self {
            cells,
            offset_x: 0,
            offset_y: 0,
        })
    }

    /// Recolor every cell and move the viewport back to the origin.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::random(rng);
    }

    /// Viewport position as `(x, y)` in cells.
    pub fn offset(&self) -> (usize, usize) {
        (self.offset_x, self.offset_y)
    }

    /// Move the viewport by `(dx, dy)` cells.
    ///
    /// Each axis moves only if the viewport stays inside the grid.
    /// Returns true if either axis moved.
    pub fn scroll(&mut self, dx: isize, dy: isize) -> bool {
        let moved_x = Self::shift(&mut self.offset_x, dx);
        let moved_y = Self::shift(&mut self.offset_y, dy);
        moved_x || moved_y
    }

    /// Page number (palette index) of the cell at `(row, col)`.
    pub fn page_at(&self, row: usize, col: usize) -> Option<PageId> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .map(|&c| PageId(c as i64))
    }

    /// Color of the cell at `(row, col)`.
    pub fn color_at(&self, row: usize, col: usize) -> Option<(u8, u8, u8)> {
        self.cells.get(row).and_then(|r| r.get(col)).map(|&c| PALETTE[c])
    }

    /// Page numbers in the viewport, row-major.
    pub fn visible_references(&self) -> Vec<Reference> {
        let rows = self.offset_y..self.offset_y + GRID_VIEW_SIZE;
        rows.flat_map(|row| {
            (self.offset_x..self.offset_x + GRID_VIEW_SIZE)
                .filter_map(move |col| self.page_at(row, col))
        })
        .map(Reference::Page)
        .collect()
    }

    fn shift(offset: &mut usize, delta: isize) -> bool {
        match offset.checked_add_signed(delta) {
            Some(next) if next <= MAX_OFFSET && next != *offset => {
                *offset = next;
                true
            }
            _ => false,
        }
    }
}
