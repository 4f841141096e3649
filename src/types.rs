//! Core types for the span grid: items, the grid itself, and the row-segment
//! split used by the renderer.

use crate::constants::{CELL_HEIGHT, CELL_WIDTH, COLUMNS};
use serde::{Deserialize, Serialize};

/// A contiguous run of grid cells.
///
/// `start` is a linear index into the row-major grid
/// (`row * COLUMNS + column`); `size` is the number of cells occupied,
/// possibly spanning multiple rows. Items carry no identity of their own -
/// they are addressed by their index in the owning list, which is stable for
/// the duration of a drag.
///
/// `start` is signed: moves and resizes are not clamped against the grid,
/// so a drag can push an item partially (or entirely) out of range.
/// Out-of-range items render malformed but never panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Linear cell index of the first occupied cell
    pub start: i32,
    /// Number of contiguous cells occupied (>= 1 under normal operation)
    pub size: i32,
}

impl Item {
    pub fn new(start: i32, size: i32) -> Self {
        Self { start, size }
    }

    /// Linear index of the last occupied cell.
    pub fn end(&self) -> i32 {
        self.start + self.size - 1
    }

    /// Whether `cell` falls within `[start, start + size)`.
    pub fn contains(&self, cell: i32) -> bool {
        cell >= self.start && cell < self.start + self.size
    }

    /// Split the span into per-row segments.
    ///
    /// A span that crosses a row boundary wraps onto the next row; each
    /// segment covers the portion of the span within a single row. Walks
    /// from `start`, taking `min(remaining, COLUMNS - column)` cells per
    /// step.
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut pos = self.start;
        let mut remaining = self.size;
        while remaining > 0 {
            let col = pos.rem_euclid(COLUMNS);
            let row = pos.div_euclid(COLUMNS);
            let len = remaining.min(COLUMNS - col);
            segments.push(Segment {
                row,
                col,
                len,
                first: pos == self.start,
                last: len == remaining,
            });
            pos += len;
            remaining -= len;
        }
        segments
    }
}

/// The portion of an item's span that lies within a single grid row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub row: i32,
    pub col: i32,
    pub len: i32,
    /// True for the segment containing the item's first cell
    pub first: bool,
    /// True for the segment containing the item's last cell
    pub last: bool,
}

/// The grid itself: a fixed column count over `cells` logical cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Total logical cell count
    pub cells: usize,
}

impl Grid {
    pub fn new(cells: usize) -> Self {
        Self { cells }
    }

    /// Number of rows needed to hold all cells.
    pub fn rows(&self) -> i32 {
        self.cells.div_ceil(COLUMNS as usize) as i32
    }

    /// Whether `cell` addresses a logical cell of this grid.
    pub fn contains(&self, cell: i32) -> bool {
        cell >= 0 && (cell as usize) < self.cells
    }

    /// Pixel width of the rendered grid.
    pub fn width(&self) -> f32 {
        COLUMNS as f32 * CELL_WIDTH
    }

    /// Pixel height of the rendered grid.
    pub fn height(&self) -> f32 {
        self.rows() as f32 * CELL_HEIGHT
    }
}
