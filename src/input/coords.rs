//! Coordinate conversion utilities for grid interactions.
//!
//! This module centralizes the pixel-to-cell formulas so they are not
//! duplicated across input handling code. All cell mapping is deliberately
//! unclamped: positions outside the grid yield out-of-range (possibly
//! negative) indices, and callers rely on downstream range checks.

use crate::constants::{CANVAS_PADDING, CELL_HEIGHT, CELL_WIDTH, COLUMNS, HEADER_HEIGHT};
use gpui::{point, px, Pixels, Point};

/// Convert a window-relative mouse position to grid-local pixels.
///
/// The grid canvas sits below the header bar, inset by the canvas padding;
/// both offsets are fixed layout constants.
#[inline]
pub fn window_to_grid(window_pos: Point<Pixels>) -> Point<Pixels> {
    point(
        px(f32::from(window_pos.x) - CANVAS_PADDING),
        px(f32::from(window_pos.y) - HEADER_HEIGHT - CANVAS_PADDING),
    )
}

/// Map grid-local pixels to a linear row-major cell index.
///
/// `floor(y / CELL_HEIGHT) * COLUMNS + floor(x / CELL_WIDTH)`, with no
/// bounds clamping.
#[inline]
pub fn cell_at(grid_pos: Point<Pixels>) -> i32 {
    let col = (f32::from(grid_pos.x) / CELL_WIDTH).floor() as i32;
    let row = (f32::from(grid_pos.y) / CELL_HEIGHT).floor() as i32;
    row * COLUMNS + col
}

/// Horizontal pixel offset of `grid_pos` from the left edge of its cell.
#[inline]
pub fn x_within_cell(grid_pos: Point<Pixels>) -> f32 {
    let x = f32::from(grid_pos.x);
    x - (x / CELL_WIDTH).floor() * CELL_WIDTH
}
