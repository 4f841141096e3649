//! Unit tests for the pixel-to-cell coordinate mapper.

use gpui::{point, px};
use spangrid::constants::{CANVAS_PADDING, CELL_HEIGHT, CELL_WIDTH, COLUMNS, HEADER_HEIGHT};
use spangrid::input::coords::{cell_at, window_to_grid, x_within_cell};

#[test]
fn test_cell_at_is_piecewise_constant() {
    // Every pixel within a cell maps to the same index. Sample the corners
    // and interior of cell 10 (row 1, column 2).
    let left = 2.0 * CELL_WIDTH;
    let top = CELL_HEIGHT;
    for (dx, dy) in [
        (0.0, 0.0),
        (CELL_WIDTH - 0.5, 0.0),
        (0.0, CELL_HEIGHT - 0.5),
        (CELL_WIDTH - 0.5, CELL_HEIGHT - 0.5),
        (CELL_WIDTH / 2.0, CELL_HEIGHT / 2.0),
    ] {
        assert_eq!(
            cell_at(point(px(left + dx), px(top + dy))),
            10,
            "pixel offset ({dx}, {dy}) left cell 10"
        );
    }
}

#[test]
fn test_cell_at_row_major_order() {
    assert_eq!(cell_at(point(px(0.0), px(0.0))), 0);
    assert_eq!(cell_at(point(px(7.0 * CELL_WIDTH), px(0.0))), 7);
    assert_eq!(cell_at(point(px(0.0), px(CELL_HEIGHT))), COLUMNS);
}

#[test]
fn test_cell_at_is_unclamped() {
    // Negative pixels and pixels past the grid produce out-of-range
    // indices; callers range-check downstream.
    assert_eq!(cell_at(point(px(-5.0), px(5.0))), -1);
    assert_eq!(cell_at(point(px(5.0), px(-5.0))), -COLUMNS);
    assert_eq!(cell_at(point(px(5.0), px(6.0 * CELL_HEIGHT))), 48);
}

#[test]
fn test_window_to_grid_subtracts_layout_offsets() {
    let window_pos = point(
        px(CANVAS_PADDING + 12.0),
        px(HEADER_HEIGHT + CANVAS_PADDING + 34.0),
    );
    let grid_pos = window_to_grid(window_pos);
    assert_eq!(f32::from(grid_pos.x), 12.0);
    assert_eq!(f32::from(grid_pos.y), 34.0);
}

#[test]
fn test_x_within_cell_resets_each_column() {
    assert_eq!(x_within_cell(point(px(3.0), px(0.0))), 3.0);
    assert_eq!(x_within_cell(point(px(CELL_WIDTH + 3.0), px(0.0))), 3.0);
}
