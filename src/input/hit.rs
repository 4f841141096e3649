//! Mouse-down hit classification.
//!
//! Decides what a press on the grid means: grabbing an item boundary,
//! grabbing an item body, or starting a sweep on an empty cell. The scan
//! order is part of the contract:
//!
//! - Border hits are checked first across all items; the first item whose
//!   boundary cell matches wins, and body testing is skipped entirely.
//! - Body hits scan the whole list without breaking, so when items overlap
//!   the last match wins.

use crate::constants::{BORDER_HIT_SLOP, CELL_WIDTH};
use crate::types::{Grid, Item};

/// Result of classifying a mouse-down position against the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Left boundary cell of an item, within the border slop
    StartBorder { index: usize },
    /// Right boundary cell of an item, within the border slop
    EndBorder { index: usize },
    /// Inside an item's span
    Body { index: usize, grab_offset: i32 },
    /// An in-grid cell not covered by any item
    EmptyCell { cell: i32 },
    /// Outside the grid entirely
    None,
}

/// Classify a press at `cell` with intra-cell pixel offset `x_in_cell`.
pub fn classify_hit(items: &[Item], grid: Grid, cell: i32, x_in_cell: f32) -> Hit {
    // Border pass: first match wins.
    for (index, item) in items.iter().enumerate() {
        if cell == item.start && x_in_cell <= BORDER_HIT_SLOP {
            return Hit::StartBorder { index };
        }
        if cell == item.end() && CELL_WIDTH - x_in_cell <= BORDER_HIT_SLOP {
            return Hit::EndBorder { index };
        }
    }

    // Body pass: no early break, so overlapping items resolve to the last
    // one in list order.
    let mut body = None;
    for (index, item) in items.iter().enumerate() {
        if item.contains(cell) {
            body = Some(Hit::Body {
                index,
                grab_offset: cell - item.start,
            });
        }
    }
    if let Some(hit) = body {
        return hit;
    }

    if grid.contains(cell) {
        Hit::EmptyCell { cell }
    } else {
        Hit::None
    }
}
