//! Mouse move handling - hover affordance and move/resize updates.
//!
//! Mouse move fires very frequently during a drag, so the handler exits
//! early whenever nothing changed: the cursor is only notified on a style
//! change, and a move gesture only emits when the start cell actually moved.

use crate::app::{GridEvent, GridView};
use crate::input::coords;
use crate::input::hit::{classify_hit, Hit};
use crate::input::state::Gesture;
use crate::profile_scope;
use crate::types::Item;
use gpui::*;

/// Compute the item update a gesture produces for the hovered cell.
///
/// Returns `None` when the gesture emits nothing: an idle or create
/// gesture, a move that did not change the start, or a resize that would
/// shrink the span below one cell. Move keeps the size invariant; resizes
/// hold the opposite boundary fixed. No bounds clamping is applied - a
/// move can push the start negative or past the end of the grid.
pub fn plan_update(items: &[Item], gesture: Gesture, cell: i32) -> Option<(usize, Item)> {
    match gesture {
        Gesture::Move { index, grab_offset } => {
            let item = items.get(index)?;
            let new_start = cell - grab_offset;
            (new_start != item.start).then(|| (index, Item::new(new_start, item.size)))
        }
        Gesture::ResizeStart { index } => {
            let item = items.get(index)?;
            // The span must keep at least one cell ahead of the new start.
            (cell < item.end())
                .then(|| (index, Item::new(cell, item.size + (item.start - cell))))
        }
        Gesture::ResizeEnd { index } => {
            let item = items.get(index)?;
            (cell > item.start).then(|| (index, Item::new(item.start, cell - item.start + 1)))
        }
        Gesture::Idle | Gesture::Create { .. } => None,
    }
}

impl GridView {
    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_move");

        let grid_pos = coords::window_to_grid(event.position);
        let cell = coords::cell_at(grid_pos);
        let x_in_cell = coords::x_within_cell(grid_pos);

        // The hover affordance is recomputed on every move, whether or not
        // a gesture is active.
        let cursor = match classify_hit(&self.data, self.grid, cell, x_in_cell) {
            Hit::StartBorder { .. } | Hit::EndBorder { .. } => CursorStyle::ResizeLeftRight,
            Hit::Body { .. } => CursorStyle::OpenHand,
            Hit::EmptyCell { .. } | Hit::None => CursorStyle::Arrow,
        };
        if cursor != self.cursor {
            self.cursor = cursor;
            cx.notify();
        }

        if self.gesture.is_creating() {
            // The anchor is in-grid by construction; the sweep stays there.
            let clamped = cell.clamp(0, self.grid.cells as i32 - 1);
            if self.gesture.create_extent().map(|(_, current)| current) != Some(clamped) {
                self.gesture.set_create_current(clamped);
                cx.notify();
            }
            return;
        }

        if let Some((index, item)) = plan_update(&self.data, self.gesture, cell) {
            tracing::debug!(index, start = item.start, size = item.size, "gesture update");
            // Keep the widget copy coherent until the owner pushes the
            // merged list back.
            if let Some(existing) = self.data.get_mut(index) {
                *existing = item;
            }
            cx.emit(GridEvent::UpdateItem { index, item });
            cx.notify();
        }
    }
}
