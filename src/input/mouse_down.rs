//! Mouse down event handling - gesture classification and start.

use crate::app::GridView;
use crate::input::coords;
use crate::input::hit::classify_hit;
use crate::input::state::Gesture;
use crate::profile_scope;
use gpui::*;

impl GridView {
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_down");

        let grid_pos = coords::window_to_grid(event.position);
        let cell = coords::cell_at(grid_pos);
        let x_in_cell = coords::x_within_cell(grid_pos);

        self.gesture = Gesture::from_hit(classify_hit(&self.data, self.grid, cell, x_in_cell));

        if self.gesture.is_active() {
            tracing::debug!(gesture = ?self.gesture, cell, "gesture start");
            cx.notify();
        }
    }
}
