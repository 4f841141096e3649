//! Mouse up event handling - commit create drags, clear gesture state.

use crate::app::{GridEvent, GridView};
use gpui::*;

impl GridView {
    pub fn handle_mouse_up(
        &mut self,
        _event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let Some(item) = self.preview_item() {
            tracing::debug!(start = item.start, size = item.size, "create item");
            self.data.push(item);
            cx.emit(GridEvent::CreateItem { item });
        }

        // No validation or snapping here; the gesture just ends.
        self.gesture.reset();
        cx.notify();
    }
}
