//! Application state - the Workspace and GridView entity definitions.
//!
//! `GridView` is the widget: it holds a copy of the item list, the transient
//! gesture state, and the current cursor affordance, and reports edits
//! upward as `GridEvent`s. `Workspace` owns the authoritative list, merges
//! updates into it, and pushes the refreshed list back into the widget.

use crate::constants::{CANVAS_PADDING, HEADER_HEIGHT};
use crate::input::Gesture;
use crate::types::{Grid, Item};
use gpui::*;

/// Edits reported by the grid widget to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// An existing item's bounds changed during a move or resize drag
    UpdateItem { index: usize, item: Item },
    /// A create drag swept out a new item
    CreateItem { item: Item },
}

/// The span-grid widget entity.
pub struct GridView {
    /// The grid being rendered
    pub grid: Grid,
    /// Widget-local copy of the item list, refreshed by the owner after
    /// every merge
    pub data: Vec<Item>,
    /// The in-progress pointer gesture
    pub gesture: Gesture,
    /// Cursor affordance for the current hover position
    pub cursor: CursorStyle,
}

impl GridView {
    pub fn new(grid: Grid, data: Vec<Item>) -> Self {
        Self {
            grid,
            data,
            gesture: Gesture::Idle,
            cursor: CursorStyle::Arrow,
        }
    }

    /// Replace the widget's copy of the item list.
    pub fn set_data(&mut self, data: Vec<Item>, cx: &mut Context<Self>) {
        self.data = data;
        cx.notify();
    }

    /// The item a create drag would produce if released now.
    ///
    /// A sweep that never left its anchor cell produces nothing, so a plain
    /// click on an empty cell is a no-op.
    pub fn preview_item(&self) -> Option<Item> {
        self.gesture.create_extent().and_then(|(anchor, current)| {
            (current != anchor)
                .then(|| Item::new(anchor.min(current), (anchor - current).abs() + 1))
        })
    }
}

impl EventEmitter<GridEvent> for GridView {}

/// The root view: authoritative item list plus the grid widget and a JSON
/// readout of the list as a debug aid.
pub struct Workspace {
    /// Authoritative item list; the widget holds a copy
    pub items: Vec<Item>,
    /// The grid widget
    pub grid: Entity<GridView>,
    _subscription: Subscription,
}

impl Workspace {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let items = vec![Item::new(5, 10), Item::new(20, 15)];
        let grid = cx.new(|_| GridView::new(Grid::new(48), items.clone()));

        let subscription = cx.subscribe(&grid, |this, grid, event: &GridEvent, cx| {
            match *event {
                GridEvent::UpdateItem { index, item } => this.merge_update(index, item),
                GridEvent::CreateItem { item } => this.items.push(item),
            }
            grid.update(cx, |grid, cx| grid.set_data(this.items.clone(), cx));
            cx.notify();
        });

        Self {
            items,
            grid,
            _subscription: subscription,
        }
    }

    /// Merge an updated item into the list. Only the reported bounds are
    /// replaced; an out-of-range index is a silent no-op.
    pub fn merge_update(&mut self, index: usize, item: Item) {
        if let Some(existing) = self.items.get_mut(index) {
            existing.start = item.start;
            existing.size = item.size;
            tracing::debug!(index, start = item.start, size = item.size, "item updated");
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let readout = serde_json::to_string(&self.items).unwrap_or_default();

        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(hsla(0.0, 0.0, 0.98, 1.0))
            .text_color(hsla(0.0, 0.0, 0.15, 1.0))
            // Mouse events are handled at the root so a drag keeps tracking
            // after the pointer leaves the grid; the widget maps
            // window-relative pixels itself.
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, event, window, cx| {
                    this.grid
                        .update(cx, |grid, cx| grid.handle_mouse_down(event, window, cx));
                }),
            )
            .on_mouse_move(cx.listener(|this, event, window, cx| {
                this.grid
                    .update(cx, |grid, cx| grid.handle_mouse_move(event, window, cx));
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, event, window, cx| {
                    this.grid
                        .update(cx, |grid, cx| grid.handle_mouse_up(event, window, cx));
                }),
            )
            .child(
                div()
                    .h(px(HEADER_HEIGHT))
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .px(px(CANVAS_PADDING))
                    .border_b_1()
                    .border_color(hsla(0.0, 0.0, 0.85, 1.0))
                    .child(div().text_size(px(14.0)).child("Spangrid"))
                    .child(
                        div()
                            .text_size(px(11.0))
                            .text_color(hsla(0.0, 0.0, 0.5, 1.0))
                            .child("drag to move, grab an edge to resize, sweep empty cells to create"),
                    ),
            )
            .child(div().p(px(CANVAS_PADDING)).child(self.grid.clone()))
            .child(
                div()
                    .px(px(CANVAS_PADDING))
                    .text_size(px(12.0))
                    .text_color(hsla(0.0, 0.0, 0.45, 1.0))
                    .child(readout),
            )
    }
}
