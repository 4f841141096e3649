//! Grid canvas rendering - grid lines, item bars, and cell labels.
//!
//! Grid lines and item bars are painted directly to the GPU via quads
//! inside a `canvas` element; cell index labels are absolutely positioned
//! text elements layered on top. Item spans that cross a row boundary are
//! split into per-row segments so a wrapped span still reads as one
//! continuous bar.

use crate::app::GridView;
use crate::constants::{
    BAR_ALPHA, BAR_INSET, CELL_HEIGHT, CELL_WIDTH, COLUMNS, PREVIEW_ALPHA,
};
use crate::profile_scope;
use crate::types::{Grid, Item};
use gpui::*;

/// Fill color for the bar of the item at `index`.
///
/// Hues step around the wheel by the golden angle so neighboring items stay
/// visually distinct without a fixed palette.
pub fn item_color(index: usize, alpha: f32) -> Hsla {
    let hue = (index as f32 * 137.5) % 360.0;
    hsla(hue / 360.0, 0.6, 0.5, alpha)
}

impl Render for GridView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let grid = self.grid;
        let items = self.data.clone();
        let preview = self.preview_item();

        div()
            .relative()
            .w(px(grid.width()))
            .h(px(grid.height()))
            .cursor(self.cursor)
            .child(
                canvas(
                    move |_bounds, _window, _cx| (),
                    move |bounds, _, window, _cx| {
                        paint_grid(bounds, window, grid, &items, preview);
                    },
                )
                .absolute()
                .size_full(),
            )
            .children((0..grid.cells).map(|i| {
                let col = (i as i32 % COLUMNS) as f32;
                let row = (i as i32 / COLUMNS) as f32;
                div()
                    .absolute()
                    .left(px(col * CELL_WIDTH + 3.0))
                    .top(px(row * CELL_HEIGHT + 1.0))
                    .text_size(px(9.0))
                    .text_color(hsla(0.0, 0.0, 0.55, 1.0))
                    .child(i.to_string())
            }))
    }
}

/// Paint grid lines, item bars, and the create preview.
fn paint_grid(
    bounds: Bounds<Pixels>,
    window: &mut Window,
    grid: Grid,
    items: &[Item],
    preview: Option<Item>,
) {
    profile_scope!("paint_grid");

    paint_grid_lines(bounds, window, grid);

    for (index, item) in items.iter().enumerate() {
        paint_bar(bounds, window, item, item_color(index, BAR_ALPHA));
    }
    if let Some(item) = preview {
        paint_bar(bounds, window, &item, item_color(items.len(), PREVIEW_ALPHA));
    }
}

fn paint_grid_lines(bounds: Bounds<Pixels>, window: &mut Window, grid: Grid) {
    let line = hsla(0.0, 0.0, 0.75, 1.0);
    let origin_x = f32::from(bounds.origin.x);
    let origin_y = f32::from(bounds.origin.y);
    let width = grid.width();
    let height = grid.height();

    // Outer border, drawn exactly once.
    window.paint_quad(quad(
        bounds,
        px(0.0),
        transparent_black(),
        px(1.0),
        line,
        Default::default(),
    ));

    // Interior lines, one per shared cell edge so no stroke is doubled.
    for col in 1..COLUMNS {
        let x = origin_x + col as f32 * CELL_WIDTH;
        window.paint_quad(quad(
            Bounds {
                origin: point(px(x), px(origin_y)),
                size: size(px(1.0), px(height)),
            },
            px(0.0),
            line,
            px(0.0),
            transparent_black(),
            Default::default(),
        ));
    }
    for row in 1..grid.rows() {
        let y = origin_y + row as f32 * CELL_HEIGHT;
        window.paint_quad(quad(
            Bounds {
                origin: point(px(origin_x), px(y)),
                size: size(px(width), px(1.0)),
            },
            px(0.0),
            line,
            px(0.0),
            transparent_black(),
            Default::default(),
        ));
    }
}

/// Paint one item as a bar, one quad per row segment.
///
/// All segments are inset vertically; the first segment is additionally
/// inset on the left and the last on the right, so the wrapped bar reads
/// as a single padded pill.
fn paint_bar(bounds: Bounds<Pixels>, window: &mut Window, item: &Item, color: Hsla) {
    let origin_x = f32::from(bounds.origin.x);
    let origin_y = f32::from(bounds.origin.y);

    for segment in item.segments() {
        let left_inset = if segment.first { BAR_INSET } else { 0.0 };
        let right_inset = if segment.last { BAR_INSET } else { 0.0 };

        let x = origin_x + segment.col as f32 * CELL_WIDTH + left_inset;
        let y = origin_y + segment.row as f32 * CELL_HEIGHT + BAR_INSET;
        let w = segment.len as f32 * CELL_WIDTH - left_inset - right_inset;
        let h = CELL_HEIGHT - 2.0 * BAR_INSET;

        window.paint_quad(quad(
            Bounds {
                origin: point(px(x), px(y)),
                size: size(px(w), px(h)),
            },
            px(0.0),
            color,
            px(0.0),
            transparent_black(),
            Default::default(),
        ));
    }
}
