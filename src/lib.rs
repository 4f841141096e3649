//! Spangrid - a fixed-grid canvas widget for dragging, creating, and
//! resizing contiguous cell ranges.
//!
//! The crate is one widget plus the small application shell that hosts it:
//! - `types` - items, the grid, and the row-segment split used by rendering
//! - `input` - the pointer-interaction state machine (hit testing, gestures)
//! - `render` - grid lines, item bars, and cell labels painted via GPU quads
//! - `app` - the owning workspace view holding the authoritative item list

pub mod app;
pub mod constants;
pub mod input;
pub mod perf;
pub mod render;
pub mod types;
