//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Grid Geometry
// ============================================================================

/// Number of columns in the row-major grid
pub const COLUMNS: i32 = 8;

/// Width of a single grid cell in pixels
pub const CELL_WIDTH: f32 = 80.0;

/// Height of a single grid cell in pixels
pub const CELL_HEIGHT: f32 = 30.0;

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the header bar in pixels
pub const HEADER_HEIGHT: f32 = 40.0;

/// Padding around the grid canvas in pixels
pub const CANVAS_PADDING: f32 = 16.0;

// ============================================================================
// Interaction
// ============================================================================

/// Pixel distance from a span edge that still counts as a border grab
pub const BORDER_HIT_SLOP: f32 = 10.0;

// ============================================================================
// Item Bars
// ============================================================================

/// Inset applied to item bars: vertical on every segment, horizontal on the
/// outer edges of the first and last segment
pub const BAR_INSET: f32 = 4.0;

/// Fill alpha for item bars
pub const BAR_ALPHA: f32 = 0.35;

/// Fill alpha for the create-drag preview bar
pub const PREVIEW_ALPHA: f32 = 0.18;
