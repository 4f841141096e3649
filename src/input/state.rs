//! Gesture state machine - unified state for all pointer interactions.
//!
//! A single explicit state machine instead of scattered option fields,
//! making impossible states unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Move         (mouse down on an item body)
//! Idle -> ResizeStart  (mouse down within 10px of an item's left boundary)
//! Idle -> ResizeEnd    (mouse down within 10px of an item's right boundary)
//! Idle -> Create       (mouse down on an empty in-grid cell)
//!
//! Any -> Idle          (mouse up - finalizes the operation)
//! ```

use crate::input::hit::Hit;

/// The in-progress pointer interaction, bound to one item (or, for
/// `Create`, to a swept cell range).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// No active pointer operation
    Idle,

    /// Dragging an item body to a new start cell
    Move {
        /// Index of the item being moved
        index: usize,
        /// Cell distance between the grabbed cell and the item's start
        grab_offset: i32,
    },

    /// Dragging an item's left boundary; the end boundary stays fixed
    ResizeStart {
        /// Index of the item being resized
        index: usize,
    },

    /// Dragging an item's right boundary; the start stays fixed
    ResizeEnd {
        /// Index of the item being resized
        index: usize,
    },

    /// Sweeping out a new item from an empty cell
    Create {
        /// Cell the drag started on
        anchor: i32,
        /// Cell the pointer currently extends to
        current: i32,
    },
}

impl Default for Gesture {
    fn default() -> Self {
        Self::Idle
    }
}

impl Gesture {
    /// The gesture a fresh press starts for a classified hit.
    pub fn from_hit(hit: Hit) -> Self {
        match hit {
            Hit::StartBorder { index } => Self::ResizeStart { index },
            Hit::EndBorder { index } => Self::ResizeEnd { index },
            Hit::Body { index, grab_offset } => Self::Move { index, grab_offset },
            Hit::EmptyCell { cell } => Self::Create {
                anchor: cell,
                current: cell,
            },
            Hit::None => Self::Idle,
        }
    }

    /// Returns true if no gesture is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if any gesture is in progress.
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }

    /// Returns true if an item boundary is being dragged.
    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::ResizeStart { .. } | Self::ResizeEnd { .. })
    }

    /// Returns true if an item body is being dragged.
    pub fn is_moving(&self) -> bool {
        matches!(self, Self::Move { .. })
    }

    /// Returns true if a new item is being swept out.
    pub fn is_creating(&self) -> bool {
        matches!(self, Self::Create { .. })
    }

    /// Get the index of the item bound to this gesture, if any.
    pub fn item_index(&self) -> Option<usize> {
        match self {
            Self::Move { index, .. }
            | Self::ResizeStart { index }
            | Self::ResizeEnd { index } => Some(*index),
            _ => None,
        }
    }

    /// Get the captured grab offset, if moving.
    pub fn grab_offset(&self) -> Option<i32> {
        match self {
            Self::Move { grab_offset, .. } => Some(*grab_offset),
            _ => None,
        }
    }

    /// Get the swept `(anchor, current)` cells, if creating.
    pub fn create_extent(&self) -> Option<(i32, i32)> {
        match self {
            Self::Create { anchor, current } => Some((*anchor, *current)),
            _ => None,
        }
    }

    /// Extend a create sweep to a new cell.
    pub fn set_create_current(&mut self, cell: i32) {
        if let Self::Create { current, .. } = self {
            *current = cell;
        }
    }

    /// Reset to Idle.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
