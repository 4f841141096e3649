//! Mouse input handling for the span grid.
//!
//! This module implements the pointer-interaction state machine that turns
//! raw pixel coordinates into grid-cell indices and item updates.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`Gesture`) to track the
//! current interaction mode. Hit classification and gesture arithmetic are
//! pure functions so they can be tested without a window.
//!
//! ## Modules
//!
//! - `coords` - pixel-to-cell coordinate mapping
//! - `state` - gesture state machine enum and helper methods
//! - `hit` - mouse-down hit classification (border, body, empty cell)
//! - `mouse_down` - mouse down event handling (gesture start)
//! - `drag` - mouse move handling (hover affordance, move/resize updates)
//! - `mouse_up` - mouse up event handling (commit creation, clear gesture)

pub mod coords;
mod drag;
mod hit;
mod mouse_down;
mod mouse_up;
mod state;

pub use drag::plan_update;
pub use hit::{classify_hit, Hit};
pub use state::Gesture;
