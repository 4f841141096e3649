//! Application module - the workspace view that owns the authoritative item
//! list and hosts the grid widget.

mod state;

pub use state::{GridEvent, GridView, Workspace};
