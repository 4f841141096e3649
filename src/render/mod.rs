//! Rendering for the span grid.

pub mod canvas;
