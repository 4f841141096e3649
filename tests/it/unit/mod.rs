//! Unit tests for spangrid.

mod gesture_update_tests;
mod mapper_tests;
mod segment_tests;
