//! Grid layout and compositing
//!
//! This module contains the compositing core:
//! - Grid geometry derived from a column count and the loaded registry
//! - The row-major placement pass that blits every record onto the canvas

/// Row-major placement of registry records onto the canvas
pub mod compositor;
/// Grid dimension math and uniform-size validation
pub mod grid;

pub use compositor::compose;
pub use grid::GridLayout;
