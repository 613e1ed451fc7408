//! Grid spritesheet compositor for collections of same-size images
//!
//! The system decodes source images (individual files or whole directories),
//! gathers them into an ordered registry, and blits each one into its cell of
//! a row-major grid canvas which is written out as a single PNG.

#![forbid(unsafe_code)]

/// Grid geometry and the row-major compositing pass
pub mod compose;
/// Input/output operations and error handling
pub mod io;
/// Ordered collection of decoded source images
pub mod registry;

pub use io::error::{Result, StitchError};
