//! Input/output operations
//!
//! This module contains everything that touches the outside world:
//! - CLI argument parsing and run orchestration
//! - Content sniffing and image decoding
//! - PNG export of the finished canvas
//! - Progress reporting

/// Command-line interface and run orchestration
pub mod cli;
/// Defaults and tunable constants
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG export of the composited canvas
pub mod image;
/// Source discovery and decoding into the registry
pub mod loader;
/// Progress reporting for batch loading
pub mod progress;
/// Content-based raster format classification
pub mod sniff;
