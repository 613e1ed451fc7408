//! Ordered registry of decoded source images
//!
//! Loaders append one record per decoded file (or per frame, for animated
//! sources) and the compositor consumes the whole registry in a single pass.
//! Insertion order is placement order and is never re-sorted.

use image::RgbaImage;
use std::path::{Path, PathBuf};

/// One decoded source image destined for a grid cell
///
/// Immutable after construction; the dimensions are captured from the pixel
/// buffer so they can never drift apart.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pixels: RgbaImage,
    width: u32,
    height: u32,
    source_path: PathBuf,
}

impl ImageRecord {
    /// Create a record from a decoded pixel buffer and its originating path
    pub fn new(pixels: RgbaImage, source_path: PathBuf) -> Self {
        let (width, height) = pixels.dimensions();
        Self {
            pixels,
            width,
            height,
            source_path,
        }
    }

    /// Decoded RGBA pixel data
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Originating file path, used for diagnostics only
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}

/// Append-only ordered sequence of [`ImageRecord`]
///
/// Must be non-empty before compositing; an empty registry at compose time is
/// a fatal precondition failure reported by the compositor.
#[derive(Debug, Clone, Default)]
pub struct ImageRegistry {
    records: Vec<ImageRecord>,
}

impl ImageRegistry {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, preserving insertion order
    pub fn push(&mut self, record: ImageRecord) {
        self.records.push(record);
    }

    /// Number of records loaded so far
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records have been loaded
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record, which defines the cell dimensions during validation
    pub fn first(&self) -> Option<&ImageRecord> {
        self.records.first()
    }

    /// Most recently appended record
    pub fn last(&self) -> Option<&ImageRecord> {
        self.records.last()
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, ImageRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ImageRegistry {
    type Item = &'a ImageRecord;
    type IntoIter = std::slice::Iter<'a, ImageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
