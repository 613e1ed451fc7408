//! Content-based raster format classification
//!
//! Files are classified by inspecting a byte prefix, never by extension, so a
//! mislabelled file is handled according to what it actually contains.

use crate::io::configuration::SNIFF_PREFIX_LEN;
use image::ImageFormat;

/// Raster formats the loader knows how to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterKind {
    /// Portable Network Graphics, single frame
    Png,
    /// JPEG, single frame
    Jpeg,
    /// GIF; animated sources contribute one record per frame
    Gif,
}

impl From<RasterKind> for ImageFormat {
    fn from(kind: RasterKind) -> Self {
        match kind {
            RasterKind::Png => Self::Png,
            RasterKind::Jpeg => Self::Jpeg,
            RasterKind::Gif => Self::Gif,
        }
    }
}

/// Classify file contents by magic bytes
///
/// Inspects at most the first [`SNIFF_PREFIX_LEN`] bytes. Returns `None` for
/// anything that is not a supported raster format, including formats the
/// image stack could decode but this tool does not accept.
pub fn classify(bytes: &[u8]) -> Option<RasterKind> {
    let window = bytes.get(..SNIFF_PREFIX_LEN.min(bytes.len()))?;
    match image::guess_format(window) {
        Ok(ImageFormat::Png) => Some(RasterKind::Png),
        Ok(ImageFormat::Jpeg) => Some(RasterKind::Jpeg),
        Ok(ImageFormat::Gif) => Some(RasterKind::Gif),
        _ => None,
    }
}
