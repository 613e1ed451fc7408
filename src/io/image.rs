//! PNG export of the composited canvas

use crate::io::configuration::OUTPUT_EXTENSION;
use crate::io::error::{Result, StitchError};
use image::{ImageFormat, RgbaImage};
use std::path::PathBuf;

/// Write the finished canvas to `<output_name>.png` in the working directory
///
/// The canvas is encoded as PNG regardless of the sources' formats; the
/// encoding is lossless, so decoding the file again reproduces the canvas
/// byte for byte. Returns the path that was written.
///
/// # Errors
///
/// Returns an error if the output file cannot be created or the canvas
/// cannot be encoded.
pub fn export_canvas_as_png(canvas: &RgbaImage, output_name: &str) -> Result<PathBuf> {
    let path = PathBuf::from(format!("{output_name}.{OUTPUT_EXTENSION}"));

    canvas
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|e| StitchError::ImageExport {
            path: path.clone(),
            source: e,
        })?;

    Ok(path)
}
