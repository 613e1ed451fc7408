//! Row-major placement of registry records onto a destination canvas

use crate::compose::grid::GridLayout;
use crate::io::error::Result;
use crate::registry::ImageRegistry;
use image::{RgbaImage, imageops};

/// Composite every registry record into a grid canvas
///
/// Validates the registry, allocates a zeroed (fully transparent) canvas
/// sized for `columns * rows` cells, and blits each record at a running
/// cursor with replace semantics: destination pixels are overwritten, never
/// alpha-blended. Placement is left-to-right, top-to-bottom in registry
/// order. Cells of a partially filled final row stay transparent.
///
/// The cursor advances by the current record's own dimensions, not the cell
/// dimensions. For uniform-size input the two are identical; undersized
/// records shift subsequent placements, which matches the validation policy
/// in [`GridLayout::from_registry`].
///
/// # Errors
///
/// Returns an error if:
/// - The registry is empty
/// - `columns` is zero
/// - Any record is larger than the first record in either dimension
pub fn compose(registry: &ImageRegistry, columns: u32) -> Result<RgbaImage> {
    let layout = GridLayout::from_registry(registry, columns)?;

    let mut canvas = RgbaImage::new(layout.canvas_width(), layout.canvas_height());

    let mut cur_x = 0i64;
    let mut cur_y = 0i64;
    for (index, record) in registry.iter().enumerate() {
        imageops::replace(&mut canvas, record.pixels(), cur_x, cur_y);

        if (index + 1) % columns as usize == 0 {
            cur_y += i64::from(record.height());
            cur_x = 0;
        } else {
            cur_x += i64::from(record.width());
        }
    }

    Ok(canvas)
}
