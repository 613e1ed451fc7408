//! Grid dimension math and uniform-size validation
//!
//! The cell dimensions are taken from the first registry record. Validation
//! rejects any later record that is strictly larger in either dimension;
//! smaller records pass and are blitted into an undersized region. That
//! asymmetry is long-standing observable behavior and is kept as-is, because
//! downstream placement assumes every cell is exactly cell-sized.

use crate::io::error::{Result, StitchError, invalid_parameter};
use crate::registry::ImageRegistry;

/// Row-major grid geometry for one compositing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    columns: u32,
    rows: u32,
    cell_width: u32,
    cell_height: u32,
}

impl GridLayout {
    /// Validate the registry against a column count and derive the geometry
    ///
    /// The row count is `count / columns`, plus one when the division leaves
    /// a remainder; the final row may then be partially filled.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The registry is empty
    /// - `columns` is zero
    /// - Any record is larger than the first record in either dimension
    pub fn from_registry(registry: &ImageRegistry, columns: u32) -> Result<Self> {
        if columns < 1 {
            return Err(invalid_parameter(
                "columns",
                &columns,
                &"must be at least 1",
            ));
        }

        let first = registry.first().ok_or(StitchError::EmptyRegistry)?;
        let cell_width = first.width();
        let cell_height = first.height();

        for record in registry {
            if record.width() > cell_width || record.height() > cell_height {
                return Err(StitchError::SizeMismatch {
                    path: record.source_path().to_path_buf(),
                    dimensions: (record.width(), record.height()),
                    cell_dimensions: (cell_width, cell_height),
                });
            }
        }

        let count = registry.len() as u32;
        let rows = if count % columns == 0 {
            count / columns
        } else {
            count / columns + 1
        };

        Ok(Self {
            columns,
            rows,
            cell_width,
            cell_height,
        })
    }

    /// Number of grid columns
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of grid rows, including a partially filled final row
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Cell width, taken from the first registry record
    pub const fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Cell height, taken from the first registry record
    pub const fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Full canvas width in pixels
    pub const fn canvas_width(&self) -> u32 {
        self.cell_width * self.columns
    }

    /// Full canvas height in pixels
    pub const fn canvas_height(&self) -> u32 {
        self.cell_height * self.rows
    }
}
