//! Command-line interface for stitching images into a grid spritesheet

use crate::compose::{GridLayout, compose};
use crate::io::configuration::{DEFAULT_COLUMNS, DEFAULT_OUTPUT_NAME};
use crate::io::error::Result;
use crate::io::image::export_canvas_as_png;
use crate::io::loader::{collect_candidates, decode_into};
use crate::io::progress::ProgressManager;
use crate::registry::ImageRegistry;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the spritesheet tool
#[derive(Parser)]
#[command(name = "stitcher")]
#[command(
    author,
    version,
    about = "Composite same-size images into a grid spritesheet PNG"
)]
pub struct Cli {
    /// Image files and/or directories to stitch, in placement order
    #[arg(value_name = "PATH", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Number of grid columns
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub cols: u32,

    /// Base name for the output file, written as <name>.png
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    pub name: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one stitching run: discover, decode, composite, export
pub struct SheetProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SheetProcessor {
    /// Create a processor from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the full pipeline and write `<name>.png`
    ///
    /// Any failure along the way is returned unrecovered; the process entry
    /// point turns it into a non-zero exit with the rendered message.
    ///
    /// # Errors
    ///
    /// Returns an error if input discovery, decoding, validation,
    /// compositing, or export fails.
    pub fn process(&mut self) -> Result<()> {
        let candidates = collect_candidates(&self.cli.inputs)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(candidates.len());
        }

        let mut registry = ImageRegistry::new();
        for candidate in &candidates {
            let appended = decode_into(&mut registry, candidate)?;

            if let Some(ref pm) = self.progress_manager {
                if appended == 0 {
                    pm.file_skipped(candidate.path());
                } else if let Some(record) = registry.last() {
                    pm.file_loaded(
                        registry.len() - 1,
                        candidate.path(),
                        record.width(),
                        record.height(),
                        appended,
                    );
                }
            }
        }

        let layout = GridLayout::from_registry(&registry, self.cli.cols)?;
        if let Some(ref pm) = self.progress_manager {
            pm.announce_layout(&layout);
        }

        let canvas = compose(&registry, self.cli.cols)?;
        let output = export_canvas_as_png(&canvas, &self.cli.name)?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish(&output);
        }

        Ok(())
    }
}
