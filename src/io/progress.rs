//! Progress reporting for batch loading
//!
//! Wraps a single indicatif bar over the candidate files being decoded,
//! with persistent per-file lines for what was loaded or skipped. Purely
//! observational; nothing here affects placement or output.

use crate::compose::GridLayout;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static LOAD_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("Loading [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for one stitching run
#[derive(Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Start the loading bar over the number of candidate files
    pub fn initialize(&mut self, candidate_count: usize) {
        let bar = ProgressBar::new(candidate_count as u64);
        bar.set_style(LOAD_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Report a decoded file and the number of records it contributed
    pub fn file_loaded(&self, index: usize, path: &Path, width: u32, height: u32, records: usize) {
        if let Some(ref bar) = self.bar {
            if records == 1 {
                bar.println(format!(
                    "Loaded image [{}]: {}: {width}x{height}",
                    index + 1,
                    path.display()
                ));
            } else {
                bar.println(format!(
                    "Loaded image [{}]: {}: {width}x{height} ({records} frames)",
                    index + 1,
                    path.display()
                ));
            }
            bar.inc(1);
        }
    }

    /// Report a scanned file that did not classify as an image
    pub fn file_skipped(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            bar.println(format!("Skipping: {} (not a supported image)", path.display()));
            bar.inc(1);
        }
    }

    /// Report the computed grid and canvas dimensions before compositing
    pub fn announce_layout(&self, layout: &GridLayout) {
        if let Some(ref bar) = self.bar {
            bar.println(format!(
                "New image dimensions ({}x{} grid): x={} y={}",
                layout.columns(),
                layout.rows(),
                layout.canvas_width(),
                layout.canvas_height()
            ));
        }
    }

    /// Clear the bar and report the written output file
    pub fn finish(&self, output: &Path) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
            bar.println(format!("New file created: {}", output.display()));
        }
    }
}
