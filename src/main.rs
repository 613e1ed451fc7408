//! CLI entry point for the grid spritesheet compositor

use clap::Parser;
use stitcher::io::cli::{Cli, SheetProcessor};

fn main() -> stitcher::Result<()> {
    let cli = Cli::parse();
    let mut processor = SheetProcessor::new(cli);
    processor.process()
}
