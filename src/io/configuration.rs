//! Defaults and tunable constants

/// Default number of grid columns
pub const DEFAULT_COLUMNS: u32 = 4;

/// Default base name for the output file
pub const DEFAULT_OUTPUT_NAME: &str = "out";

/// Extension of the written spritesheet
pub const OUTPUT_EXTENSION: &str = "png";

// Matches the window content sniffers conventionally inspect; every format
// magic number we dispatch on sits well inside it
/// Number of leading bytes inspected when classifying a file
pub const SNIFF_PREFIX_LEN: usize = 512;
