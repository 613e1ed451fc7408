//! Source discovery and decoding into the registry
//!
//! Inputs are expanded to candidate files first, then each candidate is read
//! once, sniffed, and decoded. Explicitly listed files must classify as a
//! supported format; entries found during a directory scan are skipped
//! silently when they do not. Decode failures are fatal either way.

use crate::io::error::{Result, StitchError, file_system};
use crate::io::sniff::{RasterKind, classify};
use crate::registry::{ImageRecord, ImageRegistry};
use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// One file queued for decoding, with the provenance that decides how a
/// failed sniff is handled
#[derive(Debug, Clone)]
pub struct SourceCandidate {
    path: PathBuf,
    explicit: bool,
}

impl SourceCandidate {
    /// Path of the candidate file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file was named directly on the command line rather than
    /// found during a directory scan
    pub const fn is_explicit(&self) -> bool {
        self.explicit
    }
}

/// Expand command-line inputs into an ordered list of candidate files
///
/// Directory inputs contribute their regular files sorted by path, for a
/// deterministic placement order; nested directories are not descended into.
/// Inputs keep their command-line order relative to each other.
///
/// # Errors
///
/// Returns an error if any input path cannot be stat'ed or a directory
/// cannot be read.
pub fn collect_candidates(inputs: &[PathBuf]) -> Result<Vec<SourceCandidate>> {
    let mut candidates = Vec::new();

    for input in inputs {
        let metadata = std::fs::metadata(input)
            .map_err(|e| file_system(input.clone(), "stat", e))?;

        if metadata.is_dir() {
            let mut entries = Vec::new();
            let read_dir = std::fs::read_dir(input)
                .map_err(|e| file_system(input.clone(), "read directory", e))?;
            for entry in read_dir {
                let entry = entry.map_err(|e| file_system(input.clone(), "read directory", e))?;
                let path = entry.path();
                if path.is_dir() {
                    continue;
                }
                entries.push(path);
            }
            entries.sort();
            candidates.extend(entries.into_iter().map(|path| SourceCandidate {
                path,
                explicit: false,
            }));
        } else {
            candidates.push(SourceCandidate {
                path: input.clone(),
                explicit: true,
            });
        }
    }

    Ok(candidates)
}

/// Decode one candidate and append its records to the registry
///
/// Returns the number of records appended: one for a still image, one per
/// frame for an animated GIF, zero when a scanned file fails to classify and
/// is skipped. The file is read into memory once; no handle outlives the
/// call.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - An explicitly listed file does not classify as a supported format
/// - Decoding fails
pub fn decode_into(registry: &mut ImageRegistry, candidate: &SourceCandidate) -> Result<usize> {
    let path = candidate.path();
    let bytes =
        std::fs::read(path).map_err(|e| file_system(path.to_path_buf(), "read", e))?;

    let Some(kind) = classify(&bytes) else {
        if candidate.is_explicit() {
            return Err(StitchError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
        return Ok(0);
    };

    match kind {
        RasterKind::Png | RasterKind::Jpeg => {
            let decoded = image::load_from_memory_with_format(&bytes, kind.into()).map_err(
                |e| StitchError::ImageLoad {
                    path: path.to_path_buf(),
                    source: e,
                },
            )?;
            registry.push(ImageRecord::new(decoded.to_rgba8(), path.to_path_buf()));
            Ok(1)
        }
        RasterKind::Gif => {
            let decoder =
                GifDecoder::new(Cursor::new(&bytes)).map_err(|e| StitchError::ImageLoad {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            let frames = decoder
                .into_frames()
                .collect_frames()
                .map_err(|e| StitchError::ImageLoad {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            let appended = frames.len();
            for frame in frames {
                registry.push(ImageRecord::new(frame.into_buffer(), path.to_path_buf()));
            }
            Ok(appended)
        }
    }
}
