//! Validates content sniffing, source loading, and PNG export behavior

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, Rgba, RgbaImage};
use std::fs;
use std::path::Path;
use stitcher::StitchError;
use stitcher::compose::compose;
use stitcher::io::loader::{collect_candidates, decode_into};
use stitcher::io::image::export_canvas_as_png;
use stitcher::registry::{ImageRecord, ImageRegistry};

fn write_png(path: &Path, width: u32, height: u32, color: [u8; 4]) {
    let mut img = RgbaImage::new(width, height);
    for pixel in img.pixels_mut() {
        *pixel = Rgba(color);
    }
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

fn write_gif(path: &Path, frame_colors: &[[u8; 4]]) {
    let file = fs::File::create(path).unwrap();
    let mut encoder = GifEncoder::new(file);
    let frames = frame_colors.iter().map(|color| {
        let mut img = RgbaImage::new(8, 8);
        for pixel in img.pixels_mut() {
            *pixel = Rgba(*color);
        }
        Frame::from_parts(img, 0, 0, Delay::from_numer_denom_ms(100, 1))
    });
    encoder.encode_frames(frames).unwrap();
}

fn load_all(registry: &mut ImageRegistry, inputs: &[std::path::PathBuf]) -> stitcher::Result<()> {
    for candidate in collect_candidates(inputs)? {
        decode_into(registry, &candidate)?;
    }
    Ok(())
}

#[test]
fn test_explicit_png_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("sprite.png");
    write_png(&png, 16, 9, [1, 2, 3, 255]);

    let mut registry = ImageRegistry::new();
    load_all(&mut registry, &[png.clone()]).unwrap();

    assert_eq!(registry.len(), 1);
    let record = registry.first().unwrap();
    assert_eq!((record.width(), record.height()), (16, 9));
    assert_eq!(record.source_path(), png.as_path());
}

#[test]
fn test_sniffing_ignores_misleading_extension() {
    // A PNG body behind a .txt name still loads; classification is by
    // content, never by extension.
    let dir = tempfile::tempdir().unwrap();
    let disguised = dir.path().join("actually_a_png.txt");
    write_png(&disguised, 4, 4, [9, 9, 9, 255]);

    let mut registry = ImageRegistry::new();
    load_all(&mut registry, &[disguised]).unwrap();
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_explicit_non_image_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let text = dir.path().join("notes.txt");
    fs::write(&text, "definitely not pixels").unwrap();

    let mut registry = ImageRegistry::new();
    let result = load_all(&mut registry, &[text]);
    assert!(matches!(result, Err(StitchError::UnsupportedFormat { .. })));
    assert!(registry.is_empty());
}

#[test]
fn test_directory_scan_skips_non_images_silently() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("a.png"), 8, 8, [255, 0, 0, 255]);
    fs::write(dir.path().join("readme.txt"), "skip me").unwrap();
    write_png(&dir.path().join("b.png"), 8, 8, [0, 255, 0, 255]);
    fs::create_dir(dir.path().join("nested")).unwrap();

    let mut registry = ImageRegistry::new();
    load_all(&mut registry, &[dir.path().to_path_buf()]).unwrap();
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_directory_entries_load_in_sorted_order() {
    let dir = tempfile::tempdir().unwrap();
    // Created out of order on purpose.
    write_png(&dir.path().join("c.png"), 4, 4, [3, 0, 0, 255]);
    write_png(&dir.path().join("a.png"), 4, 4, [1, 0, 0, 255]);
    write_png(&dir.path().join("b.png"), 4, 4, [2, 0, 0, 255]);

    let mut registry = ImageRegistry::new();
    load_all(&mut registry, &[dir.path().to_path_buf()]).unwrap();

    let names: Vec<_> = registry
        .iter()
        .map(|r| r.source_path().file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
}

#[test]
fn test_animated_gif_contributes_one_record_per_frame() {
    let dir = tempfile::tempdir().unwrap();
    let gif = dir.path().join("anim.gif");
    write_gif(&gif, &[[255, 0, 0, 255], [0, 0, 255, 255], [0, 255, 0, 255]]);

    let mut registry = ImageRegistry::new();
    load_all(&mut registry, &[gif.clone()]).unwrap();

    assert_eq!(registry.len(), 3);
    for record in &registry {
        assert_eq!((record.width(), record.height()), (8, 8));
        assert_eq!(record.source_path(), gif.as_path());
    }
}

#[test]
fn test_corrupt_image_is_fatal_even_during_a_scan() {
    // Only sniff misses are skipped in a directory scan; a file that
    // classifies as PNG but fails to decode aborts the run.
    let dir = tempfile::tempdir().unwrap();
    let mut corrupt = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    corrupt.extend_from_slice(&[0xFF; 32]);
    fs::write(dir.path().join("broken.png"), corrupt).unwrap();

    let mut registry = ImageRegistry::new();
    let result = load_all(&mut registry, &[dir.path().to_path_buf()]);
    assert!(matches!(result, Err(StitchError::ImageLoad { .. })));
}

#[test]
fn test_missing_input_path_is_fatal() {
    let result = collect_candidates(&[std::path::PathBuf::from("no/such/path.png")]);
    assert!(matches!(result, Err(StitchError::FileSystem { .. })));
}

#[test]
fn test_export_writes_name_dot_png() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("sheet");

    let canvas = RgbaImage::new(10, 10);
    let written = export_canvas_as_png(&canvas, base.to_str().unwrap()).unwrap();

    assert_eq!(written, dir.path().join("sheet.png"));
    assert!(written.exists());
}

#[test]
fn test_export_to_uncreatable_path_is_fatal() {
    let canvas = RgbaImage::new(4, 4);
    let result = export_canvas_as_png(&canvas, "no/such/dir/out");
    assert!(matches!(result, Err(StitchError::ImageExport { .. })));
}

#[test]
fn test_png_round_trip_is_lossless() {
    let dir = tempfile::tempdir().unwrap();

    let mut registry = ImageRegistry::new();
    for (i, color) in [[255, 0, 0, 255], [0, 255, 0, 128], [0, 0, 255, 0]]
        .iter()
        .enumerate()
    {
        let mut img = RgbaImage::new(5, 3);
        for pixel in img.pixels_mut() {
            *pixel = Rgba(*color);
        }
        registry.push(ImageRecord::new(img, format!("{i}.png").into()));
    }

    let canvas = compose(&registry, 2).unwrap();
    let base = dir.path().join("roundtrip");
    let written = export_canvas_as_png(&canvas, base.to_str().unwrap()).unwrap();

    let reloaded = image::open(&written).unwrap().to_rgba8();
    assert_eq!(reloaded.as_raw(), canvas.as_raw());
}
