// Integration tests for SnapBooth
// These tests verify the image pipeline the final step relies on.
// The store, flow, and composition units carry their own in-module tests;
// the binary crate exposes no library target for integration tests to link
// against, so everything here works through the image pipeline directly.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Helper to create a simple test image
fn create_test_image(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}

#[test]
fn test_layer_stacking_order() {
    // The final composite stacks backdrop, snapshot, character - in that
    // order. A later overlay must win wherever it is opaque.
    let mut canvas = create_test_image(64, 64, Rgba([0, 0, 255, 255]));
    let snapshot = create_test_image(32, 32, Rgba([255, 0, 0, 255]));

    imageops::overlay(&mut canvas, &snapshot, 16, 16);

    assert_eq!(canvas.get_pixel(32, 32), &Rgba([255, 0, 0, 255]));
    assert_eq!(canvas.get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
}

#[test]
fn test_transparent_overlay_leaves_lower_layers() {
    // Character art is mostly transparent PNG; only its opaque pixels may
    // cover the photo.
    let mut canvas = create_test_image(64, 64, Rgba([255, 0, 0, 255]));
    let overlay = create_test_image(64, 64, Rgba([0, 255, 0, 0]));

    imageops::overlay(&mut canvas, &overlay, 0, 0);

    assert_eq!(canvas.get_pixel(32, 32), &Rgba([255, 0, 0, 255]));
}

#[test]
fn test_preview_downscale_preserves_dimensions() {
    // The live preview fits camera frames into a fixed panel; resizing a
    // 4:3 frame must produce exactly the requested dimensions.
    let frame = create_test_image(640, 480, Rgba([10, 20, 30, 255]));
    let scaled = imageops::resize(&frame, 320, 240, FilterType::Triangle);

    assert_eq!(scaled.width(), 320);
    assert_eq!(scaled.height(), 240);
}

#[test]
fn test_mirrored_preview_flips_horizontally() {
    // Selfie preview flips the frame; the saved still never does.
    let mut frame = create_test_image(4, 1, Rgba([0, 0, 0, 255]));
    frame.put_pixel(0, 0, Rgba([255, 255, 255, 255]));

    let mirrored = imageops::flip_horizontal(&frame);

    assert_eq!(mirrored.get_pixel(3, 0), &Rgba([255, 255, 255, 255]));
    assert_eq!(mirrored.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
}

#[test]
fn test_wizard_flow_contract() {
    // The five step paths, in walk order. Root resolves to the first of
    // these; each path maps to exactly one surface. The enum itself is
    // covered in src/flow; this documents the external contract.
    let paths = ["/camera-setup", "/background", "/character", "/text", "/final"];

    let unique: std::collections::HashSet<&str> = paths.iter().copied().collect();
    assert_eq!(unique.len(), paths.len(), "no two steps share a path");
    assert_eq!(paths[0], "/camera-setup", "root redirects here");
}
