use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};

use crate::assets;
use crate::error::ComposeError;
use crate::slug;

/// Final composition
///
/// Layers the booth photo the way the final step displays it:
/// backdrop at the bottom, the captured snapshot fitted over it, the
/// character overlay on top. The caption is not rasterized into the bitmap;
/// it is rendered by the final view and contributes the saved file's name.

/// Canvas the composed photo is rendered onto (4:3, matching the preview).
pub const CANVAS_WIDTH: u32 = 1280;
pub const CANVAS_HEIGHT: u32 = 960;

const CANVAS_FILL: Rgba<u8> = Rgba([24, 24, 24, 255]);

/// Scale `(width, height)` to fit inside `(max_w, max_h)` preserving aspect.
fn fit_within(width: u32, height: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (max_w, max_h);
    }

    let scale = f64::min(max_w as f64 / width as f64, max_h as f64 / height as f64);
    let w = ((width as f64 * scale).round() as u32).clamp(1, max_w);
    let h = ((height as f64 * scale).round() as u32).clamp(1, max_h);
    (w, h)
}

/// Load the layers the current selection references. Ids of 0 contribute no
/// layer; a non-zero id whose asset file is missing is an error the final
/// view surfaces in the status line.
pub fn load_layers(
    background_id: u32,
    character_id: u32,
) -> Result<(Option<DynamicImage>, Option<DynamicImage>), ComposeError> {
    let background = match assets::background_path(background_id) {
        Some(path) => Some(load_asset(&path)?),
        None => None,
    };
    let character = match assets::character_path(character_id) {
        Some(path) => Some(load_asset(&path)?),
        None => None,
    };
    Ok((background, character))
}

fn load_asset(path: &Path) -> Result<DynamicImage, ComposeError> {
    if !path.exists() {
        return Err(ComposeError::AssetMissing {
            path: path.display().to_string(),
        });
    }
    image::open(path).map_err(|e| ComposeError::AssetLoadFailed {
        path: path.display().to_string(),
        source: Box::new(e),
    })
}

/// Compose the final photo onto the canvas.
///
/// Layer order is fixed: backdrop (stretched to the canvas), snapshot
/// (fitted, centered), character overlay (stretched to the canvas,
/// alpha-blended). Output always has canvas dimensions regardless of the
/// layer sizes.
pub fn compose_final(
    snapshot: &RgbaImage,
    background: Option<&DynamicImage>,
    character: Option<&DynamicImage>,
) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, CANVAS_FILL);

    if let Some(background) = background {
        let scaled = background.resize_exact(CANVAS_WIDTH, CANVAS_HEIGHT, FilterType::Triangle);
        imageops::overlay(&mut canvas, &scaled.to_rgba8(), 0, 0);
    }

    let (fit_w, fit_h) = fit_within(
        snapshot.width(),
        snapshot.height(),
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
    );
    let fitted = imageops::resize(snapshot, fit_w, fit_h, FilterType::Triangle);
    let offset_x = ((CANVAS_WIDTH - fit_w) / 2) as i64;
    let offset_y = ((CANVAS_HEIGHT - fit_h) / 2) as i64;
    imageops::overlay(&mut canvas, &fitted, offset_x, offset_y);

    if let Some(character) = character {
        let scaled = character.resize_exact(CANVAS_WIDTH, CANVAS_HEIGHT, FilterType::Triangle);
        imageops::overlay(&mut canvas, &scaled.to_rgba8(), 0, 0);
    }

    canvas
}

/// Save a composed photo under `dir`, named after the caption.
pub fn save_composite(
    composed: &RgbaImage,
    dir: &Path,
    caption: &str,
) -> Result<PathBuf, ComposeError> {
    fs::create_dir_all(dir).map_err(|e| ComposeError::SaveFailed {
        path: dir.display().to_string(),
        source: Box::new(e),
    })?;

    let epoch_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = dir.join(format!("{}_{epoch_secs}.png", slug::caption_stem(caption)));

    DynamicImage::ImageRgba8(composed.clone())
        .save(&path)
        .map_err(|e| ComposeError::SaveFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(rgba))
    }

    #[test]
    fn test_fit_within_preserves_aspect() {
        // 4:3 snapshot into the 4:3 canvas fills it
        assert_eq!(fit_within(640, 480, 1280, 960), (1280, 960));
        // Wide snapshot is width-bound
        assert_eq!(fit_within(1920, 1080, 1280, 960), (1280, 720));
        // Tall snapshot is height-bound
        assert_eq!(fit_within(480, 960, 1280, 960), (480, 960));
    }

    #[test]
    fn test_fit_within_degenerate_input() {
        assert_eq!(fit_within(0, 480, 1280, 960), (1280, 960));
    }

    #[test]
    fn test_compose_output_has_canvas_dimensions() {
        let snapshot = solid(321, 200, [10, 20, 30, 255]);
        let composed = compose_final(&snapshot, None, None);
        assert_eq!(composed.width(), CANVAS_WIDTH);
        assert_eq!(composed.height(), CANVAS_HEIGHT);
    }

    #[test]
    fn test_snapshot_is_centered() {
        // A white square snapshot on no backdrop: the center is white, the
        // left edge keeps the canvas fill (square fitted to 960x960 leaves
        // 160px bars either side)
        let snapshot = solid(100, 100, [255, 255, 255, 255]);
        let composed = compose_final(&snapshot, None, None);

        let center = composed.get_pixel(CANVAS_WIDTH / 2, CANVAS_HEIGHT / 2);
        assert_eq!(center, &Rgba([255, 255, 255, 255]));

        let left_bar = composed.get_pixel(10, CANVAS_HEIGHT / 2);
        assert_eq!(left_bar, &CANVAS_FILL);
    }

    #[test]
    fn test_backdrop_fills_the_bars() {
        let snapshot = solid(100, 100, [255, 255, 255, 255]);
        let backdrop =
            DynamicImage::ImageRgba8(solid(64, 64, [0, 0, 200, 255]));
        let composed = compose_final(&snapshot, Some(&backdrop), None);

        let left_bar = composed.get_pixel(10, CANVAS_HEIGHT / 2);
        assert_eq!(left_bar, &Rgba([0, 0, 200, 255]));
    }

    #[test]
    fn test_transparent_overlay_keeps_snapshot_visible() {
        let snapshot = solid(100, 100, [255, 0, 0, 255]);
        // Fully transparent character layer
        let overlay = DynamicImage::ImageRgba8(solid(32, 32, [0, 255, 0, 0]));
        let composed = compose_final(&snapshot, None, Some(&overlay));

        let center = composed.get_pixel(CANVAS_WIDTH / 2, CANVAS_HEIGHT / 2);
        assert_eq!(center, &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_load_layers_sentinel_zero() {
        let (background, character) = load_layers(0, 0).unwrap();
        assert!(background.is_none());
        assert!(character.is_none());
    }

    #[test]
    fn test_load_layers_missing_asset_errors() {
        // Non-zero ids reference bundled files; without them this is an error
        let result = load_layers(u32::MAX, 0);
        assert!(matches!(result, Err(ComposeError::AssetMissing { .. })));
    }

    #[test]
    fn test_save_composite_names_file_after_caption() {
        let dir = std::env::temp_dir().join("snapbooth-compose-test");
        let composed = solid(4, 4, [1, 2, 3, 255]);

        let path = save_composite(&composed, &dir, "Best Day Ever").unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("Best_Day_Ever_"));
        assert!(name.ends_with(".png"));
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }
}
