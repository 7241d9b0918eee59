use image::{DynamicImage, RgbaImage};
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;

use crate::error::CameraError;

/// Live-preview camera that owns an open capture stream.
///
/// The stream is negotiated once at open time for the highest resolution
/// the device offers and reused for every frame; reopening per frame is far
/// too slow for a live preview. Owned by the preview worker thread, never
/// shared.
pub struct PreviewCamera {
    camera: Camera,
}

impl PreviewCamera {
    /// Open the device at `index` and start streaming.
    pub fn open(index: u32) -> Result<Self, CameraError> {
        let requested =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);

        let mut camera =
            Camera::new(CameraIndex::Index(index), requested).map_err(|e| {
                CameraError::OpenFailed {
                    device: format!("camera-{index}"),
                    source: Box::new(e),
                }
            })?;

        camera.open_stream().map_err(|e| CameraError::OpenFailed {
            device: format!("camera-{index}"),
            source: Box::new(e),
        })?;

        Ok(Self { camera })
    }

    /// The resolution the stream actually negotiated.
    pub fn resolution(&self) -> (u32, u32) {
        let res = self.camera.resolution();
        (res.width(), res.height())
    }

    /// Grab and decode one frame as RGBA.
    pub fn grab(&mut self) -> Result<RgbaImage, CameraError> {
        let frame = self
            .camera
            .frame()
            .map_err(|e| CameraError::FrameGrabFailed(Box::new(e)))?;

        let rgb = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| CameraError::FrameGrabFailed(Box::new(e)))?;

        Ok(DynamicImage::ImageRgb8(rgb).to_rgba8())
    }
}

impl Drop for PreviewCamera {
    fn drop(&mut self) {
        // Best effort; the device is released either way
        let _ = self.camera.stop_stream();
    }
}
