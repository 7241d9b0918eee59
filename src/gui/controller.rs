use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use image::{imageops, DynamicImage, RgbaImage};
use parking_lot::Mutex;
use tracing::{error, info, warn};

use crate::camera::{enumerate_devices, infer_facing_mode, CameraSummary, PreviewCamera};
use crate::compose;
use crate::config::BoothConfig;
use crate::flow::{BoothStep, NavigationResult, StepRouter};
use crate::state::{CameraInfo, SelectionState};
use crate::utils::Debouncer;

/// Preview refresh cadence. ~15 fps is plenty for a framing preview and
/// keeps the disk churn low.
const PREVIEW_FRAME_INTERVAL: Duration = Duration::from_millis(66);

/// Two shutter presses inside this window count as one.
const SHUTTER_DEBOUNCE_MS: u64 = 800;

enum PreviewCommand {
    Capture,
    Stop,
}

/// Everything the preview worker and the UI share.
#[derive(Default)]
struct PreviewShared {
    /// Latest preview frame on disk
    frame_path: Option<PathBuf>,
    /// Bumped per frame so the image cache never shows a stale preview
    frame_generation: u32,
    /// Full-resolution still from the last shutter press
    still_path: Option<PathBuf>,
    /// Last worker-side failure, surfaced in the status line
    last_error: Option<String>,
}

/// Cheap-to-clone handle that owns the booth's runtime: the selection
/// store, the step router, the config, and the preview worker.
///
/// Every store mutation and navigation the views perform goes through
/// here; the views themselves hold no booth state.
#[derive(Clone)]
pub struct BoothController {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    selection: Arc<Mutex<SelectionState>>,
    router: Mutex<StepRouter>,
    config: Mutex<BoothConfig>,
    preview: Arc<Mutex<PreviewShared>>,
    preview_thread: Mutex<Option<thread::JoinHandle<()>>>,
    preview_cmd_tx: Mutex<Option<Sender<PreviewCommand>>>,
    status_message: Mutex<String>,
    shutter_guard: Mutex<Debouncer>,
}

impl BoothController {
    pub fn new() -> Result<Self> {
        let config = BoothConfig::load().unwrap_or_else(|err| {
            warn!("Failed to load config, using defaults: {err}");
            BoothConfig::default()
        });

        Ok(Self {
            inner: Arc::new(ControllerInner {
                selection: Arc::new(Mutex::new(SelectionState::new())),
                router: Mutex::new(StepRouter::new()),
                config: Mutex::new(config),
                preview: Arc::new(Mutex::new(PreviewShared::default())),
                preview_thread: Mutex::new(None),
                preview_cmd_tx: Mutex::new(None),
                status_message: Mutex::new("Pick a camera to get started".to_string()),
                shutter_guard: Mutex::new(Debouncer::new(SHUTTER_DEBOUNCE_MS)),
            }),
        })
    }

    pub fn selection(&self) -> Arc<Mutex<SelectionState>> {
        Arc::clone(&self.inner.selection)
    }

    pub fn status_message(&self) -> String {
        let mut status = self.inner.status_message.lock().clone();
        if let Some(err) = self.inner.preview.lock().last_error.take() {
            status = err.clone();
            *self.inner.status_message.lock() = err;
        }
        status
    }

    fn set_status(&self, message: impl Into<String>) {
        *self.inner.status_message.lock() = message.into();
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn current_step(&self) -> BoothStep {
        self.inner.router.lock().current_step()
    }

    pub fn go_next(&self) -> NavigationResult {
        self.inner.router.lock().next()
    }

    pub fn go_back(&self) -> NavigationResult {
        self.inner.router.lock().back()
    }

    pub fn go_to(&self, step: BoothStep) -> NavigationResult {
        self.inner.router.lock().go_to(step)
    }

    /// Deep link: resolve a path string to its step and jump there.
    pub fn resolve_path(&self, path: &str) -> NavigationResult {
        self.inner.router.lock().resolve(path)
    }

    /// Clear the whole session: selection back to defaults, router back to
    /// the first step, preview stopped, captured still discarded. The
    /// character catalog is reference data and is untouched.
    pub fn start_over(&self) {
        self.shutdown_preview_runtime();
        self.inner.selection.lock().reset();
        self.inner.router.lock().reset();
        {
            let mut preview = self.inner.preview.lock();
            preview.frame_path = None;
            preview.still_path = None;
            preview.last_error = None;
        }
        self.inner.shutter_guard.lock().reset();
        self.set_status("Pick a camera to get started");
        info!("Booth session reset");
    }

    // ------------------------------------------------------------------
    // Selection setters (the store's write surface)
    // ------------------------------------------------------------------

    pub fn set_background(&self, id: u32) {
        self.inner.selection.lock().set_background(id);
        self.set_status(format!("Backdrop {} selected", id));
    }

    pub fn set_character(&self, id: u32) {
        self.inner.selection.lock().set_character(id);
    }

    pub fn set_caption(&self, text: impl Into<String>) {
        self.inner.selection.lock().set_text(text);
    }

    /// Override the facing mode of the already-selected camera.
    pub fn toggle_facing_mode(&self) {
        let mut selection = self.inner.selection.lock();
        if let Some(camera) = selection.camera.clone() {
            let facing = camera.facing_mode.toggled();
            selection.set_camera(CameraInfo {
                facing_mode: facing,
                ..camera
            });
        }
    }

    // ------------------------------------------------------------------
    // Camera
    // ------------------------------------------------------------------

    /// Attached devices for the camera-setup picker. Enumeration failures
    /// surface as an empty list plus a status message rather than a dead
    /// view.
    pub fn camera_summaries(&self) -> Vec<CameraSummary> {
        match enumerate_devices() {
            Ok(devices) => devices,
            Err(err) => {
                warn!("Camera enumeration failed: {err}");
                self.set_status(format!("{err}"));
                Vec::new()
            }
        }
    }

    /// The device id the picker should preselect, if any.
    pub fn preferred_camera(&self) -> Option<String> {
        self.inner.config.lock().preferred_camera.clone()
    }

    /// Seconds the final step counts down before the shutter fires.
    pub fn countdown_secs(&self) -> u8 {
        self.inner.config.lock().countdown_secs
    }

    /// Open `summary`'s device, record the negotiated `CameraInfo` in the
    /// selection store, and start the live preview worker.
    pub fn select_camera(&self, summary: &CameraSummary) -> Result<CameraInfo> {
        self.shutdown_preview_runtime();

        let camera = PreviewCamera::open(summary.index)
            .map_err(|err| anyhow!("Failed to open {}: {err}", summary.label))?;
        let (width, height) = camera.resolution();

        let info = CameraInfo {
            device_id: summary.device_id.clone(),
            facing_mode: infer_facing_mode(&summary.label),
            width,
            height,
        };

        self.inner.selection.lock().set_camera(info.clone());

        {
            let mut config = self.inner.config.lock();
            config.preferred_camera = Some(summary.device_id.clone());
            if let Err(err) = config.save() {
                warn!("Failed to persist preferred camera: {err}");
            }
        }

        let mirror = self.inner.config.lock().mirror_preview;
        let (cmd_tx, cmd_rx) = unbounded();
        {
            let mut tx_slot = self.inner.preview_cmd_tx.lock();
            *tx_slot = Some(cmd_tx);
        }

        let shared = Arc::clone(&self.inner.preview);
        let handle = thread::spawn(move || {
            if let Err(err) = run_preview_loop(camera, mirror, shared, cmd_rx) {
                error!("Preview loop exited with error: {err:#}");
            }
        });

        let mut thread_slot = self.inner.preview_thread.lock();
        *thread_slot = Some(handle);

        info!(
            "Camera selected: {} ({}x{})",
            summary.label, info.width, info.height
        );
        self.set_status(format!(
            "{} ready at {}x{}",
            summary.label, info.width, info.height
        ));
        Ok(info)
    }

    /// Latest preview frame plus its cache-busting generation.
    pub fn preview_frame(&self) -> Option<(PathBuf, u32)> {
        let preview = self.inner.preview.lock();
        preview
            .frame_path
            .clone()
            .map(|path| (path, preview.frame_generation))
    }

    /// Full-resolution still from the last shutter press.
    pub fn captured_still(&self) -> Option<PathBuf> {
        self.inner.preview.lock().still_path.clone()
    }

    /// Fire the shutter. Debounced; the worker writes the still
    /// asynchronously and `captured_still` picks it up on the next render.
    pub fn capture_photo(&self) -> Result<()> {
        if !self.inner.selection.lock().has_camera() {
            return Err(anyhow!("No camera is running - go back to camera setup"));
        }

        if !self.inner.shutter_guard.lock().should_trigger() {
            return Ok(());
        }

        let tx_slot = self.inner.preview_cmd_tx.lock();
        let tx = tx_slot
            .as_ref()
            .ok_or_else(|| anyhow!("No camera is running - go back to camera setup"))?;
        tx.send(PreviewCommand::Capture)
            .map_err(|_| anyhow!("Camera worker is gone - reselect the camera"))?;

        self.set_status("Captured!");
        Ok(())
    }

    /// Discard the captured still and go back to framing.
    pub fn retake(&self) {
        let mut preview = self.inner.preview.lock();
        if let Some(path) = preview.still_path.take() {
            let _ = fs::remove_file(path);
        }
        drop(preview);
        self.inner.shutter_guard.lock().reset();
        self.set_status("Strike a pose");
    }

    fn shutdown_preview_runtime(&self) {
        if let Some(tx) = self.inner.preview_cmd_tx.lock().take() {
            let _ = tx.send(PreviewCommand::Stop);
        }
        if let Some(handle) = self.inner.preview_thread.lock().take() {
            let _ = handle.join();
        }
    }

    /// Stop the camera worker. Called on window close.
    pub fn shutdown(&self) {
        self.shutdown_preview_runtime();
    }

    // ------------------------------------------------------------------
    // Final composition
    // ------------------------------------------------------------------

    /// Compose the captured still with the selected layers and save it
    /// under the configured directory, named after the caption.
    pub fn save_photo(&self) -> Result<PathBuf> {
        let still_path = self
            .captured_still()
            .ok_or_else(|| anyhow!("Capture a photo before saving"))?;

        let (background_id, character_id, caption) = {
            let selection = self.inner.selection.lock();
            (
                selection.background_id,
                selection.character_id,
                selection.caption_text.clone(),
            )
        };

        let still = image::open(&still_path)
            .with_context(|| format!("Failed to reload capture {}", still_path.display()))?
            .to_rgba8();

        let (background, character) = compose::load_layers(background_id, character_id)
            .map_err(|err| anyhow!("{err}"))?;

        let composed = compose::compose_final(&still, background.as_ref(), character.as_ref());

        let dir = self.inner.config.lock().effective_save_dir();
        let saved = compose::save_composite(&composed, &dir, &caption)
            .map_err(|err| anyhow!("{err}"))?;

        info!("Saved photo to {}", saved.display());
        self.set_status(format!("Saved to {}", saved.display()));
        Ok(saved)
    }

    /// Reveal a saved photo in the platform file manager.
    pub fn reveal_photo(&self, path: &Path) -> Result<()> {
        open::that(path).with_context(|| format!("Failed to open {}", path.display()))
    }

    /// Let the operator pick where photos land.
    pub fn choose_save_dir(&self) -> Result<Option<PathBuf>> {
        let Some(dir) = rfd::FileDialog::new().pick_folder() else {
            return Ok(None);
        };

        {
            let mut config = self.inner.config.lock();
            config.save_dir = Some(dir.clone());
            config.save().map_err(|err| anyhow!("{err}"))?;
        }
        self.set_status(format!("Photos will be saved to {}", dir.display()));
        Ok(Some(dir))
    }

    pub fn save_dir(&self) -> PathBuf {
        self.inner.config.lock().effective_save_dir()
    }
}

/// Where preview frames and stills land between capture and save.
fn scratch_dir() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .ok_or_else(|| anyhow!("Could not determine cache directory"))?
        .join("SnapBooth");
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create scratch dir {}", dir.display()))?;
    Ok(dir)
}

fn preview_frame_path(generation: u32) -> Result<PathBuf> {
    Ok(scratch_dir()?.join(format!("preview_{generation}.png")))
}

/// The preview worker: grab, mirror, publish; on `Capture`, also write a
/// full-resolution still. Owns the camera until told to stop.
fn run_preview_loop(
    mut camera: PreviewCamera,
    mirror: bool,
    shared: Arc<Mutex<PreviewShared>>,
    cmd_rx: Receiver<PreviewCommand>,
) -> Result<()> {
    loop {
        let mut capture_requested = false;
        match cmd_rx.try_recv() {
            Ok(PreviewCommand::Stop) | Err(TryRecvError::Disconnected) => break,
            Ok(PreviewCommand::Capture) => capture_requested = true,
            Err(TryRecvError::Empty) => {}
        }

        let frame = match camera.grab() {
            Ok(frame) => frame,
            Err(err) => {
                warn!("Frame grab failed: {err}");
                shared.lock().last_error = Some(format!("{err}"));
                thread::sleep(PREVIEW_FRAME_INTERVAL);
                continue;
            }
        };

        if capture_requested {
            if let Err(err) = write_still(&frame, &shared) {
                error!("Failed to write still: {err:#}");
                shared.lock().last_error = Some(format!("{err:#}"));
            }
        }

        let display_frame = if mirror {
            imageops::flip_horizontal(&frame)
        } else {
            frame
        };

        if let Err(err) = publish_preview_frame(display_frame, &shared) {
            warn!("Failed to write preview frame: {err:#}");
        }

        thread::sleep(PREVIEW_FRAME_INTERVAL);
    }

    Ok(())
}

/// The still is never mirrored: the saved photo shows the scene as the
/// camera saw it, only the framing preview flips.
fn write_still(frame: &RgbaImage, shared: &Arc<Mutex<PreviewShared>>) -> Result<()> {
    let epoch_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = scratch_dir()?.join(format!("still_{epoch_secs}.png"));

    DynamicImage::ImageRgba8(frame.clone())
        .save(&path)
        .with_context(|| format!("Failed to save still {}", path.display()))?;

    let mut guard = shared.lock();
    if let Some(old) = guard.still_path.replace(path) {
        let _ = fs::remove_file(old);
    }
    Ok(())
}

fn publish_preview_frame(frame: RgbaImage, shared: &Arc<Mutex<PreviewShared>>) -> Result<()> {
    let generation = shared.lock().frame_generation.wrapping_add(1);
    let path = preview_frame_path(generation)?;

    DynamicImage::ImageRgba8(frame)
        .save(&path)
        .with_context(|| format!("Failed to save preview frame {}", path.display()))?;

    // Clean up older frames so the scratch dir stays small
    if generation >= 2 {
        if let Ok(old) = preview_frame_path(generation - 2) {
            let _ = fs::remove_file(old);
        }
    }

    let mut guard = shared.lock();
    guard.frame_path = Some(path);
    guard.frame_generation = generation;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FacingMode;

    #[test]
    fn test_controller_starts_with_defaults() {
        let controller = BoothController::new().unwrap();
        let selection = controller.selection();
        let guard = selection.lock();

        assert!(guard.camera.is_none());
        assert_eq!(guard.background_id, 0);
        assert_eq!(guard.character_id, 0);
        assert_eq!(guard.caption_text, "");
        drop(guard);

        assert_eq!(controller.current_step(), BoothStep::CameraSetup);
    }

    #[test]
    fn test_setters_flow_through_to_the_store() {
        let controller = BoothController::new().unwrap();

        controller.set_background(3);
        controller.set_character(7);
        controller.set_caption("Hello");

        let selection = controller.selection();
        let guard = selection.lock();
        assert_eq!(guard.background_id, 3);
        assert_eq!(guard.character_id, 7);
        assert_eq!(guard.caption_text, "Hello");
    }

    #[test]
    fn test_start_over_clears_selection_and_router() {
        let controller = BoothController::new().unwrap();

        controller.set_background(2);
        controller.set_caption("bye");
        controller.go_to(BoothStep::Final);
        controller.start_over();

        let selection = controller.selection();
        let guard = selection.lock();
        assert_eq!(guard.background_id, 0);
        assert_eq!(guard.caption_text, "");
        drop(guard);

        assert_eq!(controller.current_step(), BoothStep::CameraSetup);
    }

    #[test]
    fn test_navigation_through_controller() {
        let controller = BoothController::new().unwrap();

        assert_eq!(
            controller.go_next(),
            NavigationResult::Moved(BoothStep::Background)
        );
        assert_eq!(
            controller.resolve_path("/final"),
            NavigationResult::Moved(BoothStep::Final)
        );
        assert_eq!(
            controller.go_back(),
            NavigationResult::Moved(BoothStep::Text)
        );
    }

    #[test]
    fn test_capture_without_camera_errors() {
        let controller = BoothController::new().unwrap();
        assert!(controller.capture_photo().is_err());
    }

    #[test]
    fn test_toggle_facing_mode_needs_a_camera() {
        let controller = BoothController::new().unwrap();

        // No camera yet: toggle is a no-op
        controller.toggle_facing_mode();
        assert!(controller.selection().lock().camera.is_none());

        controller.selection().lock().set_camera(CameraInfo {
            device_id: "camera-0".to_string(),
            facing_mode: FacingMode::User,
            width: 640,
            height: 480,
        });
        controller.toggle_facing_mode();
        assert_eq!(
            controller.selection().lock().camera.as_ref().unwrap().facing_mode,
            FacingMode::Environment
        );
    }
}
