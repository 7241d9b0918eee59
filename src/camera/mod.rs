/// Camera module
///
/// Talks to the actual capture hardware: device discovery for the
/// camera-setup step and frame grabbing for the live preview. Everything
/// the rest of the app sees is either a `CameraSummary` (picker row) or
/// the negotiated `CameraInfo` record that lands in the selection store.
pub mod device;
pub mod preview;

pub use device::{enumerate_devices, infer_facing_mode, CameraSummary};
pub use preview::PreviewCamera;
