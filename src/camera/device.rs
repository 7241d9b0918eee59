/// Capture device discovery
///
/// Enumerates attached webcams and derives the facing mode the selection
/// store records. Backends differ per platform (V4L2 on Linux, Media
/// Foundation on Windows, AVFoundation on macOS); nokhwa hides that behind
/// one query.

use nokhwa::query;
use nokhwa::utils::{ApiBackend, CameraIndex};

use crate::error::CameraError;
use crate::state::FacingMode;

/// One attached capture device, as offered by the camera-setup picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraSummary {
    /// Backend index used to open the device
    pub index: u32,
    /// Identifier recorded in the selection store
    pub device_id: String,
    /// Human-readable picker label
    pub label: String,
}

/// List every attached capture device.
pub fn enumerate_devices() -> Result<Vec<CameraSummary>, CameraError> {
    let devices =
        query(ApiBackend::Auto).map_err(|e| CameraError::EnumerationFailed(Box::new(e)))?;

    if devices.is_empty() {
        return Err(CameraError::NoDevices);
    }

    Ok(devices
        .into_iter()
        .enumerate()
        .map(|(position, info)| {
            let index = match info.index() {
                CameraIndex::Index(i) => *i,
                CameraIndex::String(_) => position as u32,
            };
            CameraSummary {
                index,
                device_id: format!("camera-{index}"),
                label: info.human_name(),
            }
        })
        .collect())
}

/// Guess which way a device faces from its label.
///
/// Desktop webcams rarely report facing; laptop-integrated and "front"
/// devices face the user, anything labelled rear/back/world faces away.
/// Defaults to `User` - in a photo booth the camera almost always looks at
/// the person.
pub fn infer_facing_mode(label: &str) -> FacingMode {
    let label = label.to_ascii_lowercase();

    if ["rear", "back", "world", "environment"]
        .iter()
        .any(|hint| label.contains(hint))
    {
        FacingMode::Environment
    } else {
        FacingMode::User
    }
}
