/// Selection store
///
/// One mutable record of the user's in-progress choices for the current
/// booth session. Created with defaults at application start, mutated only
/// through the field setters, cleared in full by `reset()`, and gone when
/// the process exits. Nothing here persists to disk.

/// Which way the active camera faces.
///
/// Desktop webcams rarely report this themselves; it is inferred from the
/// device label and can be overridden on the camera-setup step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacingMode {
    #[default]
    User,
    Environment,
}

impl FacingMode {
    pub fn label(self) -> &'static str {
        match self {
            FacingMode::User => "Front (user)",
            FacingMode::Environment => "Rear (environment)",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            FacingMode::User => FacingMode::Environment,
            FacingMode::Environment => FacingMode::User,
        }
    }
}

/// The active capture device and its negotiated resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraInfo {
    pub device_id: String,
    pub facing_mode: FacingMode,
    pub width: u32,
    pub height: u32,
}

/// The user's in-progress choices.
///
/// `background_id` and `character_id` are either 0 ("nothing selected yet")
/// or reference an entry the picker offered. The store enforces no
/// referential integrity; that is the view's responsibility.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub camera: Option<CameraInfo>,
    pub background_id: u32,
    pub character_id: u32,
    pub caption_text: String,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the camera record wholesale.
    pub fn set_camera(&mut self, info: CameraInfo) {
        self.camera = Some(info);
    }

    pub fn set_background(&mut self, id: u32) {
        self.background_id = id;
    }

    pub fn set_character(&mut self, id: u32) {
        self.character_id = id;
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.caption_text = value.into();
    }

    /// Restore every mutable field to its default. The character catalog is
    /// immutable reference data and is not part of this record.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True once a capture device has been negotiated.
    pub fn has_camera(&self) -> bool {
        self.camera.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::CHARACTER_CATALOG;

    fn sample_camera() -> CameraInfo {
        CameraInfo {
            device_id: "cam1".to_string(),
            facing_mode: FacingMode::User,
            width: 640,
            height: 480,
        }
    }

    #[test]
    fn test_defaults() {
        let state = SelectionState::new();
        assert!(state.camera.is_none());
        assert_eq!(state.background_id, 0);
        assert_eq!(state.character_id, 0);
        assert_eq!(state.caption_text, "");
    }

    #[test]
    fn test_setters_store_exact_values() {
        let mut state = SelectionState::new();

        state.set_camera(sample_camera());
        state.set_background(3);
        state.set_character(7);
        state.set_text("Hello");

        assert_eq!(state.camera, Some(sample_camera()));
        assert_eq!(state.background_id, 3);
        assert_eq!(state.character_id, 7);
        assert_eq!(state.caption_text, "Hello");
    }

    #[test]
    fn test_last_write_wins() {
        let mut state = SelectionState::new();

        state.set_background(2);
        state.set_background(9);
        assert_eq!(state.background_id, 9);

        state.set_text("first");
        state.set_text("second");
        assert_eq!(state.caption_text, "second");

        let mut rear = sample_camera();
        rear.facing_mode = FacingMode::Environment;
        state.set_camera(sample_camera());
        state.set_camera(rear.clone());
        assert_eq!(state.camera, Some(rear));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = SelectionState::new();
        state.set_camera(sample_camera());
        state.set_background(3);
        state.set_character(7);
        state.set_text("Hello");

        let catalog_len = CHARACTER_CATALOG.len();
        state.reset();

        assert!(state.camera.is_none());
        assert_eq!(state.background_id, 0);
        assert_eq!(state.character_id, 0);
        assert_eq!(state.caption_text, "");
        // Reference data is untouched by reset
        assert_eq!(CHARACTER_CATALOG.len(), catalog_len);
    }

    #[test]
    fn test_fields_settable_in_any_order() {
        let mut state = SelectionState::new();

        // Caption before camera, character before background
        state.set_text("out of order");
        state.set_character(12);
        state.set_background(1);
        state.set_camera(sample_camera());

        assert_eq!(state.caption_text, "out of order");
        assert_eq!(state.character_id, 12);
        assert_eq!(state.background_id, 1);
        assert!(state.has_camera());
    }

    #[test]
    fn test_facing_mode_toggle() {
        assert_eq!(FacingMode::User.toggled(), FacingMode::Environment);
        assert_eq!(FacingMode::Environment.toggled(), FacingMode::User);
        assert_eq!(FacingMode::default(), FacingMode::User);
    }
}
