/// Booth state module
///
/// Contains the selection store (the user's in-progress choices) and the
/// static character catalog.
pub mod catalog;
pub mod selection;

pub use catalog::{character_by_id, Character, CharacterKind, CHARACTER_CATALOG};
pub use selection::{CameraInfo, FacingMode, SelectionState};
