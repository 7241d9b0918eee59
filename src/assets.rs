use std::path::PathBuf;

#[cfg(test)]
use std::path::Path;

/// Bundled backdrop and character artwork.
///
/// The selection store only ever holds integer identifiers; this module is
/// the one place that turns them into files. There is no background catalog
/// to validate against - the picker simply offers `BACKGROUND_TILE_COUNT`
/// tiles and the store records whichever id was clicked.

/// How many backdrop tiles the background step offers.
pub const BACKGROUND_TILE_COUNT: u32 = 8;

/// Root of the bundled asset tree: next to the executable when installed,
/// the working directory during development.
pub fn assets_root() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let bundled = dir.join("assets");
            if bundled.exists() {
                return bundled;
            }
        }
    }
    PathBuf::from("assets")
}

/// File for a backdrop id. The sentinel 0 ("none selected") has no file.
pub fn background_path(id: u32) -> Option<PathBuf> {
    if id == 0 {
        return None;
    }
    Some(assets_root().join("backgrounds").join(format!("background_{id}.png")))
}

/// File for a character id. The sentinel 0 has no file.
pub fn character_path(id: u32) -> Option<PathBuf> {
    if id == 0 {
        return None;
    }
    Some(assets_root().join("characters").join(format!("character_{id}.png")))
}

/// Display name for a backdrop tile.
pub fn background_label(id: u32) -> String {
    if id == 0 {
        "No backdrop".to_string()
    } else {
        format!("Backdrop {id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_name(path: &Path) -> Option<&str> {
        path.file_name().and_then(|name| name.to_str())
    }

    #[test]
    fn test_sentinel_zero_has_no_asset() {
        assert!(background_path(0).is_none());
        assert!(character_path(0).is_none());
    }

    #[test]
    fn test_paths_encode_the_id() {
        let bg = background_path(3).unwrap();
        assert_eq!(file_name(&bg), Some("background_3.png"));

        let ch = character_path(12).unwrap();
        assert_eq!(file_name(&ch), Some("character_12.png"));
    }

    #[test]
    fn test_background_labels() {
        assert_eq!(background_label(0), "No backdrop");
        assert_eq!(background_label(5), "Backdrop 5");
    }
}
