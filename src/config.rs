use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Booth preferences that survive restarts.
///
/// Deliberately does NOT include any part of the selection state (camera,
/// background, character, caption) - a booth session starts fresh every
/// launch. Only operator-level preferences live here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoothConfig {
    /// Directory composed photos are saved into. `None` means the platform
    /// pictures directory.
    pub save_dir: Option<PathBuf>,

    /// Seconds counted down before the shutter fires
    pub countdown_secs: u8,

    /// Mirror the live preview horizontally (selfie view)
    pub mirror_preview: bool,

    /// Device id to preselect on the camera-setup step, if still attached
    pub preferred_camera: Option<String>,
}

impl Default for BoothConfig {
    fn default() -> Self {
        Self {
            save_dir: None,
            countdown_secs: 3,
            mirror_preview: true,
            preferred_camera: None,
        }
    }
}

impl BoothConfig {
    /// Load configuration from the platform-specific config directory.
    /// Creates default config if file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_file_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::LoadFailed {
                path: config_path.display().to_string(),
                source: Box::new(e),
            })?;
            let config =
                serde_json::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: config_path.display().to_string(),
                    source: Box::new(e),
                })?;
            tracing::info!("Loaded config from: {}", config_path.display());
            Ok(config)
        } else {
            let config = BoothConfig::default();
            config.save()?;
            tracing::info!("Created default config at: {}", config_path.display());
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_file_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::DirectoryCreationFailed {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: config_path.display().to_string(),
            source: Box::new(e),
        })?;
        fs::write(&config_path, json).map_err(|e| ConfigError::SaveFailed {
            path: config_path.display().to_string(),
            source: Box::new(e),
        })?;

        Ok(())
    }

    /// Directory the composed photos land in.
    pub fn effective_save_dir(&self) -> PathBuf {
        self.save_dir
            .clone()
            .or_else(|| dirs::picture_dir().map(|dir| dir.join("SnapBooth")))
            .unwrap_or_else(|| PathBuf::from("photos"))
    }

    /// Get the config file path (in the platform config directory)
    fn config_file_path() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or_else(|| ConfigError::LoadFailed {
            path: "<config dir>".to_string(),
            source: "could not determine platform config directory".into(),
        })?;
        Ok(base.join("SnapBooth").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoothConfig::default();
        assert!(config.save_dir.is_none());
        assert_eq!(config.countdown_secs, 3);
        assert!(config.mirror_preview);
        assert!(config.preferred_camera.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = BoothConfig {
            save_dir: Some(PathBuf::from("/tmp/booth")),
            countdown_secs: 5,
            mirror_preview: false,
            preferred_camera: Some("cam1".to_string()),
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoothConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.save_dir, deserialized.save_dir);
        assert_eq!(config.countdown_secs, deserialized.countdown_secs);
        assert_eq!(config.mirror_preview, deserialized.mirror_preview);
        assert_eq!(config.preferred_camera, deserialized.preferred_camera);
    }

    #[test]
    fn test_effective_save_dir_override() {
        let config = BoothConfig {
            save_dir: Some(PathBuf::from("/tmp/booth")),
            ..BoothConfig::default()
        };
        assert_eq!(config.effective_save_dir(), PathBuf::from("/tmp/booth"));
    }
}
