use thiserror::Error;

/// Application-level errors using thiserror for structured error handling.
///
/// These errors represent domain-specific failures that can occur while
/// driving the booth hardware and filesystem. They provide context and can
/// be chained with anyhow. The selection store itself has no error taxonomy:
/// its setters are total and cannot fail with well-typed input.

#[derive(Error, Debug)]
pub enum CameraError {
    #[error("Failed to enumerate capture devices")]
    EnumerationFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("No capture devices found")]
    NoDevices,

    #[error("Invalid capture device index: {0}")]
    InvalidDeviceIndex(u32),

    #[error("Failed to open capture device: {device}")]
    OpenFailed {
        device: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to grab a frame from the capture device")]
    FrameGrabFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Overlay asset not found: {path}")]
    AssetMissing { path: String },

    #[error("Failed to load overlay asset: {path}")]
    AssetLoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("No captured photo to compose")]
    NoPhoto,

    #[error("Failed to save composed photo to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save configuration to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to create config directory: {path}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = CameraError::InvalidDeviceIndex(3);
        assert_eq!(err.to_string(), "Invalid capture device index: 3");

        let err = ComposeError::NoPhoto;
        assert_eq!(err.to_string(), "No captured photo to compose");
    }

    #[test]
    fn test_error_source_chain() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let config_err = ConfigError::LoadFailed {
            path: "/test/config.json".to_string(),
            source: Box::new(io_err),
        };

        assert!(config_err.source().is_some());
        assert_eq!(
            config_err.to_string(),
            "Failed to load configuration from /test/config.json"
        );
    }
}
