// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod assets;
mod camera;
mod compose;
mod config;
mod error;
mod flow;
mod gui;
mod slug;
mod state;
mod utils;

use display_info::DisplayInfo;
use sysinfo::System;

const LOG_TARGET_STARTUP: &str = "snapbooth::startup";

/// Initialize tracing with file rotation
///
/// Logs are written to:
/// - macOS: ~/Library/Application Support/SnapBooth/logs/
/// - Windows: %APPDATA%/SnapBooth/logs/
/// - Linux: ~/.config/SnapBooth/logs/
///
/// Log rotation:
/// - Daily rotation (new file each day)
/// - Files named: snapbooth.YYYY-MM-DD.log
///
/// Log output:
/// - Debug builds: Console + File
/// - Release builds: File only (console hidden on Windows)
fn initialize_tracing() {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Get log directory in user config folder
    let log_dir = dirs::config_dir()
        .map(|dir| dir.join("SnapBooth").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));

    // Create log directory if it doesn't exist
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    // Create file appender with daily rotation
    let file_appender = rolling::daily(&log_dir, "snapbooth.log");

    // Configure filter (info level by default)
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Create file layer
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    // In debug builds, also log to console
    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    }

    // In release builds, only log to file
    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    }

    tracing::info!("Log directory: {}", log_dir.display());
}

fn log_runtime_environment() {
    let version = env!("CARGO_PKG_VERSION");
    let os_name = System::long_os_version()
        .or_else(System::name)
        .unwrap_or_else(|| "Unknown OS".to_string());
    let kernel = System::kernel_version().unwrap_or_else(|| "Unknown Kernel".to_string());
    let architecture = std::env::consts::ARCH;

    tracing::info!(target: LOG_TARGET_STARTUP, "Starting SnapBooth v{} on ({})", version, architecture);
    tracing::info!(target: LOG_TARGET_STARTUP, "Operating System: {} (kernel {})", os_name, kernel);

    if let Ok(displays) = DisplayInfo::all() {
        tracing::info!(
            target: LOG_TARGET_STARTUP,
            "Displays: {} detected",
            displays.len()
        );
        for (index, disp) in displays.iter().enumerate() {
            tracing::debug!(
                target: LOG_TARGET_STARTUP,
                "  Display {}: {}x{}{}",
                index,
                disp.width,
                disp.height,
                if disp.is_primary { " (primary)" } else { "" }
            );
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing with file rotation
    initialize_tracing();
    log_runtime_environment();

    // AVFoundation needs an explicit permission prompt before device queries
    #[cfg(target_os = "macos")]
    nokhwa::nokhwa_initialize(|granted| {
        tracing::info!(target: LOG_TARGET_STARTUP, "Camera permission granted: {granted}");
    });

    gui::run()
}
