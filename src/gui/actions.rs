//! Keyboard actions for SnapBooth
//!
//! This module defines the booth's keyboard shortcuts using GPUI's action
//! system. Each action is a zero-sized type dispatched through the focus
//! chain.

use gpui::actions;

// Define all keyboard actions for the application
actions!(
    snapbooth,
    [
        // Step navigation
        NextStep,
        PreviousStep,

        // Shutter
        CapturePhoto,

        // Final step
        SavePhoto,

        // Clear the selection and return to the first step
        StartOver,
    ]
);
