/// Booth flow module
///
/// The five-step wizard the user walks through to produce a photo.
///
/// ## Architecture
///
/// ```text
/// StepRouter
///   ├── BoothStep (enum of all steps, each bound to one path and surface)
///   └── Navigation (next, back, go_to, resolve, reset)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use flow::{BoothStep, StepRouter};
///
/// let mut router = StepRouter::new();
///
/// match router.current_step() {
///     BoothStep::CameraSetup => {
///         // Render camera picker
///     }
///     BoothStep::Background => {
///         // Render background tiles
///     }
///     // ... other steps
/// }
///
/// // Navigate
/// router.next();
/// ```
///
/// ## Steps
///
/// 1. **CameraSetup** - Pick a capture device
/// 2. **Background** - Pick a backdrop
/// 3. **Character** - Pick a character overlay
/// 4. **Text** - Enter a caption
/// 5. **Final** - Composed photo, capture and save
///
/// Every step is reachable directly, whether or not earlier steps filled
/// their part of the selection in. That is intentional: nothing about
/// correctness ties navigation to selection completeness.
pub mod router;
pub mod steps;

// Re-export commonly used types
pub use router::{NavigationResult, StepRouter};
pub use steps::BoothStep;
