/// Booth step definitions
///
/// Defines the five steps of the photo-booth flow and the path each one
/// answers to.

/// Booth step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoothStep {
    /// Pick a capture device and facing mode
    CameraSetup,

    /// Pick a backdrop for the photo
    Background,

    /// Pick a character overlay from the catalog
    Character,

    /// Enter a caption
    Text,

    /// Composed photo - capture and save
    Final,
}

impl BoothStep {
    /// Get step title
    pub fn title(&self) -> &'static str {
        match self {
            BoothStep::CameraSetup => "Camera Setup",
            BoothStep::Background => "Background",
            BoothStep::Character => "Character",
            BoothStep::Text => "Caption",
            BoothStep::Final => "Your Photo",
        }
    }

    /// Get step description
    pub fn description(&self) -> &'static str {
        match self {
            BoothStep::CameraSetup => "Choose the camera that will take your photo",
            BoothStep::Background => "Pick a backdrop to stand in front of",
            BoothStep::Character => "Pick a character to join your photo",
            BoothStep::Text => "Add a caption to your photo",
            BoothStep::Final => "Smile! Capture and save your photo",
        }
    }

    /// The path this step answers to, as shown in the footer and accepted
    /// by deep links.
    pub fn path(&self) -> &'static str {
        match self {
            BoothStep::CameraSetup => "/camera-setup",
            BoothStep::Background => "/background",
            BoothStep::Character => "/character",
            BoothStep::Text => "/text",
            BoothStep::Final => "/final",
        }
    }

    /// Resolve a path to its step. The root path redirects to the first
    /// step; anything unknown resolves to nothing.
    pub fn from_path(path: &str) -> Option<BoothStep> {
        match path {
            "/" | "" => Some(Self::first()),
            "/camera-setup" => Some(BoothStep::CameraSetup),
            "/background" => Some(BoothStep::Background),
            "/character" => Some(BoothStep::Character),
            "/text" => Some(BoothStep::Text),
            "/final" => Some(BoothStep::Final),
            _ => None,
        }
    }

    /// Get step number (1-indexed)
    pub fn number(&self) -> usize {
        match self {
            BoothStep::CameraSetup => 1,
            BoothStep::Background => 2,
            BoothStep::Character => 3,
            BoothStep::Text => 4,
            BoothStep::Final => 5,
        }
    }

    /// Get total number of steps
    pub fn total_steps() -> usize {
        5
    }

    /// The step the root path redirects to.
    pub fn first() -> BoothStep {
        BoothStep::CameraSetup
    }

    /// Check if this is the first step
    pub fn is_first(&self) -> bool {
        matches!(self, BoothStep::CameraSetup)
    }

    /// Check if this is the last step
    pub fn is_last(&self) -> bool {
        matches!(self, BoothStep::Final)
    }

    /// Get next step
    pub fn next(&self) -> Option<BoothStep> {
        match self {
            BoothStep::CameraSetup => Some(BoothStep::Background),
            BoothStep::Background => Some(BoothStep::Character),
            BoothStep::Character => Some(BoothStep::Text),
            BoothStep::Text => Some(BoothStep::Final),
            BoothStep::Final => None,
        }
    }

    /// Get previous step
    pub fn previous(&self) -> Option<BoothStep> {
        match self {
            BoothStep::CameraSetup => None,
            BoothStep::Background => Some(BoothStep::CameraSetup),
            BoothStep::Character => Some(BoothStep::Background),
            BoothStep::Text => Some(BoothStep::Character),
            BoothStep::Final => Some(BoothStep::Text),
        }
    }

    /// Get all steps in order
    pub fn all_steps() -> [BoothStep; 5] {
        [
            BoothStep::CameraSetup,
            BoothStep::Background,
            BoothStep::Character,
            BoothStep::Text,
            BoothStep::Final,
        ]
    }
}

impl Default for BoothStep {
    fn default() -> Self {
        Self::first()
    }
}

impl std::fmt::Display for BoothStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_step_navigation() {
        let step = BoothStep::CameraSetup;
        assert!(step.is_first());
        assert!(!step.is_last());

        let next = step.next().unwrap();
        assert_eq!(next, BoothStep::Background);

        let last = BoothStep::Final;
        assert!(last.is_last());
        assert!(last.next().is_none());
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(BoothStep::CameraSetup.number(), 1);
        assert_eq!(BoothStep::Final.number(), 5);
        assert_eq!(BoothStep::total_steps(), 5);
    }

    #[test]
    fn test_root_redirects_to_camera_setup() {
        assert_eq!(BoothStep::from_path("/"), Some(BoothStep::CameraSetup));
        assert_eq!(BoothStep::from_path(""), Some(BoothStep::CameraSetup));
        assert_eq!(BoothStep::first(), BoothStep::CameraSetup);
    }

    #[test]
    fn test_each_path_resolves_to_its_own_step() {
        for step in BoothStep::all_steps() {
            assert_eq!(BoothStep::from_path(step.path()), Some(step));
        }
        assert_eq!(BoothStep::from_path("/nope"), None);
    }

    #[test]
    fn test_surfaces_are_distinct() {
        // No two steps may share a path or a title
        let paths: HashSet<&str> = BoothStep::all_steps().iter().map(|s| s.path()).collect();
        let titles: HashSet<&str> = BoothStep::all_steps().iter().map(|s| s.title()).collect();
        assert_eq!(paths.len(), BoothStep::total_steps());
        assert_eq!(titles.len(), BoothStep::total_steps());
    }

    #[test]
    fn test_previous_navigation() {
        let step = BoothStep::Background;
        assert_eq!(step.previous(), Some(BoothStep::CameraSetup));

        let first = BoothStep::CameraSetup;
        assert_eq!(first.previous(), None);
    }

    #[test]
    fn test_all_steps_order() {
        let steps = BoothStep::all_steps();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0], BoothStep::CameraSetup);
        assert_eq!(steps[4], BoothStep::Final);

        // The linear order and the declared order agree
        for pair in steps.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert_eq!(pair[1].previous(), Some(pair[0]));
        }
    }
}
