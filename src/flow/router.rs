/// Step router
///
/// Holds the current step and moves between steps. Deliberately unguarded:
/// any step is reachable directly, whether or not the selection behind the
/// earlier steps has been filled in.

use super::steps::BoothStep;

/// Navigation result
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationResult {
    /// Navigation succeeded, now on new step
    Moved(BoothStep),

    /// Navigation blocked (at a boundary or unknown path)
    Blocked { reason: String },
}

/// Step router
pub struct StepRouter {
    current: BoothStep,
}

impl StepRouter {
    /// Create a router positioned on the first step (the root redirect).
    pub fn new() -> Self {
        Self {
            current: BoothStep::first(),
        }
    }

    /// Create a router positioned on a specific step
    pub fn at(step: BoothStep) -> Self {
        Self { current: step }
    }

    /// Get current step
    pub fn current_step(&self) -> BoothStep {
        self.current
    }

    /// Navigate to the next step in the flow
    pub fn next(&mut self) -> NavigationResult {
        match self.current.next() {
            Some(next_step) => {
                self.current = next_step;
                NavigationResult::Moved(next_step)
            }
            None => NavigationResult::Blocked {
                reason: "Already at the final step".to_string(),
            },
        }
    }

    /// Navigate to the previous step in the flow
    pub fn back(&mut self) -> NavigationResult {
        match self.current.previous() {
            Some(prev_step) => {
                self.current = prev_step;
                NavigationResult::Moved(prev_step)
            }
            None => NavigationResult::Blocked {
                reason: "Already at the first step".to_string(),
            },
        }
    }

    /// Jump directly to a step. No guard: reachable regardless of what the
    /// selection holds.
    pub fn go_to(&mut self, step: BoothStep) -> NavigationResult {
        self.current = step;
        NavigationResult::Moved(step)
    }

    /// Resolve a path (deep link) and jump to its step. The root path lands
    /// on the first step.
    pub fn resolve(&mut self, path: &str) -> NavigationResult {
        match BoothStep::from_path(path) {
            Some(step) => self.go_to(step),
            None => NavigationResult::Blocked {
                reason: format!("No step answers to {path}"),
            },
        }
    }

    /// Return to the first step
    pub fn reset(&mut self) {
        self.current = BoothStep::first();
    }

    /// Check if can go back
    pub fn can_go_back(&self) -> bool {
        self.current.previous().is_some()
    }

    /// Check if can go forward
    pub fn can_go_forward(&self) -> bool {
        self.current.next().is_some()
    }
}

impl Default for StepRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_router_starts_at_camera_setup() {
        let router = StepRouter::new();
        assert_eq!(router.current_step(), BoothStep::CameraSetup);
        assert!(!router.can_go_back());
        assert!(router.can_go_forward());
    }

    #[test]
    fn test_next_navigation() {
        let mut router = StepRouter::new();

        let result = router.next();
        assert_eq!(result, NavigationResult::Moved(BoothStep::Background));
        assert_eq!(router.current_step(), BoothStep::Background);
    }

    #[test]
    fn test_back_navigation() {
        let mut router = StepRouter::new();
        router.next(); // Background

        let result = router.back();
        assert_eq!(result, NavigationResult::Moved(BoothStep::CameraSetup));
        assert_eq!(router.current_step(), BoothStep::CameraSetup);
    }

    #[test]
    fn test_boundaries_block() {
        let mut router = StepRouter::new();
        assert!(matches!(router.back(), NavigationResult::Blocked { .. }));

        let mut router = StepRouter::at(BoothStep::Final);
        assert!(matches!(router.next(), NavigationResult::Blocked { .. }));
    }

    #[test]
    fn test_go_to_is_unguarded() {
        let mut router = StepRouter::new();

        // Jump straight to the end with an empty selection behind it
        let result = router.go_to(BoothStep::Final);
        assert_eq!(result, NavigationResult::Moved(BoothStep::Final));
        assert_eq!(router.current_step(), BoothStep::Final);
    }

    #[test]
    fn test_resolve_deep_links() {
        let mut router = StepRouter::new();

        assert_eq!(
            router.resolve("/character"),
            NavigationResult::Moved(BoothStep::Character)
        );
        assert_eq!(router.current_step(), BoothStep::Character);

        // Root redirects to the first step
        assert_eq!(
            router.resolve("/"),
            NavigationResult::Moved(BoothStep::CameraSetup)
        );

        // Unknown paths leave the router where it was
        let before = router.current_step();
        assert!(matches!(
            router.resolve("/upload"),
            NavigationResult::Blocked { .. }
        ));
        assert_eq!(router.current_step(), before);
    }

    #[test]
    fn test_walk_the_whole_flow() {
        let mut router = StepRouter::new();
        let mut visited = vec![router.current_step()];

        while router.can_go_forward() {
            router.next();
            visited.push(router.current_step());
        }

        assert_eq!(visited, BoothStep::all_steps().to_vec());
    }

    #[test]
    fn test_reset() {
        let mut router = StepRouter::at(BoothStep::Text);
        router.reset();
        assert_eq!(router.current_step(), BoothStep::CameraSetup);
    }
}
