use std::time::{Duration, Instant};

/// Debounce helper to prevent rapid repeated triggers
///
/// Guards the shutter: a second capture request inside the debounce window
/// is dropped instead of queueing a duplicate photo.
pub struct Debouncer {
    last_trigger: Option<Instant>,
    debounce_duration: Duration,
}

impl Debouncer {
    /// Create a new debouncer with specified duration in milliseconds
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            last_trigger: None,
            debounce_duration: Duration::from_millis(debounce_ms),
        }
    }

    /// Check if enough time has passed since last trigger
    /// Returns true if we should trigger, false if still in debounce period
    pub fn should_trigger(&mut self) -> bool {
        let now = Instant::now();

        match self.last_trigger {
            None => {
                // First trigger
                self.last_trigger = Some(now);
                true
            }
            Some(last) => {
                let elapsed = now.duration_since(last);
                if elapsed >= self.debounce_duration {
                    self.last_trigger = Some(now);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Reset the debouncer
    pub fn reset(&mut self) {
        self.last_trigger = None;
    }
}
