// Held-axis input tracking

use super::intent::MoveIntent;
use super::IntentSource;

/// The four movement axes a host can report events for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveAxis {
    Up,
    Down,
    Left,
    Right,
}

/// Tracks which movement axes are currently held
///
/// The host's event layer (keyboard, gamepad, remote input) calls
/// [`press`](IntentTracker::press) / [`release`](IntentTracker::release)
/// as edges arrive; the simulation samples a consistent [`MoveIntent`]
/// snapshot once at the start of each tick. Making event delivery
/// thread-safe is the host's responsibility; the runtime only consumes
/// the already-sampled snapshot.
#[derive(Debug, Default)]
pub struct IntentTracker {
    held: MoveIntent,
}

impl IntentTracker {
    /// Create a tracker with no axes held
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an axis press
    pub fn press(&mut self, axis: MoveAxis) {
        self.set(axis, true);
    }

    /// Register an axis release
    pub fn release(&mut self, axis: MoveAxis) {
        self.set(axis, false);
    }

    /// Set an axis directly (useful for axis-valued devices)
    pub fn set(&mut self, axis: MoveAxis, held: bool) {
        match axis {
            MoveAxis::Up => self.held.up = held,
            MoveAxis::Down => self.held.down = held,
            MoveAxis::Left => self.held.left = held,
            MoveAxis::Right => self.held.right = held,
        }
    }

    /// Release all axes (e.g. on window focus loss)
    pub fn clear(&mut self) {
        self.held = MoveIntent::NONE;
    }

    /// Get the current held-axis snapshot
    pub fn snapshot(&self) -> MoveIntent {
        self.held
    }
}

impl IntentSource for IntentTracker {
    fn sample(&mut self) -> MoveIntent {
        self.snapshot()
    }
}
