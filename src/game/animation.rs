// Walk-cycle animation state machine

use super::direction::{Direction, PerDirection};
use super::sprite_set::SpriteSet;
use crate::engine::render::SpriteRef;

/// Default frames-to-wait before advancing, per direction
///
/// The reference assets run the vertical walks at a slow cadence and the
/// (longer, idle-interleaved) horizontal walks faster. Tuning values, not
/// correctness constraints; at 60 ticks/s, delay = 60 / animation fps.
const DEFAULT_VERTICAL_DELAY: u32 = 16;
const DEFAULT_HORIZONTAL_DELAY: u32 = 5;

/// Per-entity walking animation state
///
/// Advanced exactly once per simulation tick with the entity's movement
/// outcome; selects which sprite to display. The state machine is total:
/// directions are a closed enum and indices are always taken modulo a
/// known-positive sequence length, so no tick can fault.
///
/// States are Idle and Walking, each per direction. Going idle resets the
/// cycle, so re-entering Walking always restarts the sequence at its first
/// frame; changing direction mid-walk keeps the counter and index.
#[derive(Debug, Clone)]
pub struct WalkAnimation {
    /// Frames to wait before advancing, per direction (each >= 1)
    delays: PerDirection<u32>,
    /// Ticks since the last sequence advance
    frame_counter: u32,
    /// Position within the current direction's walking sequence
    sequence_index: usize,
    /// Movement outcome of the last tick
    moving: bool,
    /// Facing seen on the last tick
    direction: Direction,
}

impl Default for WalkAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl WalkAnimation {
    /// Create an animation with the reference cadence
    pub fn new() -> Self {
        Self::with_delays(PerDirection::new(
            DEFAULT_VERTICAL_DELAY,
            DEFAULT_VERTICAL_DELAY,
            DEFAULT_HORIZONTAL_DELAY,
            DEFAULT_HORIZONTAL_DELAY,
        ))
    }

    /// Create an animation with explicit per-direction delays
    pub fn with_delays(delays: PerDirection<u32>) -> Self {
        let mut clamped = delays;
        for direction in Direction::ALL {
            clamped[direction] = clamped[direction].max(1);
        }
        Self {
            delays: clamped,
            frame_counter: 0,
            sequence_index: 0,
            moving: false,
            direction: Direction::default(),
        }
    }

    /// Get the advance delay for a direction
    pub fn delay(&self, direction: Direction) -> u32 {
        self.delays[direction]
    }

    /// Set the advance delay for a direction (clamped to >= 1)
    pub fn set_delay(&mut self, direction: Direction, delay: u32) {
        self.delays[direction] = delay.max(1);
    }

    /// Current position within the walking sequence
    pub fn sequence_index(&self) -> usize {
        self.sequence_index
    }

    /// Whether the last advance was a walking tick
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Advance one tick and return the sprite to display
    pub fn advance(
        &mut self,
        moving: bool,
        direction: Direction,
        sprites: &SpriteSet,
    ) -> SpriteRef {
        self.moving = moving;
        self.direction = direction;

        if moving {
            self.frame_counter += 1;
            if self.frame_counter >= self.delays[direction] {
                self.frame_counter = 0;
                if let Some(sequence) = sprites.walk_sequence(direction) {
                    self.sequence_index = (self.sequence_index + 1) % sequence.len();
                }
            }
        } else {
            // Going idle restarts the cycle
            self.frame_counter = 0;
            self.sequence_index = 0;
        }

        self.current_sprite(sprites)
    }

    /// Resolve the sprite for the current state without advancing
    ///
    /// Walking uses the direction's sequence; an unconfigured sequence
    /// falls back to the direction's idle sprite, and a missing idle
    /// resolves to a diagnostic placeholder so something is always drawn.
    pub fn current_sprite(&self, sprites: &SpriteSet) -> SpriteRef {
        if self.moving {
            if let Some(sequence) = sprites.walk_sequence(self.direction) {
                return SpriteRef::Image(sequence[self.sequence_index % sequence.len()]);
            }
        }

        match sprites.idle(self.direction) {
            Some(sprite) => SpriteRef::Image(sprite),
            None => {
                log::warn!(
                    "no sprite for {:?} {}, drawing placeholder",
                    self.direction,
                    if self.moving { "walk" } else { "idle" },
                );
                SpriteRef::Placeholder
            }
        }
    }
}
