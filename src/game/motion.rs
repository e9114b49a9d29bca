// Entity motion model

use glam::IVec2;

use super::direction::Direction;
use crate::engine::input::MoveIntent;

/// Position, speed, and facing for one entity
///
/// Mutated exactly once per simulation tick by a single authority (the
/// sampled input intent for the player). Movement is raw position offset:
/// no collision, no blending, no diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMotion {
    /// Screen-space position in pixels
    pub pos: IVec2,
    /// Movement speed in pixels per tick
    pub speed: i32,
    /// Current facing direction; retained while standing still
    pub direction: Direction,
    /// Whether the last tick acted on a movement axis
    pub moving: bool,
}

impl EntityMotion {
    /// Create a motion state at the given spawn position
    pub fn new(pos: IVec2, speed: i32) -> Self {
        Self {
            pos,
            speed,
            direction: Direction::default(),
            moving: false,
        }
    }

    /// Resolve an intent snapshot to the single axis acted on this tick
    ///
    /// First-match-wins, vertical before horizontal: up, down, left,
    /// right. This order is part of the contract; it decides the
    /// displayed facing when several axes are held at once.
    pub fn resolve(intent: MoveIntent) -> Option<Direction> {
        if intent.up {
            Some(Direction::Up)
        } else if intent.down {
            Some(Direction::Down)
        } else if intent.left {
            Some(Direction::Left)
        } else if intent.right {
            Some(Direction::Right)
        } else {
            None
        }
    }

    /// Apply one tick of movement from the sampled intent
    pub fn advance(&mut self, intent: MoveIntent) {
        match Self::resolve(intent) {
            Some(direction) => {
                self.direction = direction;
                self.pos += direction.offset() * self.speed;
                self.moving = true;
            }
            None => {
                self.moving = false;
            }
        }
    }
}
