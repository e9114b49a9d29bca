// Facing direction and per-direction storage

use glam::IVec2;
use std::ops::{Index, IndexMut};

/// The four facing directions an entity can have
///
/// Exactly one is active per entity at any time; there is no diagonal
/// composite. Screen space has y growing downward, so `Up` is -y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Default for Direction {
    fn default() -> Self {
        // Entities spawn facing the camera
        Self::Down
    }
}

impl Direction {
    /// All directions, in a stable order
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit screen-space offset for one step in this direction
    pub fn offset(&self) -> IVec2 {
        match self {
            Self::Up => IVec2::new(0, -1),
            Self::Down => IVec2::new(0, 1),
            Self::Left => IVec2::new(-1, 0),
            Self::Right => IVec2::new(1, 0),
        }
    }

    /// Check if this is a vertical direction
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Check if this is a horizontal direction
    pub fn is_horizontal(&self) -> bool {
        !self.is_vertical()
    }
}

/// One value of `T` per direction
///
/// A total table: every lookup hits a slot, so per-direction data (sprites,
/// delays) can never miss the way a string-keyed map can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerDirection<T> {
    pub up: T,
    pub down: T,
    pub left: T,
    pub right: T,
}

impl<T> PerDirection<T> {
    /// Build from one value per direction
    pub fn new(up: T, down: T, left: T, right: T) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// Build with the same value in every slot
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            up: value.clone(),
            down: value.clone(),
            left: value.clone(),
            right: value,
        }
    }
}

impl<T> Index<Direction> for PerDirection<T> {
    type Output = T;

    fn index(&self, direction: Direction) -> &T {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }
}

impl<T> IndexMut<Direction> for PerDirection<T> {
    fn index_mut(&mut self, direction: Direction) -> &mut T {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}
