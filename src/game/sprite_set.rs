// Sprite set: the immutable table of drawable handles for one session

use super::direction::{Direction, PerDirection};
use crate::engine::assets::SpriteId;

/// Sprite set construction errors
#[derive(Debug, thiserror::Error)]
pub enum SpriteError {
    #[error("walking sequence for {0:?} is configured but empty")]
    EmptySequence(Direction),
}

/// Immutable table of sprite handles keyed by role
///
/// Holds one optional idle sprite per direction, one optional walking
/// sequence per direction, and the ordered tile sprite table. Sequences
/// are ordered frame lists; directions may have sequences of different
/// lengths (the reference assets interleave idle frames into the
/// left/right walks, which is purely a property of this data). A missing
/// entry is not an error here: lookups degrade at draw time instead of
/// failing the whole set.
#[derive(Debug, Clone, Default)]
pub struct SpriteSet {
    idle: PerDirection<Option<SpriteId>>,
    walk: PerDirection<Option<Vec<SpriteId>>>,
    tiles: Vec<SpriteId>,
}

impl SpriteSet {
    /// Start building a sprite set
    pub fn builder() -> SpriteSetBuilder {
        SpriteSetBuilder::default()
    }

    /// Idle sprite for a direction, if one was configured
    pub fn idle(&self, direction: Direction) -> Option<SpriteId> {
        self.idle[direction]
    }

    /// Walking sequence for a direction, if one was configured
    ///
    /// When present the sequence is non-empty (enforced at build).
    pub fn walk_sequence(&self, direction: Direction) -> Option<&[SpriteId]> {
        self.walk[direction].as_deref()
    }

    /// Ordered tile sprite table; a grid cell's tile type indexes into this
    pub fn tile_table(&self) -> &[SpriteId] {
        &self.tiles
    }
}

/// Builder for [`SpriteSet`]
///
/// The host loader resolves asset paths into ids and wires them in here;
/// `build` validates the shape of what was configured.
#[derive(Debug, Default)]
pub struct SpriteSetBuilder {
    idle: PerDirection<Option<SpriteId>>,
    walk: PerDirection<Option<Vec<SpriteId>>>,
    tiles: Vec<SpriteId>,
}

impl SpriteSetBuilder {
    /// Set the idle sprite for a direction
    pub fn idle(mut self, direction: Direction, sprite: SpriteId) -> Self {
        self.idle[direction] = Some(sprite);
        self
    }

    /// Set the walking sequence for a direction
    pub fn walk_sequence(mut self, direction: Direction, frames: Vec<SpriteId>) -> Self {
        self.walk[direction] = Some(frames);
        self
    }

    /// Append a sprite to the tile table; order defines tile-type indices
    pub fn tile(mut self, sprite: SpriteId) -> Self {
        self.tiles.push(sprite);
        self
    }

    /// Validate and build the sprite set
    pub fn build(self) -> Result<SpriteSet, SpriteError> {
        for direction in Direction::ALL {
            if let Some(frames) = &self.walk[direction] {
                if frames.is_empty() {
                    return Err(SpriteError::EmptySequence(direction));
                }
            }
        }

        Ok(SpriteSet {
            idle: self.idle,
            walk: self.walk,
            tiles: self.tiles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite(path: &str) -> SpriteId {
        SpriteId::from_path(path)
    }

    #[test]
    fn test_builder_roundtrip() {
        let set = SpriteSet::builder()
            .idle(Direction::Down, sprite("player/down.png"))
            .walk_sequence(
                Direction::Down,
                vec![sprite("player/down1.png"), sprite("player/down2.png")],
            )
            .tile(sprite("tiles/grass.png"))
            .tile(sprite("tiles/water.png"))
            .build()
            .unwrap();

        assert_eq!(set.idle(Direction::Down), Some(sprite("player/down.png")));
        assert_eq!(set.walk_sequence(Direction::Down).unwrap().len(), 2);
        assert_eq!(set.tile_table().len(), 2);
        assert_eq!(set.tile_table()[1], sprite("tiles/water.png"));
    }

    #[test]
    fn test_unconfigured_slots_are_absent() {
        let set = SpriteSet::builder().build().unwrap();
        assert_eq!(set.idle(Direction::Up), None);
        assert!(set.walk_sequence(Direction::Left).is_none());
        assert!(set.tile_table().is_empty());
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let err = SpriteSet::builder()
            .walk_sequence(Direction::Left, Vec::new())
            .build()
            .unwrap_err();

        assert!(matches!(err, SpriteError::EmptySequence(Direction::Left)));
    }

    #[test]
    fn test_sequences_may_differ_in_length() {
        let set = SpriteSet::builder()
            .walk_sequence(Direction::Up, vec![sprite("u1"), sprite("u2")])
            .walk_sequence(
                Direction::Left,
                vec![
                    sprite("l1"),
                    sprite("l2"),
                    sprite("l3"),
                    sprite("l2"),
                    sprite("l1"),
                ],
            )
            .build()
            .unwrap();

        assert_eq!(set.walk_sequence(Direction::Up).unwrap().len(), 2);
        assert_eq!(set.walk_sequence(Direction::Left).unwrap().len(), 5);
    }
}
