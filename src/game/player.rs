// Player entity

use glam::IVec2;

use super::animation::WalkAnimation;
use super::config::GameConfig;
use super::direction::Direction;
use super::motion::EntityMotion;
use super::sprite_set::SpriteSet;
use crate::engine::input::MoveIntent;
use crate::engine::render::SpriteRef;

/// The player-controlled entity
///
/// Owns its motion and animation state outright: each entity instance
/// carries its own counters, so several entities can never alias each
/// other's animation progress.
#[derive(Debug, Clone)]
pub struct Player {
    /// Position, speed, and facing
    pub motion: EntityMotion,
    /// Walk-cycle state
    pub animation: WalkAnimation,
}

impl Player {
    /// Spawn a player with the session's configured defaults
    pub fn new(config: &GameConfig) -> Self {
        Self::spawn_at(config.player_spawn, config.player_speed)
    }

    /// Spawn a player at an explicit position and speed
    pub fn spawn_at(pos: IVec2, speed: i32) -> Self {
        Self {
            motion: EntityMotion::new(pos, speed),
            animation: WalkAnimation::new(),
        }
    }

    /// Run one simulation tick and return the sprite to display
    ///
    /// Order matters: movement resolves first, then the animation advances
    /// with that tick's movement outcome.
    pub fn update(&mut self, intent: MoveIntent, sprites: &SpriteSet) -> SpriteRef {
        self.motion.advance(intent);
        self.animation
            .advance(self.motion.moving, self.motion.direction, sprites)
    }

    /// Current screen-space position in pixels
    pub fn position(&self) -> IVec2 {
        self.motion.pos
    }

    /// Current facing direction
    pub fn direction(&self) -> Direction {
        self.motion.direction
    }

    /// Resolve the sprite for the current state without ticking
    pub fn current_sprite(&self, sprites: &SpriteSet) -> SpriteRef {
        self.animation.current_sprite(sprites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::SpriteId;

    fn sprites() -> SpriteSet {
        SpriteSet::builder()
            .idle(Direction::Down, SpriteId::from_path("down"))
            .walk_sequence(
                Direction::Down,
                vec![
                    SpriteId::from_path("down1"),
                    SpriteId::from_path("down2"),
                ],
            )
            .build()
            .unwrap()
    }

    fn intent_down() -> MoveIntent {
        MoveIntent {
            down: true,
            ..MoveIntent::NONE
        }
    }

    #[test]
    fn test_spawn_defaults() {
        let player = Player::new(&GameConfig::default());
        assert_eq!(player.position(), IVec2::new(100, 100));
        assert_eq!(player.motion.speed, 4);
        assert_eq!(player.direction(), Direction::Down);
        assert!(!player.motion.moving);
    }

    #[test]
    fn test_ten_ticks_down() {
        let sprites = sprites();
        let mut player = Player::new(&GameConfig::default());

        for _ in 0..10 {
            player.update(intent_down(), &sprites);
        }

        assert_eq!(player.position(), IVec2::new(100, 140));
        assert_eq!(player.direction(), Direction::Down);
        assert!(player.motion.moving);
    }

    #[test]
    fn test_idle_tick_shows_idle_sprite() {
        let sprites = sprites();
        let mut player = Player::new(&GameConfig::default());

        let shown = player.update(MoveIntent::NONE, &sprites);
        assert_eq!(shown, SpriteRef::Image(SpriteId::from_path("down")));
    }

    #[test]
    fn test_animation_state_is_per_player() {
        let sprites = sprites();
        let mut walker = Player::new(&GameConfig::default());
        let mut stander = Player::new(&GameConfig::default());
        walker.animation.set_delay(Direction::Down, 1);

        for _ in 0..3 {
            walker.update(intent_down(), &sprites);
            stander.update(MoveIntent::NONE, &sprites);
        }

        assert_ne!(walker.animation.sequence_index(), 0);
        assert_eq!(stander.animation.sequence_index(), 0);
    }
}
