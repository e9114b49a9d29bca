// Game session: the composition root for one run

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::info;

use super::config::GameConfig;
use super::player::Player;
use super::sprite_set::SpriteSet;
use crate::engine::game_loop::GameLoop;
use crate::engine::input::IntentSource;
use crate::engine::render::{DrawCommand, RenderTarget};
use crate::engine::tilemap::{draw_tiles, MapError, TileGrid};

/// One running game: loop timing, the player, the map, and the sprites
///
/// The session owns all mutable state and is driven from a single thread.
/// Each simulation tick samples the intent snapshot once at tick start,
/// updates the player, and emits one render pass (tiles first, player on
/// top); render passes are coupled 1:1 with ticks. The session never
/// spawns its own thread; the host calls [`GameSession::frame`] as often
/// as it likes, or hands control to [`GameSession::run`].
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    game_loop: GameLoop,
    player: Player,
    grid: TileGrid,
    sprites: SpriteSet,
}

impl GameSession {
    /// Validate the map against the sprites and build a session
    ///
    /// Refuses to start on a grid that references missing tile sprites or
    /// that doesn't cover the configured screen, since rendering undefined
    /// tiles is not an option.
    pub fn new(
        config: GameConfig,
        sprites: SpriteSet,
        grid: TileGrid,
    ) -> Result<Self, MapError> {
        grid.validate_tile_indices(sprites.tile_table().len())?;

        if grid.cols() < config.screen_cols || grid.rows() < config.screen_rows {
            return Err(MapError::TooSmall {
                cols: grid.cols(),
                rows: grid.rows(),
                min_cols: config.screen_cols,
                min_rows: config.screen_rows,
            });
        }

        info!(
            "session ready: {}x{} map, {} tile sprites, {} ticks/s",
            grid.cols(),
            grid.rows(),
            sprites.tile_table().len(),
            config.tick_rate,
        );

        Ok(Self {
            game_loop: GameLoop::new(config.tick_rate),
            player: Player::new(&config),
            config,
            grid,
            sprites,
        })
    }

    /// Per-frame entry point for wall-clock hosts
    ///
    /// Runs however many simulation ticks are due and returns the count.
    pub fn frame(
        &mut self,
        input: &mut dyn IntentSource,
        target: &mut dyn RenderTarget,
    ) -> u32 {
        let ticks = self.game_loop.begin_frame();
        self.run_ticks(ticks, input, target);
        ticks
    }

    /// Per-frame entry point with injected elapsed time
    pub fn advance(
        &mut self,
        elapsed: Duration,
        input: &mut dyn IntentSource,
        target: &mut dyn RenderTarget,
    ) -> u32 {
        let ticks = self.game_loop.advance(elapsed);
        self.run_ticks(ticks, input, target);
        ticks
    }

    /// Drive frames until the stop flag is observed
    ///
    /// The flag is only checked between frames, so a tick is never
    /// abandoned half-applied. One final forced tick+render flushes
    /// terminal state before returning.
    pub fn run(
        &mut self,
        input: &mut dyn IntentSource,
        target: &mut dyn RenderTarget,
        stop: &AtomicBool,
    ) {
        info!("entering run loop");

        while !stop.load(Ordering::Relaxed) {
            self.frame(input, target);
            std::thread::yield_now();
        }

        self.step(input, target);
        info!(
            "run loop stopped after {} ticks over {:.1?}",
            self.game_loop.tick_count(),
            self.game_loop.elapsed(),
        );
    }

    /// The player being driven
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The session configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Loop timing state (counters are diagnostics)
    pub fn game_loop(&self) -> &GameLoop {
        &self.game_loop
    }

    fn run_ticks(
        &mut self,
        ticks: u32,
        input: &mut dyn IntentSource,
        target: &mut dyn RenderTarget,
    ) {
        for _ in 0..ticks {
            self.step(input, target);
        }
    }

    /// One simulation tick plus its coupled render pass
    fn step(&mut self, input: &mut dyn IntentSource, target: &mut dyn RenderTarget) {
        // Snapshot once at tick start; the tick sees one consistent intent
        let intent = input.sample();
        self.player.update(intent, &self.sprites);
        self.render(target);
    }

    fn render(&mut self, target: &mut dyn RenderTarget) {
        draw_tiles(
            &self.grid,
            self.sprites.tile_table(),
            self.config.tile_size(),
            target,
        );
        let sprite = self.player.current_sprite(&self.sprites);
        target.submit(DrawCommand::new(self.player.position(), sprite));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::SpriteId;
    use crate::engine::input::MoveIntent;
    use crate::game::direction::Direction;
    use glam::IVec2;

    /// Intent source that always reports the same held axes
    struct Held(MoveIntent);

    impl IntentSource for Held {
        fn sample(&mut self) -> MoveIntent {
            self.0
        }
    }

    fn test_sprites() -> SpriteSet {
        SpriteSet::builder()
            .idle(Direction::Down, SpriteId::from_path("player/down.png"))
            .walk_sequence(
                Direction::Down,
                vec![
                    SpriteId::from_path("player/down1.png"),
                    SpriteId::from_path("player/down2.png"),
                ],
            )
            .tile(SpriteId::from_path("tiles/grass.png"))
            .build()
            .unwrap()
    }

    fn test_session() -> GameSession {
        let grid = TileGrid::filled(16, 12, 0).unwrap();
        GameSession::new(GameConfig::default(), test_sprites(), grid).unwrap()
    }

    fn one_tick() -> Duration {
        Duration::from_nanos(16_666_666)
    }

    #[test]
    fn test_rejects_unresolvable_tile_index() {
        let grid = TileGrid::filled(16, 12, 7).unwrap();
        let err = GameSession::new(GameConfig::default(), test_sprites(), grid).unwrap_err();
        assert!(matches!(err, MapError::TileIndexOutOfRange { index: 7, .. }));
    }

    #[test]
    fn test_rejects_grid_smaller_than_screen() {
        let grid = TileGrid::filled(8, 12, 0).unwrap();
        let err = GameSession::new(GameConfig::default(), test_sprites(), grid).unwrap_err();
        assert!(matches!(
            err,
            MapError::TooSmall {
                cols: 8,
                min_cols: 16,
                ..
            }
        ));
    }

    #[test]
    fn test_render_coupled_one_to_one() {
        let mut session = test_session();
        let mut input = Held(MoveIntent::NONE);
        let mut commands: Vec<DrawCommand> = Vec::new();

        // 192 tiles + 1 player sprite per render pass
        let ticks = session.advance(one_tick() * 3, &mut input, &mut commands);
        assert_eq!(ticks, 3);
        assert_eq!(commands.len(), 3 * 193);
    }

    #[test]
    fn test_no_tick_no_render() {
        let mut session = test_session();
        let mut input = Held(MoveIntent::NONE);
        let mut commands: Vec<DrawCommand> = Vec::new();

        let ticks = session.advance(Duration::from_millis(1), &mut input, &mut commands);
        assert_eq!(ticks, 0);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_walk_down_end_to_end() {
        let mut session = test_session();
        let mut input = Held(MoveIntent {
            down: true,
            ..MoveIntent::NONE
        });
        let mut commands: Vec<DrawCommand> = Vec::new();

        let ticks = session.advance(one_tick() * 10, &mut input, &mut commands);
        assert_eq!(ticks, 10);
        assert_eq!(session.player().position(), IVec2::new(100, 140));
        assert!(session.player().motion.moving);
        assert_eq!(session.player().direction(), Direction::Down);

        // The player sprite rides on top of the last render pass
        let last = commands.last().unwrap();
        assert_eq!(last.position, IVec2::new(100, 140));
    }

    #[test]
    fn test_tick_conservation_end_to_end() {
        let mut session = test_session();
        let mut input = Held(MoveIntent::NONE);
        let mut commands: Vec<DrawCommand> = Vec::new();

        let mut total = 0;
        for _ in 0..100 {
            total += session.advance(Duration::from_millis(10), &mut input, &mut commands);
        }
        assert_eq!(total, 60);
        assert_eq!(session.game_loop().tick_count(), 60);
    }

    #[test]
    fn test_stop_flushes_final_tick_and_render() {
        let mut session = test_session();
        let mut input = Held(MoveIntent {
            down: true,
            ..MoveIntent::NONE
        });
        let mut commands: Vec<DrawCommand> = Vec::new();

        // Flag already raised: the loop body never runs, but the forced
        // terminal tick+render still happens
        let stop = AtomicBool::new(true);
        session.run(&mut input, &mut commands, &stop);

        assert_eq!(commands.len(), 193);
        assert_eq!(session.player().position(), IVec2::new(100, 104));
    }
}
