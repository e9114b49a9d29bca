use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

mod engine;
mod game;

use engine::assets::SpriteId;
use engine::input::{IntentSource, IntentTracker, MoveAxis, MoveIntent};
use engine::render::{DrawCommand, RenderTarget};
use engine::tilemap::TileGrid;
use game::{Direction, GameConfig, GameSession, SpriteSet};

/// Demo map: 16x12 of grass (0), water (1), and brick (2)
const DEMO_MAP: &str = "\
2 2 2 2 2 2 2 2 2 2 2 2 2 2 2 2
2 0 0 0 0 0 0 0 0 0 0 0 0 0 0 2
2 0 0 0 0 1 1 1 0 0 0 0 0 0 0 2
2 0 0 0 0 1 1 1 0 0 0 0 0 0 0 2
2 0 0 0 0 1 1 1 0 0 0 0 0 0 0 2
2 0 0 0 0 0 0 0 0 0 0 0 0 0 0 2
2 0 0 0 0 0 0 0 0 0 0 2 2 0 0 2
2 0 0 0 0 0 0 0 0 0 0 2 2 0 0 2
2 0 0 0 0 0 0 0 0 0 0 0 0 0 0 2
2 0 0 0 0 0 0 0 0 0 0 0 0 0 0 2
2 0 0 0 0 0 0 0 0 0 0 0 0 0 0 2
2 2 2 2 2 2 2 2 2 2 2 2 2 2 2 2
";

/// Wire up the demo sprite manifest
///
/// Paths are resolved to opaque ids; the host renderer would decode the
/// actual images under the same paths. The left/right walks interleave
/// idle frames mid-cycle, which is why they are longer and run at the
/// faster cadence.
fn demo_sprites() -> Result<SpriteSet> {
    let s = SpriteId::from_path;

    SpriteSet::builder()
        .idle(Direction::Up, s("player/up.png"))
        .idle(Direction::Down, s("player/down.png"))
        .idle(Direction::Left, s("player/left.png"))
        .idle(Direction::Right, s("player/right.png"))
        .walk_sequence(
            Direction::Up,
            vec![s("player/up1.png"), s("player/up2.png")],
        )
        .walk_sequence(
            Direction::Down,
            vec![s("player/down1.png"), s("player/down2.png")],
        )
        .walk_sequence(
            Direction::Left,
            vec![
                s("player/left1.png"),
                s("player/left2.png"),
                s("player/left3.png"),
                s("player/left2.png"),
                s("player/left1.png"),
                s("player/left3.png"),
                s("player/left2.png"),
                s("player/left3.png"),
                s("player/left1.png"),
            ],
        )
        .walk_sequence(
            Direction::Right,
            vec![
                s("player/right1.png"),
                s("player/right2.png"),
                s("player/right3.png"),
                s("player/right2.png"),
                s("player/right1.png"),
                s("player/right3.png"),
                s("player/right2.png"),
                s("player/right3.png"),
                s("player/right1.png"),
            ],
        )
        .tile(s("tiles/grass.png"))
        .tile(s("tiles/water.png"))
        .tile(s("tiles/brick.png"))
        .build()
        .context("building demo sprite set")
}

/// Scripted input: walk a square, one second per side, then stop
///
/// Plays key press/release edges into an [`IntentTracker`] the way a
/// window event handler would.
struct ScriptedWalk {
    tick: u32,
    tracker: IntentTracker,
    stop: Arc<AtomicBool>,
}

impl ScriptedWalk {
    fn new(stop: Arc<AtomicBool>) -> Self {
        Self {
            tick: 0,
            tracker: IntentTracker::new(),
            stop,
        }
    }
}

impl IntentSource for ScriptedWalk {
    fn sample(&mut self) -> MoveIntent {
        if self.tick % 60 == 0 {
            self.tracker.clear();
            match self.tick / 60 {
                0 => self.tracker.press(MoveAxis::Down),
                1 => self.tracker.press(MoveAxis::Right),
                2 => self.tracker.press(MoveAxis::Up),
                3 => self.tracker.press(MoveAxis::Left),
                _ => self.stop.store(true, Ordering::Relaxed),
            }
        }
        self.tick += 1;
        self.tracker.snapshot()
    }
}

/// Headless render target: tallies commands instead of blitting
#[derive(Default)]
struct DrawTally {
    commands: u64,
    placeholders: u64,
}

impl RenderTarget for DrawTally {
    fn submit(&mut self, command: DrawCommand) {
        self.commands += 1;
        if !command.sprite.is_resolved() {
            self.placeholders += 1;
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Tilewalk demo...");

    let config = GameConfig::default();
    let sprites = demo_sprites()?;
    let grid = TileGrid::parse(DEMO_MAP, config.screen_cols, config.screen_rows)
        .context("loading demo map")?;

    let mut session = GameSession::new(config, sprites, grid)?;
    info!(
        "screen {}x{} px, player spawns at {}",
        config.screen_width(),
        config.screen_height(),
        session.player().position(),
    );

    // Walk the scripted square until the script raises the stop flag
    let stop = Arc::new(AtomicBool::new(false));
    let mut input = ScriptedWalk::new(stop.clone());
    let mut tally = DrawTally::default();

    session.run(&mut input, &mut tally, &stop);

    info!(
        "demo finished: {} ticks over {} frames, {} draw commands ({} placeholders), player at {}",
        session.game_loop().tick_count(),
        session.game_loop().frame_count(),
        tally.commands,
        tally.placeholders,
        session.player().position(),
    );

    Ok(())
}
