// Game configuration

use glam::IVec2;

use crate::engine::game_loop::DEFAULT_TICK_RATE;

/// Screen, map, and player tuning for one session
///
/// Defaults mirror the reference setup: 16px art scaled 3x to 48px tiles,
/// a 16x12 tile screen, 60 ticks per second, and a player spawning at
/// (100, 100) walking 4 pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Source art tile size in pixels
    pub base_tile_size: u32,
    /// Integer upscale factor applied to the source art
    pub scale: u32,
    /// Screen width in tiles
    pub screen_cols: usize,
    /// Screen height in tiles
    pub screen_rows: usize,
    /// Simulation rate in ticks per second
    pub tick_rate: u32,
    /// Player spawn position in pixels
    pub player_spawn: IVec2,
    /// Player speed in pixels per tick
    pub player_speed: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_tile_size: 16,
            scale: 3,
            screen_cols: 16,
            screen_rows: 12,
            tick_rate: DEFAULT_TICK_RATE,
            player_spawn: IVec2::new(100, 100),
            player_speed: 4,
        }
    }
}

impl GameConfig {
    /// On-screen tile size in pixels
    pub fn tile_size(&self) -> u32 {
        self.base_tile_size * self.scale
    }

    /// Screen width in pixels
    pub fn screen_width(&self) -> u32 {
        self.tile_size() * self.screen_cols as u32
    }

    /// Screen height in pixels
    pub fn screen_height(&self) -> u32 {
        self.tile_size() * self.screen_rows as u32
    }
}
