// Engine modules: timing, input, assets, tilemap, render commands

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod render;
pub mod tilemap;
