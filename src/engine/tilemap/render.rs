// Tile grid draw-command emission

use glam::IVec2;

use super::TileGrid;
use crate::engine::assets::SpriteId;
use crate::engine::render::{DrawCommand, RenderTarget, SpriteRef};

/// Emit one draw command per grid cell into the target
///
/// Cells are enumerated row-major, left-to-right then top-to-bottom, each
/// placed at `(col * tile_size, row * tile_size)`. Grids are validated
/// against the tile table at startup, so every index should resolve; if
/// one slips through anyway it degrades to a logged placeholder rather
/// than a skipped cell.
pub fn draw_tiles(
    grid: &TileGrid,
    tile_table: &[SpriteId],
    tile_size: u32,
    target: &mut dyn RenderTarget,
) {
    let tile_size = tile_size as i32;

    for (col, row, tile) in grid.cells() {
        let sprite = match tile_table.get(tile) {
            Some(&id) => SpriteRef::Image(id),
            None => {
                log::warn!(
                    "tile index {tile} at ({col},{row}) has no sprite, drawing placeholder"
                );
                SpriteRef::Placeholder
            }
        };

        let position = IVec2::new(col as i32 * tile_size, row as i32 * tile_size);
        target.submit(DrawCommand::new(position, sprite));
    }
}
