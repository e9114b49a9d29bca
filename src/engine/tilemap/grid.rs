// Tile grid storage and map text parsing

use super::MapError;

/// Fixed-size 2D grid of tile-type indices, addressed `(col, row)`
///
/// Immutable after parsing. Indices are validated against the tile sprite
/// table once at startup ([`TileGrid::validate_tile_indices`]); after that
/// every cell is known to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    cols: usize,
    rows: usize,
    /// Row-major cell storage
    tiles: Vec<usize>,
}

impl TileGrid {
    /// Parse map text into a grid of the declared dimensions
    ///
    /// The text is one row of whitespace-separated integers per line;
    /// blank lines are skipped. Each data row must hold exactly `cols`
    /// tokens and the text must hold at least `rows` data rows; extra
    /// trailing rows are ignored.
    pub fn parse(text: &str, cols: usize, rows: usize) -> Result<Self, MapError> {
        if cols == 0 || rows == 0 {
            return Err(MapError::EmptyGrid { cols, rows });
        }

        let mut tiles = Vec::with_capacity(cols * rows);
        let mut row = 0;

        for line in text.lines() {
            if row == rows {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != cols {
                return Err(MapError::RowWidth {
                    row,
                    expected: cols,
                    found: tokens.len(),
                });
            }

            for (col, token) in tokens.iter().enumerate() {
                let tile: usize = token.parse().map_err(|_| MapError::BadToken {
                    row,
                    col,
                    token: (*token).to_string(),
                })?;
                tiles.push(tile);
            }

            row += 1;
        }

        if row < rows {
            return Err(MapError::NotEnoughRows {
                found: row,
                expected: rows,
            });
        }

        Ok(Self { cols, rows, tiles })
    }

    /// Build a grid filled with a single tile type
    pub fn filled(cols: usize, rows: usize, tile: usize) -> Result<Self, MapError> {
        if cols == 0 || rows == 0 {
            return Err(MapError::EmptyGrid { cols, rows });
        }
        Ok(Self {
            cols,
            rows,
            tiles: vec![tile; cols * rows],
        })
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the tile type at a cell, or `None` outside the grid
    pub fn get(&self, col: usize, row: usize) -> Option<usize> {
        if col < self.cols && row < self.rows {
            self.tiles.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// Iterate cells row-major, left-to-right then top-to-bottom
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &tile)| (i % self.cols, i / self.cols, tile))
    }

    /// Check every cell against a tile sprite table of the given length
    ///
    /// An out-of-range index means the map references a sprite slot that
    /// doesn't exist; callers refuse to enter the run loop on this.
    pub fn validate_tile_indices(&self, table_len: usize) -> Result<(), MapError> {
        for (col, row, tile) in self.cells() {
            if tile >= table_len {
                return Err(MapError::TileIndexOutOfRange {
                    col,
                    row,
                    index: tile,
                    table_len,
                });
            }
        }
        Ok(())
    }
}
