//! Packing operator: flows a flat tile sequence onto the grid.
//!
//! Cells are scanned row-major. Every unclaimed cell takes the next tile from
//! the sequence (or an empty tile once the sequence runs out) and claims the
//! rest of that tile's span. Claimed span cells hold empty placeholders, so a
//! query inside a span answers `Empty`; only the top-left cell carries the
//! tile. Spans running off the allocation are clipped.
//!
//! The resolved size is the tight bounding box of non-empty tiles, which lets
//! a short or sparse sequence shrink below the space it was offered.

use crate::provider::{ProvidedStrip, StripProvider, TileSource};
use core_model::Tile;
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct TileStrip {
    tiles: Vec<Tile>,
}

impl TileStrip {
    pub fn new(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

/// Strip backed by a plain tile sequence.
pub fn tile_strip(tiles: impl IntoIterator<Item = Tile>) -> TileStrip {
    TileStrip::new(tiles)
}

/// Strip with no content; resolves to a zero-sized region.
pub fn empty_strip() -> TileStrip {
    TileStrip::default()
}

/// Pre-baked grid. Queries ignore the requested size.
struct PackedGrid {
    columns: i32,
    rows: i32,
    cells: Vec<Tile>,
}

impl TileSource for PackedGrid {
    fn tile(&self, x: i32, y: i32, _width: i32, _height: i32) -> Tile {
        if x < 0 || x >= self.columns || y < 0 || y >= self.rows {
            return Tile::empty();
        }
        self.cells[(y * self.columns + x) as usize].clone()
    }
}

impl StripProvider for TileStrip {
    fn resolve(&self, max_width: i32, max_height: i32) -> ProvidedStrip {
        let columns = max_width.max(0);
        let rows = max_height.max(0);
        let cols = columns as usize;
        let mut claimed: Vec<Option<Tile>> = vec![None; cols * rows as usize];

        let mut pending = self.tiles.iter();
        let mut placed = 0usize;
        let mut final_width = 0;
        let mut final_height = 0;

        for y in 0..rows {
            for x in 0..columns {
                let idx = (y * columns + x) as usize;
                if claimed[idx].is_some() {
                    continue;
                }

                let tile = pending.next().cloned().unwrap_or_default();
                let right = (x + i32::from(tile.width())).min(columns);
                let bottom = (y + i32::from(tile.height())).min(rows);

                if !tile.is_empty() {
                    placed += 1;
                    final_width = final_width.max(right);
                    final_height = final_height.max(bottom);
                }

                for sy in y..bottom {
                    for sx in x..right {
                        let cell = &mut claimed[sy as usize * cols + sx as usize];
                        if cell.is_none() {
                            *cell = Some(Tile::empty());
                        }
                    }
                }
                claimed[idx] = Some(tile);
            }
        }

        trace!(
            target: "layout.tile",
            max_width,
            max_height,
            tiles = self.tiles.len(),
            placed,
            width = final_width,
            height = final_height,
            "tile_strip_resolved"
        );

        let cells = claimed.into_iter().map(Option::unwrap_or_default).collect();
        ProvidedStrip::new(
            final_width,
            final_height,
            PackedGrid {
                columns,
                rows,
                cells,
            },
        )
    }
}
