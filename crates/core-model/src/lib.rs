//! Value types shared by the layout engine: grid rectangles and tiles.
//!
//! Everything here is an immutable value. Layout passes build these fresh on
//! every state change and drop them once the renderer has read the grid.

mod geometry;
mod tile;

pub use geometry::{GeometryError, Rectangle};
pub use tile::{Button, OnPress, Severity, SplitToggle, SplitToggleState, Tile, TileKind, Toggle};
