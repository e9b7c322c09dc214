//! Tile-grid layout engine.
//!
//! A screen is described as a tree of [`StripProvider`]s built bottom-up from
//! tiles. The root is resolved once per state change against the screen size,
//! producing a [`ProvidedStrip`] the renderer then queries cell by cell.
//!
//! Operators:
//! - [`tile_strip`]: packs a flat tile sequence row-major, honoring spans.
//! - [`container_strip`]: children at absolute rectangles, first match wins.
//! - [`downward_strip`], [`upward_strip`], [`rightward_strip`],
//!   [`leftward_strip`]: stack children along an axis with grow support.
//! - [`list_strip`]: one row with a "More" button when items overflow.
//! - [`constrain_width`], [`constrain_height`], [`grow`]: adjust the offer or
//!   mark a child for spare space.
//! - [`empty_strip`]: the zero-sized base case.
//!
//! Layout is synchronous and allocation-light: a pass is O(grid cells), and
//! resolved strips are `Send + Sync` so any number of readers may query them.
//! Query time never fails; see [`ProvidedStrip`] for the out-of-range contract.

mod container;
mod list;
mod modifiers;
mod provider;
mod stack;
mod tile_strip;

pub use container::{ContainedStripInfo, ContainerStrip, container_strip};
pub use list::{DEFAULT_MORE_ICON, DEFAULT_MORE_LABEL, ListStrip, list_strip};
pub use modifiers::{ConstrainHeight, ConstrainWidth, Grow, constrain_height, constrain_width, grow};
pub use provider::{
    BoxedStrip, FnStrip, ProvidedStrip, StripProvider, StripProviderExt, TileSource, from_fn,
};
pub use stack::{
    Direction, StackStrip, downward_strip, leftward_strip, rightward_strip, upward_strip,
};
pub use tile_strip::{TileStrip, empty_strip, tile_strip};
