//! Directional stacking: children laid end to end along one axis.
//!
//! Resolution walks the children in order, offering each the space still
//! unused on the stacking axis and the full cross axis. Once that space hits
//! zero the remaining children are dropped. The stack's main-axis size is the
//! sum of what its children took; its cross-axis size is their maximum.
//!
//! Growth happens at query time. When the parent renders the stack larger
//! than its natural size, the surplus is split evenly between grow-marked
//! children with integer division: any remainder cells stay unallocated at
//! the far end rather than going to one child. A grown child is queried at
//! its grown size so it can pass the surplus on to its own grow-marked
//! descendants.
//!
//! Reversed directions (`Up`, `Left`) mirror the query coordinate before the
//! band search and mirror it again, against the child's natural size, inside
//! the matching band. A child keeps its own orientation while the children
//! stack from the far edge, and a grown child's content sits at the far edge
//! of its band with the surplus on the near side.

use crate::provider::{BoxedStrip, ProvidedStrip, StripProvider, TileSource};
use core_model::Tile;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Top to bottom.
    Down,
    /// Bottom to top.
    Up,
    /// Left to right.
    Right,
    /// Right to left.
    Left,
}

impl Direction {
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Down | Direction::Up)
    }

    #[inline]
    pub fn is_reversed(self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }

    fn main_size(self, strip: &ProvidedStrip) -> i32 {
        if self.is_vertical() {
            strip.height()
        } else {
            strip.width()
        }
    }

    fn cross_size(self, strip: &ProvidedStrip) -> i32 {
        if self.is_vertical() {
            strip.width()
        } else {
            strip.height()
        }
    }
}

pub struct StackStrip {
    direction: Direction,
    children: Vec<BoxedStrip>,
}

impl StackStrip {
    pub fn new(direction: Direction, children: impl IntoIterator<Item = BoxedStrip>) -> Self {
        Self {
            direction,
            children: children.into_iter().collect(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

pub fn downward_strip(children: impl IntoIterator<Item = BoxedStrip>) -> StackStrip {
    StackStrip::new(Direction::Down, children)
}

pub fn upward_strip(children: impl IntoIterator<Item = BoxedStrip>) -> StackStrip {
    StackStrip::new(Direction::Up, children)
}

pub fn rightward_strip(children: impl IntoIterator<Item = BoxedStrip>) -> StackStrip {
    StackStrip::new(Direction::Right, children)
}

pub fn leftward_strip(children: impl IntoIterator<Item = BoxedStrip>) -> StackStrip {
    StackStrip::new(Direction::Left, children)
}

struct Bands {
    direction: Direction,
    children: Vec<ProvidedStrip>,
    /// Natural main-axis size (sum of child sizes).
    main: i32,
    growers: i32,
}

impl TileSource for Bands {
    fn tile(&self, x: i32, y: i32, width: i32, height: i32) -> Tile {
        let vertical = self.direction.is_vertical();
        let reversed = self.direction.is_reversed();
        let (along, requested) = if vertical { (y, height) } else { (x, width) };

        let mut pos = if reversed { requested - along - 1 } else { along };
        if pos < 0 {
            return Tile::empty();
        }

        let grow_amount = if self.growers == 0 {
            0
        } else {
            (requested - self.main).div_euclid(self.growers)
        };

        for child in &self.children {
            let extent =
                self.direction.main_size(child) + if child.grows() { grow_amount } else { 0 };
            if pos < extent {
                // Reversed bands mirror against the child's natural size, so a
                // grown child's content hugs the far edge of its band.
                let local = if reversed {
                    self.direction.main_size(child) - pos - 1
                } else {
                    pos
                };
                return if vertical {
                    child.get_tile(x, local, width, extent)
                } else {
                    child.get_tile(local, y, extent, height)
                };
            }
            pos -= extent;
        }
        Tile::empty()
    }
}

impl StripProvider for StackStrip {
    fn resolve(&self, max_width: i32, max_height: i32) -> ProvidedStrip {
        let direction = self.direction;
        let vertical = direction.is_vertical();
        let (main_max, cross_max) = if vertical {
            (max_height, max_width)
        } else {
            (max_width, max_height)
        };

        let mut remaining = main_max;
        let mut growers = 0;
        let mut children = Vec::with_capacity(self.children.len());
        for child in &self.children {
            if remaining <= 0 {
                debug!(
                    target: "layout.stack",
                    ?direction,
                    dropped = self.children.len() - children.len(),
                    "stack_children_truncated"
                );
                break;
            }
            let strip = if vertical {
                child.resolve(max_width, remaining)
            } else {
                child.resolve(remaining, max_height)
            };
            remaining -= direction.main_size(&strip);
            if strip.grows() {
                growers += 1;
            }
            children.push(strip);
        }

        let main = (main_max - remaining).min(main_max);
        let cross = children
            .iter()
            .map(|c| direction.cross_size(c))
            .max()
            .unwrap_or(0)
            .min(cross_max);
        let (width, height) = if vertical { (cross, main) } else { (main, cross) };

        trace!(
            target: "layout.stack",
            ?direction,
            max_width,
            max_height,
            children = children.len(),
            growers,
            width,
            height,
            "stack_strip_resolved"
        );

        ProvidedStrip::new(
            width,
            height,
            Bands {
                direction,
                children,
                main,
                growers,
            },
        )
    }
}
