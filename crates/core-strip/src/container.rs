//! Container operator: children pinned at absolute rectangles.
//!
//! Each child is resolved against its own bounds' size. Queries are hit-tested
//! against the children in declaration order and the first containing
//! rectangle wins, so an earlier child shadows a later one wherever their
//! bounds overlap. Use sparingly: positions are hardcoded.

use crate::provider::{BoxedStrip, ProvidedStrip, StripProvider, TileSource};
use core_model::{Rectangle, Tile};
use tracing::trace;

/// A provider paired with the rectangle it occupies inside a container.
pub struct ContainedStripInfo {
    pub bounds: Rectangle,
    pub strip: BoxedStrip,
}

impl ContainedStripInfo {
    pub fn new(bounds: Rectangle, strip: impl StripProvider + 'static) -> Self {
        Self {
            bounds,
            strip: Box::new(strip),
        }
    }
}

#[derive(Default)]
pub struct ContainerStrip {
    children: Vec<ContainedStripInfo>,
}

impl ContainerStrip {
    pub fn new(children: impl IntoIterator<Item = ContainedStripInfo>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }

    /// Append a child; it loses hit-tests to every child added before it.
    pub fn push(&mut self, child: ContainedStripInfo) {
        self.children.push(child);
    }
}

pub fn container_strip(children: impl IntoIterator<Item = ContainedStripInfo>) -> ContainerStrip {
    ContainerStrip::new(children)
}

struct PlacedChildren {
    children: Vec<(Rectangle, ProvidedStrip)>,
}

impl TileSource for PlacedChildren {
    fn tile(&self, x: i32, y: i32, _width: i32, _height: i32) -> Tile {
        match self.children.iter().find(|(bounds, _)| bounds.contains(x, y)) {
            Some((bounds, strip)) => strip.get_tile(
                x - bounds.x(),
                y - bounds.y(),
                bounds.width(),
                bounds.height(),
            ),
            None => Tile::empty(),
        }
    }
}

impl StripProvider for ContainerStrip {
    fn resolve(&self, max_width: i32, max_height: i32) -> ProvidedStrip {
        let items_width = self.children.iter().map(|c| c.bounds.right()).fold(0, i32::max);
        let items_height = self.children.iter().map(|c| c.bounds.bottom()).fold(0, i32::max);

        let children: Vec<_> = self
            .children
            .iter()
            .map(|c| (c.bounds, c.strip.resolve(c.bounds.width(), c.bounds.height())))
            .collect();

        let width = items_width.min(max_width);
        let height = items_height.min(max_height);
        trace!(
            target: "layout.container",
            max_width,
            max_height,
            children = children.len(),
            width,
            height,
            "container_strip_resolved"
        );
        ProvidedStrip::new(width, height, PlacedChildren { children })
    }
}
