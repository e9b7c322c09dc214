//! Reference renderer: turns a resolved layout into a logical cell grid.
//!
//! The layout engine answers point queries; this crate is the caller that
//! issues them. One pass resolves the root provider against the screen, then
//! queries every screen cell exactly once and records the answers in a
//! [`Frame`].
//!
//! Span handling mirrors the packing contract: only a tile's top-left cell
//! answers the tile, so when a leader with a span lands the frame marks the
//! covered cells as continuations pointing back at it. Continuations never
//! carry content of their own; emission derives text solely from leaders.
//!
//! Invariants:
//! - Leader: `tile` non-empty, `origin` is `None`.
//! - Continuation: `tile` empty, `origin` names the leader's cell, and the
//!   leader sits above and/or left of it inside the same frame.
//! - Blank: `tile` empty, no origin, no flags.
//! - The first tile to claim a cell keeps it; a later non-empty answer inside
//!   an existing span is dropped.

use bitflags::bitflags;
use core_model::{Rectangle, Tile, TileKind};
use core_strip::{ProvidedStrip, StripProvider};
use tracing::trace;

pub mod text;
pub mod writer;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellFlags: u8 {
        const PRESSABLE    = 0b0000_0001; // tile carries a press handler
        const ACTIVE       = 0b0000_0010; // toggle on / split toggle latched
        const CONTINUATION = 0b0000_0100; // covered by another cell's span
    }
}

impl CellFlags {
    fn for_tile(tile: &Tile) -> Self {
        let mut flags = CellFlags::empty();
        if tile.on_press().is_some() {
            flags |= CellFlags::PRESSABLE;
        }
        let active = match tile.kind() {
            TileKind::Toggle(t) => t.state,
            TileKind::SplitToggle(s) => s.state != core_model::SplitToggleState::Untoggled,
            _ => false,
        };
        if active {
            flags |= CellFlags::ACTIVE;
        }
        flags
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    tile: Tile,
    flags: CellFlags,
    origin: Option<(u16, u16)>,
}

impl Cell {
    #[inline]
    pub fn leader(tile: Tile) -> Self {
        let flags = CellFlags::for_tile(&tile);
        Self {
            tile,
            flags,
            origin: None,
        }
    }

    #[inline]
    pub fn continuation(leader_x: u16, leader_y: u16) -> Self {
        Self {
            tile: Tile::empty(),
            flags: CellFlags::CONTINUATION,
            origin: Some((leader_x, leader_y)),
        }
    }

    #[inline]
    pub fn is_leader(&self) -> bool {
        !self.tile.is_empty()
    }

    #[inline]
    pub fn is_continuation(&self) -> bool {
        self.origin.is_some()
    }

    #[inline]
    pub fn tile(&self) -> &Tile {
        &self.tile
    }

    #[inline]
    pub fn flags(&self) -> CellFlags {
        self.flags
    }

    /// Leader cell covering this continuation.
    #[inline]
    pub fn origin(&self) -> Option<(u16, u16)> {
        self.origin
    }
}

#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<Cell>,
}

fn to_u16(v: i32) -> u16 {
    u16::try_from(v.max(0)).unwrap_or(u16::MAX)
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Place a leader at (x,y) and mark the rest of its span (clipped to the
    /// frame) as continuations. Cells already claimed are left alone.
    pub fn set_leader(&mut self, x: u16, y: u16, tile: Tile) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        if self.cells[idx].is_continuation() || self.cells[idx].is_leader() {
            return;
        }
        let right = x.saturating_add(tile.width()).min(self.width);
        let bottom = y.saturating_add(tile.height()).min(self.height);
        for cy in y..bottom {
            for cx in x..right {
                if (cx, cy) == (x, y) {
                    continue;
                }
                if let Some(c_idx) = self.index(cx, cy) {
                    let cell = &mut self.cells[c_idx];
                    if !cell.is_leader() && !cell.is_continuation() {
                        *cell = Cell::continuation(x, y);
                    }
                }
            }
        }
        self.cells[idx] = Cell::leader(tile);
    }

    /// Query every cell of a resolved strip at the render size
    /// `columns x rows` (normally the screen). Cells past the strip's natural
    /// size are still queried so that growing children can fill the space.
    pub fn from_strip(strip: &ProvidedStrip, columns: u16, rows: u16) -> Self {
        let mut frame = Frame::new(columns, rows);
        let mut leaders = 0usize;
        for y in 0..rows {
            for x in 0..columns {
                let tile = strip.get_tile(x.into(), y.into(), columns.into(), rows.into());
                if tile.is_empty() {
                    continue;
                }
                let before = frame.cell(x, y).is_some_and(Cell::is_leader);
                frame.set_leader(x, y, tile);
                if !before && frame.cell(x, y).is_some_and(Cell::is_leader) {
                    leaders += 1;
                }
            }
        }
        trace!(
            target: "render",
            columns,
            rows,
            strip_width = strip.width(),
            strip_height = strip.height(),
            leaders,
            "frame_built"
        );
        frame
    }

    /// Leader cells in row-major order, yielding (x, y, &Cell).
    pub fn leaders(&self) -> impl Iterator<Item = (u16, u16, &Cell)> + '_ {
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_leader())
            .map(move |(i, c)| ((i % width) as u16, (i / width) as u16, c))
    }

    /// Leader tile covering (x, y), following continuations back to their
    /// origin. This is the hit-test an input layer uses to route a press.
    pub fn tile_at(&self, x: u16, y: u16) -> Option<&Tile> {
        let cell = self.cell(x, y)?;
        let leader = match cell.origin() {
            Some((lx, ly)) => self.cell(lx, ly)?,
            None => cell,
        };
        leader.is_leader().then(|| leader.tile())
    }
}

/// One full layout pass: resolve `root` against `bounds` and query the
/// result into a frame.
pub fn render_screen(root: &dyn StripProvider, bounds: Rectangle) -> Frame {
    let strip = root.resolve(bounds.width(), bounds.height());
    trace!(
        target: "render",
        screen_width = bounds.width(),
        screen_height = bounds.height(),
        strip_width = strip.width(),
        strip_height = strip.height(),
        "layout_pass_resolved"
    );
    Frame::from_strip(&strip, to_u16(bounds.width()), to_u16(bounds.height()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model::OnPress;
    use core_strip::tile_strip;

    #[test]
    fn spans_become_continuations() {
        let wide = Tile::label("wide").with_span(2, 2);
        let ps = tile_strip([wide.clone(), Tile::label("b")]).resolve(3, 2);
        let frame = Frame::from_strip(&ps, 3, 2);
        assert_eq!(frame.cell(0, 0).unwrap().tile(), &wide);
        for (x, y) in [(1, 0), (0, 1), (1, 1)] {
            let c = frame.cell(x, y).unwrap();
            assert!(c.is_continuation(), "({x},{y})");
            assert_eq!(c.origin(), Some((0, 0)));
        }
        assert_eq!(frame.cell(2, 0).unwrap().tile(), &Tile::label("b"));
        assert_eq!(frame.tile_at(1, 1), Some(&wide));
        assert_eq!(frame.tile_at(2, 1), None);
    }

    #[test]
    fn frame_covers_render_size() {
        let ps = tile_strip([Tile::label("a")]).resolve(10, 10);
        let frame = Frame::from_strip(&ps, 4, 3);
        assert_eq!((frame.width, frame.height), (4, 3));
        assert!(frame.cell(1, 0).is_some_and(|c| !c.is_leader()));
        assert!(frame.cell(4, 0).is_none());
        assert_eq!(frame.leaders().count(), 1);
    }

    #[test]
    fn flags_follow_tile_kind() {
        let on = Tile::toggle(true, OnPress::noop());
        assert_eq!(
            Cell::leader(on).flags(),
            CellFlags::PRESSABLE | CellFlags::ACTIVE
        );
        assert_eq!(Cell::leader(Tile::label("x")).flags(), CellFlags::empty());
        assert_eq!(
            Cell::leader(Tile::button(OnPress::noop())).flags(),
            CellFlags::PRESSABLE
        );
    }

    #[test]
    fn leaders_iterate_row_major() {
        let ps = tile_strip(["a", "b", "c"].map(Tile::label)).resolve(2, 2);
        let frame = Frame::from_strip(&ps, 2, 2);
        let order: Vec<_> = frame
            .leaders()
            .map(|(x, y, c)| (x, y, c.tile().text().map(str::to_owned)))
            .collect();
        assert_eq!(
            order,
            vec![
                (0, 0, Some("a".to_owned())),
                (1, 0, Some("b".to_owned())),
                (0, 1, Some("c".to_owned())),
            ]
        );
    }
}
