//! Plain-text rendition of tiles and frames.
//!
//! Each grid column is `cell_width` characters. A leader's text gets the full
//! width of its horizontal span minus one trailing separator column, truncated
//! by display width (wide glyphs count double). Continuation cells on the
//! leader's own row emit nothing because the leader's text already covers
//! them; continuations below it and blank cells emit spaces.

use crate::{Cell, Frame};
use core_model::{SplitToggleState, Tile, TileKind};
use unicode_width::UnicodeWidthChar;

/// Format minor currency units as `$d.cc`.
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

fn with_price(text: String, price: Option<i64>) -> String {
    match price {
        Some(cents) if text.is_empty() => format_price(cents),
        Some(cents) => format!("{text} {}", format_price(cents)),
        None => text,
    }
}

/// Single-line description of a tile's content.
pub fn tile_text(tile: &Tile) -> String {
    match tile.kind() {
        TileKind::Empty => String::new(),
        TileKind::Label { text } => text.clone(),
        TileKind::Button(b) => {
            let text = b.label.clone().or_else(|| b.icon.clone()).unwrap_or_default();
            with_price(text, b.price)
        }
        TileKind::Toggle(t) => {
            let mark = if t.state { "[x]" } else { "[ ]" };
            let label = t.label.clone().or_else(|| t.icon.clone()).unwrap_or_default();
            with_price(format!("{mark} {label}"), t.price)
        }
        TileKind::SplitToggle(s) => {
            let top = with_price(s.top_label.clone(), s.top_price);
            let bottom = with_price(s.bottom_label.clone(), s.bottom_price);
            match s.state {
                SplitToggleState::Untoggled => format!("{top}/{bottom}"),
                SplitToggleState::Top => format!("*{top}/{bottom}"),
                SplitToggleState::Bottom => format!("{top}/*{bottom}"),
            }
        }
    }
}

/// Truncate `text` to at most `width` display columns and pad with spaces to
/// exactly `width`.
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

/// Text emitted for the cell at (x, y), or `None` when a same-row leader
/// already covers it.
pub(crate) fn cell_text(
    frame: &Frame,
    cell: &Cell,
    (x, y): (u16, u16),
    cell_width: usize,
) -> Option<String> {
    match cell.origin() {
        Some((_, leader_y)) if leader_y == y => None,
        Some(_) => Some(" ".repeat(cell_width)),
        None if cell.is_leader() => {
            let columns = cell.tile().width().min(frame.width - x).max(1);
            let columns = usize::from(columns);
            let total = columns * cell_width;
            let mut text = fit(&tile_text(cell.tile()), total.saturating_sub(1));
            text.push(' ');
            Some(text)
        }
        None => Some(" ".repeat(cell_width)),
    }
}

impl Frame {
    /// Text rows, one per grid row, each `width * cell_width` columns wide.
    pub fn text_rows(&self, cell_width: usize) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .filter_map(|x| {
                        let cell = self.cell(x, y)?;
                        cell_text(self, cell, (x, y), cell_width)
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model::OnPress;
    use core_strip::{StripProvider, tile_strip};
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_prices() {
        assert_eq!(format_price(250), "$2.50");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(format_price(-120), "-$1.20");
    }

    #[test]
    fn describes_each_kind() {
        assert_eq!(tile_text(&Tile::empty()), "");
        assert_eq!(tile_text(&Tile::label("Hi")), "Hi");
        assert_eq!(
            tile_text(&Tile::button(OnPress::noop()).with_label("Fries").with_price(199)),
            "Fries $1.99"
        );
        assert_eq!(
            tile_text(&Tile::button(OnPress::noop()).with_icon("pi pi-check")),
            "pi pi-check"
        );
        assert_eq!(
            tile_text(&Tile::toggle(true, OnPress::noop()).with_label("Show Prices")),
            "[x] Show Prices"
        );
        assert_eq!(
            tile_text(&Tile::split_toggle(
                SplitToggleState::Bottom,
                OnPress::noop(),
                "Lunch",
                "Dinner"
            )),
            "Lunch/*Dinner"
        );
    }

    #[test]
    fn fit_truncates_by_display_width() {
        assert_eq!(fit("abcdef", 4), "abcd");
        assert_eq!(fit("ab", 4), "ab  ");
        // Wide glyph does not fit in the last remaining column.
        assert_eq!(fit("a\u{1F600}b", 2), "a ");
    }

    #[test]
    fn rows_give_spans_their_full_width() {
        let ps = tile_strip([
            Tile::label("wide label").with_width(2),
            Tile::label("c"),
            Tile::label("d"),
        ])
        .resolve(3, 2);
        let frame = Frame::from_strip(&ps, 3, 2);
        let rows = frame.text_rows(4);
        assert_eq!(rows[0], "wide la c   ");
        assert_eq!(rows[1], format!("d{}", " ".repeat(11)));
    }

    #[test]
    fn span_past_the_edge_is_clipped() {
        let ps = tile_strip([Tile::label("a"), Tile::label("wide").with_width(3)]).resolve(2, 1);
        let frame = Frame::from_strip(&ps, 2, 1);
        assert_eq!(frame.text_rows(3), vec!["a  wi "]);
    }

    #[test]
    fn tall_span_leaves_blank_below() {
        let ps = tile_strip([Tile::label("tall").with_height(2), Tile::label("x"), Tile::label("y")])
            .resolve(2, 2);
        let frame = Frame::from_strip(&ps, 2, 2);
        assert_eq!(frame.text_rows(5), vec!["tall x    ", "     y    "]);
    }
}
