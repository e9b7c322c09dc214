//! Terminal writer: batches primitive terminal operations for one frame.
//!
//! A frame is translated into commands once, then flushed in a single pass.
//! Commands preserve ordering and positions are absolute from (0,0); callers
//! keep the frame within the terminal. The writer owns no global state and is
//! short-lived, one per frame.

use crate::text::cell_text;
use crate::{CellFlags, Frame};
use anyhow::Result;
use core_model::Severity;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub reverse: bool,
}

impl Style {
    fn is_plain(&self) -> bool {
        self.fg.is_none() && !self.reverse
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveTo(u16, u16),
    SetStyle(Style),
    Reset,
    Print(String),
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Primary => Color::Blue,
        Severity::Secondary => Color::Grey,
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Danger => Color::Red,
        Severity::Help => Color::Magenta,
        Severity::Info => Color::Cyan,
    }
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }

    pub fn set_style(&mut self, style: Style) {
        if !style.is_plain() {
            self.cmds.push(Command::SetStyle(style));
        }
    }

    pub fn reset(&mut self) {
        self.cmds.push(Command::Reset);
    }

    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    /// Translate `frame` into commands, one row per terminal line starting at
    /// `origin`. Styled leaders are bracketed by `SetStyle` / `Reset`.
    pub fn paint(&mut self, frame: &Frame, origin: (u16, u16), cell_width: usize) {
        for y in 0..frame.height {
            self.move_to(origin.0, origin.1.saturating_add(y));
            for x in 0..frame.width {
                let Some(cell) = frame.cell(x, y) else {
                    continue;
                };
                let Some(text) = cell_text(frame, cell, (x, y), cell_width) else {
                    continue;
                };
                let style = Style {
                    fg: cell.tile().severity().map(severity_color),
                    reverse: cell.flags().contains(CellFlags::ACTIVE),
                };
                if style.is_plain() {
                    self.print(text);
                } else {
                    self.set_style(style);
                    self.print(text);
                    self.reset();
                }
            }
        }
    }

    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::MoveTo(x, y) => {
                    queue!(out, MoveTo(x, y))?;
                }
                Command::SetStyle(style) => {
                    if let Some(fg) = style.fg {
                        queue!(out, SetForegroundColor(fg))?;
                    }
                    if style.reverse {
                        queue!(out, SetAttribute(Attribute::Reverse))?;
                    }
                }
                Command::Reset => {
                    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
                }
                Command::Print(s) => {
                    queue!(out, Print(s))?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Flush as plain lines, ignoring positioning and styling. Used when the
    /// output is not a terminal.
    pub fn flush_plain<W: Write>(self, out: &mut W) -> Result<()> {
        let mut first = true;
        for c in self.cmds {
            match c {
                Command::MoveTo(..) => {
                    if !first {
                        writeln!(out)?;
                    }
                    first = false;
                }
                Command::Print(s) => write!(out, "{s}")?,
                Command::SetStyle(_) | Command::Reset => {}
            }
        }
        if !first {
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model::{OnPress, Tile};
    use core_strip::{StripProvider, tile_strip};
    use pretty_assertions::assert_eq;

    fn frame_of(tiles: Vec<Tile>, w: i32, h: i32) -> Frame {
        let ps = tile_strip(tiles).resolve(w, h);
        Frame::from_strip(&ps, w as u16, h as u16)
    }

    #[test]
    fn paint_styles_only_decorated_tiles() {
        let frame = frame_of(
            vec![
                Tile::label("a"),
                Tile::button(OnPress::noop())
                    .with_label("ok")
                    .with_severity(Severity::Success),
            ],
            2,
            1,
        );
        let mut w = Writer::new();
        w.paint(&frame, (0, 0), 3);
        assert_eq!(
            w.commands(),
            &[
                Command::MoveTo(0, 0),
                Command::Print("a  ".into()),
                Command::SetStyle(Style {
                    fg: Some(Color::Green),
                    reverse: false
                }),
                Command::Print("ok ".into()),
                Command::Reset,
            ]
        );
    }

    #[test]
    fn active_toggle_is_reversed() {
        let frame = frame_of(vec![Tile::toggle(true, OnPress::noop())], 1, 1);
        let mut w = Writer::new();
        w.paint(&frame, (2, 5), 6);
        assert_eq!(w.commands()[0], Command::MoveTo(2, 5));
        assert_eq!(
            w.commands()[1],
            Command::SetStyle(Style {
                fg: None,
                reverse: true
            })
        );
    }

    #[test]
    fn plain_flush_emits_one_line_per_row() {
        let frame = frame_of(["a", "b", "c"].map(Tile::label).to_vec(), 2, 2);
        let mut w = Writer::new();
        w.paint(&frame, (0, 0), 2);
        let mut out = Vec::new();
        w.flush_plain(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a b \nc   \n");
    }

    #[test]
    fn terminal_flush_writes_escape_sequences() {
        let frame = frame_of(
            vec![Tile::label("x").with_severity(Severity::Danger)],
            1,
            1,
        );
        let mut w = Writer::new();
        w.paint(&frame, (0, 0), 2);
        let mut out = Vec::new();
        w.flush_to(&mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("x "));
        assert!(s.starts_with('\u{1b}'));
    }
}
