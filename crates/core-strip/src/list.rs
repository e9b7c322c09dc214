//! Single-row list with paging.
//!
//! When the items fit in the offered width they are packed as-is. Otherwise
//! the row shows one page of `max_width - 1` items and reserves the last
//! column for a "More" button wired to the caller's page-advance handler.
//! The page number is an input: it wraps modulo the page count, and the
//! list itself never stores or advances it.

use crate::provider::{ProvidedStrip, StripProvider};
use crate::tile_strip::TileStrip;
use core_model::{OnPress, Severity, Tile};
use tracing::{debug, trace};

pub const DEFAULT_MORE_LABEL: &str = "More";
pub const DEFAULT_MORE_ICON: &str = "pi pi-arrow-right";

pub struct ListStrip {
    items: Vec<Tile>,
    page: usize,
    on_increment: OnPress,
    more_label: String,
    more_icon: Option<String>,
}

impl ListStrip {
    pub fn new(items: impl IntoIterator<Item = Tile>, page: usize, on_increment: OnPress) -> Self {
        Self {
            items: items.into_iter().collect(),
            page,
            on_increment,
            more_label: DEFAULT_MORE_LABEL.to_string(),
            more_icon: Some(DEFAULT_MORE_ICON.to_string()),
        }
    }

    pub fn with_more_label(mut self, label: impl Into<String>) -> Self {
        self.more_label = label.into();
        self
    }

    /// Replace the control's icon. An empty string removes it.
    pub fn with_more_icon(mut self, icon: impl Into<String>) -> Self {
        let icon = icon.into();
        self.more_icon = (!icon.is_empty()).then_some(icon);
        self
    }

    /// The page-advance button appended to every page.
    pub fn more_tile(&self) -> Tile {
        let tile = Tile::button(self.on_increment.clone())
            .with_label(self.more_label.clone())
            .with_severity(Severity::Info);
        match &self.more_icon {
            Some(icon) => tile.with_icon(icon.clone()),
            None => tile,
        }
    }

    /// Number of pages at the given width; 1 when everything fits.
    pub fn page_count(&self, max_width: i32) -> usize {
        let len = self.items.len();
        if len <= max_width.max(0) as usize {
            return 1;
        }
        match usize::try_from(max_width - 1) {
            Ok(page_size) if page_size > 0 => len.div_ceil(page_size),
            _ => 1,
        }
    }
}

pub fn list_strip(items: impl IntoIterator<Item = Tile>, page: usize, on_increment: OnPress) -> ListStrip {
    ListStrip::new(items, page, on_increment)
}

impl StripProvider for ListStrip {
    fn resolve(&self, max_width: i32, _max_height: i32) -> ProvidedStrip {
        // Lists always take exactly one row, even with nothing to show.
        if self.items.is_empty() {
            debug!(target: "layout.list", "list_empty_placeholder");
            return ProvidedStrip::empty(1, 1);
        }

        if self.items.len() <= max_width.max(0) as usize {
            return TileStrip::new(self.items.iter().cloned()).resolve(max_width, 1);
        }

        let page_size = match usize::try_from(max_width - 1) {
            Ok(size) if size > 0 => size,
            // No room for any item next to the control.
            _ => return TileStrip::new([self.more_tile()]).resolve(max_width, 1),
        };
        let pages = self.items.len().div_ceil(page_size);
        let page = self.page % pages;
        if page != self.page {
            debug!(
                target: "layout.list",
                requested = self.page,
                page,
                pages,
                "list_page_wrapped"
            );
        }

        let start = page * page_size;
        let end = (start + page_size).min(self.items.len());
        let content = self.items[start..end]
            .iter()
            .cloned()
            .chain(std::iter::repeat_with(Tile::empty))
            .take(page_size)
            .chain(std::iter::once(self.more_tile()));

        trace!(
            target: "layout.list",
            max_width,
            items = self.items.len(),
            page,
            pages,
            "list_strip_paginated"
        );
        TileStrip::new(content).resolve(max_width, 1)
    }
}
